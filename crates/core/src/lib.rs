//! Core library for themegen: the token store and resolver, the two
//! color transforms, and assembly of every generated artifact (VS Code
//! color themes, the icon theme, extension manifests, and the Hyper
//! terminal config).

pub mod color;
pub mod emit;
pub mod store;

pub use color::{Scheme, with_alpha, with_brightness};
pub use store::{DefineError, TokenStore};
