//! Output assembly: workbench color maps, syntax token rules, icon
//! themes, extension manifests, and the generated terminal config.

pub mod hyper;
pub mod icons;
pub mod manifest;
pub mod syntax;
pub mod workbench;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::color::{Scheme, with_alpha, with_brightness};
use crate::store::TokenStore;

/// Resolver façade bound to one (theme, scheme) pair.
///
/// Every entry in the output tables is a token resolution optionally
/// piped through an alpha or brightness transform. A token that does
/// not resolve yields `None` and the entry is dropped from the output,
/// never an error.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    store: &'a TokenStore,
    theme: &'a str,
    scheme: Scheme,
}

impl<'a> Palette<'a> {
    pub fn new(store: &'a TokenStore, theme: &'a str, scheme: Scheme) -> Self {
        Self { store, theme, scheme }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Bare token value.
    pub fn value(&self, token: &str) -> Option<String> {
        self.store
            .resolve(self.theme, self.scheme, token)
            .map(str::to_owned)
    }

    /// Token with an alpha channel appended.
    pub fn alpha(&self, token: &str, alpha: &str) -> Option<String> {
        self.value(token)
            .map(|c| with_alpha(&c, alpha, None, self.scheme))
    }

    /// Token with a scheme-dependent alpha channel.
    pub fn alpha_d(&self, token: &str, alpha: &str, dark: &str) -> Option<String> {
        self.value(token)
            .map(|c| with_alpha(&c, alpha, Some(dark), self.scheme))
    }

    /// Token shifted by a brightness delta.
    pub fn shift(&self, token: &str, delta: i32) -> Option<String> {
        self.value(token)
            .map(|c| with_brightness(&c, delta, None, self.scheme))
    }

    /// Token shifted with an explicit dark-scheme delta.
    pub fn shift_d(&self, token: &str, light: i32, dark: i32) -> Option<String> {
        self.value(token)
            .map(|c| with_brightness(&c, light, Some(dark), self.scheme))
    }

    /// Brightness shift followed by a fixed alpha.
    pub fn shift_alpha(&self, token: &str, delta: i32, alpha: &str) -> Option<String> {
        self.shift(token, delta)
            .map(|c| with_alpha(&c, alpha, None, self.scheme))
    }

    /// Fully transparent background; the tables' "no color" placeholder.
    pub fn none(&self) -> Option<String> {
        self.alpha("background", "00")
    }
}

/// A complete VS Code color theme document.
#[derive(Debug, Serialize)]
pub struct ColorTheme {
    pub name: String,
    pub colors: Map<String, Value>,
    #[serde(rename = "semanticHighlighting")]
    pub semantic_highlighting: bool,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<syntax::TokenColorRule>,
}

/// Assemble the color theme for one (theme, scheme) pair.
pub fn color_theme(store: &TokenStore, theme: &str, scheme: Scheme) -> ColorTheme {
    let palette = Palette::new(store, theme, scheme);
    ColorTheme {
        name: store.display_name(theme, scheme).unwrap_or(theme).to_string(),
        colors: workbench::colors(&palette),
        semantic_highlighting: true,
        token_colors: syntax::token_colors(&palette),
    }
}
