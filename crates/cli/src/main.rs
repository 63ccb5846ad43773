use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use themegen_core::emit::manifest::{self, ThemeVariant};
use themegen_core::{Scheme, TokenStore, emit};

const DEFINE_FILE: &str = "define.txt";
const ASSETS_DIR: &str = "assets";
const DIST_DIR: &str = "dist";
const ICON_THEME_ID: &str = "glyphs";

fn main() -> Result<()> {
    let define = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFINE_FILE), PathBuf::from);

    let data = fs::read(&define).with_context(|| format!("read {}", define.display()))?;
    let store = TokenStore::parse(&data).with_context(|| format!("parse {}", define.display()))?;

    for theme in &store.themes {
        generate_color_theme(&store, theme)
            .with_context(|| format!("generate theme {theme}"))?;
    }
    generate_icon_theme().context("generate icon theme")?;

    Ok(())
}

/// Emit one theme's extension package under `dist/{theme}/`: a color
/// theme file per scheme, the package manifest, the gallery icon, and
/// a matching Hyper config.
fn generate_color_theme(store: &TokenStore, theme: &str) -> Result<()> {
    let out = Path::new(DIST_DIR).join(theme);
    fs::create_dir_all(&out).with_context(|| format!("create {}", out.display()))?;

    let mut variants = Vec::new();
    for scheme in Scheme::ALL {
        let json = emit::color_theme(store, theme, scheme);
        let stem = scheme.file_stem(theme);
        write_json(&out.join(format!("{stem}.json")), &json)?;
        variants.push(ThemeVariant {
            label: json.name,
            ui_theme: scheme.ui_theme(),
            path: format!("./{stem}.json"),
        });
    }

    write_json(&out.join("package.json"), &manifest::theme_manifest(theme, variants))?;

    let banner = Path::new(ASSETS_DIR).join(format!("{theme}.png"));
    fs::copy(&banner, out.join(format!("{theme}.png")))
        .with_context(|| format!("copy {}", banner.display()))?;

    fs::write(out.join(".hyper.js"), emit::hyper::hyper_config(store, theme))
        .with_context(|| format!("write {}", out.join(".hyper.js").display()))?;

    Ok(())
}

/// Emit the icon theme package under `dist/{ICON_THEME_ID}/` from the
/// SVG assets on disk.
fn generate_icon_theme() -> Result<()> {
    let icons = Path::new(ASSETS_DIR).join("icons");
    let mut assets = Vec::new();
    for entry in fs::read_dir(&icons).with_context(|| format!("read {}", icons.display()))? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            assets.push(name);
        }
    }
    assets.sort();

    let out = Path::new(DIST_DIR).join(ICON_THEME_ID);
    fs::create_dir_all(&out).with_context(|| format!("create {}", out.display()))?;

    write_json(
        &out.join(format!("{ICON_THEME_ID}.json")),
        &emit::icons::icon_theme(&assets),
    )?;
    write_json(&out.join("package.json"), &manifest::icon_manifest(ICON_THEME_ID))?;

    copy_dir(&icons, &out.join("icons"))?;

    let banner = Path::new(ASSETS_DIR).join(format!("{ICON_THEME_ID}.png"));
    fs::copy(&banner, out.join(format!("{ICON_THEME_ID}.png")))
        .with_context(|| format!("copy {}", banner.display()))?;

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).with_context(|| format!("create {}", dst.display()))?;
    for entry in fs::read_dir(src).with_context(|| format!("read {}", src.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::copy(entry.path(), dst.join(entry.file_name()))
                .with_context(|| format!("copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}
