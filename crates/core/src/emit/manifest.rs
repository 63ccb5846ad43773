//! `package.json` manifests for the generated theme and icon-theme
//! extensions.

use serde::Serialize;

const PUBLISHER: &str = "themegen";
const REPOSITORY: &str = "github:themegen/themes";
const VERSION: &str = "1.0.0";
const VSCODE_ENGINE: &str = "^1.87.0";
const BANNER_COLOR: &str = "#0e1116";

/// One contributed color-theme variant.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeVariant {
    pub label: String,
    #[serde(rename = "uiTheme")]
    pub ui_theme: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IconThemeEntry {
    pub id: String,
    pub label: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct GalleryBanner {
    pub color: &'static str,
    pub theme: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Engines {
    pub vscode: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Contributes {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<ThemeVariant>,
    #[serde(rename = "iconThemes", skip_serializing_if = "Vec::is_empty")]
    pub icon_themes: Vec<IconThemeEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub repository: String,
    pub version: &'static str,
    pub publisher: &'static str,
    pub license: &'static str,
    pub icon: String,
    pub gallery_banner: GalleryBanner,
    pub engines: Engines,
    pub categories: Vec<&'static str>,
    pub keywords: Vec<String>,
    pub contributes: Contributes,
}

/// Manifest for one theme's extension package.
pub fn theme_manifest(theme: &str, variants: Vec<ThemeVariant>) -> Manifest {
    let display = capitalize(theme);
    Manifest {
        name: format!("{theme}-vscode-theme"),
        display_name: format!("{display} Theme"),
        description: format!("{display} theme for VS Code"),
        repository: REPOSITORY.to_string(),
        version: VERSION,
        publisher: PUBLISHER,
        license: "MIT",
        icon: format!("{theme}.png"),
        gallery_banner: GalleryBanner {
            color: BANNER_COLOR,
            theme: "dark",
        },
        engines: Engines {
            vscode: VSCODE_ENGINE,
        },
        categories: vec!["Themes"],
        keywords: vec![
            "theme".to_string(),
            theme.to_string(),
            "light".to_string(),
            "dark".to_string(),
        ],
        contributes: Contributes {
            themes: variants,
            icon_themes: Vec::new(),
        },
    }
}

/// Manifest for the icon-theme extension package.
pub fn icon_manifest(id: &str) -> Manifest {
    let display = capitalize(id);
    Manifest {
        name: format!("{id}-vscode-icon-theme"),
        display_name: format!("{display} Icon Theme"),
        description: format!("{display} icon theme for VS Code"),
        repository: REPOSITORY.to_string(),
        version: VERSION,
        publisher: PUBLISHER,
        license: "MIT",
        icon: format!("{id}.png"),
        gallery_banner: GalleryBanner {
            color: BANNER_COLOR,
            theme: "dark",
        },
        engines: Engines {
            vscode: VSCODE_ENGINE,
        },
        categories: vec!["Themes"],
        keywords: vec![
            "theme".to_string(),
            "icons".to_string(),
            id.to_string(),
            "light".to_string(),
            "dark".to_string(),
        ],
        contributes: Contributes {
            themes: Vec::new(),
            icon_themes: vec![IconThemeEntry {
                id: id.to_string(),
                label: format!("{display} Icon Theme"),
                path: format!("./{id}.json"),
            }],
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_manifest_fields() {
        let variants = vec![ThemeVariant {
            label: "Nord".to_string(),
            ui_theme: "vs",
            path: "./nord.json".to_string(),
        }];
        let manifest = theme_manifest("nord", variants);
        assert_eq!(manifest.name, "nord-vscode-theme");
        assert_eq!(manifest.display_name, "Nord Theme");
        assert_eq!(manifest.icon, "nord.png");
        assert_eq!(manifest.contributes.themes.len(), 1);
        assert!(manifest.contributes.icon_themes.is_empty());
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let manifest = theme_manifest(
            "nord",
            vec![ThemeVariant {
                label: "Nord Dark".to_string(),
                ui_theme: "vs-dark",
                path: "./nord-d.json".to_string(),
            }],
        );
        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["displayName"], "Nord Theme");
        assert_eq!(json["galleryBanner"]["theme"], "dark");
        assert_eq!(json["contributes"]["themes"][0]["uiTheme"], "vs-dark");
        // Empty contribution lists stay out of the JSON entirely.
        assert!(json["contributes"].get("iconThemes").is_none());
    }

    #[test]
    fn icon_manifest_contributes_icon_theme() {
        let manifest = icon_manifest("glyphs");
        assert_eq!(manifest.name, "glyphs-vscode-icon-theme");
        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["contributes"]["iconThemes"][0]["id"], "glyphs");
        assert_eq!(json["contributes"]["iconThemes"][0]["path"], "./glyphs.json");
        assert!(json["contributes"].get("themes").is_none());
    }
}
