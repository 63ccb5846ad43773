//! File-icon theme assembly.
//!
//! The extension and file-name tables are static data; the only logic
//! is dark-variant selection: a token renders as `{token}-d` when the
//! scheme is dark and a `{token}-d.svg` asset exists.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::Scheme;

/// File extension -> icon token.
const FILE_EXTENSIONS: &[(&str, &str)] = &[
    // apple
    ("pbxproj", "apple"),
    ("plist", "apple"),
    ("storyboard", "apple"),
    ("xcbkptlist", "apple"),
    ("xcconfig", "apple"),
    ("xcframework", "apple"),
    ("xcscheme", "apple"),
    ("xcsettings", "apple"),
    ("xcworkspacedata", "apple"),
    // binary
    ("a", "binary"),
    ("db", "binary"),
    ("dSYM", "binary"),
    ("dylib", "binary"),
    ("gz", "binary"),
    ("ipa", "binary"),
    ("node", "binary"),
    ("o", "binary"),
    ("tar", "binary"),
    ("zip", "binary"),
    // c / c++
    ("c", "c"),
    ("cc", "cplusplus"),
    ("cpp", "cplusplus"),
    ("cxx", "cplusplus"),
    // cocoapods
    ("podspec", "cocoapods"),
    // css
    ("css", "css"),
    ("module.css", "css"),
    ("css.map", "css"),
    ("min.css", "css"),
    // csv
    ("csv", "csv"),
    // docker
    ("dockerfile", "docker"),
    // google
    ("webmanifest", "google"),
    // graphql
    ("gql", "graphql"),
    ("graphql", "graphql"),
    // c headers
    ("h", "header"),
    ("hh", "header"),
    ("hpp", "header"),
    ("hxx", "header"),
    // html
    ("htm", "html"),
    ("html", "html"),
    ("xhtml", "html"),
    // images
    ("bmp", "image"),
    ("gif", "image"),
    ("heic", "image"),
    ("ico", "image"),
    ("jpg", "image"),
    ("jpeg", "image"),
    ("png", "image"),
    ("svg", "image"),
    ("tiff", "image"),
    ("webp", "image"),
    // javascript
    ("cjs", "javascript"),
    ("es", "javascript"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("js.map", "javascript-2"),
    ("min.js", "javascript-2"),
    // json
    ("json", "json"),
    ("jsonc", "json"),
    ("json5", "json"),
    // markdown
    ("md", "markdown"),
    ("mdc", "markdown"),
    ("mdx", "markdown"),
    // objective-c
    ("m", "objectivec"),
    ("mm", "objectivec"),
    // pdf
    ("pdf", "pdf"),
    // prisma
    ("prisma", "prisma"),
    // ruby
    ("rb", "ruby"),
    // scala
    ("sc", "scala"),
    ("scala", "scala"),
    ("sbt", "scala-2"),
    // sql
    ("sql", "sql"),
    // swift
    ("swift", "swift"),
    ("playground", "swift-2"),
    // typescript
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("d.ts", "typescript-2"),
    // vscode
    ("code-workspace", "vscode"),
    ("vsix", "vscode"),
    // xml
    ("xml", "xml"),
    // yaml
    ("yaml", "yaml"),
    ("yml", "yaml"),
    // shells
    ("sh", "zsh"),
    ("zsh", "zsh"),
];

/// Exact file name -> icon token.
const FILE_NAMES: &[(&str, &str)] = &[
    // buildkite
    ("buildkite.json", "buildkite"),
    ("buildkite.jsonc", "buildkite"),
    ("buildkite.yaml", "buildkite"),
    ("buildkite.yml", "buildkite"),
    (".buildkite/pipeline.json", "buildkite"),
    (".buildkite/pipeline.jsonc", "buildkite"),
    (".buildkite/pipeline.yaml", "buildkite"),
    (".buildkite/pipeline.yml", "buildkite"),
    // circleci
    (".circleci/config.yaml", "circleci"),
    (".circleci/config.yml", "circleci"),
    // cocoapods
    ("podfile", "cocoapods"),
    ("podfile.lock", "cocoapods"),
    // codecov
    ("codecov.yaml", "codecov"),
    ("codecov.yml", "codecov"),
    // deno
    ("deno.json", "deno"),
    ("deno.jsonc", "deno"),
    // docker
    (".dockerignore", "docker"),
    ("dockerfile", "docker"),
    ("docker-compose.yaml", "docker"),
    ("docker-compose.yml", "docker"),
    // eslint
    (".eslintignore", "eslint"),
    // github
    (".gitattributes", "github"),
    (".gitconfig", "github"),
    (".gitignore", "github"),
    (".gitkeep", "github"),
    (".gitmodules", "github"),
    // google
    (".gcloudignore", "google"),
    ("manifest.json", "google"),
    ("robots.txt", "google"),
    // next.js
    ("next-env.d.ts", "nextjs"),
    // node.js
    ("package.json", "nodejs"),
    ("package-lock.json", "nodejs"),
    ("yarn.lock", "nodejs"),
    (".yarn-integrity", "nodejs"),
    // ruby
    (".gemspec", "ruby-2"),
    ("gemfile", "ruby-2"),
    ("gemfile.lock", "ruby-2"),
    // square
    (".sq", "square"),
    // swift
    ("package.resolved", "swift-3"),
    // typescript
    ("tsconfig.json", "typescript-3"),
    ("tsconfig.app.json", "typescript-3"),
    ("tsconfig.base.json", "typescript-3"),
    ("tsconfig.build.json", "typescript-3"),
    ("tsconfig.debug.json", "typescript-3"),
    ("tsconfig.dev.json", "typescript-3"),
    ("tsconfig.dist.json", "typescript-3"),
    ("tsconfig.prod.json", "typescript-3"),
    ("tsconfig.release.json", "typescript-3"),
    ("tsconfig.test.json", "typescript-3"),
    // vercel
    ("vercel.json", "vercel"),
    // vscode
    (".vscodeignore", "vscode"),
    (".vscode/settings.json", "vscode"),
];

/// JS-ecosystem tools whose config files follow the `.{tool}rc*` /
/// `{tool}.config.*` naming convention: (base name, icon token).
const TOOL_CONFIGS: &[(&str, &str)] = &[
    ("babel", "babel"),
    ("esbuild", "esbuild"),
    ("eslint", "eslint"),
    ("graphql", "graphql"),
    ("mocha", "mocha"),
    ("next", "nextjs"),
    ("yarn", "nodejs"),
    ("prettier", "prettier"),
    ("tailwind", "tailwindcss"),
];

#[derive(Debug, Clone, Serialize)]
pub struct IconDefinition {
    #[serde(rename = "iconPath")]
    pub icon_path: String,
}

/// One scheme's worth of icon associations.
#[derive(Debug, Clone, Serialize)]
pub struct IconMap {
    pub file: String,
    pub folder: String,
    #[serde(rename = "fileExtensions")]
    pub file_extensions: BTreeMap<String, String>,
    #[serde(rename = "fileNames")]
    pub file_names: BTreeMap<String, String>,
}

/// The complete icon theme document. Dark associations sit at the top
/// level, the light set under `"light"`, per VS Code convention.
#[derive(Debug, Clone, Serialize)]
pub struct IconTheme {
    #[serde(rename = "iconDefinitions")]
    pub icon_definitions: BTreeMap<String, IconDefinition>,
    #[serde(flatten)]
    pub dark: IconMap,
    pub light: IconMap,
}

/// Build the icon theme from the list of SVG asset file names.
pub fn icon_theme(assets: &[String]) -> IconTheme {
    let icon_definitions = assets
        .iter()
        .map(|asset| {
            let stem = asset.split('.').next().unwrap_or(asset).to_string();
            let definition = IconDefinition {
                icon_path: format!("./icons/{asset}"),
            };
            (stem, definition)
        })
        .collect();

    IconTheme {
        icon_definitions,
        dark: icon_map(assets, Scheme::Dark),
        light: icon_map(assets, Scheme::Light),
    }
}

fn icon_map(assets: &[String], scheme: Scheme) -> IconMap {
    let pick = |token: &str| -> String {
        let dark_asset = format!("{token}-d.svg");
        if scheme.is_dark() && assets.iter().any(|a| *a == dark_asset) {
            format!("{token}-d")
        } else {
            token.to_string()
        }
    };

    let file_extensions = FILE_EXTENSIONS
        .iter()
        .map(|(ext, token)| (ext.to_string(), pick(token)))
        .collect();

    let mut file_names: BTreeMap<String, String> = FILE_NAMES
        .iter()
        .map(|(name, token)| (name.to_string(), pick(token)))
        .collect();
    for (base, token) in TOOL_CONFIGS {
        for name in tool_config_names(base) {
            file_names.insert(name, pick(token));
        }
    }

    IconMap {
        file: pick("file"),
        folder: pick("folder"),
        file_extensions,
        file_names,
    }
}

fn tool_config_names(base: &str) -> Vec<String> {
    vec![
        format!(".{base}"),
        format!(".{base}rc"),
        format!(".{base}rc.json"),
        format!(".{base}rc.jsonc"),
        format!(".{base}rc.yaml"),
        format!(".{base}rc.yml"),
        format!(".{base}rc.js"),
        format!("{base}.config.json"),
        format!("{base}.config.js"),
        format!("{base}.config.mjs"),
        format!("{base}.config.ts"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn definitions_point_into_icons_dir() {
        let theme = icon_theme(&assets(&["file.svg", "file-d.svg", "ruby.svg"]));
        assert_eq!(theme.icon_definitions["ruby"].icon_path, "./icons/ruby.svg");
        assert_eq!(theme.icon_definitions["file-d"].icon_path, "./icons/file-d.svg");
    }

    #[test]
    fn dark_variant_selected_only_when_asset_exists() {
        let theme = icon_theme(&assets(&["file.svg", "file-d.svg", "folder.svg"]));
        // file has a -d asset, folder does not.
        assert_eq!(theme.dark.file, "file-d");
        assert_eq!(theme.dark.folder, "folder");
        assert_eq!(theme.light.file, "file");
        assert_eq!(theme.light.folder, "folder");
    }

    #[test]
    fn extension_table_maps_to_tokens() {
        let theme = icon_theme(&assets(&["ruby.svg"]));
        assert_eq!(theme.light.file_extensions["rb"], "ruby");
        assert_eq!(theme.light.file_extensions["cpp"], "cplusplus");
        assert_eq!(theme.light.file_extensions["d.ts"], "typescript-2");
    }

    #[test]
    fn tool_configs_fan_out() {
        let theme = icon_theme(&assets(&["eslint.svg"]));
        let names = &theme.light.file_names;
        assert_eq!(names[".eslintrc"], "eslint");
        assert_eq!(names[".eslintrc.json"], "eslint");
        assert_eq!(names["eslint.config.ts"], "eslint");
        // The literal extra alongside the fan-out.
        assert_eq!(names[".eslintignore"], "eslint");
    }

    #[test]
    fn dark_map_flattens_and_light_nests() {
        let theme = icon_theme(&assets(&["file.svg", "file-d.svg"]));
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["file"], "file-d");
        assert_eq!(json["light"]["file"], "file");
        assert!(json["iconDefinitions"]["file"]["iconPath"].is_string());
    }
}
