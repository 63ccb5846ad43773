//! TextMate `tokenColors` rules for syntax highlighting.

use serde::Serialize;

use super::Palette;

/// A scope selector: a single scope string or a list of them, matching
/// the two shapes VS Code accepts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scope {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Settings {
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenColorRule {
    pub scope: Scope,
    pub settings: Settings,
}

fn one(scope: &str, settings: Settings) -> TokenColorRule {
    TokenColorRule {
        scope: Scope::One(scope.to_string()),
        settings,
    }
}

fn many(scopes: &[&str], settings: Settings) -> TokenColorRule {
    TokenColorRule {
        scope: Scope::Many(scopes.iter().map(|s| s.to_string()).collect()),
        settings,
    }
}

fn fg(color: Option<String>) -> Settings {
    Settings {
        font_style: None,
        foreground: color,
    }
}

fn styled(style: &str, color: Option<String>) -> Settings {
    Settings {
        font_style: Some(style.to_string()),
        foreground: color,
    }
}

/// Build the `tokenColors` rule list for one (theme, scheme) pair.
///
/// The `code-1` through `code-5` tokens carry the syntax palette;
/// `text` and `error` fill the structural roles.
pub fn token_colors(p: &Palette<'_>) -> Vec<TokenColorRule> {
    vec![
        many(
            &["comment", "punctuation.definition.comment", "string.comment"],
            fg(p.alpha("text", "66")),
        ),
        many(
            &[
                "constant",
                "entity.name.constant",
                "variable.other.constant",
                "variable.other.enummember",
                "variable.language",
            ],
            fg(p.value("code-3")),
        ),
        many(&["entity", "entity.name"], fg(p.value("code-2"))),
        one("variable.parameter.function", fg(p.value("text"))),
        one("entity.name.tag", fg(p.value("code-4"))),
        one("keyword", fg(p.shift_d("code-1", 0, 32))),
        many(&["storage", "storage.type"], fg(p.shift_d("code-1", 0, 32))),
        many(
            &[
                "storage.modifier.package",
                "storage.modifier.import",
                "storage.type.java",
            ],
            fg(p.value("text")),
        ),
        many(
            &[
                "string",
                "punctuation.definition.string",
                "string punctuation.section.embedded source",
            ],
            fg(p.value("code-5")),
        ),
        one("support", fg(p.value("code-3"))),
        one("meta.property-name", fg(p.value("code-3"))),
        one("variable", fg(p.value("code-4"))),
        one("variable.other", fg(p.value("text"))),
        one("invalid.broken", styled("italic", p.value("error"))),
        one("invalid.deprecated", styled("italic", p.value("error"))),
        one("invalid.illegal", styled("italic", p.value("error"))),
        one("invalid.unimplemented", styled("italic", p.value("error"))),
        one("message.error", fg(p.value("error"))),
        one("string variable", fg(p.value("code-3"))),
        many(&["source.regexp", "string.regexp"], fg(p.value("code-5"))),
        many(
            &[
                "string.regexp.character-class",
                "string.regexp constant.character.escape",
                "string.regexp source.ruby.embedded",
                "string.regexp string.regexp.arbitrary-repitition",
            ],
            fg(p.value("code-5")),
        ),
        one(
            "string.regexp constant.character.escape",
            styled("bold", p.value("code-4")),
        ),
        one("support.constant", fg(p.value("code-3"))),
        one("support.variable", fg(p.value("code-3"))),
        one("meta.module-reference", fg(p.value("code-3"))),
        one(
            "punctuation.definition.list.begin.markdown",
            fg(p.value("code-5")),
        ),
        many(
            &["markup.heading", "markup.heading entity.name"],
            styled("bold", p.value("code-3")),
        ),
        one("markup.quote", fg(p.value("code-4"))),
        one("markup.italic", styled("italic", p.value("text"))),
        one("markup.bold", styled("bold", p.value("text"))),
        one("markup.underline", styled("underline", None)),
        one("markup.strikethrough", styled("strikethrough", None)),
        one("markup.inline.raw", fg(p.value("code-3"))),
        many(
            &[
                "markup.deleted",
                "meta.diff.header.from-file",
                "punctuation.definition.deleted",
            ],
            fg(p.value("error")),
        ),
        many(
            &[
                "markup.inserted",
                "meta.diff.header.to-file",
                "punctuation.definition.inserted",
            ],
            fg(p.value("code-4")),
        ),
        many(
            &["markup.changed", "punctuation.definition.changed"],
            fg(p.value("code-5")),
        ),
        many(
            &["markup.ignored", "markup.untracked"],
            fg(p.alpha("text", "66")),
        ),
        one("meta.diff.range", styled("bold", p.value("code-2"))),
        one("meta.diff.header", fg(p.value("code-3"))),
        one("meta.separator", styled("bold", p.value("code-3"))),
        one("meta.output", fg(p.value("code-3"))),
        one("brackethighlighter.unmatched", fg(p.value("error"))),
        many(
            &["constant.other.reference.link", "string.other.link"],
            styled("underline", p.value("code-5")),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Scheme;
    use crate::store::TokenStore;

    fn store() -> TokenStore {
        TokenStore::parse(
            b"text #24292f\n\
              text.d #c9d1d9\n\
              error #cf222e\n\
              error.d #f85149\n\
              code-1 #cf222e\n\
              code-1.d #ff7b72\n\
              code-5 #0a3069\n\
              code-5.d #a5d6ff\n",
        )
        .unwrap()
    }

    #[test]
    fn comment_rule_dims_text() {
        let s = store();
        let rules = token_colors(&Palette::new(&s, "any", Scheme::Light));
        let comment = &rules[0];
        match &comment.scope {
            Scope::Many(scopes) => assert_eq!(scopes[0], "comment"),
            Scope::One(_) => unreachable!("comment rule carries a scope list"),
        }
        assert_eq!(comment.settings.foreground.as_deref(), Some("#24292f66"));
        assert_eq!(comment.settings.font_style, None);
    }

    #[test]
    fn keyword_brightens_only_in_dark() {
        let s = store();
        let light = token_colors(&Palette::new(&s, "any", Scheme::Light));
        let dark = token_colors(&Palette::new(&s, "any", Scheme::Dark));
        let keyword = |rules: &[TokenColorRule]| {
            rules
                .iter()
                .find(|r| matches!(&r.scope, Scope::One(s) if s == "keyword"))
                .map(|r| r.settings.foreground.clone())
                .unwrap_or(None)
        };
        // Light delta is 0, so the value passes through unchanged.
        assert_eq!(keyword(&light).as_deref(), Some("#cf222e"));
        // Dark shifts #ff7b72 by +32 (red already saturated).
        assert_eq!(keyword(&dark).as_deref(), Some("#ff9b92"));
    }

    #[test]
    fn style_only_rules_have_no_foreground() {
        let s = store();
        let rules = token_colors(&Palette::new(&s, "any", Scheme::Light));
        let underline = rules
            .iter()
            .find(|r| matches!(&r.scope, Scope::One(s) if s == "markup.underline"))
            .unwrap();
        assert_eq!(underline.settings.font_style.as_deref(), Some("underline"));
        assert_eq!(underline.settings.foreground, None);
    }

    #[test]
    fn serializes_scope_shapes() {
        let s = store();
        let rules = token_colors(&Palette::new(&s, "any", Scheme::Light));
        let json = serde_json::to_value(&rules).unwrap();
        // List scope serializes as an array, single scope as a string.
        assert!(json[0]["scope"].is_array());
        assert!(json[3]["scope"].is_string());
        assert_eq!(json[3]["scope"], "variable.parameter.function");
    }

    #[test]
    fn unresolved_foreground_is_omitted_from_json() {
        let s = store();
        // No code-3 token defined: settings serialize as {}.
        let rules = token_colors(&Palette::new(&s, "any", Scheme::Light));
        let support = rules
            .iter()
            .find(|r| matches!(&r.scope, Scope::One(s) if s == "support"))
            .unwrap();
        let json = serde_json::to_value(&support.settings).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
