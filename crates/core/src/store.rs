use std::collections::HashMap;

use thiserror::Error;

use crate::color::Scheme;

#[derive(Debug, Error)]
pub enum DefineError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Parsed contents of a theme definition file.
///
/// The file is line oriented. A line framed by runs of dashes
/// (`---- Name ----`) opens a new theme; its name is lower-cased with
/// spaces removed and appended to `themes`. Every other line is a
/// `key value` pair split on the first whitespace run, stored in one
/// flat mapping. Theme-scoped keys carry the theme name as a dotted
/// prefix (`nord.accent`); dark-scheme variants carry a `.d` suffix.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    /// Declared theme names, in file order.
    pub themes: Vec<String>,
    tokens: HashMap<String, String>,
}

impl TokenStore {
    /// Parse a definition file.
    ///
    /// Malformed lines (no whitespace split, stray text) are silently
    /// dropped; duplicate keys take the last value. The only error is
    /// non-UTF-8 input.
    pub fn parse(data: &[u8]) -> Result<Self, DefineError> {
        let text = std::str::from_utf8(data)?;
        let mut themes = Vec::new();
        let mut tokens = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with("----") && line.ends_with("----") {
                let name = line.trim_matches('-').trim().to_lowercase().replace(' ', "");
                themes.push(name);
            } else if let Some((key, value)) = split_key_value(line) {
                tokens.insert(key.to_string(), value.to_string());
            }
        }

        Ok(Self { themes, tokens })
    }

    /// Look up a token for a theme under the given scheme.
    ///
    /// Candidate keys are tried in order against the flat mapping:
    /// the theme-scoped key first, then the global key. Dark scheme
    /// appends a `.d` suffix to the token before either lookup, so a
    /// theme can override a global token for one scheme only, or both,
    /// or neither. Absence is a valid outcome.
    pub fn resolve(&self, theme: &str, scheme: Scheme, token: &str) -> Option<&str> {
        let key = match scheme {
            Scheme::Dark => format!("{token}.d"),
            Scheme::Light => token.to_string(),
        };
        let candidates = [format!("{theme}.{key}"), key];
        candidates
            .iter()
            .find_map(|k| self.tokens.get(k).map(String::as_str))
    }

    /// Display title for a theme variant.
    ///
    /// Stored under the bare theme name (`nord`) for light and the
    /// `.d`-suffixed name for dark, with no global fallback.
    pub fn display_name(&self, theme: &str, scheme: Scheme) -> Option<&str> {
        let key = match scheme {
            Scheme::Dark => format!("{theme}.d"),
            Scheme::Light => theme.to_string(),
        };
        self.tokens.get(&key).map(String::as_str)
    }

    /// Raw lookup by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(String::as_str)
    }
}

// Split on the first whitespace run. The value keeps any internal
// whitespace; a line with no split yields nothing.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let key_end = line.find(char::is_whitespace)?;
    let key = &line[..key_end];
    let value = line[key_end..].trim_start();
    if value.is_empty() {
        None
    } else {
        Some((key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_themes_and_tokens() {
        let input = b"---- Nord ----\nbackground #1a1b26\nnord.accent #5e81ac\nnord.accent.d #88c0d0\n";
        let store = TokenStore::parse(input).unwrap();
        assert_eq!(store.themes, vec!["nord"]);
        assert_eq!(store.resolve("nord", Scheme::Dark, "accent"), Some("#88c0d0"));
        assert_eq!(store.resolve("nord", Scheme::Light, "accent"), Some("#5e81ac"));
    }

    #[test]
    fn theme_names_are_normalized() {
        let store = TokenStore::parse(b"---- Solar Flare ----\n").unwrap();
        assert_eq!(store.themes, vec!["solarflare"]);
    }

    #[test]
    fn global_token_resolves_for_any_theme() {
        let store = TokenStore::parse(b"background #101010\n").unwrap();
        assert_eq!(
            store.resolve("whatever", Scheme::Light, "background"),
            Some("#101010")
        );
        // No dark variant defined anywhere: dark lookup misses.
        assert_eq!(store.resolve("whatever", Scheme::Dark, "background"), None);
    }

    #[test]
    fn theme_scoped_wins_over_global() {
        let store = TokenStore::parse(b"accent #111111\nnord.accent #222222\n").unwrap();
        assert_eq!(store.resolve("nord", Scheme::Light, "accent"), Some("#222222"));
        assert_eq!(store.resolve("other", Scheme::Light, "accent"), Some("#111111"));
    }

    #[test]
    fn last_write_wins() {
        let store = TokenStore::parse(b"accent #111111\naccent #222222\n").unwrap();
        assert_eq!(store.get("accent"), Some("#222222"));
    }

    #[test]
    fn value_keeps_internal_whitespace() {
        let store = TokenStore::parse(b"nord Nord Light Edition\n").unwrap();
        assert_eq!(store.display_name("nord", Scheme::Light), Some("Nord Light Edition"));
    }

    #[test]
    fn malformed_lines_are_dropped() {
        let store = TokenStore::parse(b"justakey\n\n   \naccent #333333\n").unwrap();
        assert_eq!(store.get("justakey"), None);
        assert_eq!(store.get("accent"), Some("#333333"));
    }

    #[test]
    fn missing_token_is_none() {
        let store = TokenStore::parse(b"").unwrap();
        assert_eq!(store.resolve("nord", Scheme::Light, "nothing"), None);
    }

    #[test]
    fn invalid_utf8_errors() {
        assert!(TokenStore::parse(&[0xff, 0xfe, 0x20]).is_err());
    }
}
