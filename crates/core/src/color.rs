/// Light/dark mode selector.
///
/// Threaded explicitly through every lookup and transform; there is no
/// process-wide mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Light,
    Dark,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Light, Scheme::Dark];

    pub fn is_dark(self) -> bool {
        matches!(self, Scheme::Dark)
    }

    /// VS Code `uiTheme` identifier for this scheme.
    pub fn ui_theme(self) -> &'static str {
        match self {
            Scheme::Light => "vs",
            Scheme::Dark => "vs-dark",
        }
    }

    /// Output file stem for a theme variant (`nord` / `nord-d`).
    pub fn file_stem(self, theme: &str) -> String {
        match self {
            Scheme::Light => theme.to_string(),
            Scheme::Dark => format!("{theme}-d"),
        }
    }
}

/// Append an alpha channel to a hex color.
///
/// Dark scheme substitutes `dark_alpha` when supplied. An alpha shorter
/// than two characters is left-padded with a zero. No validation; the
/// caller supplies well-formed hex fragments.
pub fn with_alpha(color: &str, alpha: &str, dark_alpha: Option<&str>, scheme: Scheme) -> String {
    let alpha = match (scheme, dark_alpha) {
        (Scheme::Dark, Some(dark)) => dark,
        _ => alpha,
    };
    format!("{color}{alpha:0>2}")
}

/// Shift a 6-digit hex color's brightness, channel-wise, clamped to
/// `[0, 255]`.
///
/// Dark scheme uses `dark_delta` when supplied, else `light_delta` as
/// given; light scheme negates `light_delta`. The asymmetry is the
/// visual convention this tool is built around: light themes darken
/// surfaces for depth, dark themes lighten them, and the caller names
/// the dark delta directly when the two differ.
pub fn with_brightness(
    color: &str,
    light_delta: i32,
    dark_delta: Option<i32>,
    scheme: Scheme,
) -> String {
    let delta = match scheme {
        Scheme::Dark => dark_delta.unwrap_or(light_delta),
        Scheme::Light => -light_delta,
    };

    let hex = color.trim_start_matches('#');
    // Unparseable channels read as zero; value shapes are trusted.
    let channel = |range: std::ops::Range<usize>| -> i32 {
        hex.get(range)
            .and_then(|s| i32::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    let shift = |v: i32| (v + delta).clamp(0, 255);

    format!(
        "#{:02x}{:02x}{:02x}",
        shift(channel(0..2)),
        shift(channel(2..4)),
        shift(channel(4..6))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_appends() {
        assert_eq!(with_alpha("#1a1b26", "40", None, Scheme::Light), "#1a1b2640");
        assert_eq!(with_alpha("#1a1b26", "40", None, Scheme::Dark), "#1a1b2640");
    }

    #[test]
    fn alpha_pads_single_digit() {
        assert_eq!(with_alpha("#1a1b26", "5", None, Scheme::Light), "#1a1b2605");
    }

    #[test]
    fn alpha_dark_override_applies_only_in_dark() {
        assert_eq!(with_alpha("#ffffff", "26", Some("b3"), Scheme::Light), "#ffffff26");
        assert_eq!(with_alpha("#ffffff", "26", Some("b3"), Scheme::Dark), "#ffffffb3");
    }

    #[test]
    fn brightness_darkens_in_light() {
        assert_eq!(with_brightness("#808080", 16, None, Scheme::Light), "#707070");
    }

    #[test]
    fn brightness_lightens_in_dark() {
        assert_eq!(with_brightness("#808080", 16, None, Scheme::Dark), "#909090");
    }

    #[test]
    fn brightness_dark_override() {
        assert_eq!(
            with_brightness("#808080", 60, Some(-156), Scheme::Dark),
            "#000000"
        );
        assert_eq!(
            with_brightness("#808080", 60, Some(-156), Scheme::Light),
            "#444444"
        );
    }

    #[test]
    fn brightness_clamps_low() {
        assert_eq!(with_brightness("#000000", -300, None, Scheme::Dark), "#000000");
        // Light negates: -300 becomes +300, clamped at the top.
        assert_eq!(with_brightness("#000000", -300, None, Scheme::Light), "#ffffff");
    }

    #[test]
    fn brightness_clamps_high() {
        assert_eq!(with_brightness("#ffffff", 300, None, Scheme::Dark), "#ffffff");
        assert_eq!(with_brightness("#ffffff", 300, None, Scheme::Light), "#000000");
    }

    #[test]
    fn brightness_accepts_missing_hash() {
        assert_eq!(with_brightness("808080", 0, None, Scheme::Dark), "#808080");
    }

    #[test]
    fn garbage_channels_read_as_zero() {
        assert_eq!(with_brightness("#zzzzzz", 16, None, Scheme::Dark), "#101010");
    }
}
