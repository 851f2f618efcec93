use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Colour styles for every kind of line the menu prints.
#[derive(Debug, Clone)]
pub struct Theme {
    /// `false` turns [`Theme::paint`] into a pass-through.
    pub enabled: bool,

    // ── Banners ──────────────────────────────────────────────────────────────
    pub banner: Style,
    pub menu_title: Style,
    pub art: Style,

    // ── Sections ─────────────────────────────────────────────────────────────
    pub heading: Style,
    pub highlight: Style,
    pub dim: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub error: Style,
}

/// Alias so theme fields read like the rest of the UI code.
pub type Style = ContentStyle;

fn fg(color: Color) -> Style {
    Style {
        foreground_color: Some(color),
        ..Style::default()
    }
}

fn bold(color: Color) -> Style {
    Style {
        foreground_color: Some(color),
        attributes: Attributes::from(Attribute::Bold),
        ..Style::default()
    }
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            enabled: true,
            banner: fg(Color::Yellow),
            menu_title: bold(Color::Cyan),
            art: fg(Color::DarkYellow),
            heading: fg(Color::Green),
            highlight: fg(Color::Yellow),
            dim: fg(Color::Grey),
            error: fg(Color::Red),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            enabled: true,
            banner: fg(Color::DarkYellow),
            menu_title: bold(Color::DarkCyan),
            art: fg(Color::DarkYellow),
            heading: fg(Color::DarkGreen),
            highlight: fg(Color::DarkMagenta),
            dim: fg(Color::DarkGrey),
            error: fg(Color::DarkRed),
        }
    }

    /// No colour at all; used for pipes, `NO_COLOR`, and tests.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            banner: Style::default(),
            menu_title: Style::default(),
            art: Style::default(),
            heading: Style::default(),
            highlight: Style::default(),
            dim: Style::default(),
            error: Style::default(),
        }
    }

    /// Pick dark or light from the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            BackgroundType::Dark => Self::dark(),
        }
    }

    /// Resolve a theme by name, falling back to auto-detection.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            "plain" => Self::plain(),
            _ => Self::auto_detect(),
        }
    }

    /// Wrap `text` in `style`'s escape codes, or return it unchanged when the
    /// theme is disabled.
    pub fn paint(&self, style: &Style, text: &str) -> String {
        if self.enabled {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto_detect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creation() {
        let theme = Theme::dark();
        assert!(theme.enabled);
        assert_eq!(theme.error.foreground_color, Some(Color::Red));
        assert_eq!(theme.menu_title.foreground_color, Some(Color::Cyan));
    }

    #[test]
    fn test_light_theme_creation() {
        let theme = Theme::light();
        assert!(theme.enabled);
        assert_eq!(theme.error.foreground_color, Some(Color::DarkRed));
    }

    #[test]
    fn test_plain_theme_has_no_colour() {
        let theme = Theme::plain();
        assert!(!theme.enabled);
        assert!(theme.error.foreground_color.is_none());
    }

    #[test]
    fn test_from_name() {
        assert!(!Theme::from_name("plain").enabled);
        assert_eq!(
            Theme::from_name("LIGHT").heading.foreground_color,
            Some(Color::DarkGreen)
        );
        assert_eq!(
            Theme::from_name("dark").heading.foreground_color,
            Some(Color::Green)
        );
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        // Should not panic and should produce a colour theme.
        assert!(Theme::from_name("neon").enabled);
    }

    #[test]
    fn test_detect_background_from_colorfgbg() {
        let original = std::env::var_os("COLORFGBG");

        std::env::set_var("COLORFGBG", "0;15");
        let light = detect_background();
        std::env::set_var("COLORFGBG", "15;0");
        let dark = detect_background();
        std::env::set_var("COLORFGBG", "garbage");
        let fallback = detect_background();

        match original {
            Some(v) => std::env::set_var("COLORFGBG", v),
            None => std::env::remove_var("COLORFGBG"),
        }

        assert_eq!(light, BackgroundType::Light);
        assert_eq!(dark, BackgroundType::Dark);
        assert_eq!(fallback, BackgroundType::Dark);
    }

    #[test]
    fn test_paint_plain_is_passthrough() {
        let theme = Theme::plain();
        assert_eq!(theme.paint(&theme.error, "boom"), "boom");
    }

    #[test]
    fn test_paint_coloured_wraps_text() {
        let theme = Theme::dark();
        let painted = theme.paint(&theme.error, "boom");
        assert!(painted.contains("boom"));
        // crossterm itself drops colour codes when NO_COLOR is set.
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.contains('\u{1b}'), "expected an escape sequence");
        }
    }
}
