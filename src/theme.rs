//! Theme colors for the UI, with per-severity alert colors.
//! Defaults can be overridden from the `[theme]` section of the config file.

use ratatui::style::Color;

use crate::config::ThemeConfig;
use crate::notification::Severity;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub info: Color,          // Info notifications, neutral highlights
    pub success: Color,       // Success notifications
    pub warning: Color,       // Warning notifications, confirm prompts
    pub danger: Color,        // Danger notifications, errors
    pub text: Color,          // Primary text (foreground)
    pub text_dim: Color,      // Dimmed text, hints
    pub border: Color,        // Inactive borders
    pub border_active: Color, // Active borders, highlights
    pub header: Color,        // Header text
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired palette
        Self {
            info: Color::Rgb(137, 180, 250),
            success: Color::Rgb(166, 218, 149),
            warning: Color::Rgb(250, 179, 135),
            danger: Color::Rgb(243, 139, 168),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            border: Color::Rgb(88, 91, 112),
            border_active: Color::Rgb(250, 179, 135),
            header: Color::Rgb(243, 139, 168),
        }
    }
}

impl Theme {
    /// Build the theme from defaults plus any config overrides
    pub fn load(overrides: &ThemeConfig) -> Self {
        let mut theme = Self::default();

        let apply = |slot: &mut Color, value: &Option<String>| {
            if let Some(color) = value.as_deref().and_then(Self::parse_hex_color) {
                *slot = color;
            }
        };

        apply(&mut theme.info, &overrides.info);
        apply(&mut theme.success, &overrides.success);
        apply(&mut theme.warning, &overrides.warning);
        apply(&mut theme.danger, &overrides.danger);
        apply(&mut theme.text, &overrides.text);

        theme
    }

    /// Color for a notification severity
    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Warning => self.warning,
            Severity::Danger => self.danger,
        }
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            Theme::parse_hex_color("#a6da95"),
            Some(Color::Rgb(166, 218, 149))
        );
        assert_eq!(Theme::parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Theme::parse_hex_color("#12345"), None);
        assert_eq!(Theme::parse_hex_color("nope"), None);
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = ThemeConfig {
            success: Some("#00ff00".to_string()),
            danger: Some("garbage".to_string()),
            ..ThemeConfig::default()
        };
        let theme = Theme::load(&overrides);

        assert_eq!(theme.success, Color::Rgb(0, 255, 0));
        // Unparseable override keeps the default
        assert_eq!(theme.danger, Theme::default().danger);
        assert_eq!(theme.severity(Severity::Success), theme.success);
    }
}
