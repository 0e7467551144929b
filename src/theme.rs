//! Light/dark theme, passed down to renderers as a context value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// ANSI styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

const RESET: &str = "\x1b[0m";

const LIGHT: Palette = Palette {
    heading: "\x1b[1;35m",
    accent: "\x1b[35m",
    muted: "\x1b[90m",
    success: "\x1b[32m",
    error: "\x1b[31m",
};

const DARK: Palette = Palette {
    heading: "\x1b[1;95m",
    accent: "\x1b[95m",
    muted: "\x1b[37m",
    success: "\x1b[92m",
    error: "\x1b[91m",
};

/// Theme state handed to everything that renders output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
    color: bool,
}

impl ThemeContext {
    /// Create a context; `color = false` renders plain text.
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn palette(&self) -> Palette {
        match self.theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Wrap `text` in `style` when color is enabled.
    pub fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(self.palette().heading, text)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(self.palette().accent, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(self.palette().muted, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(self.palette().success, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(self.palette().error, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut ctx = ThemeContext::new(Theme::default(), false);
        assert_eq!(ctx.theme(), Theme::Light);

        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Dark);
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Light);
    }

    #[test]
    fn test_plain_paint_has_no_escapes() {
        let ctx = ThemeContext::new(Theme::Dark, false);
        assert_eq!(ctx.heading("Dashboard"), "Dashboard");
    }

    #[test]
    fn test_color_paint_depends_on_theme() {
        let light = ThemeContext::new(Theme::Light, true).success("ok");
        let dark = ThemeContext::new(Theme::Dark, true).success("ok");

        assert!(light.ends_with("\x1b[0m"));
        assert_ne!(light, dark);
    }

    #[test]
    fn test_parse_and_serialize() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("blue".parse::<Theme>().is_err());

        #[derive(Serialize)]
        struct Wrap {
            theme: Theme,
        }
        let text = toml::to_string(&Wrap { theme: Theme::Dark }).unwrap();
        assert_eq!(text.trim(), "theme = \"dark\"");
    }
}
