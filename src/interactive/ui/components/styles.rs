use crate::interactive::domain::models::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
    pub selection: Color,
    pub code: Color,
    pub code_background: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl ColorScheme {
    pub const DARK: ColorScheme = ColorScheme {
        primary: Color::Cyan,
        secondary: Color::Yellow,
        text: Color::White,
        text_dim: Color::DarkGray,
        background: Color::Black,
        selection: Color::DarkGray,
        code: Color::LightGreen,
        code_background: Color::Rgb(31, 41, 55),
        border: Color::Gray,
        border_focused: Color::Cyan,
    };

    pub const LIGHT: ColorScheme = ColorScheme {
        primary: Color::Blue,
        secondary: Color::Magenta,
        text: Color::Black,
        text_dim: Color::Gray,
        background: Color::White,
        selection: Color::Rgb(229, 231, 235),
        code: Color::Rgb(22, 101, 52),
        code_background: Color::Rgb(243, 244, 246),
        border: Color::DarkGray,
        border_focused: Color::Blue,
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::DARK
    }
}

/// Styles derived from a color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Styles {
    pub colors: ColorScheme,
}

impl Styles {
    pub fn new(theme: Theme) -> Self {
        Self {
            colors: ColorScheme::for_theme(theme),
        }
    }

    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .bg(self.colors.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.colors.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal(&self) -> Style {
        Style::default().fg(self.colors.text)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.colors.text_dim)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.colors.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn code(&self) -> Style {
        Style::default()
            .fg(self.colors.code)
            .bg(self.colors.code_background)
    }

    pub fn inline_code(&self) -> Style {
        Style::default().fg(self.colors.code)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.border_focused)
        } else {
            Style::default().fg(self.colors.border)
        }
    }

    pub fn cursor(&self) -> Style {
        Style::default()
            .bg(self.colors.text)
            .fg(self.colors.background)
    }
}
