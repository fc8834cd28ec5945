use ratatui::style::Color;

/// Editor colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub tag: Color,
    pub unresolved_tag: Color,
    pub operand: Color,
    pub focus: Color,
    pub invalid: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),        // #1A1B26
            text: Color::Rgb(169, 177, 214),           // #A9B1D6
            tag: Color::Rgb(122, 162, 247),            // #7AA2F7
            unresolved_tag: Color::Rgb(224, 175, 104), // #E0AF68
            operand: Color::Rgb(187, 154, 247),        // #BB9AF7
            focus: Color::Rgb(158, 206, 106),          // #9ECE6A
            invalid: Color::Rgb(247, 118, 142),        // #F7768E
            dimmed: Color::Rgb(100, 110, 150),         // #646E96
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn tag() -> Color {
        Theme::current().tag
    }
    pub fn unresolved_tag() -> Color {
        Theme::current().unresolved_tag
    }
    pub fn operand() -> Color {
        Theme::current().operand
    }
    pub fn focus() -> Color {
        Theme::current().focus
    }
    pub fn invalid() -> Color {
        Theme::current().invalid
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
