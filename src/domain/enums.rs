use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

/// Which interval the countdown currently represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Work,
    Break,
}

impl Phase {
    /// The phase that follows this one when the countdown reaches zero
    pub fn next(&self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Heading shown above the clock
    pub fn title(&self) -> &'static str {
        match self {
            Self::Work => "Focus Time",
            Self::Break => "Break Time",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Work => "💼",
            Self::Break => "☕",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
    Settings,
}

/// Background presets. Each one is a two-colour "gradient" applied to borders,
/// titles and the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    #[value(name = "black_white")]
    BlackWhite,
    #[value(name = "blue_red")]
    BlueRed,
    #[value(name = "red_green")]
    RedGreen,
}

impl Theme {
    /// Display name for the theme picker
    pub fn name(&self) -> &'static str {
        match self {
            Self::BlackWhite => "Black & White",
            Self::BlueRed => "Blue & Red",
            Self::RedGreen => "Red & Green",
        }
    }

    /// Colour the gradient starts from
    pub fn start(&self) -> Color {
        match self {
            Self::BlackWhite => Color::Gray,
            Self::BlueRed => Color::Blue,
            Self::RedGreen => Color::Red,
        }
    }

    /// Colour the gradient ends on
    pub fn end(&self) -> Color {
        match self {
            Self::BlackWhite => Color::White,
            Self::BlueRed => Color::Red,
            Self::RedGreen => Color::Green,
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::BlackWhite, Theme::BlueRed, Theme::RedGreen]
    }

    /// Neighbouring preset in picker order, wrapping at both ends
    pub fn cycle(&self, forward: bool) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        all[next]
    }
}
