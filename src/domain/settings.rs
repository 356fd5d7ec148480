use super::enums::Phase;
use crate::error::SettingsError;
use tracing::debug;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Work and break durations, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl TimerSettings {
    /// Full length of a phase in seconds
    pub fn phase_secs(&self, phase: Phase) -> u32 {
        let minutes = match phase {
            Phase::Work => self.work_minutes,
            Phase::Break => self.break_minutes,
        };
        minutes * 60
    }

    pub fn get(&self, field: MinutesField) -> u32 {
        match field {
            MinutesField::Work => self.work_minutes,
            MinutesField::Break => self.break_minutes,
        }
    }

    pub fn set(&mut self, field: MinutesField, minutes: u32) {
        match field {
            MinutesField::Work => self.work_minutes = minutes,
            MinutesField::Break => self.break_minutes = minutes,
        }
    }
}

/// One of the two numeric duration inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinutesField {
    Work,
    Break,
}

impl MinutesField {
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            Self::Work => (1, 60),
            Self::Break => (1, 30),
        }
    }

    pub fn default_minutes(&self) -> u32 {
        match self {
            Self::Work => DEFAULT_WORK_MINUTES,
            Self::Break => DEFAULT_BREAK_MINUTES,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work Duration (minutes)",
            Self::Break => "Break Duration (minutes)",
        }
    }

    /// Check a number against this field's bounds
    pub fn validate(&self, value: u32) -> Result<u32, SettingsError> {
        let (min, max) = self.bounds();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(SettingsError::OutOfRange { value, min, max })
        }
    }

    /// Strictly parse text typed into the field
    pub fn parse(&self, input: &str) -> Result<u32, SettingsError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SettingsError::Empty);
        }
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| SettingsError::NotANumber(trimmed.to_string()))?;
        self.validate(value)
    }

    /// Turn whatever was typed into a usable value. Garbage and zero fall back
    /// to the default, anything else out of bounds is clamped.
    pub fn resolve(&self, input: &str) -> u32 {
        match self.parse(input) {
            Ok(minutes) => minutes,
            Err(SettingsError::OutOfRange { value, min, max }) if value > 0 => {
                debug!(field = ?self, value, "clamping minutes into {min}..={max}");
                value.clamp(min, max)
            }
            Err(err) => {
                debug!(field = ?self, %err, "falling back to default minutes");
                self.default_minutes()
            }
        }
    }
}
