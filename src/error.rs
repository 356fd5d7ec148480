use thiserror::Error;

/// Why a minutes value could not be used as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("no value entered")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },
}

/// Login form was submitted incomplete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("email is required")]
    MissingEmail,
    #[error("password is required")]
    MissingPassword,
}
