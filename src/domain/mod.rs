pub mod auth;
pub mod enums;
pub mod session;
pub mod settings;
pub mod task;

pub use auth::Account;
pub use enums::{Phase, Theme, UiMode};
pub use session::{format_clock, PhaseComplete, Session};
pub use settings::{MinutesField, TimerSettings};
pub use task::{Task, TaskList};
