//! Markdown credits roll.

pub mod markdown;
pub mod roll;
pub mod scroll;
pub mod settings;
pub mod upload;
pub(crate) mod view;

pub use roll::{CreditsRoll, SAMPLE_MARKDOWN};
pub use scroll::{ScrollClock, ScrollState};
pub use settings::CreditsSettings;
