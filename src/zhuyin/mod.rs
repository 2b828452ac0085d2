//! Zhuyin typing practice with an on-screen keyboard.

pub mod catalog;
pub mod composer;
pub mod readings;
pub mod session;
pub mod target;
pub(crate) mod view;

pub use catalog::{Category, SymbolInfo, catalog};
pub use composer::Composition;
pub use session::{KeyOutcome, PracticeSession, Verdict};
pub use target::validate_target;
