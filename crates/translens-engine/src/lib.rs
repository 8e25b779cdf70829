// Error types
pub mod error;

// Bot-conversation log payload schema
pub mod logs;

// Fusion algorithm
pub mod fuse;

pub use error::{Error, Result};
pub use fuse::{FusionOutcome, LogFetcher, SEARCH_WINDOW_MS, fuse};
pub use logs::{BotLogEntry, BotMessage};
