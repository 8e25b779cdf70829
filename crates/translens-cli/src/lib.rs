mod args;
mod commands;
mod handlers;
mod observer;

pub use args::{Cli, Commands, ConvertArgs, StitchArgs, StoreArgs};
pub use commands::run;
