pub mod config;
pub mod error;
pub mod logs;
pub mod pipeline;
pub mod store;

pub use config::{Config, StoreProfile};
pub use error::{Error, Result};
pub use logs::FsLogStore;
pub use pipeline::{
    ConversionReport, RunObserver, STITCH_SOURCE_PREFIX, STITCH_TARGET_PREFIX, SilentObserver,
    StitchReport, run_conversion, run_stitch,
};
pub use store::{FsObjectStore, ObjectPage, ObjectStore};
