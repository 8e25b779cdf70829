pub mod convert;
pub mod stitch;
