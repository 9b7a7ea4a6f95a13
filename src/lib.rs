pub mod config;
pub mod crop;
pub mod error;
pub mod receptive;
pub mod track;

#[cfg(test)]
pub(crate) mod util;

pub use crop::{CenterCrop, CenterCropConfig, Trim};
pub use error::{CropError, CropResult};
