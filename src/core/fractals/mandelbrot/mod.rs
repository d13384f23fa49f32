pub mod algorithm;
pub mod colour_mapping;

pub use algorithm::MandelbrotAlgorithm;
pub use colour_mapping::LinearGradient;
