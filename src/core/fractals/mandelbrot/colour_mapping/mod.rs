pub mod linear_gradient;

pub use linear_gradient::LinearGradient;
