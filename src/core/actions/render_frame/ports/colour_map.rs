use crate::core::data::colour::Colour;
use std::num::NonZeroU32;

pub trait ColourMap {
    fn map(&self, iterations: u32, max_iterations: NonZeroU32) -> Colour;
}
