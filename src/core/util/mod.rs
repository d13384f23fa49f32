pub mod partition_into_regions;
pub mod pixel_to_complex_coords;
