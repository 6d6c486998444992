pub mod leaf_count;
pub mod linear_map;
pub mod midpoint;
pub mod pixel_to_complex_coords;
pub mod rotate;
