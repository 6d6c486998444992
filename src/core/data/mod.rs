pub mod colour;
pub mod complex;
pub mod pixel;
pub mod point;
pub mod primitives;
pub mod render_parameters;
pub mod surface_size;
pub mod viewport_state;
