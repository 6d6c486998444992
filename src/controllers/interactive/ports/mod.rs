//! Port definitions for the interactive controller.
//!
//! Contains the trait the controller draws through; hosts adapt it to their
//! own canvas.

pub mod drawing_surface;
