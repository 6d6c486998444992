//! Interactive controller for synchronous fractal rendering.
//!
//! Owns the user-adjustable render state and turns parameter changes and
//! surface clicks into full redraws on a [`DrawingSurface`].
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: [`RenderCommand`] values, or the matching handler methods
//! - **Output**: the [`DrawingSurface`] trait, implemented by presenters
//! - **Core**: generators, escape-time algorithm and colour maps from `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::FractalRenderer;
pub use data::frame_summary::FrameSummary;
pub use errors::render::RenderError;
pub use events::render_command::RenderCommand;
pub use ports::drawing_surface::DrawingSurface;
