use thiserror::Error;

use crate::core::data::render_parameters::RenderParameterError;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid render parameter: {0}")]
    InvalidParameter(#[from] RenderParameterError),
    #[error("no drawing surface is attached")]
    SurfaceUnavailable,
}
