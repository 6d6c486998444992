pub mod raster;
pub mod recording;
