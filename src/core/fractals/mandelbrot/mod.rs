pub mod algorithm;
pub mod viewport_controller;
