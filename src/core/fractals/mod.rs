pub mod fractal_kinds;
pub mod koch;
pub mod mandelbrot;
pub mod sierpinski;
