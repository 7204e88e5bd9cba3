pub mod actions;
pub mod data;
pub mod fill;
pub mod fractals;
pub mod grid;
