pub mod cli;
pub mod data;
pub mod ports;
pub mod render;
