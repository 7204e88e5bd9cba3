#[allow(clippy::module_inception)]
pub mod generate_field;
pub mod generate_field_parallel_rayon;
pub mod ports;
