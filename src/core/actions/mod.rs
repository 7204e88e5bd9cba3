pub mod generate_field;
pub mod generate_pixel_buffer;
