use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps one field scalar to an RGB colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
