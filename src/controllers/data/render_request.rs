use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::polynomial::{CoefficientTerm, Polynomial};
use crate::core::data::region::Region;

/// One two-region fill render, as assembled from the control panel: slider
/// terms with their enable switches plus the two fill colours.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub size: ImageSize,
    pub region: Region,
    pub terms: Vec<CoefficientTerm>,
    pub colour_above: Colour,
    pub colour_below: Colour,
}

/// The image buffer plus the textual rendering of the active polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResponse {
    pub image: PixelBuffer,
    pub expression: String,
}

/// One escape-time fractal render.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalRequest {
    pub size: ImageSize,
    pub region: Region,
    pub max_iterations: u32,
    pub polynomial: Polynomial,
}
