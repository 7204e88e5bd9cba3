mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::CliController;
pub use crate::controllers::data::render_request::{FractalRequest, RenderRequest, RenderResponse};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::render::{
    FractalRenderError, colourize_divergence_field, render_divergence_field, render_fractal_image,
    render_polynomial_image,
};
pub use crate::core::actions::generate_field::generate_field::generate_field;
pub use crate::core::actions::generate_field::generate_field_parallel_rayon::generate_field_parallel_rayon;
pub use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::{Colour, ColourParseError};
pub use crate::core::data::divergence::{DivergenceField, DivergenceSummary, Escape};
pub use crate::core::data::image_size::ImageSize;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::polynomial::{CoefficientTerm, Polynomial};
pub use crate::core::data::region::Region;
pub use crate::core::fill::two_region::generate_two_region_fill;
pub use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::escape_time::gradient::EscapeTimeGradient;
pub use crate::core::grid::sampler::{Grid, linspace};
pub use crate::presenters::file::ppm::PpmFilePresenter;
