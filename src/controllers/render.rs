use crate::controllers::data::render_request::{FractalRequest, RenderRequest, RenderResponse};
use crate::core::actions::generate_field::generate_field_parallel_rayon::generate_field_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::divergence::{DivergenceField, Escape};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::polynomial::Polynomial;
use crate::core::fill::two_region::generate_two_region_fill;
use crate::core::fractals::escape_time::algorithm::{
    EscapeTimeAlgorithm, EscapeTimeConstructorError,
};
use crate::core::fractals::escape_time::gradient::EscapeTimeGradient;
use crate::core::grid::sampler::{Grid, GridError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FractalRenderError {
    Constructor(EscapeTimeConstructorError),
    Grid(GridError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for FractalRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor(err) => write!(f, "escape-time setup error: {}", err),
            Self::Grid(err) => write!(f, "grid error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for FractalRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Constructor(err) => Some(err),
            Self::Grid(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<EscapeTimeConstructorError> for FractalRenderError {
    fn from(err: EscapeTimeConstructorError) -> Self {
        Self::Constructor(err)
    }
}

impl From<GridError> for FractalRenderError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<GeneratePixelBufferError> for FractalRenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// The two-region fill render: a pure function of the request. The fill
/// threshold is the active polynomial's y-intercept.
pub fn render_polynomial_image(request: &RenderRequest) -> Result<RenderResponse, PixelBufferError> {
    let polynomial = Polynomial::from_terms(&request.terms);

    let image = generate_two_region_fill(
        request.size,
        request.region,
        polynomial.constant_term(),
        request.colour_above,
        request.colour_below,
    )?;

    Ok(RenderResponse {
        image,
        expression: polynomial.expression(),
    })
}

/// The escape-time render up to the divergence field, a pure function of
/// the request.
pub fn render_divergence_field(
    request: &FractalRequest,
) -> Result<DivergenceField, FractalRenderError> {
    let grid = Grid::new(request.size, request.region);
    let algorithm =
        EscapeTimeAlgorithm::new(grid, request.polynomial.clone(), request.max_iterations)?;

    let cells = generate_field_parallel_rayon(request.size, &algorithm)?;

    // generate_field_parallel_rayon yields exactly one cell per pixel
    Ok(DivergenceField::new(request.size, cells)
        .unwrap_or_else(|| unreachable!("field generation yields one cell per grid point")))
}

/// Maps a divergence field through a colour map into an RGB buffer.
pub fn colourize_divergence_field<CMap: ColourMap<Escape>>(
    field: &DivergenceField,
    mapper: &CMap,
) -> Result<PixelBuffer, FractalRenderError> {
    Ok(generate_pixel_buffer(
        field.cells().to_vec(),
        mapper,
        field.size(),
    )?)
}

/// The full escape-time render: divergence field through the gradient
/// palette into an RGB buffer.
pub fn render_fractal_image(request: &FractalRequest) -> Result<PixelBuffer, FractalRenderError> {
    let field = render_divergence_field(request)?;
    let gradient = EscapeTimeGradient::new(request.max_iterations);

    colourize_divergence_field(&field, &gradient)
}
