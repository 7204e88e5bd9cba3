use std::path::Path;
use std::time::Instant;

use crate::controllers::data::render_request::{FractalRequest, RenderRequest};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render::{
    colourize_divergence_field, render_divergence_field, render_polynomial_image,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::divergence::DivergenceSummary;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::polynomial::{CoefficientTerm, Polynomial};
use crate::core::data::region::Region;
use crate::core::fractals::escape_time::gradient::EscapeTimeGradient;

// Control panel defaults: 800x800 over (-2,2)², yellow above, purple below
const CALCULATION_WIDTH: u32 = 800;
const CALCULATION_HEIGHT: u32 = 800;
const MAX_ITERATIONS: u32 = 256;
const COLOUR_ABOVE: &str = "#FFFF00";
const COLOUR_BELOW: &str = "#800080";

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    fill: Option<PixelBuffer>,
    fractal: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            fill: None,
            fractal: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let size = ImageSize::new(CALCULATION_WIDTH, CALCULATION_HEIGHT)?;
        let region = Region::new(-2.0, 2.0, -2.0, 2.0)?;

        println!("Rendering polynomial fill...");
        println!("Image size: {}x{}", size.width(), size.height());

        let fill_request = RenderRequest {
            size,
            region,
            terms: vec![CoefficientTerm {
                degree: 0,
                value: 0.0,
                enabled: true,
            }],
            colour_above: Colour::from_hex(COLOUR_ABOVE)?,
            colour_below: Colour::from_hex(COLOUR_BELOW)?,
        };

        let start = Instant::now();
        let response = render_polynomial_image(&fill_request)?;
        println!("Duration:   {:?}", start.elapsed());
        println!("Expression: {}", response.expression);

        self.fill = Some(response.image);

        println!("Rendering escape-time fractal...");
        println!("Max iterations: {}", MAX_ITERATIONS);

        let fractal_request = FractalRequest {
            size,
            region,
            max_iterations: MAX_ITERATIONS,
            polynomial: Polynomial::from_coefficients([(2, 1.0)]),
        };

        let start = Instant::now();
        let field = render_divergence_field(&fractal_request)?;

        match field.summary() {
            Some(DivergenceSummary { min, max }) => {
                println!("Divergence time: min {}, max {}", min, max);
            }
            None => println!("Divergence time: no cell diverged"),
        }

        let gradient = EscapeTimeGradient::new(MAX_ITERATIONS);
        println!("Colour map: {}", gradient.display_name());

        let fractal = colourize_divergence_field(&field, &gradient)?;
        println!("Duration:   {:?}", start.elapsed());

        self.fractal = Some(fractal);

        Ok(())
    }

    pub fn write(
        &self,
        fill_path: impl AsRef<Path>,
        fractal_path: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        if let Some(buffer) = &self.fill {
            self.presenter.present(buffer, fill_path)?;
        }

        if let Some(buffer) = &self.fractal {
            self.presenter.present(buffer, fractal_path)?;
        }

        Ok(())
    }
}
