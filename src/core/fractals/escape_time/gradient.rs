use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::divergence::Escape;
use std::error::Error;
use std::fmt;

/// Divergence-time palette: interior cells are black, diverged cells follow
/// a polynomial blue-white ramp over `iteration / max_iterations`.
#[derive(Debug)]
pub struct EscapeTimeGradient {
    max_iterations: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EscapeTimeGradientError {
    IterationExceedsMax {
        iteration: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for EscapeTimeGradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationExceedsMax {
                iteration,
                max_iterations,
            } => {
                write!(
                    f,
                    "divergence time {} exceeds maximum {}",
                    iteration, max_iterations
                )
            }
        }
    }
}

impl Error for EscapeTimeGradientError {}

impl ColourMap<Escape> for EscapeTimeGradient {
    fn map(&self, value: Escape) -> Result<Colour, Box<dyn Error>> {
        let iteration = match value {
            Escape::Interior => return Ok(Colour { r: 0, g: 0, b: 0 }),
            Escape::Diverged(iteration) => iteration,
        };

        if iteration >= self.max_iterations {
            return Err(Box::new(EscapeTimeGradientError::IterationExceedsMax {
                iteration,
                max_iterations: self.max_iterations,
            }));
        }

        let t = f64::from(iteration) / f64::from(self.max_iterations);

        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        "Blue-white gradient"
    }
}

impl EscapeTimeGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_interior_is_black() {
        let mapper = EscapeTimeGradient::new(100);

        let colour = mapper.map(Escape::Interior).unwrap();

        assert_eq!(colour, Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_map_iteration_zero_is_black() {
        let mapper = EscapeTimeGradient::new(100);

        let colour = mapper.map(Escape::Diverged(0)).unwrap();

        assert_eq!(colour, Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_map_midpoint_gradient() {
        let mapper = EscapeTimeGradient::new(100);

        let colour = mapper.map(Escape::Diverged(50)).unwrap();

        assert_eq!(
            colour,
            Colour {
                r: 143,
                g: 239,
                b: 135
            }
        );
    }

    #[test]
    fn test_map_quarter_gradient() {
        let mapper = EscapeTimeGradient::new(100);

        let colour = mapper.map(Escape::Diverged(25)).unwrap();

        assert_eq!(
            colour,
            Colour {
                r: 26,
                g: 134,
                b: 228
            }
        );
    }

    #[test]
    fn test_display_name() {
        let mapper = EscapeTimeGradient::new(100);

        assert_eq!(mapper.display_name(), "Blue-white gradient");
    }

    #[test]
    fn test_map_rejects_iteration_beyond_budget() {
        let mapper = EscapeTimeGradient::new(100);

        let result = mapper.map(Escape::Diverged(100));

        assert!(result.is_err());
    }
}
