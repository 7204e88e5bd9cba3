use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::divergence::Escape;
use crate::core::data::point::Point;
use crate::core::data::polynomial::Polynomial;
use crate::core::grid::sampler::{Grid, GridError};
use std::error::Error;
use std::fmt;

/// Magnitude threshold for divergence, squared to avoid the sqrt.
const ESCAPE_MAGNITUDE_SQUARED: f64 = 4.0;

#[derive(Debug)]
pub struct EscapeTimeAlgorithm {
    grid: Grid,
    polynomial: Polynomial,
    max_iterations: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EscapeTimeConstructorError {
    ZeroMaxIterations,
}

impl fmt::Display for EscapeTimeConstructorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeConstructorError {}

impl FieldAlgorithm for EscapeTimeAlgorithm {
    type Success = Escape;
    type Failure = GridError;

    /// One cell's state machine: starting from `z = 0`, apply
    /// `z ← p(z) + c` with `c` the cell's fixed grid coordinate. The first
    /// iteration whose step pushes the magnitude past the threshold (or out
    /// of the finite range) freezes the cell as diverged at that index;
    /// a cell still bounded after the full budget stays interior.
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.grid.point(pixel)?;
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = self.polynomial.eval(z) + c;

            if !z.is_finite() || z.magnitude_squared() > ESCAPE_MAGNITUDE_SQUARED {
                return Ok(Escape::Diverged(iteration));
            }
        }

        Ok(Escape::Interior)
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(
        grid: Grid,
        polynomial: Polynomial,
        max_iterations: u32,
    ) -> Result<Self, EscapeTimeConstructorError> {
        if max_iterations == 0 {
            return Err(EscapeTimeConstructorError::ZeroMaxIterations);
        }

        Ok(Self {
            grid,
            polynomial,
            max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::region::Region;

    fn z_squared() -> Polynomial {
        Polynomial::from_coefficients([(2, 1.0)])
    }

    fn grid_over(region: Region, width: u32, height: u32) -> Grid {
        Grid::new(ImageSize::new(width, height).unwrap(), region)
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let grid = grid_over(Region::new(-2.0, 2.0, -2.0, 2.0).unwrap(), 3, 3);

        let result = EscapeTimeAlgorithm::new(grid, z_squared(), 0);

        assert!(matches!(
            result,
            Err(EscapeTimeConstructorError::ZeroMaxIterations)
        ));
    }

    #[test]
    fn test_origin_stays_interior_under_z_squared_plus_c() {
        // c = 0 is the classic Mandelbrot interior point: z stays at 0
        let grid = grid_over(Region::new(-2.0, 2.0, -2.0, 2.0).unwrap(), 5, 5);
        let algorithm = EscapeTimeAlgorithm::new(grid, z_squared(), 10_000).unwrap();

        let outcome = algorithm.compute(Point { x: 2, y: 2 }).unwrap();

        assert_eq!(outcome, Escape::Interior);
    }

    #[test]
    fn test_far_cell_diverges_within_first_iterations() {
        // c = 3 + 3i has magnitude > 2, so z1 = c already escapes
        let grid = grid_over(Region::new(3.0, 4.0, 3.0, 4.0).unwrap(), 2, 2);
        let algorithm = EscapeTimeAlgorithm::new(grid, z_squared(), 100).unwrap();

        let outcome = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(outcome, Escape::Diverged(0));
    }

    #[test]
    fn test_divergence_time_is_frozen_across_budgets() {
        // The recorded index must not depend on how many further
        // iterations the budget allows
        let region = Region::new(0.2, 0.4, 0.5, 0.7).unwrap();

        let short = EscapeTimeAlgorithm::new(grid_over(region, 3, 3), z_squared(), 50).unwrap();
        let long = EscapeTimeAlgorithm::new(grid_over(region, 3, 3), z_squared(), 5_000).unwrap();

        let pixel = Point { x: 1, y: 1 };
        let short_outcome = short.compute(pixel).unwrap();
        let long_outcome = long.compute(pixel).unwrap();

        assert!(matches!(short_outcome, Escape::Diverged(_)));
        assert_eq!(short_outcome, long_outcome);
    }

    #[test]
    fn test_constant_polynomial_beyond_threshold_diverges_immediately() {
        // p(z) = 5 makes every step land at 5 + c
        let polynomial = Polynomial::from_coefficients([(0, 5.0)]);
        let grid = grid_over(Region::new(-0.5, 0.5, -0.5, 0.5).unwrap(), 3, 3);
        let algorithm = EscapeTimeAlgorithm::new(grid, polynomial, 10).unwrap();

        let outcome = algorithm.compute(Point { x: 1, y: 1 }).unwrap();

        assert_eq!(outcome, Escape::Diverged(0));
    }

    #[test]
    fn test_non_finite_magnitude_counts_as_diverged() {
        // A high-degree term overflows f64 quickly; the cell must freeze
        // as diverged instead of propagating NaN
        let polynomial = Polynomial::from_coefficients([(8, 1e300)]);
        let grid = grid_over(Region::new(2.0, 3.0, 2.0, 3.0).unwrap(), 2, 2);
        let algorithm = EscapeTimeAlgorithm::new(grid, polynomial, 100).unwrap();

        let outcome = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert!(matches!(outcome, Escape::Diverged(_)));
    }

    #[test]
    fn test_pixel_outside_grid_fails() {
        let grid = grid_over(Region::new(-2.0, 2.0, -2.0, 2.0).unwrap(), 3, 3);
        let algorithm = EscapeTimeAlgorithm::new(grid, z_squared(), 10).unwrap();

        let result = algorithm.compute(Point { x: 3, y: 0 });

        assert!(matches!(result, Err(GridError::PointOutsideGrid { .. })));
    }
}
