use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use std::error::Error;
use std::fmt;

/// `n` evenly spaced values across `[min, max]`, endpoints included. A
/// single sample collapses to the minimum bound.
#[must_use]
pub fn linspace(min: f64, max: f64, n: u32) -> Vec<f64> {
    if n == 1 {
        return vec![min];
    }

    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|i| min + i as f64 * step).collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    PointOutsideGrid { point: Point, size: ImageSize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} grid",
                    point.x,
                    point.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for GridError {}

/// Dense sample grid over a region: `width × height` complex coordinates
/// `x + iy`, row-major, built by outer product of the two axis linspaces.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: ImageSize,
    points: Vec<Complex>,
}

impl Grid {
    #[must_use]
    pub fn new(size: ImageSize, region: Region) -> Self {
        let xs = linspace(region.x_min(), region.x_max(), size.width());
        let ys = linspace(region.y_min(), region.y_max(), size.height());

        let points = ys
            .iter()
            .flat_map(|&imag| xs.iter().map(move |&real| Complex { real, imag }))
            .collect();

        Self { size, points }
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, pixel: Point) -> Result<Complex, GridError> {
        if pixel.x >= self.size.width() || pixel.y >= self.size.height() {
            return Err(GridError::PointOutsideGrid {
                point: pixel,
                size: self.size,
            });
        }

        Ok(self.points[pixel.y as usize * self.size.width() as usize + pixel.x as usize])
    }
}
