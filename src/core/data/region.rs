use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    InvertedBounds { min: f64, max: f64, axis: Axis },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { min, max, axis } => {
                let axis = match axis {
                    Axis::X => "x",
                    Axis::Y => "y",
                };
                write!(
                    f,
                    "{}-axis bounds must satisfy min < max: got [{}, {}]",
                    axis, min, max
                )
            }
        }
    }
}

impl Error for RegionError {}

/// The rectangular subset of the plane being sampled, as min/max bounds on
/// each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Region {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, RegionError> {
        if !(x_min < x_max) {
            return Err(RegionError::InvertedBounds {
                min: x_min,
                max: x_max,
                axis: Axis::X,
            });
        }

        if !(y_min < y_max) {
            return Err(RegionError::InvertedBounds {
                min: y_min,
                max: y_max,
                axis: Axis::Y,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
