use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageSizeError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for ImageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ImageSizeError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 || height == 0 {
            return Err(ImageSizeError::ZeroDimension { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of sample cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_new_valid() {
        let size = ImageSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.cell_count(), 480_000);
    }

    #[test]
    fn test_image_size_dimensions_must_be_positive() {
        assert_eq!(
            ImageSize::new(0, 600),
            Err(ImageSizeError::ZeroDimension {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            ImageSize::new(800, 0),
            Err(ImageSizeError::ZeroDimension {
                width: 800,
                height: 0
            })
        );
        assert_eq!(
            ImageSize::new(0, 0),
            Err(ImageSizeError::ZeroDimension {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_single_pixel_image_is_valid() {
        assert!(ImageSize::new(1, 1).is_ok());
    }
}
