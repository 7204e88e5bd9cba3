use crate::core::data::image_size::ImageSize;
use std::error::Error;
use std::fmt;

fn expected_buffer_size(size: ImageSize) -> usize {
    size.cell_count() * 3
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    SizeMismatch {
        expected_bytes: usize,
        actual_bytes: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_bytes,
                actual_bytes,
            } => {
                write!(
                    f,
                    "image size needs {} bytes but buffer has {}",
                    expected_bytes, actual_bytes
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// `height × width × 3` RGB bytes in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ImageSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(size: ImageSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_bytes = expected_buffer_size(size);

        if expected_bytes != buffer.len() {
            return Err(PixelBufferError::SizeMismatch {
                expected_bytes,
                actual_bytes: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// The RGB bytes of one pixel, for inspection in tests and presenters.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }

        let index = (y as usize * self.size.width() as usize + x as usize) * 3;
        Some((
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let size = ImageSize::new(2, 2).unwrap();
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(size, data.clone()).unwrap();

        assert_eq!(buffer.size(), size);
        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.buffer_size(), 12);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let size = ImageSize::new(2, 2).unwrap();
        let data: Vec<u8> = vec![255, 0, 0]; // 3 bytes, need 12

        let result = PixelBuffer::from_data(size, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::SizeMismatch {
                expected_bytes: 12,
                actual_bytes: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let size = ImageSize::new(2, 2).unwrap();
        let data: Vec<u8> = vec![0; 24];

        let result = PixelBuffer::from_data(size, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::SizeMismatch {
                expected_bytes: 12,
                actual_bytes: 24
            }
        );
    }

    #[test]
    fn test_pixel_lookup() {
        let size = ImageSize::new(2, 2).unwrap();
        let data: Vec<u8> = vec![
            255, 0, 0, //
            0, 255, 0, //
            0, 0, 255, //
            255, 255, 0,
        ];
        let buffer = PixelBuffer::from_data(size, data).unwrap();

        assert_eq!(buffer.pixel(0, 0), Some((255, 0, 0)));
        assert_eq!(buffer.pixel(1, 0), Some((0, 255, 0)));
        assert_eq!(buffer.pixel(0, 1), Some((0, 0, 255)));
        assert_eq!(buffer.pixel(1, 1), Some((255, 255, 0)));
    }

    #[test]
    fn test_pixel_lookup_outside_bounds() {
        let size = ImageSize::new(2, 2).unwrap();
        let buffer = PixelBuffer::from_data(size, vec![0; 12]).unwrap();

        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }
}
