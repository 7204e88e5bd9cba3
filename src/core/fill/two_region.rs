use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::region::Region;

/// Two-region fill: rescale the threshold (the polynomial's y-intercept)
/// into the image's row range against the region's vertical bounds. Rows
/// before the threshold row get the `above` colour, the rest get `below`.
/// A threshold entirely under the region fills the image with `below`;
/// entirely over it fills with `above`.
pub fn generate_two_region_fill(
    size: ImageSize,
    region: Region,
    threshold: f64,
    above: Colour,
    below: Colour,
) -> Result<PixelBuffer, PixelBufferError> {
    let height = i64::from(size.height());
    let scaled = ((threshold - region.y_min()) / region.height() * size.height() as f64) as i64;

    let above_rows = if (0..=height).contains(&scaled) {
        scaled
    } else if scaled < 0 {
        0
    } else {
        height
    };

    let mut buffer: PixelBufferData = Vec::with_capacity(size.cell_count() * 3);

    for row in 0..height {
        let colour = if row < above_rows { above } else { below };
        for _ in 0..size.width() {
            buffer.push(colour.r);
            buffer.push(colour.g);
            buffer.push(colour.b);
        }
    }

    PixelBuffer::from_data(size, buffer)
}
