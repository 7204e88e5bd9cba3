use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Runs the algorithm once per grid cell, row-major.
pub fn generate_field<Alg: FieldAlgorithm>(
    size: ImageSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..size.height())
        .flat_map(|y| (0..size.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
