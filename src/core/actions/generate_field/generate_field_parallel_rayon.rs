use rayon::prelude::*;

use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Row-parallel equivalent of [`generate_field`], using rayon's
/// work-stealing scheduler. Output is flattened back into row-major order,
/// so results are identical to the serial driver.
///
/// [`generate_field`]: crate::core::actions::generate_field::generate_field::generate_field
pub fn generate_field_parallel_rayon<Alg>(
    size: ImageSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FieldAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..size.height())
        .into_par_iter()
        .map(|y| {
            (0..size.width())
                .map(|x| algorithm.compute(Point { x, y }))
                .collect()
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}
