use crate::core::data::point::Point;
use std::error::Error;

/// Per-cell computation over the sample grid. Implementations must be pure
/// so serial and parallel drivers produce identical fields.
pub trait FieldAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
