use crate::core::data::image_size::ImageSize;

/// Per-cell outcome of escape-time iteration. An explicit tag instead of an
/// in-band numeric sentinel, so a cell that diverged at iteration 0 can
/// never be confused with one that stayed bounded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Escape {
    /// Magnitude exceeded the threshold at this 0-based iteration index.
    Diverged(u32),
    /// Still bounded after the full iteration budget.
    Interior,
}

/// Min/max of the recorded divergence times, ignoring `Interior` cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DivergenceSummary {
    pub min: u32,
    pub max: u32,
}

/// `width × height` escape outcomes in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceField {
    size: ImageSize,
    cells: Vec<Escape>,
}

impl DivergenceField {
    #[must_use]
    pub fn new(size: ImageSize, cells: Vec<Escape>) -> Option<Self> {
        if cells.len() != size.cell_count() {
            return None;
        }

        Some(Self { size, cells })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn cells(&self) -> &[Escape] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, x: u32, y: u32) -> Option<Escape> {
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }

        Some(self.cells[y as usize * self.size.width() as usize + x as usize])
    }

    /// Interior cells do not contribute; a field where nothing diverged has
    /// no summary.
    #[must_use]
    pub fn summary(&self) -> Option<DivergenceSummary> {
        let mut times = self.cells.iter().filter_map(|cell| match cell {
            Escape::Diverged(iteration) => Some(*iteration),
            Escape::Interior => None,
        });

        let first = times.next()?;
        let (min, max) = times.fold((first, first), |(min, max), time| {
            (min.min(time), max.max(time))
        });

        Some(DivergenceSummary { min, max })
    }
}
