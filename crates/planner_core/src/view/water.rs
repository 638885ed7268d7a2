//! Water tracker view and its glass-click rule.

use crate::model::record::{PlannerRecord, WATER_GOAL};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Click on a cell index outside `1..=WATER_GOAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterCellError(pub u8);

impl Display for WaterCellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "water glass {} out of range 1..={WATER_GOAL}", self.0)
    }
}

impl Error for WaterCellError {}

/// Computes the glass count after clicking cell `index`.
///
/// Clicking the topmost filled glass unfills it; any other click fills up to
/// and including `index`, unfilling everything above.
pub fn next_water_count(current: u8, index: u8) -> Result<u8, WaterCellError> {
    if index == 0 || index > WATER_GOAL {
        return Err(WaterCellError(index));
    }
    if index == current {
        Ok(current - 1)
    } else {
        Ok(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterCell {
    /// 1-based.
    pub index: u8,
    pub filled: bool,
}

/// Rendered tracker: exactly `WATER_GOAL` cells plus the numeric count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterTrackerView {
    pub cells: Vec<WaterCell>,
    pub count: u8,
}

impl WaterTrackerView {
    pub fn render(record: &PlannerRecord) -> Self {
        let cells = (1..=WATER_GOAL)
            .map(|index| WaterCell {
                index,
                filled: index <= record.water,
            })
            .collect();
        Self {
            cells,
            count: record.water,
        }
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled).count()
    }
}

impl Display for WaterTrackerView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            f.write_str(if cell.filled { "[#]" } else { "[ ]" })?;
        }
        write!(f, "  {} / {WATER_GOAL} glasses", self.count)
    }
}
