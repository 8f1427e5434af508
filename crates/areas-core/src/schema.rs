//! Column positions of the upstream row sources.

use areas_model::Tier;

use crate::error::{BuildError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColumns {
    pub code: usize,
    pub name: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictColumns {
    pub state_code: usize,
    pub code: usize,
    pub name: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdistrictColumns {
    pub state_code: usize,
    pub district_code: usize,
    pub code: usize,
    pub name: usize,
}

/// Column index of every field read from each tier's rows.
///
/// The default matches the local government directory tables:
/// `1-state.csv`, `2-district.csv` and `3-subdistrict.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSchema {
    pub state: StateColumns,
    pub district: DistrictColumns,
    pub subdistrict: SubdistrictColumns,
}

impl Default for RowSchema {
    fn default() -> Self {
        Self {
            state: StateColumns { code: 1, name: 3 },
            district: DistrictColumns {
                state_code: 0,
                code: 2,
                name: 3,
            },
            subdistrict: SubdistrictColumns {
                state_code: 1,
                district_code: 3,
                code: 5,
                name: 7,
            },
        }
    }
}

/// Locates a data row for error reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowRef<'r> {
    pub tier: Tier,
    /// 1-based source line.
    pub line: usize,
    pub cells: &'r [String],
}

impl<'r> RowRef<'r> {
    pub fn new(tier: Tier, line: usize, cells: &'r [String]) -> Self {
        Self { tier, line, cells }
    }

    /// Trimmed value at `column`, or a fatal error when the row is too short.
    pub fn field(&self, column: usize, field: &'static str) -> Result<&'r str> {
        self.cells
            .get(column)
            .map(|value| value.trim())
            .ok_or(BuildError::ShortRow {
                tier: self.tier,
                line: self.line,
                column,
                field,
                len: self.cells.len(),
            })
    }
}
