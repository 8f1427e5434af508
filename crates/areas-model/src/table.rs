/// Which hierarchy level a row source feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    State,
    District,
    Subdistrict,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::State, Tier::District, Tier::Subdistrict];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::State => "state",
            Tier::District => "district",
            Tier::Subdistrict => "subdistrict",
        }
    }

    /// File name of this tier's table in the upstream directory.
    pub fn source_file(self) -> &'static str {
        match self {
            Tier::State => "1-state.csv",
            Tier::District => "2-district.csv",
            Tier::Subdistrict => "3-subdistrict.csv",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed tabular source: the header row split off from the data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 1-based source line of each row, when known.
    pub lines: Vec<usize>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_lines(mut self, lines: Vec<usize>) -> Self {
        self.lines = lines;
        self
    }

    /// Source line of row `index`; without recorded lines the header is
    /// assumed to be line 1 and rows to follow one per line.
    pub fn line(&self, index: usize) -> usize {
        self.lines.get(index).copied().unwrap_or(index + 2)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The three row sources a dataset is built from.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub states: RawTable,
    pub districts: RawTable,
    pub subdistricts: RawTable,
}

impl SourceTables {
    pub fn get(&self, tier: Tier) -> &RawTable {
        match tier {
            Tier::State => &self.states,
            Tier::District => &self.districts,
            Tier::Subdistrict => &self.subdistricts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_falls_back_to_row_position() {
        let table = RawTable::new(Vec::new(), vec![vec!["a".to_string()]; 2]);
        assert_eq!(table.line(0), 2);
        assert_eq!(table.line(1), 3);

        let table = table.with_lines(vec![2, 5]);
        assert_eq!(table.line(1), 5);
    }
}
