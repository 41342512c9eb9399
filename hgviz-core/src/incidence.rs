//! Boolean incidence matrix (members as rows, keys as columns)

use crate::hypergraph::SetSystem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceMatrix {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub cells: Vec<Vec<bool>>, // [row][col]
}

impl IncidenceMatrix {
    /// For a hypergraph: nodes x edges. For its dual: edges x nodes.
    pub fn of<S: SetSystem + ?Sized>(system: &S) -> Self {
        let family = system.snapshot();
        let rows: Vec<String> = system.members().into_iter().collect();
        let cols: Vec<String> = family.keys().cloned().collect();
        let cells = rows
            .iter()
            .map(|member| {
                family
                    .values()
                    .map(|set| set.contains(member))
                    .collect()
            })
            .collect();
        Self { rows, cols, cells }
    }

    pub fn transpose(&self) -> Self {
        let cells = (0..self.cols.len())
            .map(|c| self.cells.iter().map(|row| row[c]).collect())
            .collect();
        Self {
            rows: self.cols.clone(),
            cols: self.rows.clone(),
            cells,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }
}
