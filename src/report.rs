//! Human-readable result rendering.
//!
//! The core exposes four values a consumer needs: the dimension sequence, the
//! minimum cost, the parenthesization, and the Catalan number for the chain
//! length. [`Summary`] bundles them with a plain-text `Display` layout;
//! [`TableView`] renders the full DP tables with `-` markers for unused
//! cells. Both write through `fmt`, so any sink works: console, file via
//! `to_string`, or a buffer.

use std::fmt;

use crate::catalan::catalan;
use crate::optimizer::ChainOptimizer;

/// The four result values for one optimized chain.
#[derive(Debug, Clone)]
pub struct Summary {
    dims: Vec<u64>,
    min_cost: u64,
    parenthesization: String,
    catalan: u128,
}

impl Summary {
    /// Capture the results of a completed optimization.
    ///
    /// The Catalan count is exact only through chains of
    /// [`MAX_EXACT_N`](crate::catalan::MAX_EXACT_N) matrices; in debug builds
    /// longer chains panic in [`catalan`].
    pub fn new(opt: &ChainOptimizer) -> Self {
        Self {
            dims: opt.dims().to_vec(),
            min_cost: opt.min_cost(),
            parenthesization: opt.parenthesization(),
            catalan: catalan(opt.n()),
        }
    }

    pub fn dims(&self) -> &[u64] {
        &self.dims
    }

    pub fn min_cost(&self) -> u64 {
        self.min_cost
    }

    pub fn parenthesization(&self) -> &str {
        &self.parenthesization
    }

    /// Number of distinct parenthesizations the chain admits.
    pub fn catalan(&self) -> u128 {
        self.catalan
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix dimensions (P):")?;
        for d in &self.dims {
            write!(f, " {d}")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Minimum multiplication cost: {}", self.min_cost)?;
        writeln!(f, "Optimal parenthesization: {}", self.parenthesization)?;
        writeln!(
            f,
            "Catalan number (n = {}): {}",
            self.dims.len() - 1,
            self.catalan
        )
    }
}

/// Tab-separated rendering of the cost and split tables.
///
/// Cost cells with `i > j` and split cells with `i >= j` are unused and shown
/// as `-`.
pub struct TableView<'a> {
    opt: &'a ChainOptimizer,
}

impl<'a> TableView<'a> {
    pub fn new(opt: &'a ChainOptimizer) -> Self {
        Self { opt }
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.opt.n();
        writeln!(f, "Table m (costs):")?;
        for i in 1..=n {
            for j in 1..=n {
                match self.opt.cost_table().get(i, j) {
                    Some(c) => write!(f, "{c}\t")?,
                    None => write!(f, "-\t")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Table s (splits):")?;
        for i in 1..=n {
            for j in 1..=n {
                match self.opt.split_table().get(i, j) {
                    Some(k) => write!(f, "{k}\t")?,
                    None => write!(f, "-\t")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_exposes_all_four_values() {
        let opt = ChainOptimizer::new(vec![10, 20, 30, 40, 30]).unwrap();
        let summary = Summary::new(&opt);
        assert_eq!(summary.dims(), &[10, 20, 30, 40, 30]);
        assert_eq!(summary.min_cost(), 30000);
        assert_eq!(summary.parenthesization(), "(((A1 x A2) x A3) x A4)");
        assert_eq!(summary.catalan(), 14);
    }

    #[test]
    fn summary_layout() {
        let opt = ChainOptimizer::new(vec![10, 20, 30, 40, 30]).unwrap();
        let text = Summary::new(&opt).to_string();
        assert!(text.starts_with("Matrix dimensions (P): 10 20 30 40 30\n"));
        assert!(text.contains("Minimum multiplication cost: 30000\n"));
        assert!(text.contains("Optimal parenthesization: (((A1 x A2) x A3) x A4)\n"));
        assert!(text.ends_with("Catalan number (n = 4): 14\n"));
    }

    #[test]
    fn table_view_marks_unused_cells() {
        let opt = ChainOptimizer::new(vec![10, 20, 30]).unwrap();
        let text = TableView::new(&opt).to_string();
        // 2x2 cost table: row 2 starts with an unused cell.
        assert!(text.contains("Table m (costs):\n0\t6000\t\n-\t0\t\n"));
        // Split table diagonal is unused.
        assert!(text.contains("Table s (splits):\n-\t1\t\n-\t-\t\n"));
    }
}
