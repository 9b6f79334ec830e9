//! Cost and split table construction for matrix-chain ordering.
//!
//! Classic interval DP:
//! - Given dimensions `P[0..=n]`, matrix `A_i` has size `P[i-1] x P[i]`.
//! - `cost[i][j]` is the minimum number of scalar multiplications needed to
//!   fully parenthesize the sub-chain `A_i..A_j`.
//! - `split[i][j]` records the split point `k` achieving that minimum, so the
//!   optimal structure can be reconstructed afterwards.
//!
//! Tables are built once per dimension sequence and are immutable afterwards;
//! reconstruction and rendering only ever borrow them.

use crate::error::ChainError;

/// Minimum-cost table, 1-based on both axes.
///
/// `cost[i][i] = 0` for every `i`; `cost[i][j]` for `i < j` is the optimal
/// sub-chain cost. Cells with `i > j` are unused.
#[derive(Debug, Clone)]
pub struct CostTable {
    n: usize,
    cells: Vec<Vec<u64>>,
}

impl CostTable {
    /// Number of matrices in the chain the table was built for.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cost of the sub-chain `A_i..A_j`, or `None` for an unused or
    /// out-of-range cell.
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        if i >= 1 && i <= j && j <= self.n {
            Some(self.cells[i][j])
        } else {
            None
        }
    }
}

/// Optimal split-point table, 1-based on both axes.
///
/// `split[i][j]` for `i < j` is the chain index `k` (with `i <= k < j`) at
/// which `(A_i..A_k) x (A_{k+1}..A_j)` achieves `cost[i][j]`. Cells with
/// `i >= j` are unused.
#[derive(Debug, Clone)]
pub struct SplitTable {
    n: usize,
    cells: Vec<Vec<usize>>,
}

impl SplitTable {
    /// Number of matrices in the chain the table was built for.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Split point for the sub-chain `A_i..A_j`, or `None` for an unused or
    /// out-of-range cell.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i >= 1 && i < j && j <= self.n {
            Some(self.cells[i][j])
        } else {
            None
        }
    }

    /// Direct cell access for callers that have already validated `i < j`.
    pub(crate) fn at(&self, i: usize, j: usize) -> usize {
        debug_assert!(i >= 1 && i < j && j <= self.n);
        self.cells[i][j]
    }
}

/// Matrix-chain ordering instance: validated dimensions plus both DP tables.
///
/// Construction validates the dimension sequence, then fills the tables in
/// O(n^3) time and O(n^2) space. An instance owns its tables exclusively for
/// the lifetime of one dimension sequence; build a new instance for a new
/// sequence.
#[derive(Debug, Clone)]
pub struct ChainOptimizer {
    dims: Vec<u64>,
    cost: CostTable,
    split: SplitTable,
}

impl ChainOptimizer {
    /// Validate `dims` and build the cost and split tables.
    ///
    /// `dims` must hold `n + 1` positive values describing `n >= 1` matrices.
    ///
    /// # Errors
    /// [`ChainError::InvalidInput`] if `dims` has fewer than two entries or
    /// contains a zero dimension. No table work happens onError.
    ///
    /// Costs are accumulated in `u64`; with dimensions up to ~10^6 and chains
    /// of tens of matrices this cannot wrap. Larger scales are out of the
    /// supported range.
    pub fn new(dims: Vec<u64>) -> Result<Self, ChainError> {
        if dims.len() < 2 {
            return Err(ChainError::invalid_input(format!(
                "need at least 2 dimensions for one matrix, got {}",
                dims.len()
            )));
        }
        if let Some(pos) = dims.iter().position(|&d| d == 0) {
            return Err(ChainError::invalid_input(format!(
                "dimension at index {pos} is zero"
            )));
        }

        let n = dims.len() - 1;
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build_tables", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cost = vec![vec![0u64; n + 1]; n + 1];
        let mut split = vec![vec![0usize; n + 1]; n + 1];

        // cost[i][i] is already 0: a single matrix needs no multiplication.
        for len in 2..=n {
            for i in 1..=(n - len + 1) {
                let j = i + len - 1;
                // Running minimum as an explicit unset sentinel rather than a
                // numeric maximum, so no dimension scale can fake "infinity".
                let mut best: Option<(u64, usize)> = None;
                for k in i..j {
                    let q = cost[i][k] + cost[k + 1][j] + dims[i - 1] * dims[k] * dims[j];
                    // Strict comparison: the earliest k wins ties.
                    if best.map_or(true, |(b, _)| q < b) {
                        best = Some((q, k));
                    }
                }
                if let Some((q, k)) = best {
                    cost[i][j] = q;
                    split[i][j] = k;
                }
            }
        }

        Ok(Self {
            dims,
            cost: CostTable { n, cells: cost },
            split: SplitTable { n, cells: split },
        })
    }

    /// Number of matrices in the chain.
    pub fn n(&self) -> usize {
        self.dims.len() - 1
    }

    /// The validated dimension sequence `P[0..=n]`.
    pub fn dims(&self) -> &[u64] {
        &self.dims
    }

    /// Minimum number of scalar multiplications for the whole chain.
    pub fn min_cost(&self) -> u64 {
        self.cost.cells[1][self.n()]
    }

    /// Borrow the completed cost table.
    pub fn cost_table(&self) -> &CostTable {
        &self.cost
    }

    /// Borrow the completed split table.
    pub fn split_table(&self) -> &SplitTable {
        &self.split
    }

    /// Fully parenthesized expression for the whole chain, e.g.
    /// `(((A1 x A2) x A3) x A4)`.
    pub fn parenthesization(&self) -> String {
        crate::parens::render_to_string(&self.split, 1, self.n())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clrs_example_cost() {
        let opt = ChainOptimizer::new(vec![30, 35, 15, 5, 10, 20, 25]).unwrap();
        assert_eq!(opt.min_cost(), 15125);
    }

    #[test]
    fn single_matrix_costs_nothing() {
        let opt = ChainOptimizer::new(vec![5, 10]).unwrap();
        assert_eq!(opt.n(), 1);
        assert_eq!(opt.min_cost(), 0);
    }

    #[test]
    fn two_matrices_one_product() {
        let p = vec![10u64, 20, 30];
        let opt = ChainOptimizer::new(p.clone()).unwrap();
        assert_eq!(opt.min_cost(), p[0] * p[1] * p[2]);
        assert_eq!(opt.split_table().get(1, 2), Some(1));
    }

    #[test]
    fn diagonal_is_zero() {
        let opt = ChainOptimizer::new(vec![7, 3, 9, 2, 11]).unwrap();
        for i in 1..=opt.n() {
            assert_eq!(opt.cost_table().get(i, i), Some(0));
        }
    }

    #[test]
    fn rejects_short_sequences() {
        assert!(matches!(
            ChainOptimizer::new(vec![]),
            Err(ChainError::InvalidInput { .. })
        ));
        assert!(matches!(
            ChainOptimizer::new(vec![5]),
            Err(ChainError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_zero_dimension() {
        assert!(matches!(
            ChainOptimizer::new(vec![10, 0, 30]),
            Err(ChainError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unused_cells_are_none() {
        let opt = ChainOptimizer::new(vec![10, 20, 30, 40]).unwrap();
        assert_eq!(opt.cost_table().get(3, 1), None);
        assert_eq!(opt.cost_table().get(0, 2), None);
        assert_eq!(opt.split_table().get(2, 2), None);
        assert_eq!(opt.split_table().get(1, 4), None);
    }

    #[test]
    fn ties_keep_earliest_split() {
        // All dimensions equal: every split of A1..A3 costs the same, so the
        // ascending scan must keep k = 1.
        let opt = ChainOptimizer::new(vec![4, 4, 4, 4]).unwrap();
        assert_eq!(opt.split_table().get(1, 3), Some(1));
    }
}
