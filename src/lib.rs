//! Matrix-chain multiplication ordering.
//!
//! This crate computes the optimal order for multiplying a chain of matrices
//! so as to minimize the total number of scalar multiplications, using the
//! classic bottom-up interval DP over sub-chain costs.
//!
//! ## Core pieces
//! 1. [`ChainOptimizer`] validates a dimension sequence and fills the
//!    minimum-cost and split-point tables.
//! 2. The [`parens`] module walks the split table to reconstruct the fully
//!    parenthesized expression, streamed as tokens to any sink.
//! 3. [`catalan`] counts how many distinct parenthesizations a chain of a
//!    given length admits, independent of the tables.
//!
//! ## Quick start
//! ```
//! use chain_opt::ChainOptimizer;
//!
//! let opt = ChainOptimizer::new(vec![10, 20, 30, 40, 30])?;
//! assert_eq!(opt.min_cost(), 30000);
//! assert_eq!(opt.parenthesization(), "(((A1 x A2) x A3) x A4)");
//! assert_eq!(chain_opt::catalan(opt.n()), 14);
//! # Ok::<(), chain_opt::ChainError>(())
//! ```
//!
//! Everything is single-threaded and deterministic; one optimizer instance
//! owns its tables for the lifetime of one dimension sequence.

pub mod catalan;
pub mod error;
pub mod gen;
pub mod optimizer;
pub mod parens;
pub mod report;

pub use crate::catalan::catalan;
pub use crate::error::ChainError;
pub use crate::optimizer::{ChainOptimizer, CostTable, SplitTable};
pub use crate::parens::{parenthesization_string, Token};
pub use crate::report::{Summary, TableView};
