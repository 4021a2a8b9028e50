//! Greedy minimum-distance bipartite matching over a dense distance matrix.
//!
//! ```
//! use bipartite_match::{MatchParams, Matches};
//!
//! let distances = nalgebra::Matrix2::new(0.1, 0.9, 0.8, 0.2);
//! let matches = Matches::compute(&distances, MatchParams::default()).unwrap();
//! assert_eq!(matches.row_to_col(), &[0, 1]);
//! ```

pub mod error;
pub mod input;
pub mod matching;
pub mod params;

pub use error::{Error, Result};
pub use input::{distance_matrix, single_scalar};
pub use matching::{bipartite_match, Matches, UNMATCHED};
pub use params::{MatchLimits, MatchParams};
