use std::cmp::Ordering;

use nalgebra::{Dim, Matrix, RawStorage, Scalar};
use num_traits::Float;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::params::{MatchLimits, MatchParams};

/// Marker for an unmatched row or column.
pub const UNMATCHED: i32 = -1;

/// Row to column and column to row match indices.
///
/// Both directions always agree: `row_to_col[i] == j` exactly when
/// `col_to_row[j] == i`. Unmatched entries hold [`UNMATCHED`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    row_to_col: Vec<i32>,
    col_to_row: Vec<i32>,
    len: usize,
}

impl Matches {
    /// Runs [`bipartite_match`] into a freshly allocated result.
    pub fn compute<T, R, C, S>(distances: &Matrix<T, R, C, S>, params: MatchParams) -> Result<Self>
    where
        T: Scalar + Float,
        R: Dim,
        C: Dim,
        S: RawStorage<T, R, C>,
    {
        let mut matches = Self::default();
        bipartite_match(distances, params, &mut matches)?;
        Ok(matches)
    }

    pub fn row_to_col(&self) -> &[i32] {
        &self.row_to_col
    }

    pub fn col_to_row(&self) -> &[i32] {
        &self.col_to_row
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn row_match(&self, row: usize) -> Option<usize> {
        self.row_to_col
            .get(row)
            .and_then(|&col| usize::try_from(col).ok())
    }

    pub fn col_match(&self, col: usize) -> Option<usize> {
        self.col_to_row
            .get(col)
            .and_then(|&row| usize::try_from(row).ok())
    }

    /// Matched `(row, col)` pairs in ascending row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col
            .iter()
            .enumerate()
            .filter_map(|(row, &col)| usize::try_from(col).ok().map(|col| (row, col)))
    }

    fn clear(&mut self) {
        self.row_to_col.clear();
        self.col_to_row.clear();
        self.len = 0;
    }

    fn reset(&mut self, rows: usize, cols: usize) {
        self.clear();
        self.row_to_col.resize(rows, UNMATCHED);
        self.col_to_row.resize(cols, UNMATCHED);
    }

    fn is_row_matched(&self, row: usize) -> bool {
        self.row_to_col[row] != UNMATCHED
    }

    fn is_col_matched(&self, col: usize) -> bool {
        self.col_to_row[col] != UNMATCHED
    }

    // Callers guarantee both indices fit in i32.
    fn commit(&mut self, row: usize, col: usize) {
        self.row_to_col[row] = col as i32;
        self.col_to_row[col] = row as i32;
        self.len += 1;
    }
}

/// Greedy minimum-distance bipartite matching.
///
/// Repeatedly takes the smallest remaining distance among the first
/// `valid_rows` rows whose row and column are both still free, until `top_k`
/// pairs are matched or no candidate is left. Equal distances go to the
/// lowest row, then the lowest column.
///
/// `matches` is overwritten. If validation fails it is left empty.
pub fn bipartite_match<T, R, C, S>(
    distances: &Matrix<T, R, C, S>,
    params: MatchParams,
    matches: &mut Matches,
) -> Result<()>
where
    T: Scalar + Float,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    matches.clear();

    let (rows, cols) = distances.shape();
    if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
        return Err(Error::invalid(
            "distances",
            format!("{rows}x{cols} matrix is too large for i32 match indices"),
        ));
    }

    let MatchLimits { valid_rows, top_k } = params.limits(rows, cols)?;

    for row in 0..valid_rows {
        for col in 0..cols {
            if !distances[(row, col)].is_finite() {
                return Err(Error::invalid(
                    "distances",
                    format!("non-finite distance at ({row}, {col})"),
                ));
            }
        }
    }

    debug!(rows, cols, valid_rows, top_k, "computing greedy bipartite match");

    matches.reset(rows, cols);

    let target = top_k.min(valid_rows).min(cols);
    if target == 0 {
        return Ok(());
    }

    // row-major collection plus a stable sort gives the (row, col) tie-break
    let mut candidates = Vec::with_capacity(valid_rows * cols);
    for row in 0..valid_rows {
        for col in 0..cols {
            candidates.push((row, col, distances[(row, col)]));
        }
    }
    candidates.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));

    for (row, col, distance) in candidates {
        if matches.is_row_matched(row) || matches.is_col_matched(col) {
            continue;
        }

        trace!(row, col, ?distance, "matched");
        matches.commit(row, col);

        if matches.len() == target {
            break;
        }
    }

    debug!(matched = matches.len(), "greedy bipartite match done");
    Ok(())
}
