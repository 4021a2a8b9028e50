use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::input::single_scalar;

/// Controls for a matching call.
///
/// Negative values select the defaults: every row is eligible and as many
/// matches as the matrix allows are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchParams {
    pub valid_rows: i64,
    pub top_k: i64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            valid_rows: -1,
            top_k: -1,
        }
    }
}

/// [`MatchParams`] resolved against a concrete `rows × cols` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    pub valid_rows: usize,
    pub top_k: usize,
}

impl MatchParams {
    pub fn with_valid_rows(mut self, valid_rows: i64) -> Self {
        self.valid_rows = valid_rows;
        self
    }

    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builds params from a valid-row count handed over as a scalar or a
    /// single element vector, as tensor frameworks tend to pass it.
    pub fn from_valid_rows_input<V>(valid_rows: &[V], top_k: i64) -> Result<Self>
    where
        V: ToPrimitive + Copy,
    {
        Ok(Self {
            valid_rows: single_scalar(valid_rows)?,
            top_k,
        })
    }

    pub fn limits(&self, rows: usize, cols: usize) -> Result<MatchLimits> {
        let valid_rows = if self.valid_rows < 0 {
            rows
        } else {
            match usize::try_from(self.valid_rows) {
                Ok(v) if v <= rows => v,
                _ => {
                    return Err(Error::invalid(
                        "valid_rows",
                        format!("{} exceeds the {rows} rows of the distance matrix", self.valid_rows),
                    ))
                }
            }
        };

        let top_k = if self.top_k < 0 {
            valid_rows.min(cols)
        } else {
            // anything above usize::MAX is unreachable anyway
            usize::try_from(self.top_k).unwrap_or(usize::MAX)
        };

        Ok(MatchLimits { valid_rows, top_k })
    }
}
