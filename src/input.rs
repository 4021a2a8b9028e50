//! Conversions from the flat values a tensor framework hands over.

use nalgebra::{DMatrix, Scalar};
use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// Extracts the one integer held by a scalar or a single element vector.
///
/// Floating point values are truncated toward zero.
pub fn single_scalar<V>(values: &[V]) -> Result<i64>
where
    V: ToPrimitive + Copy,
{
    match values {
        [value] => value
            .to_i64()
            .ok_or_else(|| Error::invalid("valid_rows", "value is not representable as an integer")),
        _ => Err(Error::invalid(
            "valid_rows",
            format!("expected a scalar or a single element, got {} elements", values.len()),
        )),
    }
}

/// Builds a distance matrix from a shape and a row-major buffer.
pub fn distance_matrix<T>(shape: &[usize], data: &[T]) -> Result<DMatrix<T>>
where
    T: Scalar + Copy,
{
    let &[rows, cols] = shape else {
        return Err(Error::invalid(
            "distances",
            format!("expected a rank 2 matrix, got rank {}", shape.len()),
        ));
    };

    if rows.checked_mul(cols) != Some(data.len()) {
        return Err(Error::invalid(
            "distances",
            format!("{} values do not fill a {rows}x{cols} matrix", data.len()),
        ));
    }

    Ok(DMatrix::from_row_slice(rows, cols, data))
}
