//! Conversion of raw records into validated binary matrices.
use crate::error::{Result, ZeroError};

use linfa::Float;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use std::collections::BTreeSet;

/// Build a rectangular matrix out of nested rows.
///
/// Fails with [`ZeroError::InvalidInputType`] when the rows have different lengths
/// or no columns at all.
pub fn records_from_rows<F: Clone>(rows: &[Vec<F>]) -> Result<Array2<F>> {
    let ncols = rows.first().map_or(0, |row| row.len());
    if ncols == 0 && !rows.is_empty() {
        return Err(ZeroError::InvalidInputType(
            "rows have no columns".to_string(),
        ));
    }
    let mut flat = Vec::with_capacity(rows.len() * ncols);
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != ncols {
            return Err(ZeroError::InvalidInputType(format!(
                "row {} has {} columns, expected {}",
                idx,
                row.len(),
                ncols
            )));
        }
        flat.extend_from_slice(row);
    }
    Array2::from_shape_vec((rows.len(), ncols), flat)
        .map_err(|e| ZeroError::InvalidInputType(e.to_string()))
}

fn to_bit<F: Float>(value: F) -> Option<u8> {
    if value == F::zero() {
        Some(0)
    } else if value == F::one() {
        Some(1)
    } else {
        None
    }
}

/// Checks that every entry is 0 or 1 and returns the matrix as bits.
pub(crate) fn binarize<F: Float, D: Data<Elem = F>>(
    x: &ArrayBase<D, Ix2>,
) -> Result<Array2<u8>> {
    let mut bits = Vec::with_capacity(x.len());
    for (row, values) in x.outer_iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            let bit = to_bit(value).ok_or(ZeroError::DomainViolation { row, col })?;
            bits.push(bit);
        }
    }
    Array2::from_shape_vec((x.nrows(), x.ncols()), bits)
        .map_err(|e| ZeroError::InvalidInputType(e.to_string()))
}

/// Removes exact duplicate rows. Rows come back in lexicographic order.
pub(crate) fn unique_rows(x: &Array2<u8>) -> Result<Array2<u8>> {
    let unique: BTreeSet<Vec<u8>> = x.outer_iter().map(|row| row.to_vec()).collect();
    let nrows = unique.len();
    let flat: Vec<u8> = unique.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, x.ncols()), flat)
        .map_err(|e| ZeroError::InvalidInputType(e.to_string()))
}
