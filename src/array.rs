//! Sums an array that the caller might not actually have.

use log::info;
use log::warn;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    Missing,
    TooShort { length: usize, available: usize },
}

/// Returns the sum of the first `length` elements of `values`. Fails if there is no array, or if
/// it has fewer than `length` elements.
pub fn add_array(values: Option<&[i32]>, length: usize) -> Result<i64, ArrayError> {
    let Some(values) = values else {
        warn!("Asked to sum {length} elements of a missing array");
        return Err(ArrayError::Missing);
    };
    let Some(values) = values.get(..length) else {
        return Err(ArrayError::TooShort {
            length,
            available: values.len(),
        });
    };
    info!("Summing {length} elements");
    Ok(values.iter().map(|&v| i64::from(v)).sum())
}

impl Display for ArrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayError::Missing => write!(f, "Cannot sum a missing array"),
            ArrayError::TooShort { length, available } => write!(
                f,
                "Cannot sum {length} elements of an array with only {available}"
            ),
        }
    }
}

impl std::error::Error for ArrayError {}
