use tracing::trace;

use crate::error::{HelperError, Result};
use crate::utils::validation::check_for_valid_number;

/// Sum a numeric field across records.
///
/// `accessor` picks the number out of each record. The first record with no
/// value, or with a NaN/infinite one, aborts the whole sum.
pub fn get_total<T, F>(records: &[T], accessor: F) -> Result<f64>
where
    F: Fn(&T) -> Option<f64>,
{
    let total = records
        .iter()
        .enumerate()
        .try_fold(0.0, |acc, (index, record)| {
            let value = accessor(record).ok_or(HelperError::MissingValue { index })?;
            Ok::<f64, HelperError>(acc + check_for_valid_number(value)?)
        })?;
    trace!(records = records.len(), total, "Computed total");
    Ok(total)
}

/// Split a slice into chunks of `chunk_size`, the last holding the remainder.
/// The input is left untouched.
pub fn split_array_into_chunks<T: Clone>(items: &[T], chunk_size: usize) -> Result<Vec<Vec<T>>> {
    if chunk_size == 0 {
        return Err(HelperError::InvalidChunkSize);
    }
    Ok(items.chunks(chunk_size).map(<[T]>::to_vec).collect())
}

/// Like [`split_array_into_chunks`], but moves the elements out of `items`,
/// which is empty afterward.
pub fn drain_into_chunks<T>(items: &mut Vec<T>, chunk_size: usize) -> Result<Vec<Vec<T>>> {
    if chunk_size == 0 {
        return Err(HelperError::InvalidChunkSize);
    }

    let mut chunks = Vec::with_capacity(items.len().div_ceil(chunk_size));
    let mut drained = items.drain(..);
    loop {
        let chunk: Vec<T> = drained.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }
    drop(drained);

    trace!(chunks = chunks.len(), chunk_size, "Drained into chunks");
    Ok(chunks)
}
