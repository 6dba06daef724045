//! Pure distance functions: the suffix/prefix overlap metric used to build
//! the overlap graph, and the Levenshtein scorer used as the fitness signal.

use crate::types::FormicError;

/// Smallest non-negative shift aligning a suffix of `first` with a prefix
/// of `second`.
///
/// A shift of `d` means the last `len - d` characters of `first` equal the
/// first `len - d` characters of `second`; lower shifts mean greater
/// overlap, and identical fragments give 0. When no suffix/prefix of
/// positive length match, 0 is returned as a deliberate fallback meaning
/// "no advantageous overlap" (assembly over such an edge appends the whole
/// second fragment).
///
/// # Errors
///
/// Returns [`FormicError::FragmentLengthMismatch`] if the fragments differ
/// in length. Validated spectra are length-homogeneous, so this does not
/// occur during a run.
pub fn overlap_shift(first: &str, second: &str) -> Result<usize, FormicError> {
    if first.len() != second.len() {
        return Err(FormicError::FragmentLengthMismatch(
            first.len(),
            second.len(),
        ));
    }
    let a = first.as_bytes();
    let b = second.as_bytes();
    for shift in 0..a.len() {
        if a[shift..] == b[..a.len() - shift] {
            return Ok(shift);
        }
    }
    Ok(0)
}

/// Levenshtein distance between two strings (unit-cost substitution,
/// insertion, and deletion).
///
/// This is the sole fitness function of the search: lower is better and 0
/// means a perfect reconstruction. Rolling two-row implementation, O(n·m)
/// time and O(n) space.
#[must_use]
pub fn edit_distance(first: &str, second: &str) -> usize {
    let a = first.as_bytes();
    let b = second.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=a.len()).collect();
    let mut current = vec![0usize; a.len() + 1];

    for (j, &b_char) in b.iter().enumerate() {
        current[0] = j + 1;
        for (i, &a_char) in a.iter().enumerate() {
            let substitution = usize::from(a_char != b_char);
            current[i + 1] = (current[i] + 1)
                .min(previous[i + 1] + 1)
                .min(previous[i] + substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[a.len()]
}
