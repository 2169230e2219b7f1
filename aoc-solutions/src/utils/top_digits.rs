//! Lexicographically largest fixed-length subsequence, via a monotonic stack.

use super::AlgoError;

/// The largest subsequence of `sequence` with exactly `len` elements, in order.
///
/// A smaller element on top of the stack is popped for a larger incoming one
/// while removals remain; `sequence.len() - len` removals in total keep the
/// result long enough. Linear in `sequence.len()`.
pub fn max_subsequence<T: Ord + Copy>(sequence: &[T], len: usize) -> Result<Vec<T>, AlgoError> {
    let Some(mut removals) = sequence.len().checked_sub(len) else {
        return Err(AlgoError::InvalidInput(format!(
            "cannot select {} elements from {}",
            len,
            sequence.len()
        )));
    };

    let mut stack: Vec<T> = Vec::with_capacity(sequence.len());
    for &item in sequence {
        while removals > 0 && stack.last().is_some_and(|&top| top < item) {
            stack.pop();
            removals -= 1;
        }
        stack.push(item);
    }
    // leftover removals come off the non-increasing tail
    stack.truncate(len);
    Ok(stack)
}

/// Decimal value of a digit sequence, most significant first.
///
/// Fails on a non-digit or when the value does not fit in `u64`.
pub fn digits_value(digits: &[u8]) -> Result<u64, AlgoError> {
    digits.iter().try_fold(0u64, |acc, &d| {
        if d > 9 {
            return Err(AlgoError::InvalidInput(format!("{d} is not a decimal digit")));
        }
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(d)))
            .ok_or_else(|| AlgoError::Overflow(format!("{} digits overflow u64", digits.len())))
    })
}
