//! Tokenisation and sliding token windows

use crate::error::{ConcordError, Result};

/// Split text on runs of whitespace
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Round an odd window up to the next even size.
///
/// A window of zero cannot hold a center token and is rejected.
pub fn normalize_window(window: usize) -> Result<usize> {
    let normalized = if window % 2 == 1 {
        window.checked_add(1).ok_or_else(|| {
            ConcordError::InvalidArgument(format!("window size {} is too large", window))
        })?
    } else {
        window
    };

    if normalized == 0 {
        return Err(ConcordError::InvalidArgument(
            "window size must be positive".to_string(),
        ));
    }

    Ok(normalized)
}

/// Every contiguous run of `window` tokens, stride 1.
///
/// Yields nothing when there are fewer than `window` tokens. `window` must be
/// non-zero.
pub fn ngrams<'a, 'b>(tokens: &'a [&'b str], window: usize) -> std::slice::Windows<'a, &'b str> {
    tokens.windows(window)
}

/// Number of n-grams a token sequence of length `n` produces
pub fn candidate_count(n: usize, window: usize) -> usize {
    if window == 0 || n < window {
        0
    } else {
        n - window + 1
    }
}
