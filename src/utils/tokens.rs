//! Token estimation

/// Estimate tokens from a byte size (bytes / 4, never below one).
pub fn estimate_tokens_from_size(size_bytes: u64) -> u64 {
    (size_bytes / 4).max(1)
}
