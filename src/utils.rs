//! Utility functions for common operations.

use std::time::Duration;

/// Whole seconds left, rounded up (2.1s shows as "3")
pub fn seconds_left(remaining: Duration) -> u64 {
    let secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_left_zero() {
        assert_eq!(seconds_left(Duration::ZERO), 0);
    }

    #[test]
    fn test_seconds_left_whole() {
        assert_eq!(seconds_left(Duration::from_secs(3)), 3);
    }

    #[test]
    fn test_seconds_left_rounds_up() {
        assert_eq!(seconds_left(Duration::from_millis(2100)), 3);
        assert_eq!(seconds_left(Duration::from_millis(1)), 1);
    }
}
