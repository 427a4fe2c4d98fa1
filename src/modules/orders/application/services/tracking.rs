//! Human-readable tracking codes: `BT-YYYY-NNNNN`.
//!
//! The five-digit suffix is not collision-free, so callers must check the
//! store and regenerate on a hit; the unique index on tracking_no is the
//! final backstop.

use chrono::{Datelike, Utc};
use rand::Rng;

pub const TRACKING_PREFIX: &str = "BT";

pub fn generate_tracking_no() -> String {
    let year = Utc::now().year();
    let suffix = rand::thread_rng().gen_range(10_000..100_000);
    format!("{}-{}-{}", TRACKING_PREFIX, year, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_prefix_year_and_five_digits() {
        let code = generate_tracking_no();
        let parts: Vec<&str> = code.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "BT");
        assert_eq!(parts[1], Utc::now().year().to_string());
        assert_eq!(parts[2].len(), 5);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
        // Leading digit is never zero, so the suffix stays five digits wide.
        assert!(!parts[2].starts_with('0'));
    }
}
