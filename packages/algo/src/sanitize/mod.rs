//! Data Sanitization
//!
//! Keeps progress entries inside the ranges the scheduler relies on.
//! Progress files are human-editable, so anything read back from disk goes
//! through here before it reaches the scheduler.

use crate::types::{ProgressEntry, DEFAULT_EASE_FACTOR, INITIAL_INTERVAL_DAYS, MAX_EASE_FACTOR, MIN_EASE_FACTOR};

/// Clamp an ease factor into `[MIN_EASE_FACTOR, MAX_EASE_FACTOR]`; NaN becomes the default
pub fn clamp_ease(ease: f64) -> f64 {
    if ease.is_nan() {
        return DEFAULT_EASE_FACTOR;
    }
    ease.clamp(MIN_EASE_FACTOR, MAX_EASE_FACTOR)
}

/// Repair an entry in place. Returns `true` if anything was changed.
pub fn sanitize_entry(entry: &mut ProgressEntry) -> bool {
    let mut changed = false;

    if entry.interval_days < INITIAL_INTERVAL_DAYS {
        entry.interval_days = INITIAL_INTERVAL_DAYS;
        changed = true;
    }

    let ease = clamp_ease(entry.ease_factor);
    if ease != entry.ease_factor {
        entry.ease_factor = ease;
        changed = true;
    }

    changed
}

/// Check whether an entry satisfies every range invariant
pub fn is_valid_entry(entry: &ProgressEntry) -> bool {
    entry.interval_days >= INITIAL_INTERVAL_DAYS
        && entry.ease_factor.is_finite()
        && (MIN_EASE_FACTOR..=MAX_EASE_FACTOR).contains(&entry.ease_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_ease() {
        assert_eq!(clamp_ease(0.5), MIN_EASE_FACTOR);
        assert_eq!(clamp_ease(7.0), MAX_EASE_FACTOR);
        assert_eq!(clamp_ease(2.2), 2.2);
        assert_eq!(clamp_ease(f64::NAN), DEFAULT_EASE_FACTOR);
        assert_eq!(clamp_ease(f64::INFINITY), MAX_EASE_FACTOR);
    }

    #[test]
    fn test_sanitize_entry_repairs() {
        let mut entry = ProgressEntry {
            interval_days: 0,
            ease_factor: 9.0,
            ..Default::default()
        };
        assert!(!is_valid_entry(&entry));
        assert!(sanitize_entry(&mut entry));
        assert_eq!(entry.interval_days, 1);
        assert_eq!(entry.ease_factor, 3.0);
        assert!(is_valid_entry(&entry));
    }

    #[test]
    fn test_sanitize_entry_leaves_valid_alone() {
        let mut entry = ProgressEntry::default();
        assert!(!sanitize_entry(&mut entry));
        assert_eq!(entry, ProgressEntry::default());
    }
}
