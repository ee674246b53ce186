//! Field validation for entry drafts.
//!
//! Pure and total: every `(name, price)` pair maps to exactly one
//! `FieldErrors` value. Name uniqueness is deliberately not checked here;
//! colliding names are resolved by the store's upsert merge.

/// Per-field validation flags for a draft.
///
/// These are ordinary state, not errors: the controller surfaces them to the
/// renderer so the open dialog can mark fields inline. Nothing in the core
/// ever raises them as an `Err`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Name is empty after trimming whitespace.
    pub name_invalid: bool,
    /// Price is not a finite number greater than zero.
    pub price_invalid: bool,
}

impl FieldErrors {
    /// True when no field is flagged.
    pub fn is_clean(self) -> bool {
        !self.name_invalid && !self.price_invalid
    }
}

/// Validates a candidate entry.
pub fn validate(name: &str, price: f64) -> FieldErrors {
    FieldErrors {
        name_invalid: name.trim().is_empty(),
        price_invalid: !(price.is_finite() && price > 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_name_and_positive_price() {
        assert!(validate("Shirt", 10.0).is_clean());
        assert!(validate("  Shirt  ", 0.01).is_clean());
    }

    #[test]
    fn flags_empty_or_whitespace_name() {
        assert!(validate("", 10.0).name_invalid);
        assert!(validate("   \t ", 10.0).name_invalid);
        assert!(!validate("x", 10.0).name_invalid);
    }

    #[test]
    fn flags_non_positive_price() {
        assert!(validate("Shirt", 0.0).price_invalid);
        assert!(validate("Shirt", -1.5).price_invalid);
        assert!(!validate("Shirt", f64::MIN_POSITIVE).price_invalid);
    }

    #[test]
    fn flags_non_finite_price() {
        assert!(validate("Shirt", f64::NAN).price_invalid);
        assert!(validate("Shirt", f64::INFINITY).price_invalid);
        assert!(validate("Shirt", f64::NEG_INFINITY).price_invalid);
    }

    #[test]
    fn both_fields_can_fail_at_once() {
        let errors = validate(" ", f64::NAN);
        assert!(errors.name_invalid);
        assert!(errors.price_invalid);
        assert!(!errors.is_clean());
    }
}
