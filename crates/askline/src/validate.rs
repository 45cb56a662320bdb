//! Range validation shared by the prompt types.
//!
//! A [`Bounds`] pairs an optional lower and upper limit; both are inclusive.
//! When a value falls outside, [`Bounds::check`] returns the styled complaint
//! the prompt should print before asking again. The complaint names whichever
//! limits are configured, not just the one that tripped.

use std::fmt;

use crate::style::{bad_input, error, stress};

/// What a bound constrains, as it appears in complaints.
#[derive(Clone, Copy)]
pub(crate) enum Subject {
    Value,
    Length,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Value => write!(f, "value"),
            Subject::Length => write!(f, "length"),
        }
    }
}

/// Inclusive lower and upper limits, either of which may be absent.
pub(crate) struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Bounds { min: None, max: None }
    }
}

impl<T: PartialOrd + fmt::Display> Bounds<T> {
    /// Accept `value` or return the complaint to print.
    pub fn check(&self, value: &T, subject: Subject) -> Result<(), String> {
        let below = self.min.as_ref().is_some_and(|min| value < min);
        let above = self.max.as_ref().is_some_and(|max| value > max);
        if below || above {
            Err(self.complaint(subject))
        } else {
            Ok(())
        }
    }

    fn complaint(&self, subject: Subject) -> String {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => format!(
                "{} {} {} {}",
                error(format_args!("Expected {subject} between")),
                stress(min),
                error("and"),
                stress(max),
            ),
            (Some(min), None) => format!(
                "{} {}",
                error(format_args!("Expected {subject} greater than")),
                stress(min),
            ),
            (None, Some(max)) => format!(
                "{} {}",
                error(format_args!("Expected {subject} less than")),
                stress(max),
            ),
            (None, None) => String::new(),
        }
    }
}

/// The notice printed when a line cannot be parsed at all. Echoes the
/// offending text when there is any.
pub(crate) fn invalid_input(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => format!("{}: {}", error("Invalid input"), bad_input(raw)),
        None => error("Invalid input"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn plain(message: &str) -> String {
        strip_ansi_codes(message).to_string()
    }

    #[test]
    fn test_unbounded_accepts_everything() {
        let bounds: Bounds<i64> = Bounds::default();
        assert!(bounds.check(&i64::MIN, Subject::Value).is_ok());
        assert!(bounds.check(&i64::MAX, Subject::Value).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds { min: Some(1), max: Some(5) };
        assert!(bounds.check(&1, Subject::Value).is_ok());
        assert!(bounds.check(&5, Subject::Value).is_ok());
        assert!(bounds.check(&3, Subject::Value).is_ok());
    }

    #[test]
    fn test_both_limits_named_in_complaint() {
        let bounds = Bounds { min: Some(1), max: Some(5) };
        let complaint = bounds.check(&0, Subject::Value).unwrap_err();
        assert_eq!(plain(&complaint), "Expected value between 1 and 5");
        let complaint = bounds.check(&9, Subject::Value).unwrap_err();
        assert_eq!(plain(&complaint), "Expected value between 1 and 5");
    }

    #[test]
    fn test_single_limit_complaints() {
        let floor = Bounds { min: Some(0.5), max: None };
        let complaint = floor.check(&0.25, Subject::Value).unwrap_err();
        assert_eq!(plain(&complaint), "Expected value greater than 0.5");

        let ceiling = Bounds { min: None, max: Some(6) };
        let complaint = ceiling.check(&7, Subject::Length).unwrap_err();
        assert_eq!(plain(&complaint), "Expected length less than 6");
    }

    #[test]
    fn test_invalid_input_notice() {
        assert_eq!(plain(&invalid_input(None)), "Invalid input");
        assert_eq!(plain(&invalid_input(Some("ab3"))), "Invalid input: ab3");
    }
}
