//! Yes/no confirmation normalization

use tracing::debug;

use crate::validators::ValidationOutcome;
use crate::value_objects::RawSlotValue;

/// Phrases read as "yes"
pub const AFFIRMATIVE_PHRASES: &[&str] = &[
    "true",
    "yes",
    "y",
    "yeah",
    "yep",
    "yup",
    "sure",
    "ok",
    "okay",
    "correct",
    "confirm",
    "confirmed",
    "affirmative",
    "absolutely",
    "definitely",
    "of course",
    "that's right",
    "sounds good",
];

/// Phrases read as "no"
pub const NEGATIVE_PHRASES: &[&str] = &[
    "false",
    "no",
    "n",
    "nope",
    "nah",
    "negative",
    "cancel",
    "incorrect",
    "wrong",
    "not really",
    "no thanks",
    "never mind",
];

/// Normalize a confirmation answer to `"true"` or `"false"`
///
/// Only exact phrase matches count. Anything else is rejected without a
/// message so the host simply asks again.
pub fn validate_confirmation(raw: &RawSlotValue) -> ValidationOutcome {
    let Some(answer) = raw.normalized_text() else {
        return ValidationOutcome::Defer;
    };

    if AFFIRMATIVE_PHRASES.contains(&answer.as_str()) {
        ValidationOutcome::Accept("true".to_string())
    } else if NEGATIVE_PHRASES.contains(&answer.as_str()) {
        ValidationOutcome::Accept("false".to_string())
    } else {
        debug!(answer = %answer, "confirmation not understood");
        ValidationOutcome::Reject(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phrase_sets_are_disjoint() {
        for phrase in AFFIRMATIVE_PHRASES {
            assert!(!NEGATIVE_PHRASES.contains(phrase), "{phrase} in both sets");
        }
    }

    #[test]
    fn test_json_booleans_normalize() {
        assert_eq!(
            validate_confirmation(&RawSlotValue::from(json!(true))),
            ValidationOutcome::Accept("true".to_string())
        );
        assert_eq!(
            validate_confirmation(&RawSlotValue::from(json!(false))),
            ValidationOutcome::Accept("false".to_string())
        );
    }

    #[test]
    fn test_ambiguous_answer_is_rejected_silently() {
        assert_eq!(
            validate_confirmation(&RawSlotValue::from("yes and no")),
            ValidationOutcome::Reject(None)
        );
    }
}
