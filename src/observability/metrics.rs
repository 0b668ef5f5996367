use crate::error::ErrorCategory;
use crate::observability::labels::{Labels, OUTCOME};
use metrics::counter;

pub const VALIDATIONS: &str = "nz_validation.validations";
pub const MISSING_PARAMETER: &str = "nz_validation.http.missing_parameter";

const VALID: &str = "valid";

/// Records the outcome of one validation call.
///
/// The counter handle is resolved on every call instead of being cached, so
/// the recorder installed at call time (global or thread-local) receives it.
pub fn record_validation(labels: &Labels, failure: Option<ErrorCategory>) {
    let outcome = match failure {
        Some(category) => category.as_ref().to_string(),
        None => VALID.to_string(),
    };
    counter!(VALIDATIONS, labels.clone_with_labels(&[(OUTCOME, outcome)])).increment(1);
}

pub fn record_missing_parameter(labels: &Labels) {
    counter!(MISSING_PARAMETER, labels.clone()).increment(1);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::observability::labels::VALIDATOR;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn should_count_outcomes_per_label_set() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let labels = Labels::for_validator("nz_bank_account");
            record_validation(&labels, None);
            record_validation(&labels, None);
            record_validation(&labels, Some(ErrorCategory::Lookup));
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let valid_key = Key::from_parts(
            VALIDATIONS,
            vec![
                Label::new(VALIDATOR, "nz_bank_account"),
                Label::new(OUTCOME, "valid"),
            ],
        );
        assert_eq!(
            snapshot.get(&CompositeKey::new(Counter, valid_key)),
            Some(&(None, None, DebugValue::Counter(2)))
        );

        let lookup_key = Key::from_parts(
            VALIDATIONS,
            vec![
                Label::new(VALIDATOR, "nz_bank_account"),
                Label::new(OUTCOME, "lookup"),
            ],
        );
        assert_eq!(
            snapshot.get(&CompositeKey::new(Counter, lookup_key)),
            Some(&(None, None, DebugValue::Counter(1)))
        );
    }
}
