use metrics::{IntoLabels, Label, SharedString};

pub const VALIDATOR: &str = "validator";
pub const OUTCOME: &str = "outcome";

/// Ordered set of metric [Label]s attached to every validation counter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Labels identifying a validator, e.g. `validator=nz_bank_account`
    pub fn for_validator(validator_name: &'static str) -> Self {
        Labels::new(&[(VALIDATOR, validator_name)])
    }

    /// Copy of these labels extended with the given key-value pairs
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn outcome_is_appended_to_validator_label() {
        let labels = Labels::for_validator("nz_ird_number");
        let with_outcome = labels.clone_with_labels(&[(OUTCOME, "checksum")]).into_labels();

        assert_eq!(
            with_outcome,
            vec![
                Label::new(VALIDATOR, "nz_ird_number"),
                Label::new(OUTCOME, "checksum")
            ]
        );
        // `labels` itself is unchanged
        assert_eq!(labels.into_labels().len(), 1);
    }
}
