use serde::Serialize;

/// Whether an authentication attempt is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}
