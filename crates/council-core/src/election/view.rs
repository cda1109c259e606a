use crate::{CouncilError, ElectionResults, ElectionStatus, Result};

/// Why an election renders nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// The service reported `completed` without a results record.
    MissingResults,
    /// The status value was not one the view knows.
    UnknownStatus(String),
}

/// The one rendering an election is in, decided once from status and results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ElectionView {
    #[default]
    Pending,
    Running,
    Completed(ElectionResults),
    Empty(EmptyReason),
}

impl ElectionView {
    /// Results are only looked at when the status is `Completed`.
    pub fn from_parts(status: ElectionStatus, results: Option<ElectionResults>) -> Self {
        match (status, results) {
            (ElectionStatus::Pending, _) => ElectionView::Pending,
            (ElectionStatus::Running, _) => ElectionView::Running,
            (ElectionStatus::Completed, Some(results)) => ElectionView::Completed(results),
            (ElectionStatus::Completed, None) => ElectionView::Empty(EmptyReason::MissingResults),
        }
    }

    /// Build from the raw status string as it arrives from the service.
    pub fn from_wire(status: &str, results: Option<ElectionResults>) -> Self {
        match status.parse::<ElectionStatus>() {
            Ok(status) => Self::from_parts(status, results),
            Err(_) => ElectionView::Empty(EmptyReason::UnknownStatus(status.to_string())),
        }
    }

    /// Like [`ElectionView::from_parts`], but a completed election without
    /// results is an error instead of an empty view.
    pub fn try_from_parts(status: ElectionStatus, results: Option<ElectionResults>) -> Result<Self> {
        match Self::from_parts(status, results) {
            ElectionView::Empty(EmptyReason::MissingResults) => Err(CouncilError::MissingResults),
            view => Ok(view),
        }
    }

    pub fn status(&self) -> Option<ElectionStatus> {
        match self {
            ElectionView::Pending => Some(ElectionStatus::Pending),
            ElectionView::Running => Some(ElectionStatus::Running),
            ElectionView::Completed(_) => Some(ElectionStatus::Completed),
            ElectionView::Empty(EmptyReason::MissingResults) => Some(ElectionStatus::Completed),
            ElectionView::Empty(EmptyReason::UnknownStatus(_)) => None,
        }
    }

    pub fn results(&self) -> Option<&ElectionResults> {
        match self {
            ElectionView::Completed(results) => Some(results),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ElectionView::Empty(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> ElectionResults {
        ElectionResults::new("GPT-X").with_manifesto("GPT-X", "Efficiency first")
    }

    #[test]
    fn test_results_ignored_outside_completed() {
        assert_eq!(
            ElectionView::from_parts(ElectionStatus::Pending, Some(results())),
            ElectionView::Pending
        );
        assert_eq!(
            ElectionView::from_parts(ElectionStatus::Running, Some(results())),
            ElectionView::Running
        );
    }

    #[test]
    fn test_completed_with_results() {
        let view = ElectionView::from_parts(ElectionStatus::Completed, Some(results()));
        assert_eq!(view.results(), Some(&results()));
        assert_eq!(view.status(), Some(ElectionStatus::Completed));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_completed_without_results_is_empty() {
        let view = ElectionView::from_parts(ElectionStatus::Completed, None);
        assert_eq!(view, ElectionView::Empty(EmptyReason::MissingResults));
        assert!(view.is_empty());
        assert_eq!(view.status(), Some(ElectionStatus::Completed));
    }

    #[test]
    fn test_unknown_wire_status_is_empty() {
        let view = ElectionView::from_wire("cancelled", Some(results()));
        assert_eq!(view, ElectionView::Empty(EmptyReason::UnknownStatus("cancelled".into())));
        assert_eq!(view.status(), None);

        assert_eq!(ElectionView::from_wire("running", None), ElectionView::Running);
    }

    #[test]
    fn test_strict_construction() {
        let err = ElectionView::try_from_parts(ElectionStatus::Completed, None).unwrap_err();
        assert!(matches!(err, CouncilError::MissingResults));
        assert!(ElectionView::try_from_parts(ElectionStatus::Pending, None).is_ok());
    }
}
