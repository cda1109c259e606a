use super::view::ElectionView;
use crate::ElectionStatus;

pub const START_LABEL: &str = "Commence Election";
pub const STARTING_LABEL: &str = "Starting Election...";

/// Guards the start control so one pending phase produces one start request.
///
/// The request is forgotten as soon as the external status leaves `Pending`,
/// so a service that falls back to `Pending` gets a usable control again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartGate {
    requested: bool,
}

impl StartGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a start request. Returns true when the caller should notify the
    /// election service.
    pub fn try_request(&mut self, status: ElectionStatus) -> bool {
        if status != ElectionStatus::Pending || self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Follow the external status. Returns true if the gate changed.
    pub fn observe(&mut self, status: ElectionStatus) -> bool {
        if status == ElectionStatus::Pending || !self.requested {
            return false;
        }
        self.requested = false;
        true
    }

    /// Record a start request made from `view`. Only a pending view accepts one.
    pub fn request(&mut self, view: &ElectionView) -> bool {
        view.status().is_some_and(|status| self.try_request(status))
    }

    /// Follow a freshly built view. A view without a recognized status is not
    /// pending either, so it clears the request too.
    pub fn follow(&mut self, view: &ElectionView) -> bool {
        match view.status() {
            Some(status) => self.observe(status),
            None => self.reset(),
        }
    }

    /// Forget any start request. Returns true if there was one.
    pub fn reset(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    pub fn is_disabled(&self, status: ElectionStatus) -> bool {
        status != ElectionStatus::Pending || self.requested
    }

    pub fn label(&self) -> &'static str {
        if self.requested {
            STARTING_LABEL
        } else {
            START_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_per_pending_phase() {
        let mut gate = StartGate::new();
        assert!(!gate.is_disabled(ElectionStatus::Pending));
        assert_eq!(gate.label(), START_LABEL);

        assert!(gate.try_request(ElectionStatus::Pending));
        assert!(!gate.try_request(ElectionStatus::Pending));
        assert!(gate.is_disabled(ElectionStatus::Pending));
        assert_eq!(gate.label(), STARTING_LABEL);
    }

    #[test]
    fn test_no_request_outside_pending() {
        let mut gate = StartGate::new();
        assert!(!gate.try_request(ElectionStatus::Running));
        assert!(!gate.try_request(ElectionStatus::Completed));
        assert!(!gate.is_requested());
        assert!(gate.is_disabled(ElectionStatus::Running));
    }

    #[test]
    fn test_reverted_status_reenables() {
        let mut gate = StartGate::new();
        gate.try_request(ElectionStatus::Pending);

        // still pending: nothing to forget
        assert!(!gate.observe(ElectionStatus::Pending));
        assert!(gate.is_requested());

        assert!(gate.observe(ElectionStatus::Running));
        assert!(!gate.is_requested());
        assert!(!gate.observe(ElectionStatus::Pending));
        assert!(!gate.is_disabled(ElectionStatus::Pending));
        assert!(gate.try_request(ElectionStatus::Pending));
    }

    #[test]
    fn test_request_from_view() {
        let mut gate = StartGate::new();
        assert!(!gate.request(&ElectionView::Running));
        assert!(!gate.request(&ElectionView::from_parts(ElectionStatus::Completed, None)));
        assert!(!gate.is_requested());

        assert!(gate.request(&ElectionView::Pending));
        assert!(!gate.request(&ElectionView::Pending));
    }

    #[test]
    fn test_follow_clears_on_unknown_status() {
        let mut gate = StartGate::new();
        gate.request(&ElectionView::Pending);
        assert!(!gate.follow(&ElectionView::Pending));
        assert!(gate.follow(&ElectionView::from_wire("aborted", None)));
        assert!(!gate.is_requested());

        gate.request(&ElectionView::Pending);
        assert!(gate.follow(&ElectionView::Running));
        assert!(gate.request(&ElectionView::Pending));
    }

    #[test]
    fn test_reset() {
        let mut gate = StartGate::new();
        assert!(!gate.reset());
        gate.try_request(ElectionStatus::Pending);
        assert!(gate.reset());
        assert_eq!(gate.label(), START_LABEL);
    }
}
