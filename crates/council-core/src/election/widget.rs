use tracing::{debug, info, warn};

use super::gate::StartGate;
use super::screen::{Intent, Screen};
use super::view::{ElectionView, EmptyReason};
use crate::{ElectionResults, ElectionStatus};

/// Receives the two notifications the election view emits.
pub trait ElectionHandler {
    fn start_election(&mut self);
    fn proceed(&mut self);
}

/// Adapts a pair of closures into an [`ElectionHandler`].
pub struct Callbacks<S, P> {
    on_start_election: S,
    on_proceed: P,
}

impl<S, P> Callbacks<S, P>
where
    S: FnMut(),
    P: FnMut(),
{
    pub fn new(on_start_election: S, on_proceed: P) -> Self {
        Self {
            on_start_election,
            on_proceed,
        }
    }
}

impl<S, P> ElectionHandler for Callbacks<S, P>
where
    S: FnMut(),
    P: FnMut(),
{
    fn start_election(&mut self) {
        (self.on_start_election)()
    }

    fn proceed(&mut self) {
        (self.on_proceed)()
    }
}

/// One instance of the election view: reads status and results pushed from
/// outside, and forwards user intents to its handler.
pub struct ElectionWidget<H> {
    view: ElectionView,
    gate: StartGate,
    handler: H,
}

impl<H: ElectionHandler> ElectionWidget<H> {
    pub fn new(handler: H) -> Self {
        Self {
            view: ElectionView::Pending,
            gate: StartGate::new(),
            handler,
        }
    }

    pub fn update(&mut self, status: ElectionStatus, results: Option<ElectionResults>) {
        self.apply(ElectionView::from_parts(status, results));
    }

    pub fn update_wire(&mut self, status: &str, results: Option<ElectionResults>) {
        self.apply(ElectionView::from_wire(status, results));
    }

    fn apply(&mut self, view: ElectionView) {
        match &view {
            ElectionView::Empty(EmptyReason::MissingResults) => {
                warn!("Election completed without results; rendering nothing")
            }
            ElectionView::Empty(EmptyReason::UnknownStatus(raw)) => {
                warn!("Unknown election status {:?}; rendering nothing", raw)
            }
            _ => {}
        }

        if self.gate.follow(&view) {
            debug!("Start request cleared on status {}", status_name(&view));
        }

        if view.status() != self.view.status() {
            info!(
                "Election status {} -> {}",
                status_name(&self.view),
                status_name(&view)
            );
        }
        self.view = view;
    }

    pub fn view(&self) -> &ElectionView {
        &self.view
    }

    pub fn gate(&self) -> &StartGate {
        &self.gate
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn screen(&self) -> Screen {
        Screen::build(&self.view, &self.gate)
    }

    /// Forward a user intent. Returns true if the handler was notified.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match (intent, &self.view) {
            (Intent::StartElection, ElectionView::Pending) => {
                if !self.gate.request(&self.view) {
                    debug!("Start already requested; ignoring");
                    return false;
                }
                info!("Start election requested");
                self.handler.start_election();
                true
            }
            (Intent::Proceed, ElectionView::Completed(results)) => {
                info!("Proceeding with chairman {}", results.winner);
                self.handler.proceed();
                true
            }
            (intent, view) => {
                debug!("Ignoring {:?} while {}", intent, status_name(view));
                false
            }
        }
    }
}

fn status_name(view: &ElectionView) -> &str {
    match view {
        ElectionView::Empty(EmptyReason::UnknownStatus(raw)) => raw.as_str(),
        other => other.status().map(|s| s.as_str()).unwrap_or("unknown"),
    }
}
