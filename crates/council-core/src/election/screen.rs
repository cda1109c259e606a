//! What an election looks like, independent of where it is drawn.
//!
//! The web component and the terminal both render a [`Screen`]; the copy
//! lives here so the two never drift apart.

use std::fmt;

use serde::Serialize;

use super::gate::StartGate;
use super::view::ElectionView;
use crate::ElectionStatus;

pub const PENDING_TITLE: &str = "Council Election Required";
pub const PENDING_LINES: [&str; 2] = [
    "Before the council can convene, a Chairman must be elected.",
    "The models will present their manifestos and vote for a leader.",
];
pub const RUNNING_TITLE: &str = "Election in Progress...";
pub const RUNNING_CAPTION: &str = "Candidates are presenting manifestos and casting votes.";
pub const RESULTS_TITLE: &str = "Election Complete";
pub const RESULTS_HEADLINE: &str = "New Chairman Elected:";
pub const MANIFESTOS_HEADING: &str = "Candidate Manifestos";
pub const VOTES_HEADING: &str = "Voting Record";
pub const CLOSING_LINE: &str = "The Council is now ready to serve.";
pub const PROCEED_LABEL: &str = "Proceed to Council ➜";
pub const VOTE_ARROW: &str = "➜";

/// A user intent the election view forwards to its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    StartElection,
    Proceed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub intent: Intent,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestoCard {
    pub model: String,
    pub manifesto: String,
    pub is_winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteLine {
    pub voter: String,
    pub vote_for: String,
}

impl fmt::Display for VoteLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.voter, VOTE_ARROW, self.vote_for)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    CallToAction {
        title: &'static str,
        lines: Vec<&'static str>,
        start: Button,
    },
    Progress {
        title: &'static str,
        caption: &'static str,
    },
    Results {
        title: &'static str,
        headline: &'static str,
        winner: String,
        manifestos: Vec<ManifestoCard>,
        votes: Vec<VoteLine>,
        closing: &'static str,
        proceed: Button,
    },
    Nothing,
}

impl Screen {
    pub fn build(view: &ElectionView, gate: &StartGate) -> Self {
        match view {
            ElectionView::Pending => Screen::CallToAction {
                title: PENDING_TITLE,
                lines: PENDING_LINES.to_vec(),
                start: Button {
                    intent: Intent::StartElection,
                    label: gate.label(),
                    enabled: !gate.is_disabled(ElectionStatus::Pending),
                },
            },
            ElectionView::Running => Screen::Progress {
                title: RUNNING_TITLE,
                caption: RUNNING_CAPTION,
            },
            ElectionView::Completed(results) => Screen::Results {
                title: RESULTS_TITLE,
                headline: RESULTS_HEADLINE,
                winner: results.winner.clone(),
                manifestos: results
                    .manifestos
                    .iter()
                    .map(|m| ManifestoCard {
                        model: m.model.clone(),
                        manifesto: m.manifesto.clone(),
                        is_winner: results.is_winner(m),
                    })
                    .collect(),
                votes: results
                    .votes
                    .iter()
                    .map(|v| VoteLine {
                        voter: v.voter.clone(),
                        vote_for: v.vote_for.clone(),
                    })
                    .collect(),
                closing: CLOSING_LINE,
                proceed: Button {
                    intent: Intent::Proceed,
                    label: PROCEED_LABEL,
                    enabled: true,
                },
            },
            ElectionView::Empty(_) => Screen::Nothing,
        }
    }

    /// Interactive controls on this screen.
    pub fn buttons(&self) -> Vec<&Button> {
        match self {
            Screen::CallToAction { start, .. } => vec![start],
            Screen::Results { proceed, .. } => vec![proceed],
            Screen::Progress { .. } | Screen::Nothing => Vec::new(),
        }
    }

    pub fn button(&self, intent: Intent) -> Option<&Button> {
        self.buttons().into_iter().find(|b| b.intent == intent)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Screen::Nothing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::election::view::EmptyReason;
    use crate::ElectionResults;

    #[test]
    fn test_pending_screen_has_one_enabled_start() {
        let screen = Screen::build(&ElectionView::Pending, &StartGate::new());
        let buttons = screen.buttons();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].intent, Intent::StartElection);
        assert_eq!(buttons[0].label, "Commence Election");
        assert!(buttons[0].enabled);
    }

    #[test]
    fn test_pending_screen_after_request() {
        let mut gate = StartGate::new();
        gate.try_request(ElectionStatus::Pending);
        let screen = Screen::build(&ElectionView::Pending, &gate);
        let start = screen.button(Intent::StartElection).unwrap();
        assert!(!start.enabled);
        assert_eq!(start.label, "Starting Election...");
    }

    #[test]
    fn test_running_screen_has_no_controls() {
        let screen = Screen::build(&ElectionView::Running, &StartGate::new());
        assert!(screen.buttons().is_empty());
        assert!(matches!(screen, Screen::Progress { .. }));
    }

    #[test]
    fn test_results_screen_with_empty_lists() {
        let view = ElectionView::Completed(ElectionResults::new("Solo"));
        let screen = Screen::build(&view, &StartGate::new());
        let Screen::Results { winner, manifestos, votes, proceed, .. } = &screen else {
            panic!("expected results screen");
        };
        assert_eq!(winner, "Solo");
        assert!(manifestos.is_empty());
        assert!(votes.is_empty());
        assert!(proceed.enabled);
        assert_eq!(proceed.label, PROCEED_LABEL);
    }

    #[test]
    fn test_empty_view_is_blank() {
        for reason in [EmptyReason::MissingResults, EmptyReason::UnknownStatus("x".into())] {
            let screen = Screen::build(&ElectionView::Empty(reason), &StartGate::new());
            assert!(screen.is_blank());
            assert!(screen.buttons().is_empty());
        }
    }

    #[test]
    fn test_vote_line_display() {
        let line = VoteLine {
            voter: "Claude-Y".into(),
            vote_for: "GPT-X".into(),
        };
        assert_eq!(line.to_string(), "Claude-Y ➜ GPT-X");
    }

    #[test]
    fn test_screen_serializes_tagged() {
        let screen = Screen::build(&ElectionView::Running, &StartGate::new());
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["screen"], "progress");
        assert_eq!(json["title"], RUNNING_TITLE);

        let json = serde_json::to_value(Screen::Nothing).unwrap();
        assert_eq!(json["screen"], "nothing");
    }
}
