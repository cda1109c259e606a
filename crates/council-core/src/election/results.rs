use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A candidate's statement to the council.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifesto {
    pub model: String,
    pub manifesto: String,
}

/// One ballot. `vote_for` is shown verbatim, even if it names no candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub voter: String,
    pub vote_for: String,
}

/// The record the election service publishes once it has picked a winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionResults {
    pub winner: String,
    #[serde(default)]
    pub manifestos: Vec<Manifesto>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    /// Tally as reported by the service. Carried through, never recomputed here.
    #[serde(default)]
    pub vote_counts: BTreeMap<String, u32>,
}

impl ElectionResults {
    pub fn new(winner: impl Into<String>) -> Self {
        Self {
            winner: winner.into(),
            manifestos: Vec::new(),
            votes: Vec::new(),
            vote_counts: BTreeMap::new(),
        }
    }

    pub fn with_manifesto(mut self, model: impl Into<String>, manifesto: impl Into<String>) -> Self {
        self.manifestos.push(Manifesto {
            model: model.into(),
            manifesto: manifesto.into(),
        });
        self
    }

    pub fn with_vote(mut self, voter: impl Into<String>, vote_for: impl Into<String>) -> Self {
        self.votes.push(Vote {
            voter: voter.into(),
            vote_for: vote_for.into(),
        });
        self
    }

    /// Exact, case-sensitive match against the winner. No trimming.
    pub fn is_winner(&self, manifesto: &Manifesto) -> bool {
        manifesto.model == self.winner
    }

    /// Whether any manifesto card will carry the winner highlight.
    pub fn winner_has_manifesto(&self) -> bool {
        self.manifestos.iter().any(|m| self.is_winner(m))
    }

    /// Trim surrounding whitespace from every candidate identifier.
    ///
    /// Meant for the boundary where results enter the process; the view keeps
    /// comparing identifiers exactly as given.
    pub fn normalized(&self) -> Self {
        let id = |s: &str| s.trim().to_string();
        Self {
            winner: id(&self.winner),
            manifestos: self
                .manifestos
                .iter()
                .map(|m| Manifesto {
                    model: id(&m.model),
                    manifesto: m.manifesto.clone(),
                })
                .collect(),
            votes: self
                .votes
                .iter()
                .map(|v| Vote {
                    voter: id(&v.voter),
                    vote_for: id(&v.vote_for),
                })
                .collect(),
            vote_counts: self
                .vote_counts
                .iter()
                .fold(BTreeMap::new(), |mut acc, (k, v)| {
                    let count = acc.entry(id(k)).or_insert(0u32);
                    *count = count.saturating_add(*v);
                    acc
                }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
