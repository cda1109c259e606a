// Domain modules
pub mod config;
pub mod election;
pub mod error;

pub use config::{CouncilConfig, DisplayConfig, ResultsConfig};
pub use election::{
    Button, Callbacks, ElectionHandler, ElectionResults, ElectionStatus, ElectionView,
    ElectionWidget, EmptyReason, Intent, Manifesto, ManifestoCard, Screen, StartGate, Vote,
    VoteLine,
};
pub use error::{CouncilError, Result};
