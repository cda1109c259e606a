pub mod gate;
pub mod results;
pub mod screen;
pub mod status;
pub mod view;
pub mod widget;

pub use gate::StartGate;
pub use results::{ElectionResults, Manifesto, Vote};
pub use screen::{Button, Intent, ManifestoCard, Screen, VoteLine};
pub use status::ElectionStatus;
pub use view::{ElectionView, EmptyReason};
pub use widget::{Callbacks, ElectionHandler, ElectionWidget};
