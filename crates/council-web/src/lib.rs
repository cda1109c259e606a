pub mod components;

pub use components::election::Election;
