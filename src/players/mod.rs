//! Joined participants.
//!
//! The [`PlayerRegistry`] owns every [`Player`](crate::core::Player) for the
//! session and resolves display names to stable ids.

mod registry;

pub use registry::PlayerRegistry;
