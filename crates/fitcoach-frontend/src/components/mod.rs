//! Reusable UI components for the Fitcoach frontend.

pub mod guard;
pub mod sidebar;

pub use guard::*;
pub use sidebar::*;
