//! Domain layer of the Jalon dashboard.
//!
//! Holds everything that never touches the network: the error type, the
//! schedule duration calculator, the static project content, the
//! conversation transcript model, and credential resolution.

pub mod credentials;
pub mod error;
pub mod project;
pub mod schedule;
pub mod session;

// Re-export common error type
pub use error::{JalonError, Result};
