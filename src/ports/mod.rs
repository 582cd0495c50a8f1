//! Port traits defining external boundaries.
//!
//! The only boundary the runner crosses is spawning the tool. Implementations
//! live in `src/adapters/`.

pub mod process;

pub use process::{ProcessLauncher, ProcessOutput};
