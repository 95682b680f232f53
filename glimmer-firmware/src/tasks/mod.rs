//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod cycle;
pub mod refresh;

pub use cycle::cycle_task;
pub use refresh::{refresh_task, Matrix};
