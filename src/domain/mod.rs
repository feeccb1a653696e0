//! Domain layer - pure business logic
//!
//! This module contains business logic with no external I/O.
//! Types and functions here can be unit tested without mocking.

pub mod post;
pub mod publish;

// Re-export commonly used types
pub use post::Post;
pub use publish::{PublishPhase, PublishStep, StepResult};
