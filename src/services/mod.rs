//! Services layer - orchestration logic
//!
//! This module coordinates between domain logic and infrastructure.
//! Services use infrastructure adapters to perform I/O operations.

pub mod publish_service;

// Re-export commonly used types
pub use publish_service::PublishService;
