//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, SlackWebhookAdapter};
pub use test_dependencies::{MockMessageDelivery, TestDependencies};
pub use traits::*;
