// Recommendation Application Layer
// Query handlers in the CQRS style used across modules

pub mod queries;

pub use queries::*;

use async_trait::async_trait;

/// Query handler trait
///
/// Read-only operations. Recommendation queries always produce an answer, so
/// there is no error channel.
#[async_trait]
pub trait QueryHandler<Q, R>: Send + Sync
where
    Q: Send + Sync,
{
    async fn handle(&self, query: Q) -> R;
}
