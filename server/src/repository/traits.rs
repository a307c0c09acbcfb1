//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Lookup by primary key
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;
}

/// Repositories whose rows belong to a single user.
///
/// Lookups never return another user's rows.
#[async_trait]
pub trait UserScopedRepository<T: Entity>: Send + Sync {
    /// Newest first, at most `limit` rows when given
    async fn list_for_user(&self, user_id: u32, limit: Option<u32>) -> DomainResult<Vec<T>>;
}
