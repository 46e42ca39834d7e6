//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity, Orderable};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities in display order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Extension for collections whose display order is admin-controlled.
///
/// `reorder` rewrites the whole visible order in one call: every listed
/// entity's order index becomes its position in `ids`. Rows not listed are
/// untouched. The full rewrite avoids a half-applied swap if the call is
/// interrupted; concurrent rewrites are last-write-wins.
#[async_trait]
pub trait ReorderableRepository<T: Orderable>: Repository<T> {
    /// Persist a complete new display order
    async fn reorder(&self, ids: &[T::Id]) -> DomainResult<()>;
}
