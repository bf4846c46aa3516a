use async_trait::async_trait;
use bustation_http::{Page, PageRequest};

use super::error::DomainError;
use super::resource::Resource;

/// Storage contract for one document family.
#[async_trait]
pub trait DocumentRepository<T: Resource>: Send + Sync {
    /// Allocate an id for a new document.
    fn next_id(&self) -> String;

    /// Documents matching `filter`, in creation order, windowed by `page`.
    async fn find_page<F>(&self, page: PageRequest, filter: F) -> Result<Page<T>, DomainError>
    where
        F: Fn(&T) -> bool + Send + Sync;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError>;

    async fn insert(&self, doc: T) -> Result<T, DomainError>;

    /// Replace an existing document. `None` if the id is unknown.
    async fn replace(&self, doc: T) -> Result<Option<T>, DomainError>;

    /// `false` if the id is unknown.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
