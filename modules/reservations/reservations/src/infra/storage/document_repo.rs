use async_trait::async_trait;
use bustation_http::{Page, PageRequest};
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repo::DocumentRepository;
use crate::domain::resource::Resource;

/// Documents of one family keyed by id.
///
/// Ids are UUIDv7 strings, so ordering by id is creation order.
pub struct InMemoryCollection<T> {
    docs: DashMap<String, T>,
}

impl<T> InMemoryCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
        }
    }
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> DocumentRepository<T> for InMemoryCollection<T> {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }

    async fn find_page<F>(&self, page: PageRequest, filter: F) -> Result<Page<T>, DomainError>
    where
        F: Fn(&T) -> bool + Send + Sync,
    {
        let mut matching: Vec<T> = self
            .docs
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by(|a, b| a.id().cmp(b.id()));

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let items = matching
            .into_iter()
            .skip(page.offset())
            .take(page.size as usize)
            .collect();
        Ok(Page::new(items, page, total))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError> {
        Ok(self.docs.get(id).map(|d| d.value().clone()))
    }

    async fn insert(&self, doc: T) -> Result<T, DomainError> {
        self.docs.insert(doc.id().to_owned(), doc.clone());
        Ok(doc)
    }

    async fn replace(&self, doc: T) -> Result<Option<T>, DomainError> {
        Ok(self.docs.get_mut(doc.id()).map(|mut slot| {
            *slot = doc.clone();
            doc
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.docs.remove(id).is_some())
    }
}
