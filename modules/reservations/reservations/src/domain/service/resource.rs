use std::marker::PhantomData;
use std::sync::Arc;

use bustation_http::{Page, PageRequest};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repo::DocumentRepository;
use crate::domain::resource::Resource;
use crate::domain::validation::Validate;

/// CRUD over one document family.
pub struct ResourceService<T: Resource, R: DocumentRepository<T>> {
    repo: Arc<R>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource, R: DocumentRepository<T>> ResourceService<T, R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _resource: PhantomData,
        }
    }

    #[instrument(skip_all, fields(kind = T::KIND, page = page.page, size = page.size))]
    pub async fn list(&self, page: PageRequest) -> Result<Page<T>, DomainError> {
        self.list_where(page, |_| true).await
    }

    pub(crate) async fn list_where<F>(
        &self,
        page: PageRequest,
        filter: F,
    ) -> Result<Page<T>, DomainError>
    where
        F: Fn(&T) -> bool + Send + Sync,
    {
        let page = self.repo.find_page(page, filter).await?;
        debug!(returned = page.items.len(), total = page.total_items, "listed documents");
        Ok(page)
    }

    #[instrument(skip_all, fields(kind = T::KIND, id = %id))]
    pub async fn get(&self, id: &str) -> Result<T, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    #[instrument(skip_all, fields(kind = T::KIND))]
    pub async fn create(&self, draft: T::Draft) -> Result<T, DomainError> {
        self.create_at(draft, OffsetDateTime::now_utc()).await
    }

    pub(crate) async fn create_at(
        &self,
        draft: T::Draft,
        now: OffsetDateTime,
    ) -> Result<T, DomainError> {
        draft.validate(now)?;
        let doc = T::from_draft(self.repo.next_id(), draft);
        let doc = self.repo.insert(doc).await?;
        info!(id = %doc.id(), "document created");
        Ok(doc)
    }

    /// Full replacement of an existing document.
    #[instrument(skip_all, fields(kind = T::KIND, id = %id))]
    pub async fn update(&self, id: &str, draft: T::Draft) -> Result<T, DomainError> {
        let now = OffsetDateTime::now_utc();
        draft.validate(now)?;

        let doc = T::from_draft(id.to_owned(), draft);
        let doc = self
            .repo
            .replace(doc)
            .await?
            .ok_or_else(|| DomainError::not_found(T::KIND, id))?;
        info!("document replaced");
        Ok(doc)
    }

    #[instrument(skip_all, fields(kind = T::KIND, id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            info!("document deleted");
            Ok(())
        } else {
            Err(DomainError::not_found(T::KIND, id))
        }
    }
}
