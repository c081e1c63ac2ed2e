use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::page::{Page, PageInput, PageSummary, PAGE_ENTITY};
use crate::types::DbId;

/// Pages in insertion order plus the id counter.
#[derive(Debug, Default)]
struct PageCollection {
    pages: Vec<Page>,
    /// Last id handed out. Never decreases, so ids are not reused after delete.
    last_id: DbId,
}

impl PageCollection {
    fn position(&self, id: DbId) -> Option<usize> {
        self.pages.iter().position(|page| page.id == id)
    }
}

/// In-memory owner of all pages.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Reads share the lock, writes hold it
/// exclusively, and every write does its lookup and mutation under a single
/// guard.
#[derive(Debug, Default)]
pub struct PageStore {
    inner: RwLock<PageCollection>,
}

impl PageStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summaries of every page, in collection order.
    pub async fn list_summaries(&self) -> Vec<PageSummary> {
        self.inner
            .read()
            .await
            .pages
            .iter()
            .map(PageSummary::from)
            .collect()
    }

    /// Full page with the given id, if any.
    pub async fn get_by_id(&self, id: DbId) -> Option<Page> {
        self.inner
            .read()
            .await
            .pages
            .iter()
            .find(|page| page.id == id)
            .cloned()
    }

    /// Validate `input`, assign the next id, stamp the creation time and
    /// append the page.
    pub async fn create(&self, input: PageInput) -> Result<Page, CoreError> {
        input.validate()?;

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let page = Page {
            id: inner.last_id,
            name: input.name,
            img: input.img,
            text: input.text,
            date: chrono::Utc::now(),
        };
        inner.pages.push(page.clone());

        tracing::debug!(page_id = page.id, "Page created");
        Ok(page)
    }

    /// Overwrite name, image and text of an existing page.
    ///
    /// An unknown id is reported before empty fields.
    pub async fn update(&self, id: DbId, input: PageInput) -> Result<Page, CoreError> {
        self.update_parsed(id, Ok(input)).await
    }

    /// Like [`PageStore::update`], for input whose decoding may already have
    /// failed. An unknown id is reported before the decoding error.
    pub async fn update_parsed(
        &self,
        id: DbId,
        input: Result<PageInput, CoreError>,
    ) -> Result<Page, CoreError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id).ok_or(CoreError::NotFound {
            entity: PAGE_ENTITY,
            id,
        })?;
        let input = input?;
        input.validate()?;

        let page = &mut inner.pages[index];
        page.name = input.name;
        page.img = input.img;
        page.text = input.text;

        tracing::debug!(page_id = id, "Page updated");
        Ok(page.clone())
    }

    /// Remove the page with the given id, keeping the order of the rest.
    ///
    /// Returns `false` if no page has that id.
    pub async fn delete(&self, id: DbId) -> bool {
        let mut inner = self.inner.write().await;
        match inner.position(id) {
            Some(index) => {
                inner.pages.remove(index);
                tracing::debug!(page_id = id, remaining = inner.pages.len(), "Page deleted");
                true
            }
            None => false,
        }
    }

    /// Number of stored pages.
    pub async fn len(&self) -> usize {
        self.inner.read().await.pages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
