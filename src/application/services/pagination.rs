//! Paged listing of the hero catalog

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Hero, HeroRepository, PaginationError, PaginationResult};
use crate::shared::{validate_page, Page};

/// Serves one page of the catalog at a time.
pub struct PaginationService {
    repository: Arc<dyn HeroRepository>,
}

impl PaginationService {
    pub fn new(repository: Arc<dyn HeroRepository>) -> Self {
        Self { repository }
    }

    /// Look up the page named by the raw `page` query value.
    ///
    /// `None` means the first page. See [`validate_page`] for the failure cases.
    pub fn list_page(&self, page_param: Option<&str>) -> PaginationResult<Page<Hero>> {
        let total_pages = self.repository.total_pages();
        let number = validate_page(page_param, total_pages)?;

        let heroes = self
            .repository
            .find_page(number)
            .ok_or(PaginationError::PageNotFound {
                page: number as i64,
                total_pages,
            })?;

        debug!(page = number, total_pages, count = heroes.len(), "Serving hero page");
        Ok(Page::new(heroes.to_vec(), number, total_pages))
    }

    pub fn total_pages(&self) -> u32 {
        self.repository.total_pages()
    }
}
