//! In-memory hero catalog

use crate::domain::{Hero, HeroRepository};

use super::seed::reference_heroes;

/// Default number of heroes per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Hero catalog held entirely in memory.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct InMemoryHeroRepository {
    heroes: Vec<Hero>,
    page_size: usize,
}

impl InMemoryHeroRepository {
    /// Wrap an ordered list of heroes. A `page_size` of zero is clamped to one.
    pub fn new(heroes: Vec<Hero>, page_size: usize) -> Self {
        Self {
            heroes,
            page_size: page_size.max(1),
        }
    }

    /// The reference catalog split into pages of `page_size`.
    pub fn with_reference_catalog(page_size: usize) -> Self {
        Self::new(reference_heroes(), page_size)
    }
}

impl Default for InMemoryHeroRepository {
    fn default() -> Self {
        Self::with_reference_catalog(DEFAULT_PAGE_SIZE)
    }
}

impl HeroRepository for InMemoryHeroRepository {
    fn find_all(&self) -> &[Hero] {
        &self.heroes
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}
