//! Name search over the hero catalog

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Hero, HeroRepository};

/// Case-insensitive substring search on hero names.
pub struct SearchService {
    repository: Arc<dyn HeroRepository>,
}

impl SearchService {
    pub fn new(repository: Arc<dyn HeroRepository>) -> Self {
        Self { repository }
    }

    /// Heroes whose name contains `query`, in catalog order.
    ///
    /// An empty or missing query matches nothing rather than everything.
    pub fn search(&self, query: Option<&str>) -> Vec<Hero> {
        let needle = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return Vec::new(),
        };

        let matches: Vec<Hero> = self
            .repository
            .find_all()
            .iter()
            .filter(|hero| hero.name_contains(&needle))
            .cloned()
            .collect();

        debug!(query = %needle, matches = matches.len(), "Hero search");
        matches
    }
}
