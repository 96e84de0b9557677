//! Hero catalog repository interface

use super::model::Hero;

/// Read-only access to the fixed, ordered hero catalog.
///
/// The catalog is partitioned into consecutive 1-based pages of
/// [`page_size`](HeroRepository::page_size) heroes; the last page may be shorter.
pub trait HeroRepository: Send + Sync {
    /// Every hero, in catalog order.
    fn find_all(&self) -> &[Hero];

    /// Heroes per page (never zero).
    fn page_size(&self) -> usize;

    /// Number of pages the catalog is split into.
    fn total_pages(&self) -> u32 {
        self.find_all().len().div_ceil(self.page_size()) as u32
    }

    /// Heroes on page `number`, or `None` when the page does not exist.
    fn find_page(&self, number: u32) -> Option<&[Hero]> {
        if number == 0 || number > self.total_pages() {
            return None;
        }
        let heroes = self.find_all();
        let start = (number as usize - 1) * self.page_size();
        let end = (start + self.page_size()).min(heroes.len());
        Some(&heroes[start..end])
    }
}
