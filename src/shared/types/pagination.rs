/// One page of a 1-based paginated sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: u32, total_pages: u32) -> Self {
        Self {
            items,
            number,
            total_pages,
        }
    }

    /// Previous page number, `None` on the first page.
    pub fn prev_page(&self) -> Option<u32> {
        (self.number > 1).then(|| self.number - 1)
    }

    /// Next page number, `None` on the last page.
    pub fn next_page(&self) -> Option<u32> {
        (self.number < self.total_pages).then(|| self.number + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_at_edges() {
        let first = Page::new(vec![1], 1, 5);
        assert_eq!(first.prev_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let middle = Page::new(vec![1], 3, 5);
        assert_eq!(middle.prev_page(), Some(2));
        assert_eq!(middle.next_page(), Some(4));

        let last = Page::new(vec![1], 5, 5);
        assert_eq!(last.prev_page(), Some(4));
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn single_page_has_no_cursors() {
        let only = Page::new(vec!["a"], 1, 1);
        assert_eq!(only.prev_page(), None);
        assert_eq!(only.next_page(), None);
    }
}
