use serde::{Deserialize, Serialize};

/// Number of pages for `total` rows. An empty result still has one (empty) page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Clamps a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total, page_size))
}

/// Slice for a 1-based `page`. Assumes the page was already clamped; an
/// out-of-range page yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<R> Page<R> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: vec![],
            total: 0,
            page: 1,
            page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// "11–20 of 25" style label for the pager.
    pub fn range_label(&self) -> String {
        if self.total == 0 || self.items.is_empty() {
            return format!("0 of {}", self.total);
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = first + self.items.len() - 1;
        format!("{first}–{last} of {}", self.total)
    }
}

impl<R: Clone> Page<R> {
    /// Builds the page for an already ordered, complete sequence.
    pub fn from_ordered(all: &[R], page: usize, page_size: usize) -> Self {
        Self {
            items: paginate(all, page, page_size).to_vec(),
            total: all.len(),
            page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_by_ten() {
        let all: Vec<u32> = (1..=25).collect();
        assert_eq!(total_pages(all.len(), 10), 3);
        assert_eq!(paginate(&all, 1, 10).len(), 10);
        assert_eq!(paginate(&all, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_zero_total_is_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(clamp_page(5, 0, 10), 1);
        let empty: Vec<u32> = vec![];
        assert!(paginate(&empty, 1, 10).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 25, 10), 1);
        assert_eq!(clamp_page(2, 25, 10), 2);
        assert_eq!(clamp_page(9, 25, 10), 3);
    }

    #[test]
    fn test_paginate_does_not_clamp() {
        let all: Vec<u32> = (1..=5).collect();
        assert!(paginate(&all, 4, 2).is_empty());
    }

    #[test]
    fn test_pages_cover_sequence_exactly_once() {
        for total in 0..40usize {
            for page_size in 1..12usize {
                let all: Vec<usize> = (0..total).collect();
                let pages = total_pages(total, page_size);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| paginate(&all, p, page_size).to_vec())
                    .collect();
                assert_eq!(joined, all, "total={total} page_size={page_size}");

                for p in 1..=pages {
                    let expected = page_size.min(total.saturating_sub((p - 1) * page_size));
                    assert_eq!(paginate(&all, p, page_size).len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_page_navigation_and_label() {
        let all: Vec<u32> = (1..=25).collect();
        let p2 = Page::from_ordered(&all, 2, 10);
        assert!(p2.has_prev());
        assert!(p2.has_next());
        assert_eq!(p2.range_label(), "11–20 of 25");

        let p3 = Page::from_ordered(&all, 3, 10);
        assert!(!p3.has_next());
        assert_eq!(p3.range_label(), "21–25 of 25");

        let empty: Page<u32> = Page::empty(10);
        assert_eq!(empty.total_pages(), 1);
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
        assert_eq!(empty.range_label(), "0 of 0");
    }
}
