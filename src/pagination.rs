//! Fixed-size, 1-based page windows over an ordered list.
//!
//! A page size of zero is treated as one so every function stays total.

/// Number of pages needed for `items`. An empty list still has one page.
pub fn page_count<T>(items: &[T], page_size: usize) -> usize {
    items.len().div_ceil(page_size.max(1)).max(1)
}

/// Items shown on `page`, empty when the page starts past the end.
pub fn visible_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn can_go_previous(page: usize) -> bool {
    page > 1
}

pub fn can_go_next<T>(page: usize, items: &[T], page_size: usize) -> bool {
    page < page_count(items, page_size)
}

/// Clamps a requested page into `1..=page_count`.
pub fn go_to<T>(page: usize, items: &[T], page_size: usize) -> usize {
    page.clamp(1, page_count(items, page_size))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Previous,
    Next,
    Page(usize),
}

/// Current page of a list. Only ever moves within the legal bounds, so
/// stepping past either end leaves it where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count<T>(&self, items: &[T]) -> usize {
        page_count(items, self.page_size)
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        visible_slice(items, self.page_size, self.current)
    }

    pub fn can_go_previous(&self) -> bool {
        can_go_previous(self.current)
    }

    pub fn can_go_next<T>(&self, items: &[T]) -> bool {
        can_go_next(self.current, items, self.page_size)
    }

    pub fn step<T>(&mut self, nav: PageNav, items: &[T]) -> usize {
        let requested = match nav {
            PageNav::Previous => self.current.saturating_sub(1),
            PageNav::Next => self.current.saturating_add(1),
            PageNav::Page(page) => page,
        };
        self.current = go_to(requested, items, self.page_size);
        self.current
    }

    /// Pulls the current page back in range after the list changed.
    pub fn clamp<T>(&mut self, items: &[T]) -> usize {
        self.current = go_to(self.current, items, self.page_size);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let empty: [u8; 0] = [];
        assert_eq!(page_count(&empty, 3), 1);
        assert_eq!(page_count(&[1, 2], 3), 1);
        assert_eq!(page_count(&[1, 2, 3], 3), 1);
        assert_eq!(page_count(&[1, 2, 3, 4], 3), 2);
        assert_eq!(page_count(&[1, 2, 3, 4, 5, 6, 7], 3), 3);
        // zero page size behaves as one
        assert_eq!(page_count(&[1, 2], 0), 2);
    }

    #[test]
    fn test_page_count_monotonic() {
        let items: Vec<usize> = (0..50).collect();
        for size in 1..7 {
            let mut prev = 0;
            for len in 0..items.len() {
                let count = page_count(&items[..len], size);
                assert!(count >= prev, "len {len}, size {size}");
                prev = count;
            }
        }
    }

    #[test]
    fn test_visible_slice() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(visible_slice(&items, 3, 1), &[1, 2, 3]);
        assert_eq!(visible_slice(&items, 3, 2), &[4, 5, 6]);
        assert_eq!(visible_slice(&items, 3, 3), &[7]);
        assert!(visible_slice(&items, 3, 4).is_empty());
        assert!(visible_slice(&items, 3, usize::MAX).is_empty());
        // page 0 is read as the first page
        assert_eq!(visible_slice(&items, 3, 0), &[1, 2, 3]);
    }

    #[test]
    fn test_pages_reconstruct_list() {
        for len in 0..20 {
            let items: Vec<usize> = (0..len).collect();
            for size in 1..6 {
                let count = page_count(&items, size);
                let mut joined = Vec::new();
                for page in 1..=count {
                    let slice = visible_slice(&items, size, page);
                    assert!(slice.len() <= size);
                    if page < count {
                        assert_eq!(slice.len(), size);
                    }
                    joined.extend_from_slice(slice);
                }
                assert_eq!(joined, items, "len {len}, size {size}");
            }
        }
    }

    #[test]
    fn test_navigation_bounds() {
        let items = [1, 2];
        assert!(!can_go_previous(1));
        assert!(can_go_previous(2));
        assert!(!can_go_next(1, &items, 3));
        assert!(can_go_next(1, &[1, 2, 3, 4], 3));
        assert!(!can_go_next(2, &[1, 2, 3, 4], 3));
    }

    #[test]
    fn test_go_to_clamps() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(go_to(0, &items, 3), 1);
        assert_eq!(go_to(2, &items, 3), 2);
        assert_eq!(go_to(9, &items, 3), 3);
        let empty: [u8; 0] = [];
        assert_eq!(go_to(5, &empty, 3), 1);
    }

    #[test]
    fn test_paginator_steps() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let mut pager = Paginator::new(3);
        assert_eq!(pager.current(), 1);
        assert!(!pager.can_go_previous());

        // previous on the first page is a no-op
        assert_eq!(pager.step(PageNav::Previous, &items), 1);

        assert_eq!(pager.step(PageNav::Next, &items), 2);
        assert_eq!(pager.visible(&items), &[4, 5, 6]);
        assert_eq!(pager.step(PageNav::Next, &items), 3);
        assert!(!pager.can_go_next(&items));

        // next on the last page stays put
        assert_eq!(pager.step(PageNav::Next, &items), 3);
        assert_eq!(pager.visible(&items), &[7]);

        assert_eq!(pager.step(PageNav::Page(10), &items), 3);
        assert_eq!(pager.step(PageNav::Page(0), &items), 1);
        assert_eq!(pager.step(PageNav::Page(2), &items), 2);
        assert_eq!(pager.step(PageNav::Previous, &items), 1);
    }

    #[test]
    fn test_paginator_clamp_after_shrink() {
        let mut pager = Paginator::new(2);
        pager.step(PageNav::Page(3), &[1, 2, 3, 4, 5]);
        assert_eq!(pager.current(), 3);
        assert_eq!(pager.clamp(&[1, 2]), 1);
        assert_eq!(pager.page_count(&[1, 2]), 1);
    }

    #[test]
    fn test_seeded_blog_boundary() {
        let posts = crate::blog::PostCollection::seeded();
        let pager = Paginator::new(crate::blog::POSTS_PER_PAGE);
        assert_eq!(pager.page_count(&posts), 1);
        assert!(!pager.can_go_previous());
        assert!(!pager.can_go_next(&posts));
        assert_eq!(pager.visible(&posts).len(), 2);
    }
}
