//! Fixed-size page slicing with page clamping

/// Cards per page on the listing
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One page of a filtered result
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Requested page clamped into `1..=page_count`
    pub page: usize,
    pub page_count: usize,
    /// 1-based index of the first item shown, 0 when empty
    pub start: usize,
    /// 1-based index of the last item shown, 0 when empty
    pub end: usize,
    pub total: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Number of pages for `total` items, never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Cut `items` into the requested page.
///
/// Any requested page number is accepted; values outside `1..=page_count`
/// are clamped instead of rejected.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = page_count(total, page_size);
    let page = page.clamp(1, page_count as i64) as usize;

    let offset = (page - 1) * page_size;
    let end = (page * page_size).min(total);
    let slice = &items[offset.min(total)..end];

    let (start, end) = if total == 0 { (0, 0) } else { (offset + 1, end) };

    Page {
        items: slice,
        page,
        page_count,
        start,
        end,
        total,
    }
}

/// Page numbers for the pagination bar
pub fn page_numbers(page_count: usize) -> impl Iterator<Item = usize> {
    1..=page_count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_items_three_pages() {
        let items: Vec<u32> = (1..=20).collect();

        let first = paginate(&items, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(first.page_count, 3);
        assert_eq!((first.start, first.end, first.total), (1, 9, 20));
        assert_eq!(first.items, &items[0..9]);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, DEFAULT_PAGE_SIZE);
        assert_eq!((last.start, last.end), (19, 20));
        assert_eq!(last.items, &[19, 20]);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let items: Vec<u32> = (1..=20).collect();
        for requested in [i64::MIN, -3, 0, 1, 2, 3, 4, 99, i64::MAX] {
            let page = paginate(&items, requested, DEFAULT_PAGE_SIZE);
            assert!((1..=page.page_count).contains(&page.page), "page {requested}");
        }
        assert_eq!(paginate(&items, 0, 9).page, 1);
        assert_eq!(paginate(&items, 10, 9).page, 3);
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 5, DEFAULT_PAGE_SIZE);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page, 1);
        assert_eq!((page.start, page.end, page.total), (0, 0, 0));
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_idempotent_on_clamped_page() {
        let items: Vec<u32> = (1..=14).collect();
        let once = paginate(&items, 7, 5);
        let twice = paginate(&items, once.page as i64, 5);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_exact_multiple() {
        let items: Vec<u32> = (1..=18).collect();
        let page = paginate(&items, 2, 9);
        assert_eq!(page.page_count, 2);
        assert_eq!((page.start, page.end), (10, 18));
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let items = [1, 2, 3];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items, &[2]);
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(page_numbers(3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(page_numbers(0).collect::<Vec<_>>(), vec![1]);
    }
}
