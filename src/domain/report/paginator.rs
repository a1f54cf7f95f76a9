//! Pure pagination over an ordered candidate list.

/// One visible page of a candidate list plus its navigation affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The visible slice.
    pub items: &'a [T],
    /// The (possibly clamped) page index actually rendered.
    pub index: usize,
    /// Absolute index of the first visible item.
    pub offset: usize,
    /// True when an earlier page exists.
    pub has_prev: bool,
    /// True when a later page exists.
    pub has_next: bool,
}

/// Slices `items` into the page at `index`.
///
/// A page index beyond the end clamps to the last page instead of
/// panicking; the engine never produces one intentionally, but a reloaded
/// and shrunken list can leave a stale index behind.
pub fn paginate<T>(items: &[T], page_size: usize, index: usize) -> Page<'_, T> {
    debug_assert!(page_size > 0, "page size must be positive");
    let page_count = ((items.len() + page_size - 1) / page_size).max(1);
    let index = index.min(page_count - 1);
    let offset = index * page_size;
    let end = (offset + page_size).min(items.len());
    Page {
        items: &items[offset.min(items.len())..end],
        index,
        offset,
        has_prev: index > 0,
        has_next: end < items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn first_page_of_65_entries_shows_first_30_with_next_only() {
        let items = numbered(65);
        let page = paginate(&items, 30, 0);
        assert_eq!(page.items, &items[0..30]);
        assert_eq!(page.offset, 0);
        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn middle_page_has_both_directions() {
        let items = numbered(65);
        let page = paginate(&items, 30, 1);
        assert_eq!(page.items, &items[30..60]);
        assert_eq!(page.offset, 30);
        assert!(page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn last_partial_page_has_prev_only() {
        let items = numbered(65);
        let page = paginate(&items, 30, 2);
        assert_eq!(page.items, &items[60..65]);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let items = numbered(60);
        let page = paginate(&items, 30, 1);
        assert_eq!(page.items.len(), 30);
        assert!(!page.has_next);
    }

    #[test]
    fn out_of_range_index_clamps_to_last_page() {
        let items = numbered(65);
        let page = paginate(&items, 30, 99);
        assert_eq!(page.index, 2);
        assert_eq!(page.items, &items[60..65]);
    }

    #[test]
    fn empty_list_yields_an_empty_first_page() {
        let items: Vec<usize> = vec![];
        let page = paginate(&items, 30, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.index, 0);
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    proptest! {
        #[test]
        fn has_next_iff_items_remain(len in 0usize..200, size in 1usize..50, index in 0usize..10) {
            let items = numbered(len);
            let page = paginate(&items, size, index);
            prop_assert_eq!(page.has_next, (page.index + 1) * size < len);
        }

        #[test]
        fn has_prev_iff_not_first_page(len in 0usize..200, size in 1usize..50, index in 0usize..10) {
            let items = numbered(len);
            let page = paginate(&items, size, index);
            prop_assert_eq!(page.has_prev, page.index > 0);
        }

        #[test]
        fn pages_cover_the_list_without_overlap(len in 0usize..200, size in 1usize..50) {
            let items = numbered(len);
            let mut seen = Vec::new();
            let mut index = 0;
            loop {
                let page = paginate(&items, size, index);
                seen.extend_from_slice(page.items);
                if !page.has_next {
                    break;
                }
                index += 1;
            }
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn clamped_index_is_always_renderable(len in 0usize..200, size in 1usize..50, index in 0usize..1000) {
            let items = numbered(len);
            let page = paginate(&items, size, index);
            prop_assert!(page.offset <= len);
            prop_assert!(page.items.len() <= size);
        }
    }
}
