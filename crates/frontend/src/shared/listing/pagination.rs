/// Pagination over an already-filtered in-memory dataset.
///
/// Pages are 1-based. A page index that points past the end of the current
/// filtered set (e.g. after a search narrowed the data) is clamped to the
/// last page instead of rendering empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
}

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

impl PaginationState {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// A page index computed under the old size is meaningless under the
    /// new one, so changing the size always returns to the first page.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved slice bounds for one page of a filtered set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSlice {
    /// Effective (clamped) page actually used for slicing.
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

/// Compute the effective page slice for a filtered set of `filtered_len` rows.
pub fn paginate(filtered_len: usize, state: PaginationState) -> PageSlice {
    let page_size = state.page_size.max(1);
    let total_pages = filtered_len.div_ceil(page_size).max(1);
    let page = state.page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(filtered_len);

    PageSlice {
        page,
        total_pages,
        start,
        end,
    }
}

/// Clone out the rows of the effective page.
pub fn page_items<T: Clone>(filtered: &[T], state: PaginationState) -> Vec<T> {
    let slice = paginate(filtered.len(), state);
    filtered[slice.start..slice.end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: usize, page_size: usize) -> PaginationState {
        PaginationState { page, page_size }
    }

    #[test]
    fn twenty_five_rows_page_size_ten_gives_three_pages() {
        let rows: Vec<usize> = (0..25).collect();

        let slice = paginate(rows.len(), state(1, 10));
        assert_eq!(slice.total_pages, 3);
        assert_eq!(page_items(&rows, state(1, 10)), (0..10).collect::<Vec<_>>());
        assert_eq!(page_items(&rows, state(3, 10)), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn union_of_pages_equals_filtered_set() {
        let rows: Vec<usize> = (0..25).collect();
        let mut collected = Vec::new();
        let total = paginate(rows.len(), state(1, 10)).total_pages;
        for page in 1..=total {
            collected.extend(page_items(&rows, state(page, 10)));
        }
        assert_eq!(collected, rows);
    }

    #[test]
    fn out_of_range_page_is_clamped_to_last() {
        // Was on page 3 of 25 rows, search narrowed the set to 4.
        let slice = paginate(4, state(3, 10));
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.page, 1);
        assert_eq!((slice.start, slice.end), (0, 4));

        let rows: Vec<usize> = (0..4).collect();
        assert_eq!(page_items(&rows, state(3, 10)), rows);
    }

    #[test]
    fn page_zero_is_clamped_to_first() {
        let slice = paginate(25, state(0, 10));
        assert_eq!(slice.page, 1);
        assert_eq!((slice.start, slice.end), (0, 10));
    }

    #[test]
    fn empty_set_still_has_one_page() {
        let slice = paginate(0, state(1, 10));
        assert_eq!(slice.total_pages, 1);
        assert_eq!((slice.start, slice.end), (0, 0));
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let next = state(3, 10).with_page_size(50);
        assert_eq!(next.page, 1);
        assert_eq!(next.page_size, 50);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let slice = paginate(5, state(1, 0));
        assert_eq!(slice.total_pages, 5);
        assert_eq!((slice.start, slice.end), (0, 1));
    }
}
