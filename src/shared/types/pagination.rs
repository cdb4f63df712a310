/// Page request after normalization: both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl PaginationParams {
    /// Rows to skip. Saturates instead of overflowing on huge pages.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let r = PaginatedResult::new(vec![1, 2], 31, 1, 15);
        assert_eq!(r.total_pages, 3);

        let empty: PaginatedResult<u8> = PaginatedResult::new(vec![], 0, 1, 15);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn offset_is_zero_based() {
        let p = PaginationParams { page: 3, limit: 15 };
        assert_eq!(p.offset(), 30);
    }

    #[test]
    fn offset_saturates_on_huge_page() {
        let p = PaginationParams {
            page: u64::MAX,
            limit: 100,
        };
        assert_eq!(p.offset(), u64::MAX);
    }
}
