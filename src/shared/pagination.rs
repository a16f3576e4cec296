/// Paginated result wrapper
///
/// `page` is 0-indexed throughout this service.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as u64) as u32
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Row offset of the first item on `page`.
    pub fn offset(page: u32, limit: u32) -> u64 {
        page as u64 * limit as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let r = PaginatedResult::new(vec![1, 2, 3], 41, 0, 20);
        assert_eq!(r.total_pages, 3);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let r: PaginatedResult<u8> = PaginatedResult::new(vec![], 0, 0, 20);
        assert_eq!(r.total_pages, 0);
    }

    #[test]
    fn offset_is_zero_indexed() {
        assert_eq!(PaginatedResult::<()>::offset(0, 20), 0);
        assert_eq!(PaginatedResult::<()>::offset(2, 20), 40);
    }
}
