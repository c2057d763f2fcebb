use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Requested page, validated before slicing.
#[derive(Debug, Clone, Copy)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

pub(crate) fn default_page() -> u32 {
    DEFAULT_PAGE
}

pub(crate) fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!("page_size must be between 1 and {MAX_PAGE_SIZE}"));
        }
        Ok(())
    }
}

/// One slice of an ordered result set plus the totals needed to walk the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: i64,
    pub total_pages: u32,
}

/// Slices an already filtered and ordered sequence into a single page.
///
/// `page` is 1-based. A page past the end yields no items but still reports
/// the totals. A `page_size` of zero yields an empty page with zero pages.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> Page<T> {
    let total_items = items.len();

    if page_size == 0 {
        return Page {
            items: Vec::new(),
            total_items: total_items as i64,
            total_pages: 0,
        };
    }

    let size = page_size as usize;
    let start = (page.saturating_sub(1) as usize).saturating_mul(size);
    let items = items.into_iter().skip(start).take(size).collect();

    Page {
        items,
        total_items: total_items as i64,
        total_pages: total_items.div_ceil(size) as u32,
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page<U>(page: Page<U>, params: &PaginationParams) -> Self
    where
        U: Into<T>,
    {
        Self {
            data: page.items.into_iter().map(Into::into).collect(),
            pagination: PaginationMeta {
                page: params.page,
                page_size: params.page_size,
                total_items: page.total_items,
                total_pages: page.total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_first_page() {
        let page = paginate((1..=7).collect(), 1, 3);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let page = paginate((1..=7).collect(), 3, 3);
        assert_eq!(page.items, vec![7]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let page = paginate((1..=7).collect::<Vec<i32>>(), 4, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_every_item_lands_on_exactly_one_page() {
        let items: Vec<u32> = (0..23).collect();
        let size = 5;
        let first = paginate(items.clone(), 1, size);

        let mut seen = Vec::new();
        for n in 1..=first.total_pages {
            seen.extend(paginate(items.clone(), n, size).items);
        }

        assert_eq!(seen, items);
    }

    #[test]
    fn test_paginate_zero_page_size() {
        let page = paginate(vec![1, 2], 1, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_paginate_page_zero_behaves_like_first() {
        let page = paginate(vec!['a', 'b', 'c'], 0, 2);
        assert_eq!(page.items, vec!['a', 'b']);
    }

    #[test]
    fn test_pagination_params_validate() {
        assert!(PaginationParams::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).validate().is_ok());
        assert!(PaginationParams::new(0, 10).validate().is_err());
        assert!(PaginationParams::new(1, 0).validate().is_err());
        assert!(PaginationParams::new(1, MAX_PAGE_SIZE + 1).validate().is_err());
        assert!(PaginationParams::new(2, MAX_PAGE_SIZE).validate().is_ok());
    }

    #[test]
    fn test_paginated_response_from_page() {
        let params = PaginationParams::new(2, 2);
        let page = paginate(vec![1u8, 2, 3, 4, 5], params.page, params.page_size);
        let response: PaginatedResponse<u32> = PaginatedResponse::from_page(page, &params);

        assert_eq!(response.data, vec![3, 4]);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.pagination.total_items, 5);
        assert_eq!(response.pagination.total_pages, 3);
    }
}
