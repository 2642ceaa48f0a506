//! Page-number pagination.
//!
//! `page` is 1-based, `per_page` defaults to 4 and is capped at 10. Unparsable or zero
//! values fall back to the defaults. List endpoints wrap a `Page` into the
//! `{count, next, previous, results}` envelope, with links that keep every other query
//! parameter of the request.

use axum::http::Uri;

use crate::{
    model::api::PaginatedDto,
    server::{error::AppError, query::QueryMap},
};

pub const DEFAULT_PER_PAGE: u64 = 4;
pub const MAX_PER_PAGE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn resolve(query: &QueryMap) -> Self {
        let positive = |key: &str| {
            query
                .get(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
        };

        Self {
            page: positive("page").unwrap_or(1),
            per_page: positive("per_page")
                .map(|v| v.min(MAX_PER_PAGE))
                .unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// Zero-based page index as used by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// Number of rows before this page, `None` when it does not fit in a `u64`.
    pub fn offset(&self) -> Option<u64> {
        self.index().checked_mul(self.per_page)
    }

    /// Whether this page exists for `total` rows. The first page always does.
    ///
    /// Repositories check this before fetching, so an absurd page number never reaches
    /// the paginator's offset arithmetic.
    pub fn exists_within(&self, total: u64) -> bool {
        self.page <= 1 || self.offset().is_some_and(|offset| offset < total)
    }
}

/// One page of results together with the total number of matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// Builds a page, rejecting page numbers past the last page.
    ///
    /// The first page always exists, even when there are no rows.
    ///
    /// # Returns
    /// - `Ok(Page)` - The requested page
    /// - `Err(AppError::NotFound)` - `page` is beyond the last page
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Result<Self, AppError> {
        if !request.exists_within(total) {
            return Err(AppError::NotFound("Invalid page.".to_string()));
        }

        Ok(Self {
            items,
            total,
            request,
        })
    }

    pub fn has_next(&self) -> bool {
        self.request.page.saturating_mul(self.request.per_page) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.request.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }

    /// Wraps the page into the response envelope.
    ///
    /// # Arguments
    /// - `uri` - Request URI, used to build `next`/`previous` links
    /// - `f` - Conversion of each item into its DTO
    pub fn into_dto<U>(self, uri: &Uri, f: impl FnMut(T) -> U) -> PaginatedDto<U> {
        let next = self
            .has_next()
            .then(|| page_link(uri, Some(self.request.page + 1)));
        let previous = self.has_previous().then(|| {
            // The first page is linked without a page parameter.
            let page = self.request.page - 1;
            page_link(uri, (page > 1).then_some(page))
        });

        PaginatedDto {
            count: self.total,
            next,
            previous,
            results: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Request path with the `page` parameter replaced, or removed when `page` is `None`.
fn page_link(uri: &Uri, page: Option<u64>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());

    for (key, value) in url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes()) {
        if key != "page" {
            serializer.append_pair(&key, &value);
        }
    }
    if let Some(page) = page {
        serializer.append_pair("page", &page.to_string());
    }

    let query = serializer.finish();
    if query.is_empty() {
        uri.path().to_string()
    } else {
        format!("{}?{}", uri.path(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolves_defaults_and_caps_page_size() {
        assert_eq!(PageRequest::resolve(&query(&[])), PageRequest::default());
        assert_eq!(
            PageRequest::resolve(&query(&[("page", "3"), ("per_page", "50")])),
            PageRequest {
                page: 3,
                per_page: MAX_PER_PAGE
            }
        );
        assert_eq!(
            PageRequest::resolve(&query(&[("page", "0"), ("per_page", "many")])),
            PageRequest::default()
        );
    }

    #[test]
    fn empty_first_page_is_valid() {
        let page = Page::<i32>::new(vec![], 0, PageRequest::default()).unwrap();

        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn rejects_pages_past_the_end() {
        let request = PageRequest {
            page: 3,
            per_page: 4,
        };
        assert!(matches!(
            Page::<i32>::new(vec![], 8, request),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn rejects_page_numbers_that_overflow_the_offset() {
        let request = PageRequest::resolve(&query(&[("page", "18446744073709551615")]));

        assert_eq!(request.page, u64::MAX);
        assert_eq!(request.offset(), None);
        assert!(!request.exists_within(u64::MAX));
        assert!(matches!(
            Page::<i32>::new(vec![], 5, request),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn links_keep_other_parameters() {
        let uri: Uri = "/api/route?ordering=-distance&page=2&per_page=2"
            .parse()
            .unwrap();
        let request = PageRequest {
            page: 2,
            per_page: 2,
        };

        let dto = Page::new(vec![3, 4], 5, request).unwrap().into_dto(&uri, |x| x);

        assert_eq!(dto.count, 5);
        assert_eq!(
            dto.next.as_deref(),
            Some("/api/route?ordering=-distance&per_page=2&page=3")
        );
        assert_eq!(
            dto.previous.as_deref(),
            Some("/api/route?ordering=-distance&per_page=2")
        );
        assert_eq!(dto.results, vec![3, 4]);
    }

    #[test]
    fn last_page_has_no_next_link() {
        let uri: Uri = "/api/station?page=2".parse().unwrap();
        let request = PageRequest {
            page: 2,
            per_page: 4,
        };

        let dto = Page::new(vec![5], 5, request).unwrap().into_dto(&uri, |x| x);

        assert_eq!(dto.next, None);
        assert_eq!(dto.previous.as_deref(), Some("/api/station"));
    }
}
