//! Page windows over the ordered question list

use serde::Deserialize;

/// Items per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Default page when none (or an unparseable one) is requested
const DEFAULT_PAGE: i64 = 1;

/// Highest page number that may hold items for `total` records.
///
/// Computed as `total / 10 + 1`, so an exact multiple of the page size
/// reports one trailing empty page.
pub fn max_page(total: usize) -> usize {
    total / QUESTIONS_PER_PAGE + 1
}

/// Return the formatted items of a 1-indexed page.
///
/// Pages past `max_page` and pages below 1 are empty.
pub fn paginate<T, R>(page: i64, items: &[T]) -> Vec<R>
where
    T: Clone,
    R: From<T>,
{
    if page < 1 {
        return Vec::new();
    }

    let page = match usize::try_from(page) {
        Ok(p) if p <= max_page(items.len()) => p,
        _ => return Vec::new(),
    };

    let from = (page - 1) * QUESTIONS_PER_PAGE;
    let to = (from + QUESTIONS_PER_PAGE).min(items.len());
    if from >= to {
        return Vec::new();
    }

    items[from..to].iter().cloned().map(R::from).collect()
}

/// Query parameters for GET /questions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Requested page, falling back to 1 when absent or not an integer.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PAGE)
    }
}
