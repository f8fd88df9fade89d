//! Deterministic pagination.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockledger_audit::AuditLog;
use stockledger_catalog::Resource;

/// Pagination parameters for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    /// Maximum number of rows per page.
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl Pagination {
    /// Build from optional caller input, clamping to sane bounds
    /// (`page >= 1`, `1 <= limit <= 100`).
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(20).clamp(1, 100),
        }
    }

    /// Slice an already-filtered, already-ordered row set into one page.
    ///
    /// `total` is computed over the filtered set, so `total_pages` is always
    /// consistent with the filter the caller supplied.
    pub fn paginate<T>(self, rows: Vec<T>) -> Page<T> {
        let total = rows.len() as u64;
        let total_pages = total.div_ceil(self.limit as u64);
        let offset = (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.limit as usize);
        let items = rows
            .into_iter()
            .skip(offset)
            .take(self.limit as usize)
            .collect();

        Page {
            items,
            page: self.page,
            limit: self.limit,
            total,
            total_pages,
        }
    }
}

/// One page of a filtered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    /// Row count over the filtered set, across all pages.
    pub total: u64,
    /// `ceil(total / limit)`.
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Order rows newest-first by creation time. Callers rely on recency
/// ordering for "recent activity" views; the time-ordered id breaks ties
/// deterministically.
pub fn newest_first<T: Resource>(rows: &mut [T]) {
    rows.sort_by(|a, b| {
        let (a_id, b_id): (Uuid, Uuid) = ((*a.id()).into(), (*b.id()).into());
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b_id.cmp(&a_id))
    });
}

/// Newest-first ordering for audit rows.
pub fn newest_first_audit(rows: &mut [AuditLog]) {
    rows.sort_by(|a, b| {
        let (a_id, b_id): (Uuid, Uuid) = (a.id.into(), b.id.into());
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b_id.cmp(&a_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_match_the_list_contract() {
        let p = Pagination::new(None, None);
        assert_eq!(p, Pagination { page: 1, limit: 20 });
    }

    #[test]
    fn page_and_limit_are_clamped() {
        let p = Pagination::new(Some(0), Some(0));
        assert_eq!(p, Pagination { page: 1, limit: 1 });

        let p = Pagination::new(Some(3), Some(10_000));
        assert_eq!(p, Pagination { page: 3, limit: 100 });
    }

    #[test]
    fn paginate_slices_and_counts() {
        let rows: Vec<u32> = (0..45).collect();
        let page = Pagination { page: 3, limit: 20 }.paginate(rows);

        assert_eq!(page.items, (40..45).collect::<Vec<u32>>());
        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty_but_consistent() {
        let rows: Vec<u32> = (0..5).collect();
        let page = Pagination { page: 9, limit: 20 }.paginate(rows);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn empty_set_has_zero_pages() {
        let page = Pagination::default().paginate(Vec::<u32>::new());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    proptest! {
        /// Pagination invariant: for any row set and limit, the items summed
        /// across all pages equal the total, and total_pages == ceil(total/limit).
        #[test]
        fn items_across_pages_sum_to_total(len in 0usize..500, limit in 1u32..100) {
            let rows: Vec<usize> = (0..len).collect();
            let total = len as u64;
            let expected_pages = total.div_ceil(limit as u64);

            let mut seen = Vec::new();
            let mut page_no = 1u32;
            loop {
                let page = Pagination { page: page_no, limit }.paginate(rows.clone());
                prop_assert_eq!(page.total, total);
                prop_assert_eq!(page.total_pages, expected_pages);
                if page.items.is_empty() {
                    break;
                }
                seen.extend(page.items);
                page_no += 1;
            }

            prop_assert_eq!(seen, rows);
        }
    }
}
