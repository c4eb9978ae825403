//! In-memory store and repository operations.
//!
//! Every collection is seeded from [`crate::fixtures`] and lives only as long
//! as the process. The per-entity modules follow a common shape:
//! `list_all`, `get_by_id`, `search`, `create`, `update`, `delete`.

pub mod course;
pub mod staff;
pub mod student;
pub mod teacher;
pub mod tuition;

use crate::fixtures;
use crate::models::{Course, Payment, StaffMember, Student, StudentAccount, Teacher};

/// All mutable domain state.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub staff: Vec<StaffMember>,
    pub accounts: Vec<StudentAccount>,
    pub payments: Vec<Payment>,
}

impl Store {
    /// Store filled with the hardcoded records.
    pub fn seeded() -> Self {
        let store = Self {
            students: fixtures::students(),
            teachers: fixtures::teachers(),
            courses: fixtures::courses(),
            staff: fixtures::staff_members(),
            accounts: fixtures::student_accounts(),
            payments: fixtures::payments(),
        };

        tracing::debug!(
            "Store seeded: {} students, {} teachers, {} courses, {} accounts",
            store.students.len(),
            store.teachers.len(),
            store.courses.len(),
            store.accounts.len()
        );

        store
    }
}

/// Next identifier for a collection: highest existing id plus one.
pub fn next_id<T>(items: &[T], id: impl Fn(&T) -> u32) -> u32 {
    items.iter().map(id).max().unwrap_or(0) + 1
}

/// Case-insensitive substring match over several fields. An empty term matches.
pub fn matches_term(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&term))
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into pages of `page_size`. `page` is 1-based and clamped
/// into range; an empty list still has one (empty) page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_pages() {
        let items: Vec<u32> = (1..=12).collect();

        let first = paginate(&items, 1, 5);
        assert_eq!(first.items, &[1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 12);

        let last = paginate(&items, 3, 5);
        assert_eq!(last.items, &[11, 12]);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 0, 5).page, 1);
        assert_eq!(paginate(&items, 9, 5).page, 3);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 2, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_next_id_and_matching() {
        let store = Store::seeded();
        assert_eq!(next_id(&store.students, |s| s.id), 13);
        assert_eq!(next_id::<Student>(&[], |s| s.id), 1);

        assert!(matches_term("", &["anything"]));
        assert!(matches_term("  DATA ", &["Bob", "Data Science"]));
        assert!(!matches_term("xyz", &["Bob", "Data Science"]));
    }
}
