//! Read-only queries over the presentation store.
use std::sync::Arc;

use crate::catalog::{Presentation, PresentationStore};

/// Query operations backing the catalog tools.
///
/// Results borrow from the shared store and keep its insertion order.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<PresentationStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<PresentationStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PresentationStore {
        &self.store
    }

    pub fn list_all(&self) -> Vec<&Presentation> {
        self.store.all().iter().collect()
    }

    /// Case-insensitive substring match on the title. A blank query matches nothing.
    pub fn search_by_title(&self, query: &str) -> Vec<&Presentation> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.store
            .all()
            .iter()
            .filter(|presentation| presentation.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn search_by_year(&self, year: i64) -> Vec<&Presentation> {
        self.store
            .all()
            .iter()
            .filter(|presentation| i64::from(presentation.year) == year)
            .collect()
    }
}
