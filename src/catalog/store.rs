use std::collections::HashSet;

use crate::lib::errors::DatasetError;

use super::presentation::Presentation;

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

/// Immutable, insertion-ordered collection of presentations.
///
/// Records enter only through [`PresentationStore::new`]; there are no
/// mutating methods.
#[derive(Debug, Clone, Default)]
pub struct PresentationStore {
    presentations: Vec<Presentation>,
}

impl PresentationStore {
    /// Build a store, rejecting records that break the catalog invariants.
    pub fn new(presentations: Vec<Presentation>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(presentations.len());
        for presentation in &presentations {
            validate_record(presentation)?;
            if !seen.insert(presentation.id.clone()) {
                return Err(DatasetError::DuplicateId {
                    id: presentation.id.to_string(),
                });
            }
        }
        Ok(Self { presentations })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Every record in load order.
    pub fn all(&self) -> &[Presentation] {
        &self.presentations
    }

    pub fn len(&self) -> usize {
        self.presentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presentations.is_empty()
    }
}

fn validate_record(presentation: &Presentation) -> Result<(), DatasetError> {
    let id = presentation.id.to_string();
    if presentation.title.trim().is_empty() {
        return Err(DatasetError::EmptyTitle { id });
    }
    if presentation.speakers.is_empty()
        || presentation
            .speakers
            .iter()
            .any(|speaker| speaker.trim().is_empty())
    {
        return Err(DatasetError::MissingSpeakers { id });
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&presentation.year) {
        return Err(DatasetError::ImplausibleYear {
            id,
            year: i64::from(presentation.year),
        });
    }
    Ok(())
}
