//! Presentation records, the immutable store and the dataset loader.
pub mod loader;
pub mod presentation;
pub mod store;

pub use loader::{
    dataset_schema, load_catalog, parse_json, parse_toml, DatasetDocument, DatasetSource,
    LoadedCatalog,
};
pub use presentation::{Presentation, PresentationId};
pub use store::{PresentationStore, MAX_YEAR, MIN_YEAR};
