//! Q&A knowledge index over the project documentation.
//!
//! Entries come from three sources merged once at build time: the
//! structured services document, a curated static list and headings
//! extracted from narrative Markdown. The result is immutable and
//! served through a `QaHandle`.

pub mod curated;
pub mod engine;
pub mod handle;
pub mod loader;
pub mod model;
pub mod narrative;

pub use engine::QaIndex;
pub use handle::QaHandle;
pub use loader::build_index;
pub use model::{
    AllQa, CodebaseOverview, QaCategory, QaEntry, QaSearchResult, ServiceDoc, ServiceLookup,
    TaggedEntry,
};
