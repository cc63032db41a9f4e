//! Content model for the cheat sheet.
//!
//! The technique list is data only: [`TechniqueRecord`] and [`Catalog`] know
//! nothing about rendering, so the list can be swapped or extended without
//! touching any renderer.

mod builtin;
mod catalog;
mod page;
mod technique;

pub use builtin::TECHNIQUES;
pub use catalog::{Catalog, CatalogViolation, NameMatch, NAME_MATCH_THRESHOLD};
pub use page::*;
pub use technique::TechniqueRecord;
