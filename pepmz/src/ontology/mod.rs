//! The modifications that can be referenced by name or accession

mod custom;
mod database;
mod unimod;

pub use custom::*;
pub use database::*;
