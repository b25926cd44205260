//! Readers that populate a parameter collection
//!
//! A reader fills a [`Parameters`] collection from some source. Every reader
//! goes through the collection's own add and assign operations, so the
//! catalog, dimension and size checks apply no matter where the data comes
//! from.
//!
//! - [`ParamDbReader`]: per-parameter `$id,<name>` records, as written by
//!   [`Parameter::toparamdb`](crate::parameters::Parameter::toparamdb)
//! - [`StructureReader`]: a [`CollectionStructure`](crate::parameters::CollectionStructure),
//!   for example one parsed from JSON

pub mod paramdb;
pub mod structure;

use crate::error::Result;
use crate::parameters::Parameters;

pub use paramdb::{MemorySource, ParamDbReader, RecordSource};
pub use structure::StructureReader;

/// Source of parameters for a collection
pub trait Reader {
    /// Add the source's dimensions and parameters to `params`
    fn read(&mut self, params: &mut Parameters) -> Result<()>;
}

/// Options for [`ParamDbReader`]
///
/// # Examples
///
/// ```
/// use prms_paramdb::readers::ReaderConfig;
///
/// let config = ReaderConfig::default();
/// assert!(config.adjust_bounded);
///
/// let config = ReaderConfig { adjust_bounded: false };
/// assert!(!config.adjust_bounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Resolve bounds written as dimension names once all parameters are read
    pub adjust_bounded: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            adjust_bounded: true,
        }
    }
}
