//! Dimension definition
//!
//! A dimension is a named size. The name is its identity; the size may change
//! as model entities are added or removed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, non-negative axis size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    name: String,
    size: usize,
}

impl Dimension {
    /// Create a new dimension
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::dimensions::Dimension;
    ///
    /// let dim = Dimension::new("nhru", 4);
    /// assert_eq!(dim.name(), "nhru");
    /// assert_eq!(dim.size(), 4);
    /// ```
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }

    /// Get the name of the dimension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the size of the dimension
    pub fn size(&self) -> usize {
        self.size
    }

    /// Set the size of the dimension
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Plain `{name, size}` structure used when serializing
    pub fn tostructure(&self) -> DimensionStructure {
        DimensionStructure {
            name: self.name.clone(),
            size: self.size,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: size={}", self.name, self.size)
    }
}

/// Serialized form of a [`Dimension`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionStructure {
    pub name: String,
    pub size: usize,
}

impl From<DimensionStructure> for Dimension {
    fn from(value: DimensionStructure) -> Self {
        Dimension::new(&value.name, value.size)
    }
}
