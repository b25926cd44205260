//! Ordered dimension set implementation
//!
//! This module provides the Dimensions struct, an insertion-ordered collection
//! of [`Dimension`] objects. The insertion order is the axis order used when
//! shaping parameter data.

use crate::dimensions::dimension::{Dimension, DimensionStructure};
use crate::error::{PrmsError, Result};
use indexmap::IndexMap;
use std::fmt;

/// An ordered, name-keyed set of dimensions
///
/// Axis 0 is the first dimension inserted. Names are unique within a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensions {
    dims: IndexMap<String, Dimension>,
}

impl Dimensions {
    /// Create a new empty dimension set
    pub fn new() -> Self {
        Self {
            dims: IndexMap::new(),
        }
    }

    /// Build a dimension set from `(name, size)` pairs in axis order
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::dimensions::Dimensions;
    ///
    /// let dims = Dimensions::from_pairs(&[("nhru", 4), ("nmonths", 12)]).unwrap();
    /// assert_eq!(dims.shape(), vec![4, 12]);
    /// ```
    pub fn from_pairs(pairs: &[(&str, usize)]) -> Result<Self> {
        let mut dims = Self::new();
        for (name, size) in pairs {
            dims.add(name, *size)?;
        }
        Ok(dims)
    }

    /// Add a new dimension as the last axis
    ///
    /// # Returns
    ///
    /// `Ok(())` if the dimension was added, or `DimensionExists` if a dimension
    /// with the same name is already present. Use [`Dimensions::set`] to
    /// overwrite.
    pub fn add(&mut self, name: &str, size: usize) -> Result<()> {
        if self.dims.contains_key(name) {
            return Err(PrmsError::DimensionExists(name.to_string()));
        }
        self.dims.insert(name.to_string(), Dimension::new(name, size));
        Ok(())
    }

    /// Insert a dimension, or overwrite the size of an existing one in place
    pub fn set(&mut self, name: &str, size: usize) {
        match self.dims.get_mut(name) {
            Some(dim) => dim.set_size(size),
            None => {
                self.dims.insert(name.to_string(), Dimension::new(name, size));
            }
        }
    }

    /// Remove a dimension, keeping the order of the remaining axes
    pub fn remove(&mut self, name: &str) -> Option<Dimension> {
        self.dims.shift_remove(name)
    }

    /// Get a dimension by name
    pub fn get(&self, name: &str) -> Result<&Dimension> {
        self.dims
            .get(name)
            .ok_or_else(|| PrmsError::DimensionNotFound(name.to_string()))
    }

    /// Get a mutable reference to a dimension by name
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Dimension> {
        self.dims
            .get_mut(name)
            .ok_or_else(|| PrmsError::DimensionNotFound(name.to_string()))
    }

    /// Zero-based axis index of the named dimension
    pub fn get_position(&self, name: &str) -> Result<usize> {
        self.dims
            .get_index_of(name)
            .ok_or_else(|| PrmsError::DimensionNotFound(name.to_string()))
    }

    /// Size of the dimension at the given axis index
    pub fn get_dimsize_by_index(&self, index: usize) -> Result<usize> {
        self.dims
            .get_index(index)
            .map(|(_, dim)| dim.size())
            .ok_or_else(|| PrmsError::IndexOutOfBounds {
                context: "dimensions".to_string(),
                index,
                len: self.dims.len(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dims.contains_key(name)
    }

    /// Number of dimensions in the set
    pub fn ndims(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Dimension names in axis order
    pub fn names(&self) -> Vec<String> {
        self.dims.keys().cloned().collect()
    }

    /// Dimension sizes in axis order
    pub fn shape(&self) -> Vec<usize> {
        self.dims.values().map(Dimension::size).collect()
    }

    /// Product of all dimension sizes
    ///
    /// Returns `None` for an empty set: a parameter without dimensions cannot
    /// hold data, so there is no meaningful total.
    pub fn total_size(&self) -> Option<usize> {
        if self.dims.is_empty() {
            return None;
        }
        Some(self.dims.values().map(Dimension::size).product())
    }

    /// Iterate over the dimensions in axis order
    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.dims.values()
    }

    /// Serialized `[{name, size}, ...]` form in axis order
    pub fn tostructure(&self) -> Vec<DimensionStructure> {
        self.dims.values().map(Dimension::tostructure).collect()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dim in self.dims.values() {
            writeln!(f, "{}", dim)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Dimensions {
    type Item = &'a Dimension;
    type IntoIter = indexmap::map::Values<'a, String, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.values()
    }
}
