//! Parameters collection implementation
//!
//! This module provides the Parameters struct, the parameter database itself.
//! It owns the global dimensions and an insertion-ordered collection of
//! Parameter objects, validates new parameters against a metadata catalog,
//! and cascades structural edits (removing or subsetting positions along a
//! dimension) to every parameter that declares the affected dimension.

use crate::dimensions::{DimensionStructure, Dimensions};
use crate::error::{PrmsError, Result};
use crate::metadata::{MetadataCatalog, ParameterMeta};
use crate::parameters::parameter::{Parameter, ParameterStructure};
use crate::parameters::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Parameter holding the identifiers of points of interest
pub const POI_ID_PARAMETER: &str = "poi_gage_id";

/// Dimension counting points of interest
pub const POI_DIMENSION: &str = "npoigages";

/// Minimum-bound sentinel replaced by 1 when bounded parameters are adjusted
const BOUNDED_SENTINEL: &str = "bounded";

/// Serialized form of a [`Parameters`] collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStructure {
    pub dimensions: Vec<DimensionStructure>,
    pub parameters: Vec<ParameterStructure>,
}

/// A parameter database
///
/// Parameters are added by name from the metadata catalog (or from ad hoc
/// metadata registered with [`Parameters::add_metadata`]), or as prebuilt
/// [`Parameter`] objects.
///
/// # Examples
///
/// ```
/// use prms_paramdb::metadata::{Catalog, ParameterMeta};
/// use prms_paramdb::parameters::{DataType, Parameters};
///
/// let mut catalog = Catalog::new();
/// catalog.add_parameter("cov_type", ParameterMeta {
///     datatype: Some(DataType::Integer),
///     dimensions: vec!["nhru".to_string()],
///     ..ParameterMeta::default()
/// });
///
/// let mut params = Parameters::new(catalog);
/// params.dimensions_mut().add("nhru", 3).unwrap();
/// params.add("cov_type").unwrap();
/// params.get_mut("cov_type").unwrap().set_data(vec![0, 1, 2]).unwrap();
///
/// assert!(params.exists("cov_type"));
/// assert!(params.add("cov_type").is_err());
/// assert!(params.add("not_a_parameter").is_err());
/// ```
#[derive(Clone)]
pub struct Parameters {
    /// Global dimensions shared by all parameters
    dimensions: Dimensions,

    /// Parameters in insertion order
    params: IndexMap<String, Parameter>,

    catalog: Arc<dyn MetadataCatalog>,

    /// Metadata for parameters the catalog does not know about
    adhoc: IndexMap<String, ParameterMeta>,
}

impl Parameters {
    /// Create an empty collection backed by a metadata catalog
    pub fn new<C: MetadataCatalog + 'static>(catalog: C) -> Self {
        Self::with_shared_catalog(Arc::new(catalog))
    }

    /// Create an empty collection backed by a shared metadata catalog
    pub fn with_shared_catalog(catalog: Arc<dyn MetadataCatalog>) -> Self {
        Self {
            dimensions: Dimensions::new(),
            params: IndexMap::new(),
            catalog,
            adhoc: IndexMap::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<dyn MetadataCatalog> {
        &self.catalog
    }

    /// Global dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn dimensions_mut(&mut self) -> &mut Dimensions {
        &mut self.dimensions
    }

    /// Declare a global dimension at the size given by its catalog default
    ///
    /// # Returns
    ///
    /// `DimensionNotFound` if the catalog does not know the dimension, or
    /// `DimensionExists` if it is already declared
    pub fn add_default_dimension(&mut self, name: &str) -> Result<()> {
        let size = self
            .catalog
            .dimension(name)
            .map(|meta| meta.default)
            .ok_or_else(|| PrmsError::DimensionNotFound(name.to_string()))?;
        self.dimensions.add(name, size)?;
        debug!(dimension = %name, size, "declared dimension from catalog default");
        Ok(())
    }

    /// Metadata for a parameter name, ad hoc entries first
    pub fn metadata(&self, name: &str) -> Option<&ParameterMeta> {
        self.adhoc
            .get(name)
            .or_else(|| self.catalog.parameter(name))
    }

    /// Register metadata for a parameter that is not in the catalog
    ///
    /// Replaces an earlier ad hoc entry of the same name.
    pub fn add_metadata(&mut self, name: &str, meta: ParameterMeta) {
        self.adhoc.insert(name.to_string(), meta);
    }

    /// Add a parameter by name, populated from its metadata
    ///
    /// # Returns
    ///
    /// `Ok(())` if the parameter was added, `ParameterNotFound` if no metadata
    /// exists for the name, `ParameterExists` if it is already in the
    /// collection, or `DimensionNotFound` if one of its dimensions is not a
    /// global dimension
    pub fn add(&mut self, name: &str) -> Result<()> {
        if self.exists(name) {
            return Err(PrmsError::ParameterExists(name.to_string()));
        }
        let meta = self
            .metadata(name)
            .ok_or_else(|| PrmsError::ParameterNotFound(name.to_string()))?;

        let param = Parameter::from_meta(name, meta, &self.dimensions)?;
        self.params.insert(name.to_string(), param);
        Ok(())
    }

    /// Add a prebuilt parameter
    pub fn add_parameter(&mut self, param: Parameter) -> Result<()> {
        if self.exists(param.name()) {
            return Err(PrmsError::ParameterExists(param.name().to_string()));
        }
        self.params.insert(param.name().to_string(), param);
        Ok(())
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Result<&Parameter> {
        self.params
            .get(name)
            .ok_or_else(|| PrmsError::ParameterNotFound(name.to_string()))
    }

    /// Get a mutable reference to a parameter by name
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Parameter> {
        self.params
            .get_mut(name)
            .ok_or_else(|| PrmsError::ParameterNotFound(name.to_string()))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Remove a parameter, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        self.params.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.params.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Parameter)> {
        self.params.iter()
    }

    /// Names of parameters that declare `dim_name`
    fn declaring(&self, dim_name: &str) -> Vec<String> {
        self.params
            .values()
            .filter(|p| p.dimensions().contains(dim_name))
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Check every affected parameter before a cascading edit mutates anything
    fn check_cascade(&self, dim_name: &str, affected: &[String], indices: &[usize]) -> Result<()> {
        let Some(max_index) = indices.iter().max().copied() else {
            return Ok(());
        };

        for name in affected {
            let param = self.get(name)?;
            if !param.has_data() || param.data()?.len() == 1 {
                continue;
            }
            let len = param.axis_len(dim_name)?;
            if max_index >= len {
                return Err(PrmsError::IndexOutOfBounds {
                    context: name.clone(),
                    index: max_index,
                    len,
                });
            }
        }
        Ok(())
    }

    /// Remove positions along a dimension from every parameter that declares it
    ///
    /// The global dimension size is reduced by the number of distinct
    /// positions removed. When it reaches zero, parameters dimensioned only by
    /// `dim_name` are dropped from the collection and the dimension is kept
    /// with size 0.
    pub fn remove_by_index(&mut self, dim_name: &str, indices: &[usize]) -> Result<()> {
        let global_size = self.dimensions.get(dim_name)?.size();
        if let Some(index) = indices.iter().find(|i| **i >= global_size) {
            return Err(PrmsError::IndexOutOfBounds {
                context: dim_name.to_string(),
                index: *index,
                len: global_size,
            });
        }

        let affected = self.declaring(dim_name);
        self.check_cascade(dim_name, &affected, indices)?;

        let removed: BTreeSet<usize> = indices.iter().copied().collect();
        let new_size = global_size - removed.len();

        for name in &affected {
            if new_size == 0 && self.get(name)?.ndims() == 1 {
                debug!(parameter = %name, dimension = %dim_name, "removing parameter");
                self.params.shift_remove(name);
                continue;
            }

            let param = self.get_mut(name)?;
            if param.has_data() {
                param.remove_by_index(dim_name, indices)?;
            } else {
                param.dimensions_mut().get_mut(dim_name)?.set_size(new_size);
            }
        }

        self.dimensions.get_mut(dim_name)?.set_size(new_size);
        debug!(dimension = %dim_name, size = new_size, "dimension resized");
        Ok(())
    }

    /// Keep only the given positions along a dimension in every parameter that declares it
    ///
    /// Positions are taken along each parameter's `dim_name` axis, in the
    /// given order. The global dimension size becomes the number of positions
    /// kept.
    pub fn subset_by_index(&mut self, dim_name: &str, indices: &[usize]) -> Result<()> {
        let global_size = self.dimensions.get(dim_name)?.size();
        if let Some(index) = indices.iter().find(|i| **i >= global_size) {
            return Err(PrmsError::IndexOutOfBounds {
                context: dim_name.to_string(),
                index: *index,
                len: global_size,
            });
        }

        let affected = self.declaring(dim_name);
        self.check_cascade(dim_name, &affected, indices)?;

        let new_size = indices.len();
        for name in &affected {
            let param = self.get_mut(name)?;
            if param.has_data() {
                param.subset_by_index(dim_name, indices)?;
            } else {
                param.dimensions_mut().get_mut(dim_name)?.set_size(new_size);
            }
        }

        self.dimensions.get_mut(dim_name)?.set_size(new_size);
        debug!(dimension = %dim_name, size = new_size, "dimension resized");
        Ok(())
    }

    /// Remove points of interest by their identifiers
    ///
    /// Identifiers are looked up in `poi_gage_id`; unknown identifiers are
    /// logged and ignored. The matching positions are then removed from
    /// every parameter dimensioned by `npoigages`.
    pub fn remove_poi(&mut self, ids: &[&str]) -> Result<()> {
        let index_map = self.get(POI_ID_PARAMETER)?.index_map()?;

        let mut indices = Vec::with_capacity(ids.len());
        for id in ids {
            match index_map.get(&Value::from(*id)) {
                Some(position) => indices.push(*position),
                None => warn!(poi = %id, "POI not found in {}; skipping", POI_ID_PARAMETER),
            }
        }

        if indices.is_empty() {
            return Ok(());
        }
        self.remove_by_index(POI_DIMENSION, &indices)
    }

    /// One `"<name>: OK"` or `"<name>: BAD"` line per parameter
    pub fn check(&self) -> Vec<String> {
        self.params.values().map(Parameter::check).collect()
    }

    /// Names of parameters with the wrong number of values or values out of bounds
    pub fn validate(&self) -> Vec<String> {
        self.params
            .values()
            .filter(|p| !p.has_correct_size() || !p.check_values())
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Resolve bounds written as dimension names
    ///
    /// A maximum naming a global dimension becomes that dimension's size, and
    /// a minimum of `bounded` becomes 1.
    pub fn adjust_bounded_parameters(&mut self) -> Result<()> {
        for param in self.params.values_mut() {
            let maximum = param
                .maximum()
                .and_then(Value::as_str)
                .and_then(|dim| self.dimensions.get(dim).ok())
                .map(|d| d.size());
            if let Some(size) = maximum {
                let size = i32::try_from(size).map_err(|_| {
                    PrmsError::InvalidValue(format!("{}: dimension size {} exceeds i32", param.name(), size))
                })?;
                debug!(parameter = %param.name(), maximum = size, "adjusted bounded maximum");
                param.set_maximum(Some(Value::Integer(size)))?;
            }

            if param.minimum().and_then(Value::as_str) == Some(BOUNDED_SENTINEL) {
                param.set_minimum(Some(Value::Integer(1)))?;
            }
        }
        Ok(())
    }

    /// Plain structure of the collection for serialization
    ///
    /// Parameters without data are left out.
    pub fn tostructure(&self) -> Result<CollectionStructure> {
        let mut parameters = Vec::with_capacity(self.params.len());
        for param in self.params.values() {
            if !param.has_data() {
                debug!(parameter = %param.name(), "skipping parameter without data");
                continue;
            }
            parameters.push(param.tostructure()?);
        }

        Ok(CollectionStructure {
            dimensions: self.dimensions.tostructure(),
            parameters,
        })
    }

    /// Serialize the collection structure to a JSON string
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.tostructure()?)?;
        Ok(json)
    }

    /// Save the collection structure to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &self.tostructure()?)?;
        Ok(())
    }
}

impl fmt::Debug for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameters")
            .field("dimensions", &self.dimensions)
            .field("params", &self.params)
            .field("adhoc", &self.adhoc)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Dimensions -----")?;
        write!(f, "{}", self.dimensions)?;
        writeln!(f, "----- Parameters -----")?;
        for param in self.params.values() {
            writeln!(f, "{} [{}]", param.name(), param.dimensions().names().join(", "))?;
        }
        Ok(())
    }
}
