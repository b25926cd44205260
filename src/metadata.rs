//! Parameter and dimension metadata catalogs
//!
//! A catalog describes every parameter a model knows about: its datatype,
//! dimensions, bounds, default and documentation. Collections consult the
//! catalog when a parameter is added by name and when parameter files are
//! read. [`MetadataCatalog`] is the lookup interface; [`Catalog`] is an
//! in-memory implementation that loads from JSON.

use crate::error::Result;
use crate::parameters::value::{DataType, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Catalog entry for a parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterMeta {
    pub datatype: Option<DataType>,
    pub description: Option<String>,
    pub help: Option<String>,
    pub units: Option<String>,
    pub model: Option<String>,
    pub modules: Option<Vec<String>>,
    pub minimum: Option<Value>,
    pub maximum: Option<Value>,
    pub default: Option<Value>,
    /// Dimension names in axis order
    #[serde(default)]
    pub dimensions: Vec<String>,
}

/// Catalog entry for a dimension
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionMeta {
    pub description: Option<String>,
    #[serde(default)]
    pub default: usize,
}

/// Read-only lookup of parameter and dimension metadata
pub trait MetadataCatalog: Send + Sync {
    /// Metadata for the named parameter, if known
    fn parameter(&self, name: &str) -> Option<&ParameterMeta>;

    /// Metadata for the named dimension, if known
    fn dimension(&self, name: &str) -> Option<&DimensionMeta>;

    /// Names of all known parameters in catalog order
    fn parameter_names(&self) -> Vec<String>;
}

#[derive(Deserialize)]
struct ParameterEntry {
    name: String,
    #[serde(flatten)]
    meta: ParameterMeta,
}

#[derive(Deserialize)]
struct DimensionEntry {
    name: String,
    #[serde(flatten)]
    meta: DimensionMeta,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    dimensions: Vec<DimensionEntry>,
    #[serde(default)]
    parameters: Vec<ParameterEntry>,
}

/// In-memory metadata catalog
///
/// # Examples
///
/// ```
/// use prms_paramdb::metadata::{Catalog, MetadataCatalog};
/// use prms_paramdb::parameters::DataType;
///
/// let catalog = Catalog::from_json(r#"{
///     "dimensions": [{"name": "nhru", "description": "Number of HRUs"}],
///     "parameters": [
///         {"name": "cov_type", "datatype": 1, "minimum": 0, "maximum": 4, "dimensions": ["nhru"]}
///     ]
/// }"#).unwrap();
///
/// let meta = catalog.parameter("cov_type").unwrap();
/// assert_eq!(meta.datatype, Some(DataType::Integer));
/// assert_eq!(meta.dimensions, vec!["nhru"]);
/// assert!(catalog.dimension("nhru").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parameters: IndexMap<String, ParameterMeta>,
    dimensions: IndexMap<String, DimensionMeta>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter entry
    ///
    /// The first entry for a name wins; later duplicates are logged and
    /// ignored. Returns whether the entry was added.
    pub fn add_parameter(&mut self, name: &str, meta: ParameterMeta) -> bool {
        if self.parameters.contains_key(name) {
            warn!(parameter = %name, "parameter is duplicated in the catalog; keeping the first entry");
            return false;
        }
        self.parameters.insert(name.to_string(), meta);
        true
    }

    /// Add a dimension entry, keeping the first entry for a name
    pub fn add_dimension(&mut self, name: &str, meta: DimensionMeta) -> bool {
        if self.dimensions.contains_key(name) {
            warn!(dimension = %name, "dimension is duplicated in the catalog; keeping the first entry");
            return false;
        }
        self.dimensions.insert(name.to_string(), meta);
        true
    }

    /// Parse a catalog from JSON
    ///
    /// The document holds `dimensions` and `parameters` lists whose entries
    /// carry a `name` next to the metadata fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for entry in file.dimensions {
            catalog.add_dimension(&entry.name, entry.meta);
        }
        for entry in file.parameters {
            catalog.add_parameter(&entry.name, entry.meta);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl MetadataCatalog for Catalog {
    fn parameter(&self, name: &str) -> Option<&ParameterMeta> {
        self.parameters.get(name)
    }

    fn dimension(&self, name: &str) -> Option<&DimensionMeta> {
        self.dimensions.get(name)
    }

    fn parameter_names(&self) -> Vec<String> {
        self.parameters.keys().cloned().collect()
    }
}
