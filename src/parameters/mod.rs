//! # Parameter System
//!
//! This module provides the typed, dimensioned parameter storage at the core of
//! the database.
//!
//! ## Key Features
//!
//! - **Typed Storage**: Integer, float, double and string arrays held as `ndarray` arrays
//! - **Shape Reconciliation**: Flat listings are laid out in the declared shape in column-major order
//! - **Bounds Checking**: Minimum and maximum values, with legacy dimension-named bounds
//! - **Structural Edits**: Reshape with broadcasting, removal and subsetting by position
//! - **Serialization Support**: Export to plain structures and JSON with serde
//!
//! ## Core Components
//!
//! - [`Parameter`]: A single named array with metadata and its own dimensions
//! - [`Parameters`]: The collection, with global dimensions and a metadata catalog
//! - [`ParamData`] and [`Value`]: Array storage and single elements
//!
//! ## Example Usage
//!
//! ```rust
//! use prms_paramdb::metadata::{Catalog, ParameterMeta};
//! use prms_paramdb::parameters::{DataType, ParamData, Parameters};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_parameter("tmax_adj", ParameterMeta {
//!     datatype: Some(DataType::Float),
//!     dimensions: vec!["nhru".to_string(), "nmonths".to_string()],
//!     ..ParameterMeta::default()
//! });
//!
//! let mut params = Parameters::new(catalog);
//! params.dimensions_mut().add("nhru", 2).unwrap();
//! params.dimensions_mut().add("nmonths", 12).unwrap();
//!
//! params.add("tmax_adj").unwrap();
//! params.get_mut("tmax_adj").unwrap().set_data(vec![0.5f32; 24]).unwrap();
//!
//! // Drop the second HRU everywhere
//! params.remove_by_index("nhru", &[1]).unwrap();
//! assert_eq!(params.get("tmax_adj").unwrap().data().unwrap().shape(), &[1, 12]);
//! ```

pub mod data;
pub mod parameter;
pub mod parameters;
pub mod value;


// Re-export key types
pub use data::{DataColumn, ParamData};
pub use parameter::{Parameter, ParameterStructure, Stats, IDENTIFIER_PARAMETERS, SCALAR_DIMENSION};
pub use parameters::{CollectionStructure, Parameters, POI_DIMENSION, POI_ID_PARAMETER};
pub use value::{DataType, Value};
