//! # prms-paramdb
//!
//! `prms-paramdb` is a typed, dimensioned parameter database for the PRMS
//! hydrologic model: named multi-dimensional arrays whose shapes are governed
//! by a shared set of named dimension sizes.
//!
//! The library provides:
//! - Ordered dimension sets and typed parameter arrays with column-major layout
//! - Shape reconciliation, bounds checking and reshape with broadcasting
//! - Collection-wide removal and subsetting along a dimension
//! - Metadata catalogs and readers for parameter database records and JSON
//!
//! ## Basic Usage
//!
//! ```
//! use prms_paramdb::metadata::{Catalog, ParameterMeta};
//! use prms_paramdb::parameters::{DataType, Parameters};
//! use prms_paramdb::readers::{MemorySource, ParamDbReader, Reader};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_parameter("cov_type", ParameterMeta {
//!     datatype: Some(DataType::Integer),
//!     dimensions: vec!["nhru".to_string()],
//!     ..ParameterMeta::default()
//! });
//!
//! let mut source = MemorySource::new();
//! source.add_dimension("nhru", 3);
//! source.add_records("cov_type", "$id,cov_type\n1,0\n2,1\n3,3\n");
//!
//! let mut params = Parameters::new(catalog);
//! ParamDbReader::new(source).read(&mut params).unwrap();
//!
//! assert!(params.validate().is_empty());
//! println!("{}", params);
//! ```

// Public modules
pub mod error;

pub mod dimensions;

pub mod metadata;

// Parameter system
pub mod parameters;

pub mod readers;

// Re-exports for convenience
pub use dimensions::{Dimension, Dimensions};
pub use error::{PrmsError, Result};
pub use metadata::{Catalog, MetadataCatalog};
pub use parameters::{DataType, ParamData, Parameter, Parameters, Value};
pub use readers::Reader;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
