//! Reader for parameter database records
//!
//! A parameter database keeps one record set per parameter: a `$id,<name>`
//! header followed by `<index>,<value>` rows in column-major order. The
//! dimension sizes come separately, as `name,size` rows.

use crate::dimensions::DimensionStructure;
use crate::error::{PrmsError, Result};
use crate::parameters::{DataType, ParamData, Parameter, Parameters, Value};
use crate::readers::{Reader, ReaderConfig};
use csv::{ReaderBuilder, Trim};
use indexmap::IndexMap;
use std::io::Read;
use tracing::{debug, warn};

/// Provider of dimension sizes and per-parameter records
pub trait RecordSource {
    /// Global dimensions in axis order
    fn dimensions(&self) -> Result<Vec<DimensionStructure>>;

    /// Records for the named parameter, or `None` if the source has none
    fn records(&self, name: &str) -> Option<Box<dyn Read + '_>>;
}

/// In-memory record source
///
/// # Examples
///
/// ```
/// use prms_paramdb::readers::{MemorySource, RecordSource};
///
/// let mut source = MemorySource::new();
/// source.add_dimension_records("name,size\nnhru,2\n").unwrap();
/// source.add_records("cov_type", "$id,cov_type\n1,0\n2,3\n");
///
/// assert_eq!(source.dimensions().unwrap()[0].size, 2);
/// assert!(source.records("cov_type").is_some());
/// assert!(source.records("hru_area").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dimensions: Vec<DimensionStructure>,
    records: IndexMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dimension(&mut self, name: &str, size: usize) {
        self.dimensions.push(DimensionStructure {
            name: name.to_string(),
            size,
        });
    }

    /// Add dimensions from `name,size` CSV text with a header row
    pub fn add_dimension_records(&mut self, text: &str) -> Result<()> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        for dim in reader.deserialize::<DimensionStructure>() {
            self.dimensions.push(dim?);
        }
        Ok(())
    }

    /// Set the record text for a parameter
    pub fn add_records(&mut self, name: &str, text: &str) {
        self.records.insert(name.to_string(), text.to_string());
    }
}

impl RecordSource for MemorySource {
    fn dimensions(&self) -> Result<Vec<DimensionStructure>> {
        Ok(self.dimensions.clone())
    }

    fn records(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        self.records
            .get(name)
            .map(|text| Box::new(text.as_bytes()) as Box<dyn Read + '_>)
    }
}

/// Parse `$id,<name>` records into rank-1 data of the given datatype
///
/// Only the value column is used; values are listed in file order.
pub fn parse_records<R: Read>(reader: R, dtype: DataType) -> Result<ParamData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let value = record.get(1).ok_or_else(|| {
            PrmsError::InvalidValue(format!("record {:?} has no value column", record))
        })?;
        values.push(Value::from(value));
    }
    ParamData::from_values(&values, dtype)
}

/// Reads a parameter database from a [`RecordSource`]
///
/// Parameters are taken in catalog order. A parameter already in the
/// collection, or one the source has no records for, is logged and skipped.
///
/// # Examples
///
/// ```
/// use prms_paramdb::metadata::{Catalog, ParameterMeta};
/// use prms_paramdb::parameters::{DataType, ParamData, Parameters};
/// use prms_paramdb::readers::{MemorySource, ParamDbReader, Reader};
///
/// let mut catalog = Catalog::new();
/// catalog.add_parameter("hru_area", ParameterMeta {
///     datatype: Some(DataType::Float),
///     dimensions: vec!["nhru".to_string()],
///     ..ParameterMeta::default()
/// });
///
/// let mut source = MemorySource::new();
/// source.add_dimension("nhru", 2);
/// source.add_records("hru_area", "$id,hru_area\n1,1.0\n2,13.12\n");
///
/// let mut params = Parameters::new(catalog);
/// ParamDbReader::new(source).read(&mut params).unwrap();
///
/// let data = params.get("hru_area").unwrap().data().unwrap();
/// assert_eq!(data, &ParamData::from(vec![1.0f32, 13.12]));
/// ```
#[derive(Debug, Clone)]
pub struct ParamDbReader<S: RecordSource> {
    source: S,
    config: ReaderConfig,
}

impl<S: RecordSource> ParamDbReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    pub fn with_config(source: S, config: ReaderConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

impl<S: RecordSource> Reader for ParamDbReader<S> {
    fn read(&mut self, params: &mut Parameters) -> Result<()> {
        for dim in self.source.dimensions()? {
            params.dimensions_mut().set(&dim.name, dim.size);
        }

        for name in params.catalog().parameter_names() {
            if params.exists(&name) {
                warn!(parameter = %name, "parameter is duplicated; skipping");
                continue;
            }
            let Some(records) = self.source.records(&name) else {
                warn!(parameter = %name, "no records found for parameter; skipping");
                continue;
            };

            // Filled before insertion so a failed parameter is never registered
            let meta = params
                .metadata(&name)
                .ok_or_else(|| PrmsError::ParameterNotFound(name.clone()))?;
            let mut param = Parameter::from_meta(&name, meta, params.dimensions())?;
            let dtype = param.datatype().unwrap_or(DataType::String);
            param.set_data(parse_records(records, dtype)?)?;
            debug!(parameter = %name, size = param.size(), "read parameter");
            params.add_parameter(param)?;
        }

        if self.config.adjust_bounded {
            params.adjust_bounded_parameters()?;
        }
        Ok(())
    }
}
