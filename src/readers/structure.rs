//! Reader for serialized collection structures

use crate::dimensions::Dimensions;
use crate::error::Result;
use crate::parameters::{CollectionStructure, DataType, ParamData, Parameter, Parameters};
use crate::readers::Reader;
use tracing::warn;

/// Reads parameters from a [`CollectionStructure`]
///
/// Parameters known to the catalog are created from their metadata; others
/// are created from the datatype and dimensions in the structure alone.
///
/// # Examples
///
/// ```
/// use prms_paramdb::metadata::Catalog;
/// use prms_paramdb::parameters::Parameters;
/// use prms_paramdb::readers::{Reader, StructureReader};
///
/// let json = r#"{
///     "dimensions": [{"name": "nhru", "size": 2}],
///     "parameters": [
///         {"name": "cov_type", "datatype": 1, "dimensions": [{"name": "nhru", "size": 2}], "data": [0, 3]}
///     ]
/// }"#;
///
/// let mut params = Parameters::new(Catalog::new());
/// StructureReader::from_json(json).unwrap().read(&mut params).unwrap();
/// assert_eq!(params.get("cov_type").unwrap().size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StructureReader {
    structure: CollectionStructure,
}

impl StructureReader {
    pub fn new(structure: CollectionStructure) -> Self {
        Self { structure }
    }

    /// Parse the structure from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl Reader for StructureReader {
    fn read(&mut self, params: &mut Parameters) -> Result<()> {
        for dim in &self.structure.dimensions {
            params.dimensions_mut().set(&dim.name, dim.size);
        }

        for entry in &self.structure.parameters {
            if params.exists(&entry.name) {
                warn!(parameter = %entry.name, "parameter is duplicated; skipping");
                continue;
            }

            let dtype = entry.datatype.unwrap_or(DataType::String);
            let mut param = match params.metadata(&entry.name) {
                Some(meta) => Parameter::from_meta(&entry.name, meta, params.dimensions())?,
                None => {
                    let mut dimensions = Dimensions::new();
                    for dim in &entry.dimensions {
                        dimensions.add(&dim.name, dim.size)?;
                    }
                    Parameter::with_dimensions(&entry.name, dtype, dimensions)
                }
            };

            param.set_data(ParamData::from_values(&entry.data, dtype)?)?;
            params.add_parameter(param)?;
        }
        Ok(())
    }
}
