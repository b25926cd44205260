//! Parameter definition and implementation
//!
//! This module provides the Parameter struct, the fundamental building block of
//! the parameter database. A parameter has a name, a datatype, optional
//! metadata, its own set of dimensions and, once assigned, an array of data
//! whose size always matches the declared dimensions.

use crate::dimensions::{DimensionStructure, Dimensions};
use crate::error::{PrmsError, Result};
use crate::metadata::ParameterMeta;
use crate::parameters::data::{format_paramdb_float, DataColumn, ParamData};
use crate::parameters::value::{DataType, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, error, warn};

/// Dimension used by scalar parameters
pub const SCALAR_DIMENSION: &str = "one";

/// Parameters holding identifiers rather than quantities; they have no statistics
pub const IDENTIFIER_PARAMETERS: &[&str] = &["poi_gage_id"];

const HRU_DIMENSIONS: &[&str] = &["nhru", "ngw", "nssr"];
const SEGMENT_DIMENSIONS: &[&str] = &["nsegment"];

/// Basic statistics over a parameter's values
///
/// All fields are `None` for identifier parameters, string data and empty data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats {
    pub name: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Serialized form of a [`Parameter`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterStructure {
    pub name: String,
    pub datatype: Option<DataType>,
    pub dimensions: Vec<DimensionStructure>,
    pub data: Vec<Value>,
}

/// A named, typed, dimensioned array of PRMS parameter values
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    datatype: Option<DataType>,
    units: Option<String>,
    model: Option<String>,
    description: Option<String>,
    help: Option<String>,
    modules: Option<Vec<String>>,
    minimum: Option<Value>,
    maximum: Option<Value>,
    default: Option<Value>,
    dimensions: Dimensions,
    data: Option<ParamData>,
    modified: bool,
}

/// Coerce a bound or default value to the parameter's datatype
///
/// Float datatypes must convert. Integer datatypes keep the raw value when it
/// does not convert: legacy catalogs write the limits of "bounded" parameters
/// as dimension names (e.g. a maximum of `nsegment`).
fn coerce_metadata_value(value: Value, dtype: Option<DataType>) -> Result<Value> {
    match dtype {
        None | Some(DataType::String) => Ok(value),
        Some(dt @ (DataType::Float | DataType::Double)) => value.cast(dt),
        Some(DataType::Integer) => Ok(value.cast(DataType::Integer).unwrap_or(value)),
    }
}

fn coerce_optional(value: Option<Value>, dtype: Option<DataType>) -> Result<Option<Value>> {
    value.map(|v| coerce_metadata_value(v, dtype)).transpose()
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

impl Parameter {
    /// Create a new parameter with no datatype, metadata, dimensions or data
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::parameters::Parameter;
    ///
    /// let param = Parameter::new("tmax_adj");
    /// assert_eq!(param.name(), "tmax_adj");
    /// assert_eq!(param.ndims(), 0);
    /// assert!(param.data().is_err());
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            datatype: None,
            units: None,
            model: None,
            description: None,
            help: None,
            modules: None,
            minimum: None,
            maximum: None,
            default: None,
            dimensions: Dimensions::new(),
            data: None,
            modified: false,
        }
    }

    /// Create a parameter with a datatype and dimensions
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::dimensions::Dimensions;
    /// use prms_paramdb::parameters::{DataType, Parameter};
    ///
    /// let dims = Dimensions::from_pairs(&[("nhru", 4)]).unwrap();
    /// let mut param = Parameter::with_dimensions("cov_type", DataType::Integer, dims);
    /// param.set_data(vec![1, 0, 1, 2]).unwrap();
    /// assert!(param.has_correct_size());
    /// ```
    pub fn with_dimensions(name: &str, datatype: DataType, dimensions: Dimensions) -> Self {
        let mut param = Self::new(name);
        param.datatype = Some(datatype);
        param.dimensions = dimensions;
        param
    }

    /// Create a parameter from catalog metadata
    ///
    /// Dimension sizes are taken from `global`; a declared dimension missing
    /// from `global` is a `DimensionNotFound` error.
    pub fn from_meta(name: &str, meta: &ParameterMeta, global: &Dimensions) -> Result<Self> {
        let mut dimensions = Dimensions::new();
        for dim_name in &meta.dimensions {
            dimensions.add(dim_name, global.get(dim_name)?.size())?;
        }

        let mut param = Self::new(name);
        param.datatype = meta.datatype;
        param.units = meta.units.clone();
        param.model = meta.model.clone();
        param.description = meta.description.clone();
        param.help = meta.help.clone();
        param.modules = meta.modules.clone();
        param.set_minimum(meta.minimum.clone())?;
        param.set_maximum(meta.maximum.clone())?;
        param.set_default(meta.default.clone())?;
        param.dimensions = dimensions;
        Ok(param)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datatype(&self) -> Option<DataType> {
        self.datatype
    }

    /// Set the datatype, re-coercing the bounds and default to match
    ///
    /// Nothing changes if a bound or the default cannot be converted.
    pub fn set_datatype(&mut self, datatype: Option<DataType>) -> Result<()> {
        let minimum = coerce_optional(self.minimum.clone(), datatype)?;
        let maximum = coerce_optional(self.maximum.clone(), datatype)?;
        let default = coerce_optional(self.default.clone(), datatype)?;

        self.datatype = datatype;
        self.minimum = minimum;
        self.maximum = maximum;
        self.default = default;
        Ok(())
    }

    /// Set the datatype from its PRMS code (1-Integer, 2-Float, 3-Double, 4-String)
    pub fn set_datatype_code(&mut self, code: i64) -> Result<()> {
        self.set_datatype(Some(DataType::from_code(code)?))
    }

    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    pub fn set_units(&mut self, units: Option<&str>) {
        self.units = units.map(str::to_string);
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn set_model(&mut self, model: Option<&str>) {
        self.model = model.map(str::to_string);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn set_help(&mut self, help: Option<&str>) {
        self.help = help.map(str::to_string);
    }

    /// Names of the modules that require the parameter
    pub fn modules(&self) -> Option<&[String]> {
        self.modules.as_deref()
    }

    pub fn set_modules(&mut self, modules: Option<Vec<String>>) {
        self.modules = modules;
    }

    pub fn minimum(&self) -> Option<&Value> {
        self.minimum.as_ref()
    }

    /// Set the minimum valid value, coerced to the current datatype
    pub fn set_minimum(&mut self, value: Option<Value>) -> Result<()> {
        self.minimum = coerce_optional(value, self.datatype)?;
        Ok(())
    }

    pub fn maximum(&self) -> Option<&Value> {
        self.maximum.as_ref()
    }

    /// Set the maximum valid value, coerced to the current datatype
    pub fn set_maximum(&mut self, value: Option<Value>) -> Result<()> {
        self.maximum = coerce_optional(value, self.datatype)?;
        Ok(())
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Set the default value, coerced to the current datatype
    pub fn set_default(&mut self, value: Option<Value>) -> Result<()> {
        self.default = coerce_optional(value, self.datatype)?;
        Ok(())
    }

    /// The parameter's own dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub(crate) fn dimensions_mut(&mut self) -> &mut Dimensions {
        &mut self.dimensions
    }

    /// Append a dimension
    ///
    /// Once data exists the new total size must still match it.
    pub fn add_dimension(&mut self, name: &str, size: usize) -> Result<()> {
        if let Some(data) = &self.data {
            let expected = self.dimensions.total_size().unwrap_or(1) * size;
            if expected != data.len() {
                return Err(PrmsError::SizeMismatch {
                    name: self.name.clone(),
                    expected,
                    actual: data.len(),
                });
            }
        }
        self.dimensions.add(name, size)
    }

    pub fn ndims(&self) -> usize {
        self.dimensions.ndims()
    }

    /// Total size declared by the dimensions (0 when there are none)
    pub fn size(&self) -> usize {
        self.dimensions.total_size().unwrap_or(0)
    }

    /// Whether data has been modified after it was first assigned
    pub fn modified(&self) -> bool {
        self.modified
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// The parameter data
    ///
    /// # Returns
    ///
    /// The data, or `NoData` if none has been assigned yet
    pub fn data(&self) -> Result<&ParamData> {
        self.data
            .as_ref()
            .ok_or_else(|| PrmsError::NoData(self.name.clone()))
    }

    /// Whether the only dimension is the scalar dimension `one`
    pub fn is_scalar(&self) -> bool {
        self.ndims() == 1 && self.dimensions.contains(SCALAR_DIMENSION)
    }

    /// Assign data to the parameter
    ///
    /// The incoming data is converted to the parameter's datatype (or sets the
    /// datatype when none is declared yet) and reconciled with the declared
    /// dimensions:
    ///
    /// 1. Same number of values but fewer axes: the values are laid out in the
    ///    declared shape with the first axis varying fastest.
    /// 2. Same number of values and axes: stored as given.
    /// 3. Same number of values but more axes: `RankMismatch`.
    /// 4. More values than declared for a parameter dimensioned only by `one`:
    ///    the first value is kept and a warning is logged. Older parameter
    ///    databases contain such oversized scalar arrays.
    /// 5. Anything else: `SizeMismatch`.
    ///
    /// Assigning data equal to what is already stored keeps the old storage
    /// and leaves [`Parameter::modified`] untouched; different data replaces
    /// it and marks the parameter modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::dimensions::Dimensions;
    /// use prms_paramdb::parameters::{DataType, ParamData, Parameter};
    ///
    /// let dims = Dimensions::from_pairs(&[("nhru", 2), ("nmonths", 3)]).unwrap();
    /// let mut param = Parameter::with_dimensions("tmax_adj", DataType::Float, dims);
    ///
    /// param.set_data(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(param.data().unwrap().shape(), &[2, 3]);
    ///
    /// // Values were listed with the hru axis varying fastest
    /// assert_eq!(param.to_flat().unwrap(), ParamData::from(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]));
    /// ```
    pub fn set_data<D: Into<ParamData>>(&mut self, data: D) -> Result<()> {
        let expected = self
            .dimensions
            .total_size()
            .ok_or_else(|| PrmsError::MissingDimensions {
                name: self.name.clone(),
            })?;

        let incoming = data.into();
        let incoming = match self.datatype {
            Some(dtype) => incoming.cast(dtype)?,
            None => incoming,
        };

        let declared_rank = self.ndims();
        let incoming_rank = incoming.ndim();

        let reconciled = if incoming.len() == expected {
            if incoming_rank == 0 || incoming_rank < declared_rank {
                incoming.reshape_fortran(&self.dimensions.shape())?
            } else if incoming_rank == declared_rank {
                incoming
            } else {
                return Err(PrmsError::RankMismatch {
                    name: self.name.clone(),
                    expected: declared_rank,
                    actual: incoming_rank,
                });
            }
        } else if incoming.len() > expected && self.is_scalar() {
            warn!(
                parameter = %self.name,
                count = incoming.len(),
                "parameter with dimension \"one\" was passed multiple values; using first value only"
            );
            incoming.first()?
        } else {
            return Err(PrmsError::SizeMismatch {
                name: self.name.clone(),
                expected,
                actual: incoming.len(),
            });
        };

        if self.datatype.is_none() {
            self.datatype = Some(reconciled.datatype());
        }

        match self.data.as_ref().map(|old| *old == reconciled) {
            None => self.data = Some(reconciled),
            Some(true) => {
                debug!(parameter = %self.name, "updated value is equal to the old value");
            }
            Some(false) => {
                self.data = Some(reconciled);
                self.modified = true;
            }
        }
        Ok(())
    }

    /// Update a single element (1-D) or row (2-D) in place
    ///
    /// `index` is zero-based along the first axis. A scalar value fills the
    /// whole row. The parameter is marked modified unless the slot already
    /// held the new value.
    pub fn update_element<V: Into<ParamData>>(&mut self, index: usize, value: V) -> Result<()> {
        let dtype = self.data()?.datatype();
        let value: ParamData = value.into();
        let value = value.cast(dtype)?;

        let name = self.name.clone();
        let data = self
            .data
            .as_mut()
            .ok_or_else(|| PrmsError::NoData(name.clone()))?;

        if data.assign_axis0(index, &value, &name)? {
            self.modified = true;
        }
        Ok(())
    }

    /// Check that every value lies within `[minimum, maximum]`
    ///
    /// Returns `true` when either bound is unset or is not numeric (bounds
    /// named after a dimension are not checked), and for string data.
    pub fn check_values(&self) -> bool {
        let (Some(min), Some(max)) = (&self.minimum, &self.maximum) else {
            return true;
        };
        let (Some(min), Some(max)) = (min.as_f64(), max.as_f64()) else {
            return true;
        };

        match self.data.as_ref().and_then(ParamData::to_f64_vec) {
            Some(values) => values.iter().all(|v| *v >= min && *v <= max),
            None => true,
        }
    }

    /// Whether the number of values matches the declared dimension sizes
    pub fn has_correct_size(&self) -> bool {
        match (&self.data, self.dimensions.total_size()) {
            (Some(data), Some(total)) => data.len() == total,
            _ => false,
        }
    }

    /// One-line size check, `"<name>: OK"` or `"<name>: BAD"`
    pub fn check(&self) -> String {
        if self.has_correct_size() {
            format!("{}: OK", self.name)
        } else {
            format!("{}: BAD", self.name)
        }
    }

    /// Reshape the parameter, broadcasting existing values as necessary
    ///
    /// - A scalar (`one`) parameter is broadcast to every axis of `new_dims`.
    /// - A 1-D parameter whose dimension appears in `new_dims` is broadcast to
    ///   the new shape; when the values do not line up with the last new axis
    ///   they are broadcast along the reversed shape and transposed.
    ///
    /// In both cases the parameter's dimensions become exactly `new_dims`.
    /// Reshaping 1-D to 1-D is logged as an error and leaves the parameter
    /// unchanged, as does any other combination.
    pub fn reshape(&mut self, new_dims: &Dimensions) -> Result<()> {
        if self.ndims() != 1 {
            return Ok(());
        }

        let data = self.data()?;
        let new_shape = new_dims.shape();

        let reshaped = if self.dimensions.contains(SCALAR_DIMENSION) {
            data.broadcast_to(&new_shape)
        } else if self.dimensions.names().iter().all(|d| new_dims.contains(d)) {
            if new_dims.ndims() == 1 {
                error!(parameter = %self.name, "Cannot reshape from 1D array to 1D array");
                return Ok(());
            }

            let reversed: Vec<usize> = new_shape.iter().rev().copied().collect();
            data.broadcast_to(&new_shape).or_else(|| {
                data.broadcast_to(&reversed)
                    .map(ParamData::reversed_axes)
            })
        } else {
            return Ok(());
        };

        let reshaped = reshaped.ok_or_else(|| PrmsError::SizeMismatch {
            name: self.name.clone(),
            expected: new_shape.iter().product(),
            actual: data.len(),
        })?;

        self.dimensions = new_dims.clone();
        self.data = Some(reshaped);
        Ok(())
    }

    /// Length of the named axis in the stored data
    pub(crate) fn axis_len(&self, dim_name: &str) -> Result<usize> {
        let position = self.dimensions.get_position(dim_name)?;
        self.data()?
            .shape()
            .get(position)
            .copied()
            .ok_or_else(|| PrmsError::RankMismatch {
                name: self.name.clone(),
                expected: self.ndims(),
                actual: self.data.as_ref().map(ParamData::ndim).unwrap_or(0),
            })
    }

    fn check_indices(&self, indices: &[usize], len: usize) -> Result<()> {
        match indices.iter().find(|i| **i >= len) {
            Some(index) => Err(PrmsError::IndexOutOfBounds {
                context: self.name.clone(),
                index: *index,
                len,
            }),
            None => Ok(()),
        }
    }

    /// Remove positions along the named axis
    ///
    /// The dimension's size is updated to the new axis length. A parameter
    /// holding a single value cannot shrink; that case is logged and left
    /// unchanged.
    pub fn remove_by_index(&mut self, dim_name: &str, indices: &[usize]) -> Result<()> {
        let position = self.dimensions.get_position(dim_name)?;
        let data = self.data()?;

        if data.len() == 1 {
            warn!(parameter = %self.name, "Cannot reduce array of size one");
            return Ok(());
        }

        let len = self.axis_len(dim_name)?;
        self.check_indices(indices, len)?;

        let removed: HashSet<usize> = indices.iter().copied().collect();
        let kept: Vec<usize> = (0..len).filter(|i| !removed.contains(i)).collect();
        let reduced = data.select(position, &kept);
        let new_size = reduced.shape()[position];

        self.dimensions.get_mut(dim_name)?.set_size(new_size);
        self.data = Some(reduced);
        Ok(())
    }

    /// Keep only the given positions along the named axis, in the given order
    ///
    /// The named dimension's size is updated from the result. A parameter
    /// holding a single value is logged and left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::dimensions::Dimensions;
    /// use prms_paramdb::parameters::{DataType, ParamData, Parameter};
    ///
    /// let dims = Dimensions::from_pairs(&[("npoigages", 4)]).unwrap();
    /// let mut param = Parameter::with_dimensions("poi_gage_segment", DataType::Integer, dims);
    /// param.set_data(vec![12, 4, 45, 26]).unwrap();
    ///
    /// param.subset_by_index("npoigages", &[0, 2]).unwrap();
    /// assert_eq!(param.data().unwrap(), &ParamData::from(vec![12, 45]));
    /// assert_eq!(param.dimensions().get("npoigages").unwrap().size(), 2);
    /// ```
    pub fn subset_by_index(&mut self, dim_name: &str, indices: &[usize]) -> Result<()> {
        let position = self.dimensions.get_position(dim_name)?;
        let data = self.data()?;

        if data.len() == 1 {
            warn!(parameter = %self.name, "Cannot reduce array of size one");
            return Ok(());
        }

        let len = self.axis_len(dim_name)?;
        self.check_indices(indices, len)?;

        let subset = data.select(position, indices);
        let new_size = subset.shape()[position];

        self.dimensions.get_mut(dim_name)?.set_size(new_size);
        self.data = Some(subset);
        Ok(())
    }

    /// The data as named columns
    ///
    /// 1-D data is a single column named after the parameter. 2-D data has one
    /// column per position on the second axis, named `<name>_<n>` with `n`
    /// starting at 1.
    pub fn as_columns(&self) -> Result<Vec<DataColumn>> {
        let data = self.data()?;
        match data.ndim() {
            1 => Ok(vec![DataColumn {
                name: self.name.clone(),
                data: data.clone(),
            }]),
            2 => Ok((0..data.shape()[1])
                .map(|j| DataColumn {
                    name: format!("{}_{}", self.name, j + 1),
                    data: data.index_axis(1, j),
                })
                .collect()),
            ndim => Err(PrmsError::RankMismatch {
                name: self.name.clone(),
                expected: 2,
                actual: ndim,
            }),
        }
    }

    /// The data flattened in column-major order
    ///
    /// Assigning the result back with [`Parameter::set_data`] reproduces the
    /// stored array.
    pub fn to_flat(&self) -> Result<ParamData> {
        Ok(self.data()?.to_flat())
    }

    /// The data as a list of values in column-major order
    pub fn tolist(&self) -> Result<Vec<Value>> {
        Ok(self.data()?.to_values())
    }

    /// Render the data in the parameter database CSV format
    ///
    /// A `$id,<name>` header followed by one `<index>,<value>` line per value,
    /// with 1-based indices in column-major order. Floats are written without
    /// exponents or extra trailing zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::dimensions::Dimensions;
    /// use prms_paramdb::parameters::{DataType, Parameter};
    ///
    /// let dims = Dimensions::from_pairs(&[("nhru", 2)]).unwrap();
    /// let mut param = Parameter::with_dimensions("hru_area", DataType::Float, dims);
    /// param.set_data(vec![1.0f32, 13.12]).unwrap();
    ///
    /// assert_eq!(param.toparamdb().unwrap(), "$id,hru_area\n1,1.0\n2,13.12\n");
    /// ```
    pub fn toparamdb(&self) -> Result<String> {
        let data = self.data()?;
        let mut out = format!("$id,{}\n", self.name);

        // Formatting straight from the stored floats; going through f64 text
        // first would change float32 values in the last digits
        match data.to_f64_vec() {
            Some(values) if data.datatype().is_float() => {
                for (i, v) in values.iter().enumerate() {
                    out.push_str(&format!("{},{}\n", i + 1, format_paramdb_float(*v)));
                }
            }
            _ => {
                for (i, v) in data.to_values().iter().enumerate() {
                    out.push_str(&format!("{},{}\n", i + 1, v));
                }
            }
        }
        Ok(out)
    }

    /// Minimum, maximum, mean and median of the values
    pub fn stats(&self) -> Result<Stats> {
        let mut stats = Stats {
            name: self.name.clone(),
            ..Stats::default()
        };

        if IDENTIFIER_PARAMETERS.contains(&self.name.as_str()) {
            return Ok(stats);
        }

        if let Some(values) = self.data()?.to_f64_vec().filter(|v| !v.is_empty()) {
            stats.min = values.iter().copied().reduce(f64::min);
            stats.max = values.iter().copied().reduce(f64::max);
            stats.mean = Some(values.iter().sum::<f64>() / values.len() as f64);
            stats.median = median(&values);
        }
        Ok(stats)
    }

    /// Sorted distinct values
    pub fn unique(&self) -> Result<ParamData> {
        Ok(self.data()?.unique())
    }

    /// Map each distinct value to its first position in column-major order
    ///
    /// Used to translate identifiers such as gage ids into positions.
    pub fn index_map(&self) -> Result<IndexMap<Value, usize>> {
        let mut map = IndexMap::new();
        for (i, value) in self.data()?.to_values().into_iter().enumerate() {
            map.entry(value).or_insert(i);
        }
        Ok(map)
    }

    /// Positions along the first axis holding `value`
    pub fn value_index<V: Into<Value>>(&self, value: V) -> Result<Vec<usize>> {
        let data = self.data()?;
        let value: Value = value.into();
        let value = value.cast(data.datatype())?;
        let rows = data.shape().first().copied().unwrap_or(0).max(1);

        let mut found: Vec<usize> = data
            .to_values()
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == value)
            .map(|(i, _)| i % rows)
            .collect();
        found.sort_unstable();
        found.dedup();
        Ok(found)
    }

    /// Whether there is more than one value and all of them are equal
    pub fn all_equal(&self) -> Result<bool> {
        let values = self.data()?.to_values();
        Ok(values.len() > 1 && values.iter().all(|v| *v == values[0]))
    }

    /// Whether the parameter is dimensioned by HRUs
    pub fn is_hru_param(&self) -> bool {
        HRU_DIMENSIONS.iter().any(|d| self.dimensions.contains(d))
    }

    /// Whether the parameter is dimensioned by stream segments
    pub fn is_seg_param(&self) -> bool {
        SEGMENT_DIMENSIONS.iter().any(|d| self.dimensions.contains(d))
    }

    /// Plain structure of the parameter for serialization
    pub fn tostructure(&self) -> Result<ParameterStructure> {
        Ok(ParameterStructure {
            name: self.name.clone(),
            datatype: self.datatype,
            dimensions: self.dimensions.tostructure(),
            data: self.tolist()?,
        })
    }
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datatype = self
            .datatype
            .map(|d| d.to_string())
            .unwrap_or_else(|| "None".to_string());

        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "datatype: {}", datatype)?;
        writeln!(f, "units: {}", or_none(self.units()))?;
        writeln!(f, "ndims: {}", self.ndims())?;
        writeln!(f, "description: {}", or_none(self.description()))?;
        writeln!(f, "help: {}", or_none(self.help()))?;

        if let Some(min) = &self.minimum {
            writeln!(f, "Minimum value: {}", min)?;
        }
        if let Some(max) = &self.maximum {
            writeln!(f, "Maximum value: {}", max)?;
        }
        if let Some(default) = &self.default {
            writeln!(f, "Default value: {}", default)?;
        }

        match &self.data {
            Some(data) => writeln!(f, "Size of data: {}", data.len())?,
            None => writeln!(f, "Size of data: <empty>")?,
        }

        if let Some(modules) = &self.modules {
            write!(f, "Modules: ")?;
            for module in modules {
                write!(f, "{} ", module)?;
            }
            writeln!(f)?;
        }

        if self.ndims() > 0 {
            write!(f, "Dimensions:\n{}", self.dimensions)?;
        }
        Ok(())
    }
}
