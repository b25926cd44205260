//! Typed array storage for parameter data
//!
//! [`ParamData`] holds one `ndarray` array per PRMS datatype. Parameter files
//! list values with the first axis varying fastest, so every flatten and
//! reshape here is column-major (Fortran order) and never relies on
//! `ndarray`'s default row-major layout.

use crate::error::{PrmsError, Result};
use crate::parameters::value::{parse_float, parse_integer, DataType, Value};
use ndarray::{arr0, Array1, Array2, ArrayD, Axis, IxDyn, ShapeBuilder};

/// Typed parameter data
#[derive(Debug, Clone, PartialEq)]
pub enum ParamData {
    Integer(ArrayD<i32>),
    Float(ArrayD<f32>),
    Double(ArrayD<f64>),
    String(ArrayD<String>),
}

/// Apply the same expression to whichever array a `ParamData` holds
macro_rules! with_array {
    ($data:expr, $arr:ident => $body:expr) => {
        match $data {
            ParamData::Integer($arr) => $body,
            ParamData::Float($arr) => $body,
            ParamData::Double($arr) => $body,
            ParamData::String($arr) => $body,
        }
    };
}

/// Like `with_array!`, but wraps the resulting array back into the same variant
macro_rules! map_array {
    ($data:expr, $arr:ident => $body:expr) => {
        match $data {
            ParamData::Integer($arr) => ParamData::Integer($body),
            ParamData::Float($arr) => ParamData::Float($body),
            ParamData::Double($arr) => ParamData::Double($body),
            ParamData::String($arr) => ParamData::String($body),
        }
    };
}

/// Flatten an array with axis 0 varying fastest
fn flatten_fortran<T: Clone>(arr: &ArrayD<T>) -> Vec<T> {
    // Reversing the axes turns a row-major walk into a column-major one
    arr.t().iter().cloned().collect()
}

fn fortran_array<T: Clone>(arr: &ArrayD<T>, shape: &[usize]) -> Result<ArrayD<T>> {
    let flat = flatten_fortran(arr);
    Ok(ArrayD::from_shape_vec(IxDyn(shape).f(), flat)?)
}

fn try_map<T, U, F>(arr: &ArrayD<T>, f: F) -> Result<ArrayD<U>>
where
    F: Fn(&T) -> Result<U>,
{
    let values = arr.iter().map(f).collect::<Result<Vec<U>>>()?;
    Ok(ArrayD::from_shape_vec(arr.raw_dim(), values)?)
}

fn sorted_unique<T: Clone, F>(arr: &ArrayD<T>, cmp: F) -> ArrayD<T>
where
    F: Fn(&T, &T) -> std::cmp::Ordering,
{
    let mut values: Vec<T> = arr.iter().cloned().collect();
    values.sort_by(&cmp);
    values.dedup_by(|a, b| cmp(&*a, &*b) == std::cmp::Ordering::Equal);
    Array1::from_vec(values).into_dyn()
}

/// Overwrite position `index` along axis 0, broadcasting `value` over the slot
///
/// Returns `Ok(false)` without writing when the slot already holds `value`.
fn assign_axis0<T: Clone + PartialEq>(
    arr: &mut ArrayD<T>,
    index: usize,
    value: &ArrayD<T>,
    name: &str,
) -> Result<bool> {
    let len = arr.len_of(Axis(0));
    if index >= len {
        return Err(PrmsError::IndexOutOfBounds {
            context: name.to_string(),
            index,
            len,
        });
    }

    let mut slot = arr.index_axis_mut(Axis(0), index);
    let src = value
        .broadcast(slot.raw_dim())
        .ok_or_else(|| PrmsError::SizeMismatch {
            name: name.to_string(),
            expected: slot.len(),
            actual: value.len(),
        })?;

    if slot == src {
        return Ok(false);
    }
    slot.assign(&src);
    Ok(true)
}

impl ParamData {
    /// Build rank-1 data of the given datatype from scalar values
    pub fn from_values(values: &[Value], dtype: DataType) -> Result<Self> {
        Ok(match dtype {
            DataType::Integer => ParamData::Integer(
                values.iter().map(Value::to_i32).collect::<Result<Array1<_>>>()?.into_dyn(),
            ),
            DataType::Float => ParamData::Float(
                values.iter().map(Value::to_f32).collect::<Result<Array1<_>>>()?.into_dyn(),
            ),
            DataType::Double => ParamData::Double(
                values.iter().map(Value::to_f64).collect::<Result<Array1<_>>>()?.into_dyn(),
            ),
            DataType::String => ParamData::String(
                values.iter().map(Value::to_string).collect::<Array1<_>>().into_dyn(),
            ),
        })
    }

    pub fn datatype(&self) -> DataType {
        match self {
            ParamData::Integer(_) => DataType::Integer,
            ParamData::Float(_) => DataType::Float,
            ParamData::Double(_) => DataType::Double,
            ParamData::String(_) => DataType::String,
        }
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        with_array!(self, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        with_array!(self, a => a.ndim())
    }

    pub fn shape(&self) -> &[usize] {
        with_array!(self, a => a.shape())
    }

    /// Convert the data to another datatype
    pub fn cast(self, dtype: DataType) -> Result<Self> {
        if self.datatype() == dtype {
            return Ok(self);
        }

        Ok(match (self, dtype) {
            (ParamData::Integer(a), DataType::Float) => ParamData::Float(a.mapv(|v| v as f32)),
            (ParamData::Integer(a), DataType::Double) => ParamData::Double(a.mapv(f64::from)),
            (ParamData::Float(a), DataType::Integer) => ParamData::Integer(a.mapv(|v| v as i32)),
            (ParamData::Float(a), DataType::Double) => ParamData::Double(a.mapv(f64::from)),
            (ParamData::Double(a), DataType::Integer) => ParamData::Integer(a.mapv(|v| v as i32)),
            (ParamData::Double(a), DataType::Float) => ParamData::Float(a.mapv(|v| v as f32)),
            (ParamData::String(a), DataType::Integer) => {
                ParamData::Integer(try_map(&a, |s| parse_integer(s))?)
            }
            (ParamData::String(a), DataType::Float) => {
                ParamData::Float(try_map(&a, |s| parse_float(s).map(|v| v as f32))?)
            }
            (ParamData::String(a), DataType::Double) => {
                ParamData::Double(try_map(&a, |s| parse_float(s))?)
            }
            (ParamData::Integer(a), DataType::String) => ParamData::String(a.mapv(|v| v.to_string())),
            (ParamData::Float(a), DataType::String) => ParamData::String(a.mapv(|v| v.to_string())),
            (ParamData::Double(a), DataType::String) => ParamData::String(a.mapv(|v| v.to_string())),
            (data, _) => data,
        })
    }

    /// Rank-1 copy of the data in column-major order
    pub fn to_flat(&self) -> ParamData {
        map_array!(self, a => Array1::from_vec(flatten_fortran(a)).into_dyn())
    }

    /// Elements as scalar values in column-major order
    pub fn to_values(&self) -> Vec<Value> {
        match self {
            ParamData::Integer(a) => flatten_fortran(a).into_iter().map(Value::Integer).collect(),
            ParamData::Float(a) => flatten_fortran(a).into_iter().map(Value::Float).collect(),
            ParamData::Double(a) => flatten_fortran(a).into_iter().map(Value::Double).collect(),
            ParamData::String(a) => flatten_fortran(a).into_iter().map(Value::String).collect(),
        }
    }

    /// Numeric elements as f64 in column-major order; `None` for strings
    pub fn to_f64_vec(&self) -> Option<Vec<f64>> {
        match self {
            ParamData::Integer(a) => Some(flatten_fortran(a).into_iter().map(f64::from).collect()),
            ParamData::Float(a) => Some(flatten_fortran(a).into_iter().map(f64::from).collect()),
            ParamData::Double(a) => Some(flatten_fortran(a)),
            ParamData::String(_) => None,
        }
    }

    /// Lay the elements out in `shape`, filling axis 0 fastest
    ///
    /// The current elements are read in column-major order as well, so a
    /// rank-1 input is treated as a flat listing in parameter-file order.
    pub fn reshape_fortran(&self, shape: &[usize]) -> Result<ParamData> {
        Ok(map_array!(self, a => fortran_array(a, shape)?))
    }

    /// The first element as rank-1 data of length one
    pub fn first(&self) -> Result<ParamData> {
        Ok(map_array!(self, a => {
            let first = a
                .iter()
                .next()
                .cloned()
                .ok_or_else(|| PrmsError::InvalidValue("empty array".to_string()))?;
            Array1::from_vec(vec![first]).into_dyn()
        }))
    }

    /// Materialized broadcast to `shape`, or `None` if the shapes are incompatible
    pub fn broadcast_to(&self, shape: &[usize]) -> Option<ParamData> {
        Some(map_array!(self, a => a.broadcast(IxDyn(shape))?.to_owned()))
    }

    /// Reverse the order of the axes (transpose for 2-D data)
    pub fn reversed_axes(self) -> ParamData {
        map_array!(self, a => a.reversed_axes().as_standard_layout().into_owned())
    }

    /// Keep the given positions along `axis`, in the given order
    pub fn select(&self, axis: usize, indices: &[usize]) -> ParamData {
        map_array!(self, a => a.select(Axis(axis), indices))
    }

    /// Owned copy of the sub-array at `index` along `axis`, one rank lower
    pub fn index_axis(&self, axis: usize, index: usize) -> ParamData {
        map_array!(self, a => a.index_axis(Axis(axis), index).to_owned())
    }

    /// Sorted distinct elements as rank-1 data
    pub fn unique(&self) -> ParamData {
        match self {
            ParamData::Integer(a) => ParamData::Integer(sorted_unique(a, |x, y| x.cmp(y))),
            ParamData::Float(a) => ParamData::Float(sorted_unique(a, |x, y| x.total_cmp(y))),
            ParamData::Double(a) => ParamData::Double(sorted_unique(a, |x, y| x.total_cmp(y))),
            ParamData::String(a) => ParamData::String(sorted_unique(a, |x, y| x.cmp(y))),
        }
    }

    /// Replace the element (1-D) or row (2-D) at `index` along axis 0
    ///
    /// `value` must already have this data's datatype. Returns whether
    /// anything changed.
    pub(crate) fn assign_axis0(&mut self, index: usize, value: &ParamData, name: &str) -> Result<bool> {
        match (self, value) {
            (ParamData::Integer(a), ParamData::Integer(v)) => assign_axis0(a, index, v, name),
            (ParamData::Float(a), ParamData::Float(v)) => assign_axis0(a, index, v, name),
            (ParamData::Double(a), ParamData::Double(v)) => assign_axis0(a, index, v, name),
            (ParamData::String(a), ParamData::String(v)) => assign_axis0(a, index, v, name),
            (data, value) => Err(PrmsError::InvalidType(format!(
                "{}: cannot assign {} values to {} data",
                name,
                value.datatype().name(),
                data.datatype().name()
            ))),
        }
    }
}

macro_rules! impl_from_arrays {
    ($variant:ident, $ty:ty) => {
        impl From<Vec<$ty>> for ParamData {
            fn from(value: Vec<$ty>) -> Self {
                ParamData::$variant(Array1::from_vec(value).into_dyn())
            }
        }

        impl From<Array1<$ty>> for ParamData {
            fn from(value: Array1<$ty>) -> Self {
                ParamData::$variant(value.into_dyn())
            }
        }

        impl From<Array2<$ty>> for ParamData {
            fn from(value: Array2<$ty>) -> Self {
                ParamData::$variant(value.into_dyn())
            }
        }

        impl From<ArrayD<$ty>> for ParamData {
            fn from(value: ArrayD<$ty>) -> Self {
                ParamData::$variant(value)
            }
        }

        impl From<$ty> for ParamData {
            fn from(value: $ty) -> Self {
                ParamData::$variant(arr0(value).into_dyn())
            }
        }
    };
}

impl_from_arrays!(Integer, i32);
impl_from_arrays!(Float, f32);
impl_from_arrays!(Double, f64);
impl_from_arrays!(String, String);

impl From<Vec<&str>> for ParamData {
    fn from(value: Vec<&str>) -> Self {
        ParamData::String(Array1::from_iter(value.into_iter().map(str::to_string)).into_dyn())
    }
}

impl From<&str> for ParamData {
    fn from(value: &str) -> Self {
        ParamData::String(arr0(value.to_string()).into_dyn())
    }
}

impl From<Value> for ParamData {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(v) => v.into(),
            Value::Float(v) => v.into(),
            Value::Double(v) => v.into(),
            Value::String(v) => v.into(),
        }
    }
}

/// A single named column of rank-1 data
#[derive(Debug, Clone, PartialEq)]
pub struct DataColumn {
    pub name: String,
    pub data: ParamData,
}

impl From<DataColumn> for ParamData {
    fn from(value: DataColumn) -> Self {
        value.data
    }
}

/// Format a float the way parameter databases store it
///
/// Fixed notation with six decimals, trailing zeros trimmed, and at least one
/// digit kept after the decimal point.
///
/// # Examples
///
/// ```
/// use prms_paramdb::parameters::data::format_paramdb_float;
///
/// assert_eq!(format_paramdb_float(13.12), "13.12");
/// assert_eq!(format_paramdb_float(1.0), "1.0");
/// assert_eq!(format_paramdb_float(0.0000001), "0.0");
/// ```
pub fn format_paramdb_float(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
