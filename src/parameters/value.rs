//! Datatypes and scalar values
//!
//! PRMS parameters carry one of four datatypes, identified in catalogs and
//! parameter files by an integer code (1-Integer, 2-Float, 3-Double,
//! 4-String). [`Value`] is a single element of any of those types and is used
//! for bounds, defaults, element updates and structured export.

use crate::error::{PrmsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Datatype of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DataTypeRepr", into = "u8")]
pub enum DataType {
    /// 32-bit signed integer (code 1)
    Integer = 1,
    /// 32-bit float (code 2)
    Float = 2,
    /// 64-bit float (code 3)
    Double = 3,
    /// String (code 4)
    String = 4,
}

impl DataType {
    /// Look up a datatype by its PRMS code
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::parameters::DataType;
    ///
    /// assert_eq!(DataType::from_code(2).unwrap(), DataType::Float);
    /// assert!(DataType::from_code(7).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(DataType::Integer),
            2 => Ok(DataType::Float),
            3 => Ok(DataType::Double),
            4 => Ok(DataType::String),
            _ => Err(PrmsError::InvalidType(code.to_string())),
        }
    }

    /// The PRMS integer code
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Integer => "int32",
            DataType::Float => "float32",
            DataType::Double => "float64",
            DataType::String => "string",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, DataType::Float | DataType::Double)
    }
}

impl FromStr for DataType {
    type Err = PrmsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "i" | "integer" | "int32" => Ok(DataType::Integer),
            "2" | "f" | "float" | "float32" => Ok(DataType::Float),
            "3" | "d" | "double" | "float64" => Ok(DataType::Double),
            "4" | "s" | "string" | "str" => Ok(DataType::String),
            _ => Err(PrmsError::InvalidType(s.to_string())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<DataType> for u8 {
    fn from(value: DataType) -> Self {
        value.code()
    }
}

/// Catalogs write datatypes either as codes or as names
#[derive(Deserialize)]
#[serde(untagged)]
enum DataTypeRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<DataTypeRepr> for DataType {
    type Error = PrmsError;

    fn try_from(value: DataTypeRepr) -> Result<Self> {
        match value {
            DataTypeRepr::Code(code) => DataType::from_code(code),
            DataTypeRepr::Name(name) => name.parse(),
        }
    }
}

/// A single parameter element, bound or default
///
/// Floats compare and hash by bit pattern so values can be used as map keys.
/// Deserialized numbers become `Integer` when they fit, otherwise `Double`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i32),
    Double(f64),
    Float(f32),
    String(String),
}

impl Value {
    pub fn datatype(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::String(_) => DataType::String,
        }
    }

    /// Numeric value as f64, or `None` for strings
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(f64::from(*v)),
            Value::Float(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            Value::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_i32(&self) -> Result<i32> {
        match self {
            Value::Integer(v) => Ok(*v),
            Value::Float(v) => Ok(*v as i32),
            Value::Double(v) => Ok(*v as i32),
            Value::String(s) => parse_integer(s),
        }
    }

    pub fn to_f32(&self) -> Result<f32> {
        self.to_f64().map(|v| v as f32)
    }

    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Value::String(s) => parse_float(s),
            v => v
                .as_f64()
                .ok_or_else(|| PrmsError::InvalidValue(v.to_string())),
        }
    }

    /// Convert to the given datatype
    ///
    /// Numbers convert with `as` casts (float to integer truncates). Strings
    /// convert to integers by parsing as an integer first and then as a float
    /// that is truncated, which is how integer values written as `"3.0"` in
    /// parameter files are read.
    ///
    /// # Examples
    ///
    /// ```
    /// use prms_paramdb::parameters::{DataType, Value};
    ///
    /// let v = Value::String("3.0".to_string());
    /// assert_eq!(v.cast(DataType::Integer).unwrap(), Value::Integer(3));
    /// assert!(Value::String("nhru".to_string()).cast(DataType::Double).is_err());
    /// ```
    pub fn cast(&self, dtype: DataType) -> Result<Value> {
        match (self, dtype) {
            (Value::String(s), DataType::Integer) => parse_integer(s).map(Value::Integer),
            (Value::String(s), DataType::Float) => parse_float(s).map(|v| Value::Float(v as f32)),
            (Value::String(s), DataType::Double) => parse_float(s).map(Value::Double),
            (v, DataType::String) => Ok(Value::String(v.to_string())),
            (Value::Integer(v), DataType::Integer) => Ok(Value::Integer(*v)),
            (Value::Float(v), DataType::Integer) => Ok(Value::Integer(*v as i32)),
            (Value::Double(v), DataType::Integer) => Ok(Value::Integer(*v as i32)),
            (Value::Integer(v), DataType::Float) => Ok(Value::Float(*v as f32)),
            (Value::Float(v), DataType::Float) => Ok(Value::Float(*v)),
            (Value::Double(v), DataType::Float) => Ok(Value::Float(*v as f32)),
            (Value::Integer(v), DataType::Double) => Ok(Value::Double(f64::from(*v))),
            (Value::Float(v), DataType::Double) => Ok(Value::Double(f64::from(*v))),
            (Value::Double(v), DataType::Double) => Ok(Value::Double(*v)),
        }
    }
}

/// Parse an integer, accepting float notation that is truncated
pub(crate) fn parse_integer(s: &str) -> Result<i32> {
    let s = s.trim();
    s.parse::<i32>()
        .or_else(|_| s.parse::<f64>().map(|v| v as i32))
        .map_err(|_| PrmsError::InvalidValue(format!("'{}' is not an integer", s)))
}

pub(crate) fn parse_float(s: &str) -> Result<f64> {
    let s = s.trim();
    s.parse::<f64>()
        .map_err(|_| PrmsError::InvalidValue(format!("'{}' is not a number", s)))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Integer(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Double(v) => v.to_bits().hash(state),
            Value::String(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" on whole floats
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Double(v) => write!(f, "{:?}", v),
            Value::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
