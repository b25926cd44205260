use thiserror::Error;

/// Error types for the prms-paramdb library.
#[derive(Error, Debug)]
pub enum PrmsError {
    /// An unsupported datatype code was assigned to a parameter.
    #[error("Invalid datatype, {0}, specified for parameter")]
    InvalidType(String),

    /// Data was assigned to a parameter that declares no dimensions.
    #[error("No dimensions have been defined for {name}; unable to assign data")]
    MissingDimensions { name: String },

    /// The number of values does not match the declared dimension sizes.
    #[error("{name}: number of values ({actual}) doesn't match the declared size ({expected})")]
    SizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// The incoming data has more axes than the parameter declares.
    #[error("{name}: source data ndim, {actual} > parameter ndim, {expected}")]
    RankMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Parameter not found in the collection or catalog.
    #[error("Parameter not found: {0}")]
    ParameterNotFound(String),

    /// Dimension not found.
    #[error("Dimension not found: {0}")]
    DimensionNotFound(String),

    /// A parameter with the same name already exists.
    #[error("Parameter already exists: {0}")]
    ParameterExists(String),

    /// A dimension with the same name already exists.
    #[error("Dimension already exists: {0}")]
    DimensionExists(String),

    /// The parameter has no data assigned yet.
    #[error("Parameter, {0}, has no data")]
    NoData(String),

    /// An index fell outside the valid range.
    #[error("{context}: index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        context: String,
        index: usize,
        len: usize,
    },

    /// A value could not be converted to the required type.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Array shape error wrapper.
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// CSV parsing error wrapper.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for prms-paramdb operations.
pub type Result<T> = std::result::Result<T, PrmsError>;
