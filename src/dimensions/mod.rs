//! # Dimension System
//!
//! Named axis sizes shared by PRMS parameters.
//!
//! - [`Dimension`]: a single named, non-negative size
//! - [`Dimensions`]: an insertion-ordered set of dimensions; insertion order is
//!   axis order, so the first dimension added is axis 0
//!
//! The global dimensions of a [`crate::parameters::Parameters`] collection and
//! the private dimensions of each [`crate::parameters::Parameter`] are both
//! `Dimensions` values; they are never shared.
//!
//! ```rust
//! use prms_paramdb::dimensions::Dimensions;
//!
//! let mut dims = Dimensions::new();
//! dims.add("nhru", 4).unwrap();
//! dims.add("nmonths", 12).unwrap();
//!
//! assert_eq!(dims.ndims(), 2);
//! assert_eq!(dims.get_position("nmonths").unwrap(), 1);
//! assert_eq!(dims.total_size(), Some(48));
//! ```

pub mod dimension;
pub mod dimensions;

pub use dimension::{Dimension, DimensionStructure};
pub use dimensions::Dimensions;
