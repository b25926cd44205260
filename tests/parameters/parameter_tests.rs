//! Integration tests for the Parameter struct
//!
//! These tests verify that the Parameter struct behaves correctly in various scenarios.

use crate::test_helpers::{pdb_instance, tmin_cbh_adj};
use approx::assert_relative_eq;
use ndarray::Array2;
use prms_paramdb::dimensions::Dimensions;
use prms_paramdb::parameters::{DataType, ParamData, Parameter, Value};
use prms_paramdb::PrmsError;

#[test]
fn test_parameter_lifecycle() {
    let dims = Dimensions::from_pairs(&[("npoigages", 4)]).unwrap();
    let mut param = Parameter::with_dimensions("poi_gage_segment", DataType::Integer, dims);

    // No data yet
    assert!(!param.has_correct_size());
    assert_eq!(param.check(), "poi_gage_segment: BAD");

    // Assign data
    param.set_data(vec![12, 4, 45, 26]).unwrap();
    assert!(param.has_correct_size());
    assert!(!param.modified());

    // Update a single element
    param.update_element(1, 5).unwrap();
    assert!(param.modified());
    assert_eq!(param.data().unwrap(), &ParamData::from(vec![12, 5, 45, 26]));

    // Subset
    param.subset_by_index("npoigages", &[0, 2]).unwrap();
    assert_eq!(param.data().unwrap(), &ParamData::from(vec![12, 45]));
    assert_eq!(param.dimensions().get("npoigages").unwrap().size(), 2);
    assert_eq!(param.check(), "poi_gage_segment: OK");
}

#[test]
fn test_catalog_attributes() {
    let params = pdb_instance();
    let param = params.get("tmax_cbh_adj").unwrap();

    assert_eq!(param.datatype(), Some(DataType::Float));
    assert_eq!(param.units(), Some("temp_units"));
    assert_eq!(param.minimum(), Some(&Value::Float(-10.0)));
    assert_eq!(param.maximum(), Some(&Value::Float(10.0)));
    assert_eq!(param.default(), Some(&Value::Float(0.0)));
    assert_eq!(param.modules(), Some(&["temperature_hru".to_string()][..]));
    assert_eq!(param.dimensions().names(), vec!["nhru", "nmonths"]);
    assert_eq!(param.size(), 48);

    // The first catalog entry wins over the later duplicate
    let param = params.get("cov_type").unwrap();
    assert_eq!(param.datatype(), Some(DataType::Integer));
    assert_eq!(param.dimensions().names(), vec!["nhru"]);
}

#[test]
fn test_parameter_data() {
    let params = pdb_instance();

    assert_eq!(
        params.get("tmin_cbh_adj").unwrap().data().unwrap(),
        &ParamData::from(tmin_cbh_adj())
    );
    assert_eq!(
        params.get("tmax_adj").unwrap().data().unwrap(),
        &ParamData::from(Array2::<f32>::zeros((4, 12)))
    );
    assert_eq!(
        params.get("basin_solsta").unwrap().data().unwrap(),
        &ParamData::from(vec![8])
    );
    for name in ["cov_type", "tmax_adj", "basin_solsta", "poi_type"] {
        let param = params.get(name).unwrap();
        assert!(param.has_correct_size(), "{} has the wrong size", name);
        assert!(param.check_values(), "{} is out of bounds", name);
    }
    assert!(!params.get("tmin_cbh_adj").unwrap().check_values());
}

#[test]
fn test_as_columns_2d() {
    let params = pdb_instance();
    let columns = params.get("tmin_cbh_adj").unwrap().as_columns().unwrap();

    assert_eq!(columns.len(), 12);
    assert_eq!(columns[0].name, "tmin_cbh_adj_1");
    assert_eq!(columns[0].data, ParamData::from(vec![1.0f32, 13.12, 1.0, 13.12]));
    assert_eq!(columns[11].name, "tmin_cbh_adj_12");
    assert_eq!(columns[11].data, ParamData::from(vec![12.11f32, 24.23, 12.11, 24.23]));
}

#[test]
fn test_as_columns_1d() {
    let params = pdb_instance();

    let columns = params.get("poi_gage_id").unwrap().as_columns().unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].name, "poi_gage_id");
    assert_eq!(
        columns[0].data,
        ParamData::from(vec!["01234567", "12345678", "23456789", "34567890"])
    );

    let columns = params.get("basin_solsta").unwrap().as_columns().unwrap();
    assert_eq!(columns[0].data, ParamData::from(vec![8]));
}

#[test]
fn test_toparamdb_floats() {
    let params = pdb_instance();
    let text = params.get("tmin_cbh_adj").unwrap().toparamdb().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 49);
    assert_eq!(lines[0], "$id,tmin_cbh_adj");
    assert_eq!(lines[1], "1,1.0");
    assert_eq!(lines[2], "2,13.12");
    assert_eq!(lines[5], "5,2.1");
    assert_eq!(lines[48], "48,24.23");
}

#[test]
fn test_reshape_scalar_to_2d() {
    let params = pdb_instance();
    let mut param = params.get("basin_solsta").unwrap().clone();

    let mut new_dims = Dimensions::new();
    new_dims.add("nhru", 4).unwrap();
    new_dims.add("nmonths", 12).unwrap();
    param.reshape(&new_dims).unwrap();

    assert_eq!(param.dimensions().names(), vec!["nhru", "nmonths"]);
    assert_eq!(param.data().unwrap(), &ParamData::from(Array2::from_elem((4, 12), 8)));
}

#[test]
fn test_stats() {
    let params = pdb_instance();

    let stats = params.get("tmin_cbh_adj").unwrap().stats().unwrap();
    assert_relative_eq!(stats.min.unwrap(), 1.0);
    assert_relative_eq!(stats.max.unwrap(), 24.23, epsilon = 1e-5);
    // Rows alternate between the two month series, so the median sits between them
    assert_relative_eq!(stats.median.unwrap(), (12.11 + 13.12) / 2.0, epsilon = 1e-5);

    let stats = params.get("poi_gage_id").unwrap().stats().unwrap();
    assert_eq!(stats.name, "poi_gage_id");
    assert!(stats.min.is_none() && stats.max.is_none() && stats.mean.is_none());
}

#[test]
fn test_oversized_scalar_keeps_first() {
    let params = pdb_instance();
    let mut param = params.get("basin_solsta").unwrap().clone();

    param.set_data(vec![3, 8, 8]).unwrap();
    assert_eq!(param.data().unwrap(), &ParamData::from(vec![3]));
    assert!(param.modified());
}

#[test]
fn test_errors_leave_parameter_unchanged() {
    let params = pdb_instance();
    let mut param = params.get("cov_type").unwrap().clone();

    assert!(matches!(param.set_data(vec![1, 2]), Err(PrmsError::SizeMismatch { .. })));
    assert!(matches!(param.set_data(vec!["a", "b", "c", "d"]), Err(PrmsError::InvalidValue(_))));
    assert!(matches!(
        param.update_element(9, 1),
        Err(PrmsError::IndexOutOfBounds { .. })
    ));
    assert_eq!(param.data().unwrap(), &ParamData::from(vec![1, 0, 1, 2]));
    assert!(!param.modified());
}
