//! Integration tests for the Parameters collection
//!
//! These tests verify that the Parameters collection behaves correctly in various scenarios.

use crate::test_helpers::{catalog, empty_parameters, pdb_instance, PARAMETER_NAMES};
use prms_paramdb::metadata::ParameterMeta;
use prms_paramdb::parameters::{DataType, ParamData, Parameters, Value};
use prms_paramdb::PrmsError;

#[test]
fn test_add_parameter_missing_global() {
    let mut params = Parameters::new(catalog());
    assert!(matches!(
        params.add("basin_solsta"),
        Err(PrmsError::DimensionNotFound(_))
    ));
    assert!(!params.exists("basin_solsta"));

    params.add_default_dimension("one").unwrap();
    params.add("basin_solsta").unwrap();
    assert_eq!(params.get("basin_solsta").unwrap().size(), 1);
}

#[test]
fn test_add_valid_parameters() {
    let mut params = empty_parameters();
    for name in PARAMETER_NAMES {
        params.add(name).unwrap();
        assert!(params.exists(name));
    }
    assert_eq!(params.names(), PARAMETER_NAMES.to_vec());
}

#[test]
fn test_add_existing_parameter_error() {
    let mut params = pdb_instance();
    for name in ["cov_type", "tmax_adj", "basin_solsta"] {
        assert!(matches!(params.add(name), Err(PrmsError::ParameterExists(_))));
    }
}

#[test]
fn test_missing_parameter() {
    let params = pdb_instance();
    assert!(!params.exists("hru_area"));
    assert!(matches!(params.get("nothin"), Err(PrmsError::ParameterNotFound(_))));

    let mut params = pdb_instance();
    assert!(matches!(params.add("nothin"), Err(PrmsError::ParameterNotFound(_))));
}

#[test]
fn test_parameters_display() {
    let params = pdb_instance();
    let expected = "----- Dimensions -----\n\
                    nhru: size=4\nnmonths: size=12\none: size=1\nnpoigages: size=4\nnobs: size=4\n\
                    ----- Parameters -----\n\
                    tmax_cbh_adj [nhru, nmonths]\ncov_type [nhru]\ntmin_cbh_adj [nhru, nmonths]\n\
                    tmax_adj [nhru, nmonths]\nbasin_solsta [one]\npoi_gage_id [npoigages]\n\
                    poi_gage_segment [npoigages]\npoi_type [npoigages]\n";
    assert_eq!(params.to_string(), expected);
}

#[test]
fn test_remove_poi_sequence() {
    let mut params = pdb_instance();

    params.remove_poi(&["12345678"]).unwrap();
    assert_eq!(
        params.get("poi_gage_id").unwrap().data().unwrap(),
        &ParamData::from(vec!["01234567", "23456789", "34567890"])
    );
    assert_eq!(
        params.get("poi_gage_segment").unwrap().data().unwrap(),
        &ParamData::from(vec![12, 45, 26])
    );
    assert_eq!(
        params.get("poi_type").unwrap().data().unwrap(),
        &ParamData::from(vec![1, 1, 0])
    );
    assert_eq!(params.dimensions().get("npoigages").unwrap().size(), 3);

    params.remove_poi(&["34567890"]).unwrap();
    assert_eq!(
        params.get("poi_gage_segment").unwrap().data().unwrap(),
        &ParamData::from(vec![12, 45])
    );
    assert_eq!(
        params.get("poi_type").unwrap().data().unwrap(),
        &ParamData::from(vec![1, 1])
    );
    assert_eq!(params.dimensions().get("npoigages").unwrap().size(), 2);

    // Removing all POIs drops the POI parameters and keeps the dimension at zero
    params.remove_poi(&["01234567", "23456789"]).unwrap();
    assert!(!params.exists("poi_gage_id"));
    assert!(!params.exists("poi_gage_segment"));
    assert!(!params.exists("poi_type"));
    assert_eq!(params.dimensions().get("npoigages").unwrap().size(), 0);
    assert_eq!(params.len(), 5);
    assert!(params.exists("basin_solsta"));
}

#[test]
fn test_remove_poi_unknown_ids_ignored() {
    let mut params = pdb_instance();
    params.remove_poi(&["00000000"]).unwrap();
    assert_eq!(params.dimensions().get("npoigages").unwrap().size(), 4);
    assert_eq!(params.get("poi_type").unwrap().size(), 4);
}

#[test]
fn test_remove_hru_cascades_to_2d() {
    let mut params = pdb_instance();
    params.remove_by_index("nhru", &[0, 1]).unwrap();

    assert_eq!(params.dimensions().get("nhru").unwrap().size(), 2);
    let tmin = params.get("tmin_cbh_adj").unwrap();
    assert_eq!(tmin.data().unwrap().shape(), &[2, 12]);
    assert_eq!(tmin.dimensions().get("nhru").unwrap().size(), 2);
    assert_eq!(
        params.get("cov_type").unwrap().data().unwrap(),
        &ParamData::from(vec![1, 2])
    );
    assert!(params.check().iter().all(|line| line.ends_with(": OK")));
}

#[test]
fn test_subset_hru() {
    let mut params = pdb_instance();
    params.subset_by_index("nhru", &[3]).unwrap();

    assert_eq!(params.dimensions().get("nhru").unwrap().size(), 1);
    assert_eq!(
        params.get("cov_type").unwrap().data().unwrap(),
        &ParamData::from(vec![2])
    );
    assert_eq!(params.get("tmin_cbh_adj").unwrap().data().unwrap().shape(), &[1, 12]);
    assert!(params.check().iter().all(|line| line.ends_with(": OK")));
}

#[test]
fn test_validate_reports_out_of_bounds() {
    let mut params = pdb_instance();

    // The sample minimum temperature adjustments exceed the catalog maximum of 10
    assert_eq!(params.validate(), vec!["tmin_cbh_adj"]);

    params.get_mut("poi_type").unwrap().update_element(0, 7).unwrap();
    assert_eq!(params.validate(), vec!["tmin_cbh_adj", "poi_type"]);

    let lines = params.check();
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|line| line.ends_with(": OK")));
}

#[test]
fn test_adjust_bounded_parameters() {
    let mut params = pdb_instance();
    params.dimensions_mut().add("nsegment", 50).unwrap();
    params.adjust_bounded_parameters().unwrap();

    let param = params.get("poi_gage_segment").unwrap();
    assert_eq!(param.minimum(), Some(&Value::Integer(1)));
    assert_eq!(param.maximum(), Some(&Value::Integer(50)));
    assert!(param.check_values());

    // Bounds naming an unknown dimension are left alone
    let param = params.get("basin_solsta").unwrap();
    assert_eq!(param.maximum(), Some(&Value::from("nsol")));
}

#[test]
fn test_add_adhoc_parameter_metadata() {
    let mut params = pdb_instance();
    let meta = ParameterMeta {
        datatype: Some(DataType::Float),
        description: Some("something new today".to_string()),
        help: Some("get your own help".to_string()),
        units: Some("dontmatter".to_string()),
        default: Some(Value::Double(0.0)),
        minimum: Some(Value::Double(0.0)),
        maximum: Some(Value::Double(100.0)),
        dimensions: vec!["nhru".to_string()],
        ..ParameterMeta::default()
    };

    params.add_metadata("foo", meta);
    params.add("foo").unwrap();

    let expected = "name: foo\ndatatype: 2\nunits: dontmatter\nndims: 1\n\
                    description: something new today\nhelp: get your own help\n\
                    Minimum value: 0.0\nMaximum value: 100.0\nDefault value: 0.0\n\
                    Size of data: <empty>\nDimensions:\nnhru: size=4\n";
    assert_eq!(params.get("foo").unwrap().to_string(), expected);
}

#[test]
fn test_structure_json() {
    let mut params = pdb_instance();
    let json = params.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["dimensions"][0]["name"], "nhru");
    assert_eq!(value["dimensions"][0]["size"], 4);
    assert_eq!(value["parameters"][1]["name"], "cov_type");
    assert_eq!(value["parameters"][1]["datatype"], 1);
    assert_eq!(value["parameters"][1]["data"], serde_json::json!([1, 0, 1, 2]));
    assert_eq!(value["parameters"].as_array().unwrap().len(), 8);

    // Parameters without data are left out
    params.add("hru_area").unwrap();
    assert_eq!(params.tostructure().unwrap().parameters.len(), 8);
}
