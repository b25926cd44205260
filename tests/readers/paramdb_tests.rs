//! Integration tests for the parameter database reader

use crate::test_helpers::{catalog, pdb_instance};
use prms_paramdb::parameters::{ParamData, Parameters, Value};
use prms_paramdb::readers::{MemorySource, ParamDbReader, Reader, ReaderConfig};
use prms_paramdb::PrmsError;

/// Record source holding everything in the populated fixture
fn fixture_source() -> MemorySource {
    let params = pdb_instance();

    let mut source = MemorySource::new();
    for dim in params.dimensions() {
        source.add_dimension(dim.name(), dim.size());
    }
    source.add_dimension("nsegment", 50);
    for (name, param) in params.iter() {
        source.add_records(name, &param.toparamdb().unwrap());
    }
    source
}

#[test]
fn test_read_round_trip() {
    let original = pdb_instance();

    let mut params = Parameters::new(catalog());
    ParamDbReader::new(fixture_source()).read(&mut params).unwrap();

    assert_eq!(params.names(), original.names());
    for (name, param) in original.iter() {
        let read = params.get(name).unwrap();
        assert_eq!(read.data().unwrap(), param.data().unwrap(), "{} differs", name);
        assert!(read.has_correct_size());
        assert!(!read.modified());
    }
}

#[test]
fn test_read_adjusts_bounded_parameters() {
    let mut params = Parameters::new(catalog());
    ParamDbReader::new(fixture_source()).read(&mut params).unwrap();

    let param = params.get("poi_gage_segment").unwrap();
    assert_eq!(param.minimum(), Some(&Value::Integer(1)));
    assert_eq!(param.maximum(), Some(&Value::Integer(50)));

    let mut params = Parameters::new(catalog());
    let config = ReaderConfig {
        adjust_bounded: false,
    };
    ParamDbReader::with_config(fixture_source(), config)
        .read(&mut params)
        .unwrap();
    let param = params.get("poi_gage_segment").unwrap();
    assert_eq!(param.maximum(), Some(&Value::from("nsegment")));
}

#[test]
fn test_read_oversized_scalar() {
    let mut source = fixture_source();
    source.add_records("basin_solsta", "$id,basin_solsta\n1,8\n2,8\n3,9\n");

    let mut params = Parameters::new(catalog());
    ParamDbReader::new(source).read(&mut params).unwrap();
    assert_eq!(
        params.get("basin_solsta").unwrap().data().unwrap(),
        &ParamData::from(vec![8])
    );
}

#[test]
fn test_read_size_mismatch_fails() {
    let mut source = fixture_source();
    source.add_records("cov_type", "$id,cov_type\n1,1\n2,0\n");

    let mut params = Parameters::new(catalog());
    assert!(matches!(
        ParamDbReader::new(source).read(&mut params),
        Err(PrmsError::SizeMismatch { .. })
    ));

    // Parameters read before the failure stay; the failing one is not registered
    assert!(params.exists("tmax_cbh_adj"));
    assert!(!params.exists("cov_type"));
    assert_eq!(params.names(), vec!["tmax_cbh_adj"]);
}

#[test]
fn test_read_bad_value_leaves_no_parameter() {
    let mut source = fixture_source();
    source.add_records("tmax_cbh_adj", "$id,tmax_cbh_adj
1,warm
");

    let mut params = Parameters::new(catalog());
    assert!(matches!(
        ParamDbReader::new(source).read(&mut params),
        Err(PrmsError::InvalidValue(_))
    ));
    assert!(params.is_empty());
}

#[test]
fn test_read_integers_written_as_floats() {
    let mut source = fixture_source();
    source.add_records("cov_type", "$id,cov_type\n1,1.0\n2,0.0\n3,3.0\n4,2.0\n");

    let mut params = Parameters::new(catalog());
    ParamDbReader::new(source).read(&mut params).unwrap();
    assert_eq!(
        params.get("cov_type").unwrap().data().unwrap(),
        &ParamData::from(vec![1, 0, 3, 2])
    );
}
