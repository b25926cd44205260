//! Integration tests for the structure reader

use crate::test_helpers::{catalog, pdb_instance};
use prms_paramdb::metadata::Catalog;
use prms_paramdb::parameters::{DataType, Parameters};
use prms_paramdb::readers::{Reader, StructureReader};

#[test]
fn test_json_round_trip_with_catalog() {
    let original = pdb_instance();
    let json = original.to_json().unwrap();

    let mut params = Parameters::new(catalog());
    StructureReader::from_json(&json).unwrap().read(&mut params).unwrap();

    assert_eq!(params.dimensions(), original.dimensions());
    assert_eq!(params.names(), original.names());
    for (name, param) in original.iter() {
        let read = params.get(name).unwrap();
        assert_eq!(read.data().unwrap(), param.data().unwrap(), "{} differs", name);
        assert_eq!(read.units(), param.units());
    }
}

#[test]
fn test_json_round_trip_without_catalog() {
    let original = pdb_instance();
    let json = original.to_json().unwrap();

    let mut params = Parameters::new(Catalog::new());
    StructureReader::from_json(&json).unwrap().read(&mut params).unwrap();

    let param = params.get("tmin_cbh_adj").unwrap();
    assert_eq!(param.datatype(), Some(DataType::Float));
    assert!(param.units().is_none());
    assert_eq!(
        param.data().unwrap(),
        original.get("tmin_cbh_adj").unwrap().data().unwrap()
    );
}

#[test]
fn test_existing_parameters_are_skipped() {
    let original = pdb_instance();
    let structure = original.tostructure().unwrap();

    let mut params = pdb_instance();
    params.get_mut("cov_type").unwrap().set_data(vec![0, 0, 0, 0]).unwrap();
    StructureReader::new(structure).read(&mut params).unwrap();

    assert_eq!(params.len(), original.len());
    assert!(params.get("cov_type").unwrap().all_equal().unwrap());
}
