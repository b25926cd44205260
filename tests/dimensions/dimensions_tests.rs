//! Integration tests for dimensions

use prms_paramdb::dimensions::{Dimension, DimensionStructure, Dimensions};
use prms_paramdb::PrmsError;

#[test]
fn test_axis_order_follows_insertion() {
    let mut dims = Dimensions::new();
    for (name, size) in [("nhru", 4), ("nmonths", 12), ("one", 1), ("npoigages", 4), ("nobs", 4)] {
        dims.add(name, size).unwrap();
        assert_eq!(dims.get(name).unwrap().size(), size);
    }

    assert_eq!(dims.shape(), vec![4, 12, 1, 4, 4]);
    assert_eq!(dims.get_position("npoigages").unwrap(), 3);
    assert_eq!(dims.total_size(), Some(768));

    let names: Vec<&str> = dims.iter().map(Dimension::name).collect();
    assert_eq!(names, vec!["nhru", "nmonths", "one", "npoigages", "nobs"]);
}

#[test]
fn test_structure_serde() {
    let dims = Dimensions::from_pairs(&[("nhru", 4), ("nmonths", 12)]).unwrap();
    let json = serde_json::to_string(&dims.tostructure()).unwrap();
    assert_eq!(json, r#"[{"name":"nhru","size":4},{"name":"nmonths","size":12}]"#);

    let structure: Vec<DimensionStructure> = serde_json::from_str(&json).unwrap();
    let mut copy = Dimensions::new();
    for dim in structure {
        copy.add(&dim.name, dim.size).unwrap();
    }
    assert_eq!(copy, dims);
}

#[test]
fn test_errors() {
    let mut dims = Dimensions::from_pairs(&[("nhru", 4)]).unwrap();
    assert!(matches!(dims.add("nhru", 1), Err(PrmsError::DimensionExists(_))));
    assert!(matches!(dims.get_mut("nsegment"), Err(PrmsError::DimensionNotFound(_))));
    assert!(matches!(
        dims.get_dimsize_by_index(1),
        Err(PrmsError::IndexOutOfBounds { .. })
    ));
    assert!(Dimensions::from_pairs(&[("nhru", 1), ("nhru", 2)]).is_err());
}
