mod common;

use std::io::Write;

use fleetload_lib::{Error, ShipCatalog};
use tempfile::NamedTempFile;

#[test]
fn loads_fixture_catalog_and_lists_ships() {
    let catalog = common::fixture_catalog();

    assert_eq!(catalog.ship_names(), vec!["CargoX", "Heron", "Tern"]);
    let cargo_x = catalog.get("cargox").expect("CargoX present");
    assert_eq!(cargo_x.max_weight, 50_000.0);
    assert_eq!(cargo_x.max_containers, 10);
    assert!(catalog.source_path().is_some());
}

#[test]
fn rejects_duplicate_names_case_insensitive() {
    let csv = "name,max_weight,max_containers\n".to_string()
        + "CargoX,1,1\n"
        + "cargox,2,2\n";

    let err = ShipCatalog::from_reader(csv.as_bytes()).expect_err("should reject duplicates");
    match err {
        Error::DuplicateShipName { name } => assert_eq!(name, "cargox"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_invalid_numeric_values() {
    let csv = "name,max_weight,max_containers\n".to_string() + "CargoX,-1,1\n";

    let err = ShipCatalog::from_reader(csv.as_bytes()).expect_err("should reject invalid values");
    match err {
        Error::ShipDataValidation { message } => {
            assert!(message.contains("max_weight"))
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let csv = "name,max_weight,max_containers\n".to_string() + "CargoX,10,many\n";
    let err = ShipCatalog::from_reader(csv.as_bytes()).expect_err("non-numeric slots");
    assert!(matches!(err, Error::ShipDataValidation { .. }));
}

#[test]
fn loads_from_temp_file_and_reports_missing_path() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "name,max_weight,max_containers").unwrap();
    writeln!(file, " Skiff , 900, 2").unwrap();

    let catalog = ShipCatalog::from_path(file.path()).expect("temp catalog loads");
    let ship = catalog.require("SKIFF").unwrap().build().unwrap();
    assert_eq!(ship.name(), "Skiff");
    assert_eq!(ship.max_containers(), 2);

    let missing = file.path().with_extension("missing");
    assert!(matches!(
        ShipCatalog::from_path(&missing),
        Err(Error::InputNotFound { .. })
    ));
}
