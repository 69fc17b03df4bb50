//! Integration tests for the palmerpenguins library
//!
//! These tests load the bundled CSV files and check the published
//! properties of the dataset end to end.

use approx::assert_relative_eq;
use palmerpenguins::api::{load_penguins, load_penguins_raw, PenguinsLoader};
use palmerpenguins::core::FEATURE_COLUMNS;
use palmerpenguins::{describe, Dataset, Table, Value};

fn curated() -> Table {
    load_penguins(false, false)
        .expect("Failed to load curated dataset")
        .into_table()
        .expect("Expected full table")
}

fn counts(table: &Table, column: &str) -> Vec<(String, usize)> {
    table
        .try_column(column)
        .expect("Column should exist")
        .value_counts()
}

#[test]
fn test_curated_shape() {
    let table = curated();
    assert_eq!(table.shape(), (344, 8));
    assert_eq!(
        table.column_names(),
        vec![
            "species",
            "island",
            "bill_length_mm",
            "bill_depth_mm",
            "flipper_length_mm",
            "body_mass_g",
            "sex",
            "year"
        ]
    );
}

#[test]
fn test_curated_species_counts() {
    let table = curated();
    assert_eq!(
        counts(&table, "species"),
        vec![
            ("Adelie".to_string(), 152),
            ("Gentoo".to_string(), 124),
            ("Chinstrap".to_string(), 68),
        ]
    );
}

#[test]
fn test_curated_other_counts() {
    let table = curated();
    assert_eq!(
        counts(&table, "island"),
        vec![
            ("Biscoe".to_string(), 168),
            ("Dream".to_string(), 124),
            ("Torgersen".to_string(), 52),
        ]
    );
    assert_eq!(
        counts(&table, "year"),
        vec![
            ("2009".to_string(), 120),
            ("2008".to_string(), 114),
            ("2007".to_string(), 110),
        ]
    );
    assert_eq!(
        counts(&table, "sex"),
        vec![("male".to_string(), 168), ("female".to_string(), 165)]
    );
}

#[test]
fn test_curated_missing_values() {
    let table = curated();
    let missing: Vec<usize> = table.columns().iter().map(|c| c.missing_count()).collect();
    assert_eq!(missing, vec![0, 0, 2, 2, 2, 2, 11, 0]);

    // The fourth row has no measurements at all
    let row = table.row(3).expect("Row should exist");
    assert_eq!(row[0], &Value::Str("Adelie".into()));
    assert!(row[2..7].iter().all(|v| v.is_missing()));
    assert_eq!(row[7], &Value::Int(2007));
}

#[test]
fn test_curated_known_rows() {
    let table = curated();

    let first = table.row(0).expect("Row should exist");
    assert_eq!(
        first,
        vec![
            &Value::Str("Adelie".into()),
            &Value::Str("Torgersen".into()),
            &Value::Float(39.1),
            &Value::Float(18.7),
            &Value::Int(181),
            &Value::Int(3750),
            &Value::Str("male".into()),
            &Value::Int(2007),
        ]
    );

    let species = table.try_column("species").unwrap();
    assert_eq!(species.get(1), Some(&Value::Str("Adelie".into())));
    assert_eq!(species.get(160), Some(&Value::Str("Gentoo".into())));
    assert_eq!(species.get(300), Some(&Value::Str("Chinstrap".into())));
}

#[test]
fn test_curated_summary_statistics() {
    let summary = describe(&curated());

    let bill = &summary[2];
    assert_eq!(bill.name, "bill_length_mm");
    assert_eq!(bill.count, 342);
    let stats = bill.numeric.expect("Numeric column");
    assert_relative_eq!(stats.mean, 43.92193, epsilon = 1e-4);
    assert_eq!(stats.min, 32.1);
    assert_eq!(stats.max, 59.6);

    let mass = summary[5].numeric.expect("Numeric column");
    assert_relative_eq!(mass.mean, 4201.754, epsilon = 1e-2);
    assert_eq!(mass.min, 2700.0);
    assert_eq!(mass.max, 6300.0);

    let flipper = summary[4].numeric.expect("Numeric column");
    assert_relative_eq!(flipper.mean, 200.9152, epsilon = 1e-3);
}

#[test]
fn test_features_and_target_shape() {
    let (features, target) = load_penguins(true, false)
        .expect("Failed to load")
        .into_features_and_target()
        .expect("Expected features and target");

    assert_eq!(features.shape(), (344, 4));
    assert_eq!(features.column_names(), FEATURE_COLUMNS.to_vec());
    assert_eq!(target.name(), "species");
    assert_eq!(target.len(), 344);
}

#[test]
fn test_features_and_target_row_aligned() {
    let table = curated();
    let (features, target) = load_penguins(true, false)
        .unwrap()
        .into_features_and_target()
        .unwrap();

    for i in 0..table.n_rows() {
        let full = table.row(i).unwrap();
        let feat = features.row(i).unwrap();
        assert_eq!(target.get(i), Some(full[0]), "species mismatch at row {i}");
        assert_eq!(feat, full[2..6].to_vec(), "features mismatch at row {i}");
    }
}

#[test]
fn test_drop_missing_full_table() {
    let table = load_penguins(false, true).unwrap().into_table().unwrap();
    assert_eq!(table.shape(), (333, 8));
    assert_eq!(table.missing_count(), 0);
    assert!(table
        .columns()
        .iter()
        .all(|c| c.iter().all(|v| !v.is_missing())));
}

#[test]
fn test_drop_missing_before_split() {
    let (features, target) = load_penguins(true, true)
        .unwrap()
        .into_features_and_target()
        .unwrap();

    // Rows missing only `sex` are dropped too, keeping both views aligned
    assert_eq!(features.shape(), (333, 4));
    assert_eq!(target.len(), 333);
    assert_eq!(features.missing_count(), 0);
    assert_eq!(target.missing_count(), 0);

    let complete = curated().drop_missing();
    assert_eq!(target.values(), complete.try_column("species").unwrap().values());
}

#[test]
fn test_drop_missing_preserves_row_order() {
    let full = curated();
    let complete = load_penguins(false, true).unwrap().into_table().unwrap();

    // Rows 0-2 are complete, row 3 is empty, rows 4-7 complete, 8-11 lack sex
    assert_eq!(complete.row(2), full.row(2));
    assert_eq!(complete.row(3), full.row(4));
    assert_eq!(complete.row(7), full.row(12));
}

#[test]
fn test_repeated_loads_are_identical() {
    let flags = [(false, false), (true, false), (false, true), (true, true)];
    for (features_target, drop_missing) in flags {
        let first = load_penguins(features_target, drop_missing).unwrap();
        let second = load_penguins(features_target, drop_missing).unwrap();
        assert_eq!(first, second);
    }
    assert_eq!(load_penguins_raw().unwrap(), load_penguins_raw().unwrap());
}

#[test]
fn test_concurrent_loads_agree() {
    let expected = load_penguins(true, true).unwrap();
    let expected_raw = load_penguins_raw().unwrap();

    std::thread::scope(|s| {
        let curated: Vec<_> = (0..4)
            .map(|_| s.spawn(|| load_penguins(true, true).unwrap()))
            .collect();
        let raw: Vec<_> = (0..2)
            .map(|_| s.spawn(|| load_penguins_raw().unwrap()))
            .collect();

        for handle in curated {
            assert_eq!(handle.join().unwrap(), expected);
        }
        for handle in raw {
            assert_eq!(handle.join().unwrap(), expected_raw);
        }
    });
}

#[test]
fn test_drop_missing_does_not_affect_later_loads() {
    let _ = load_penguins(false, true).unwrap();
    assert_eq!(curated().n_rows(), 344);
}

#[test]
fn test_raw_shape_and_species() {
    let raw = load_penguins_raw().expect("Failed to load raw dataset");
    assert_eq!(raw.shape(), (344, 17));
    assert_eq!(raw.column_names()[0], "studyName");
    assert_eq!(raw.column_names()[16], "Comments");

    assert_eq!(
        counts(&raw, "Species"),
        vec![
            ("Adelie Penguin (Pygoscelis adeliae)".to_string(), 152),
            ("Gentoo penguin (Pygoscelis papua)".to_string(), 124),
            ("Chinstrap penguin (Pygoscelis antarctica)".to_string(), 68),
        ]
    );
}

#[test]
fn test_raw_matches_curated_measurements() {
    let raw = load_penguins_raw().unwrap();
    let table = curated();

    for (raw_name, name) in [
        ("Culmen Length (mm)", "bill_length_mm"),
        ("Culmen Depth (mm)", "bill_depth_mm"),
        ("Flipper Length (mm)", "flipper_length_mm"),
        ("Body Mass (g)", "body_mass_g"),
        ("Island", "island"),
    ] {
        assert_eq!(
            raw.try_column(raw_name).unwrap().values(),
            table.try_column(name).unwrap().values(),
            "{raw_name} differs from {name}"
        );
    }
}

#[test]
fn test_raw_dot_is_missing() {
    let raw = load_penguins_raw().unwrap();
    let sex = raw.try_column("Sex").unwrap();
    assert_eq!(sex.missing_count(), 11);
    assert_eq!(
        sex.value_counts(),
        vec![("MALE".to_string(), 168), ("FEMALE".to_string(), 165)]
    );
}

#[test]
fn test_raw_unrecorded_fields_are_missing() {
    let raw = load_penguins_raw().unwrap();

    for name in [
        "Individual ID",
        "Clutch Completion",
        "Date Egg",
        "Delta 15 N (o/oo)",
        "Delta 13 C (o/oo)",
    ] {
        let column = raw.try_column(name).unwrap();
        assert_eq!(column.missing_count(), 344, "{name} has recorded values");
    }

    assert_eq!(
        counts(&raw, "Comments"),
        vec![("Adult not sampled.".to_string(), 2)]
    );

    // Sample numbers restart for each species
    let sample = raw.try_column("Sample Number").unwrap();
    assert_eq!(sample.get(0), Some(&Value::Int(1)));
    assert_eq!(sample.get(151), Some(&Value::Int(152)));
    assert_eq!(sample.get(152), Some(&Value::Int(1)));
}

#[test]
fn test_raw_quoted_stage() {
    let raw = load_penguins_raw().unwrap();
    let stage = raw.try_column("Stage").unwrap();
    assert_eq!(
        stage.value_counts(),
        vec![("Adult, 1 Egg Stage".to_string(), 344)]
    );
}

#[test]
fn test_loader_with_explicit_bundled_dir() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
    let loader = PenguinsLoader::new().with_data_dir(dir);
    assert_eq!(loader.load_table(Dataset::Curated).unwrap().n_rows(), 344);
    assert_eq!(loader.load_table(Dataset::Raw).unwrap().n_cols(), 17);
}
