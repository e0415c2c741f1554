//! Property and example tests for CSV parsing.

use proptest::prelude::*;

use roster_ingest::{map_records, normalize_header, parse_csv, resolve};

/// Quotes rows the way spreadsheet exporters do, via the `csv` writer.
fn write_rfc4180(rows: &[Vec<String>]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

fn cell() -> impl Strategy<Value = String> {
    "[a-zA-Zé0-9 ,;\"\r\n]{0,12}"
}

fn row() -> impl Strategy<Value = Vec<String>> {
    // A leading marker keeps generated rows from being entirely blank.
    prop::collection::vec(cell(), 0..5).prop_map(|mut cells| {
        cells.insert(0, "x".to_string());
        cells
    })
}

proptest! {
    #[test]
    fn parsing_is_idempotent(text in "[a-z,\"\r\n ]{0,64}") {
        prop_assert_eq!(parse_csv(&text), parse_csv(&text));
    }

    #[test]
    fn quoted_fields_round_trip(rows in prop::collection::vec(row(), 1..6)) {
        let text = write_rfc4180(&rows);
        prop_assert_eq!(parse_csv(&text), rows);
    }
}

#[test]
fn field_with_comma_newline_and_quote_round_trips() {
    let original = "Doe, Jane\nsaid \"hi\"".to_string();
    let text = write_rfc4180(&[vec!["bio".to_string()], vec![original.clone()]]);
    let rows = parse_csv(&text);
    assert_eq!(rows[1][0], original);
}

#[test]
fn documented_headers_normalize_without_collisions() {
    for raw in ["Nom ", "NOM", "nom"] {
        assert_eq!(normalize_header(raw), "nom");
    }
    let documented = [
        "Nom",
        "Rôle",
        "Ville",
        "Pays",
        "Photo",
        "Bio",
        "Compétences",
        "Programmes",
        "Email",
        "Téléphone",
        "WhatsApp",
        "Facebook",
        "Instagram",
        "LinkedIn",
        "Site web",
        "ID",
    ];
    let mut keys: Vec<String> = documented.iter().map(|h| normalize_header(h)).collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn example_sheet_parses_to_one_record() {
    let rows = parse_csv("Nom,Role\n\"Doe, Jane\",Coordinator\n");
    let table = map_records(&rows);
    assert_eq!(table.len(), 1);
    let record = &table.records[0];
    assert_eq!(resolve(record, &["nom"]), "Doe, Jane");
    assert_eq!(resolve(record, &["role"]), "Coordinator");
}
