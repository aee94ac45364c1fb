//! End-to-end behaviour of the field mapper against small and embedded schemas.

use odczyt::models::{FieldSchema, FieldType, MappingResult, Target};
use odczyt::processing::{map_fields, Alphabet, FieldMatcher};
use odczyt::schema::{load_schema, parse_schema, SchemaSource};
use std::collections::HashSet;

const BIRTH_CERTIFICATE: &str = "\
RZECZPOSPOLITA POLSKA
ODPIS ZUPEŁNY AKTU URODZENIA
AKT URODZENIA
Nazwisko: KOWALSKI
Imię (imiona): Jan Maria
Data urodzenia: 15.03.1985
Miejsce urodzenia: Kraków
Płeć: mężczyzna
Nazwisko ojca: KOWALSKI
Imię ojca: Stanisław
Nazwisko rodowe matki: NOWAK
Imię matki: Anna
Wydano dnia 02.04.1985
";

fn schema(json: &str) -> FieldSchema {
    parse_schema(Target::Oby, json).unwrap()
}

fn find<'a>(results: &'a [MappingResult], code: &str) -> Option<&'a MappingResult> {
    results.iter().find(|result| result.code == code)
}

/// Exact Polish label with a value after a colon
#[test]
fn test_exact_label_match() {
    let schema = schema(r#"{"fields": [{"code": "T-SN", "plLabel": "Nazwisko", "enLabel": "Surname", "type": "text", "aliases": []}]}"#);
    let results = map_fields("Odpis\nNazwisko: KOWALSKI\n", &schema, &Alphabet::polish()).unwrap();

    let surname = find(&results, "T-SN").unwrap();
    assert_eq!(surname.value, "KOWALSKI");
    assert!(surname.confidence >= 80);
}

/// An unlabelled date is only found by its shape
#[test]
fn test_unlabelled_date() {
    let schema = schema(r#"{"fields": [{"code": "T-BD", "plLabel": "Data urodzenia", "enLabel": "Date of birth", "type": "date", "aliases": []}]}"#);
    let results = map_fields("Wydano w Krakowie\n15.03.1985", &schema, &Alphabet::polish()).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value, "15.03.1985");
    assert_eq!(results[0].confidence, 70);
}

/// Text without letters or digits never produces a result
#[test]
fn test_symbols_only_text_maps_nothing() {
    for target in Target::ALL {
        let schema = load_schema(target, &SchemaSource::Embedded).unwrap();
        let results = map_fields("???###", &schema, &Alphabet::polish()).unwrap();
        assert!(results.is_empty(), "{} produced {:?}", target, results);
    }
}

/// Aliases score without the canonical label bonus
#[test]
fn test_alias_match_has_base_confidence() {
    let schema = schema(
        r#"{"fields": [{"code": "T-FIRST", "plLabel": "Imiona", "enLabel": "First names", "type": "text", "aliases": ["Given Names"]}]}"#,
    );
    let results = map_fields("Given Names: Jan Maria", &schema, &Alphabet::polish()).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value, "Jan Maria");
    assert_eq!(results[0].confidence, 60);
}

/// Of two matching lines only the stronger one survives
#[test]
fn test_best_line_wins() {
    let schema = schema(
        r#"{"fields": [{"code": "T-SN", "plLabel": "Nazwisko", "enLabel": "Surname", "type": "text", "aliases": ["family name"]}]}"#,
    );
    let results = map_fields("Family name: Nowak\nNazwisko: KOWALSKI", &schema, &Alphabet::polish()).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value, "KOWALSKI");
    assert_eq!(results[0].confidence, 90);
}

#[test]
fn test_mapping_is_deterministic() {
    let schema = load_schema(Target::Oby, &SchemaSource::Embedded).unwrap();
    let matcher = FieldMatcher::new(&schema, &Alphabet::polish()).unwrap();

    let first = matcher.map_fields(BIRTH_CERTIFICATE);
    let second = matcher.map_fields(BIRTH_CERTIFICATE);
    assert_eq!(first, second);
    assert_eq!(first, map_fields(BIRTH_CERTIFICATE, &schema, &Alphabet::polish()).unwrap());
}

#[test]
fn test_result_invariants() {
    for target in Target::ALL {
        let schema = load_schema(target, &SchemaSource::Embedded).unwrap();
        let results = map_fields(BIRTH_CERTIFICATE, &schema, &Alphabet::polish()).unwrap();
        assert!(!results.is_empty());

        let codes: HashSet<&str> = results.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes.len(), results.len(), "duplicate codes for {}", target);

        for pair in results.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }

        for result in &results {
            assert!(result.confidence <= 100);
            let field = schema.get(&result.code).unwrap();
            match field.field_type {
                FieldType::Date => assert!(result.value.chars().any(|c| c.is_ascii_digit()), "{:?}", result),
                FieldType::Text => assert!(result.value.chars().any(|c| c.is_alphabetic()), "{:?}", result),
                _ => {}
            }
        }
    }
}

#[test]
fn test_birth_certificate_against_oby() {
    let schema = load_schema(Target::Oby, &SchemaSource::Embedded).unwrap();
    let results = map_fields(BIRTH_CERTIFICATE, &schema, &Alphabet::polish()).unwrap();

    let surname = find(&results, "OBY-A-SN").unwrap();
    assert_eq!(surname.value, "KOWALSKI");

    let birth_date = find(&results, "OBY-A-BD").unwrap();
    assert_eq!(birth_date.value, "15.03.1985");
    assert!(birth_date.confidence >= 75);
}

#[test]
fn test_power_of_attorney_against_poa() {
    let text = "PEŁNOMOCNICTWO\nImiona: Jan Maria\nNazwisko: KOWALSKI\nData: 12.05.2001\nEmail: jan.kowalski@example.com";
    let schema = load_schema(Target::Poa, &SchemaSource::Embedded).unwrap();
    let results = map_fields(text, &schema, &Alphabet::polish()).unwrap();

    assert_eq!(find(&results, "POA-A-SN").unwrap().value, "KOWALSKI");
    assert_eq!(find(&results, "POA-A-GN").unwrap().value, "Jan Maria");

    let date = find(&results, "POA-A-DATE").unwrap();
    assert_eq!(date.value, "12.05.2001");
    assert_eq!(date.confidence, 95);

    assert_eq!(find(&results, "POA-A-EMAIL").unwrap().value, "jan.kowalski@example.com");
}

#[test]
fn test_custom_alphabet_letters() {
    let alphabet = Alphabet::new("de", "ÄÖÜ", "äöüß");
    let schema = schema(r#"{"fields": [{"code": "T-SN", "plLabel": "Nachname", "enLabel": "Surname", "type": "text", "aliases": []}]}"#);
    let results = map_fields("Nachname Österreicher", &schema, &alphabet).unwrap();

    assert_eq!(results[0].value, "Österreicher");
}
