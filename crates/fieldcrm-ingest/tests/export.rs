//! Integration tests for the export format and export -> import round trips.

use async_trait::async_trait;
use proptest::prelude::*;

use fieldcrm_ingest::csv::{Delimiter, split_cells, unquote_cell};
use fieldcrm_ingest::{
    CreateError, EXPORT_HEADERS, ImportOptions, ObjectCreator, build_objects_csv, import_objects,
};
use fieldcrm_model::{LabelDictionary, NamedRef, ObjectCreatePayload, SiteObject};

fn object(id: &str, address: &str) -> SiteObject {
    SiteObject {
        id: id.to_string(),
        object_type: "MKD".to_string(),
        address: address.to_string(),
        city_id: "c1".to_string(),
        status: "NEW".to_string(),
        ..SiteObject::default()
    }
}

#[test]
fn test_export_snapshot() {
    let mut first = object("o-1", "Lenina \"Old\" 5");
    first.status = "DONE".to_string();
    first.city = Some(NamedRef {
        id: "c1".to_string(),
        name: "Kazan".to_string(),
    });
    first.contact_name = Some("Anna".to_string());
    first.visits_count = Some(2);
    first.last_visit_at = Some("2026-01-10T09:00:00Z".to_string());

    let mut second = object("o-2", "Mira 3; bld 1");
    second.object_type = "SCHOOL".to_string();
    second.district_id = Some("d1".to_string());
    second.district = Some(NamedRef {
        id: "d1".to_string(),
        name: "Central".to_string(),
    });
    second.contact_phone = Some("+79991234567".to_string());

    let csv = build_objects_csv(&[first, second]).expect("build csv");

    insta::assert_snapshot!(csv, @r#"
    "id";"address";"type";"status";"city_id";"city_name";"district_id";"district_name";"contact_name";"contact_phone";"visits_count";"last_visit_at"
    "o-1";"Lenina ""Old"" 5";"MKD";"DONE";"c1";"Kazan";"";"";"Anna";"";"2";"2026-01-10T09:00:00Z"
    "o-2";"Mira 3; bld 1";"SCHOOL";"NEW";"c1";"";"d1";"Central";"";"+79991234567";"";""
    "#);
}

#[test]
fn test_export_has_no_trailing_newline() {
    let csv = build_objects_csv(&[object("o-1", "A")]).expect("build csv");
    assert!(!csv.ends_with('\n'));
    assert_eq!(csv.split('\n').count(), 2);
}

#[test]
fn test_export_header_matches_column_list() {
    let csv = build_objects_csv(&[]).expect("build csv");
    let header: Vec<String> = split_cells(&csv, Delimiter::Semicolon);
    assert_eq!(header, EXPORT_HEADERS);
}

#[derive(Default)]
struct Collect(Vec<ObjectCreatePayload>);

#[async_trait]
impl ObjectCreator for Collect {
    async fn create_object(&mut self, payload: &ObjectCreatePayload) -> Result<(), CreateError> {
        self.0.push(payload.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_export_then_import_restores_quotes() {
    let addresses = [
        "Lenina \"Old\" 5",
        "\"Quoted\" at start",
        "ends with \"",
        "ул. Мира, 3",
    ];
    let objects: Vec<SiteObject> = addresses
        .iter()
        .enumerate()
        .map(|(idx, address)| object(&format!("o-{idx}"), address))
        .collect();
    let csv = build_objects_csv(&objects).expect("build csv");

    let types = LabelDictionary::object_types().reverse_map();
    let statuses = LabelDictionary::object_statuses().reverse_map();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = Collect::default();
    let summary = import_objects(&csv, &options, &mut creator).await;

    assert_eq!((summary.created, summary.skipped), (addresses.len(), 0));
    let imported: Vec<&str> = creator.0.iter().map(|p| p.address.as_str()).collect();
    assert_eq!(imported, addresses);
    assert!(creator.0.iter().all(|p| p.object_type == "MKD" && p.status == "NEW"));
    assert!(creator.0.iter().all(|p| p.city_id == "c1" && p.district_id.is_none()));
}

proptest! {
    #[test]
    fn prop_export_has_one_line_per_record(addresses in prop::collection::vec("[^\r\n]{0,24}", 0..12)) {
        let objects: Vec<SiteObject> = addresses
            .iter()
            .map(|address| object("id", address))
            .collect();
        let csv = build_objects_csv(&objects).expect("build csv");
        prop_assert_eq!(csv.split('\n').count(), objects.len() + 1);
    }

    #[test]
    fn prop_export_is_idempotent(addresses in prop::collection::vec("[^\r\n]{0,24}", 0..8)) {
        let objects: Vec<SiteObject> = addresses
            .iter()
            .map(|address| object("id", address))
            .collect();
        let first = build_objects_csv(&objects).expect("build csv");
        let second = build_objects_csv(&objects).expect("build csv");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_quoted_cell_unquotes_to_input(address in "[a-zA-Z0-9\" .,-]{1,24}") {
        let trimmed = address.trim();
        prop_assume!(!trimmed.is_empty() && trimmed == address);
        let csv = build_objects_csv(&[object("id", &address)]).expect("build csv");
        let row = csv.split('\n').nth(1).expect("data row");
        let address_cell = row.split(';').nth(1).expect("address cell");
        prop_assert_eq!(unquote_cell(address_cell), address);
    }
}
