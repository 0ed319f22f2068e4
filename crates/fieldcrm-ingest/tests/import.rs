//! Integration tests for the CSV import path.

use std::io::Write;

use async_trait::async_trait;

use fieldcrm_ingest::{
    CreateError, FailureReason, ImportField, ImportOptions, IngestError, ObjectCreator,
    import_objects, import_objects_from_path,
};
use fieldcrm_model::{LabelDictionary, ObjectCreatePayload, ReverseLabelMap};

/// Records every payload it receives; rejects the addresses it is told to.
#[derive(Default)]
struct RecordingCreator {
    calls: Vec<ObjectCreatePayload>,
    reject_addresses: Vec<String>,
}

impl RecordingCreator {
    fn rejecting(addresses: &[&str]) -> Self {
        Self {
            calls: Vec::new(),
            reject_addresses: addresses.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    fn addresses(&self) -> Vec<&str> {
        self.calls.iter().map(|p| p.address.as_str()).collect()
    }
}

#[async_trait]
impl ObjectCreator for RecordingCreator {
    async fn create_object(&mut self, payload: &ObjectCreatePayload) -> Result<(), CreateError> {
        tokio::task::yield_now().await;
        self.calls.push(payload.clone());
        if self.reject_addresses.contains(&payload.address) {
            return Err(CreateError::Rejected {
                status: 422,
                message: "address too short".to_string(),
            });
        }
        Ok(())
    }
}

fn empty_maps() -> (ReverseLabelMap, ReverseLabelMap) {
    (ReverseLabelMap::default(), ReverseLabelMap::default())
}

#[tokio::test]
async fn test_single_row_with_empty_maps() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    let summary = import_objects(
        "type;address;city_id\nMKD;Test St 1;abc\n",
        &options,
        &mut creator,
    )
    .await;

    assert_eq!((summary.created, summary.skipped), (1, 0));
    assert_eq!(
        creator.calls,
        vec![ObjectCreatePayload {
            object_type: "MKD".to_string(),
            address: "Test St 1".to_string(),
            city_id: "abc".to_string(),
            status: "NEW".to_string(),
            district_id: None,
            contact_name: None,
            contact_phone: None,
        }]
    );
}

#[tokio::test]
async fn test_header_only_and_empty_input() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    for text in ["type;address;city_id\n", "", "\r\n\r\n", "type,address,city_id"] {
        let summary = import_objects(text, &options, &mut creator).await;
        assert!(summary.is_empty(), "{text:?}");
        assert!(summary.failures.is_empty());
    }
    assert!(creator.calls.is_empty());
}

#[tokio::test]
async fn test_missing_city_is_skipped() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    let text = "type,address,city_id\nMKD,Main St 1,c1\nMKD,Main St 2,\n";
    let summary = import_objects(text, &options, &mut creator).await;

    assert_eq!((summary.created, summary.skipped), (1, 1));
    assert_eq!(creator.addresses(), vec!["Main St 1"]);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].line, 3);
    assert_eq!(
        summary.failures[0].reason,
        FailureReason::MissingRequired(vec![ImportField::CityId])
    );
}

#[tokio::test]
async fn test_missing_address_never_reaches_creator() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    let summary = import_objects("type;city_id\nMKD;c1\nSCHOOL;c2", &options, &mut creator).await;

    assert_eq!((summary.created, summary.skipped), (0, 2));
    assert!(creator.calls.is_empty());
}

#[tokio::test]
async fn test_rejected_row_does_not_stop_batch() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::rejecting(&["Bad"]);

    let text = "type;address;city_id\nMKD;First;c\nMKD;Bad;c\nMKD;Last;c";
    let summary = import_objects(text, &options, &mut creator).await;

    assert_eq!((summary.created, summary.skipped), (2, 1));
    // Creation order follows file order, the failed row included.
    assert_eq!(creator.addresses(), vec!["First", "Bad", "Last"]);
    assert!(matches!(
        summary.failures[0].reason,
        FailureReason::Rejected(CreateError::Rejected { status: 422, .. })
    ));
}

#[tokio::test]
async fn test_semicolon_header_keeps_commas_in_cells() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    let text = "type;address;city_id\r\nMKD;Lenina 1, bld 2;c1\r\n";
    let summary = import_objects(text, &options, &mut creator).await;

    assert_eq!(summary.created, 1);
    assert_eq!(creator.calls[0].address, "Lenina 1, bld 2");
    assert_eq!(creator.calls[0].city_id, "c1");
}

#[tokio::test]
async fn test_russian_headers_and_labels() {
    let types = LabelDictionary::object_types().reverse_map();
    let statuses = LabelDictionary::object_statuses().reverse_map();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    let text = "Тип;Адрес;Город_ID;Статус;Район_ID;Контакт;Телефон\n\
                \"Школа\";\"ул. Мира, 3\";\"c1\";\"В работе\";\"d7\";\"Анна\";\"+79990000000\"\n\
                бизнес-центр;Пр. Победы 10;c2;;;;\n\
                hotel;Sea St 4;c3;rejected;;;\n";
    let summary = import_objects(text, &options, &mut creator).await;

    assert_eq!((summary.created, summary.skipped), (3, 0));

    let school = &creator.calls[0];
    assert_eq!(school.object_type, "SCHOOL");
    assert_eq!(school.address, "ул. Мира, 3");
    assert_eq!(school.status, "INTEREST");
    assert_eq!(school.district_id.as_deref(), Some("d7"));
    assert_eq!(school.contact_name.as_deref(), Some("Анна"));
    assert_eq!(school.contact_phone.as_deref(), Some("+79990000000"));

    let office = &creator.calls[1];
    assert_eq!(office.object_type, "BUSINESS_CENTER");
    assert_eq!(office.status, "NEW");
    assert_eq!(office.district_id, None);
    assert_eq!(office.contact_name, None);

    // Not a known label: uppercased as a code guess.
    let hotel = &creator.calls[2];
    assert_eq!(hotel.object_type, "HOTEL");
    assert_eq!(hotel.status, "REJECTED");
}

#[tokio::test]
async fn test_synthetic_label_maps() {
    let types = ReverseLabelMap::new([("WAREHOUSE", "Storage")]);
    let statuses = ReverseLabelMap::new([("ACTIVE", "Live")]);
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    let text = "type,address,city_id,status\nstorage,Dock 1,c1,LIVE";
    import_objects(text, &options, &mut creator).await;

    assert_eq!(creator.calls[0].object_type, "WAREHOUSE");
    assert_eq!(creator.calls[0].status, "ACTIVE");
}

#[tokio::test]
async fn test_import_from_path_reads_windows_1251() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    // "тип;адрес;город_id\nMKD;Мира 1;c1" in windows-1251
    let (encoded, _, _) = encoding_rs::WINDOWS_1251.encode("тип;адрес;город_id\nMKD;Мира 1;c1");
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&encoded).expect("write csv");

    let summary = import_objects_from_path(file.path(), &options, &mut creator)
        .await
        .expect("import file");

    assert_eq!(summary.created, 1);
    assert_eq!(creator.calls[0].address, "Мира 1");
}

#[tokio::test]
async fn test_import_from_path_keeps_utf8_around_stray_byte() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();

    let mut bytes = "тип;адрес;город_id\nMKD;Мира 1;c1\nMKD;Ленина 2;c1\n".as_bytes().to_vec();
    bytes.extend_from_slice(b"MKD;Bad \xFF;c1\n");
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&bytes).expect("write csv");

    let summary = import_objects_from_path(file.path(), &options, &mut creator)
        .await
        .expect("import file");

    assert_eq!((summary.created, summary.skipped), (3, 0));
    assert_eq!(
        creator.addresses(),
        vec!["Мира 1", "Ленина 2", "Bad \u{FFFD}"]
    );
}

#[tokio::test]
async fn test_unreadable_file_is_an_error() {
    let (types, statuses) = empty_maps();
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = RecordingCreator::default();
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.csv");

    let result = import_objects_from_path(&missing, &options, &mut creator).await;

    assert!(matches!(result, Err(IngestError::FileRead { .. })));
    assert!(creator.calls.is_empty());
}
