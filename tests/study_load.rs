//! End-to-end loads of parsed studies into an in-memory store.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use crossflow::{
    data::vocabulary::VocabularyRepository,
    error::ingest::IngestError,
    ingest::{
        filename::StudyFileName,
        grid::parse_volume_grid,
        sheet::{CellValue, SheetGrid},
        summary::extract_study,
        workbook,
    },
    loader::{resolver::VocabularyCache, StudyLoader},
    model::report::FileStatus,
};
use crossflow_test_utils::setup::TestSetup;
use sea_orm::EntityTrait;

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

fn summary_grid() -> SheetGrid {
    SheetGrid::new(vec![
        vec![text("Study Name"), text("Test")],
        vec![text("Project"), text("P1")],
        vec![text("Start Time"), text("2020-01-01 07:00")],
        vec![text("End Time"), text("2020-01-01 09:00")],
        vec![text("Location"), text("Main St")],
        vec![text("Latitude and Longitude"), text("53.5,-113.5")],
    ])
}

fn volume_grid() -> SheetGrid {
    SheetGrid::new(vec![
        vec![
            text("Direction"),
            text("Northbound"),
            CellValue::Empty,
            CellValue::Empty,
        ],
        vec![
            text("Start Time"),
            text("Left"),
            text("App Total"),
            text("Through Traffic"),
        ],
        vec![text("07:00"), num(1.0), num(2.0), num(3.0)],
        vec![text("Grand Total"), num(10.0), num(19.0), num(9.0)],
        vec![text("Cars"), num(8.0), num(16.0), num(0.0)],
        vec![text("Buses"), num(2.0), num(3.0), CellValue::Empty],
    ])
}

fn tmc_file(miovision_id: i32) -> StudyFileName {
    StudyFileName {
        study_type: "TMC".to_string(),
        miovision_id,
    }
}

async fn setup_db() -> TestSetup {
    let setup = TestSetup::new().await.unwrap();
    setup.with_full_schema().await.unwrap();
    VocabularyRepository::new(&setup.db)
        .seed_all()
        .await
        .unwrap();

    setup
}

#[tokio::test]
async fn loads_study_row_from_summary_sheet() {
    let setup = setup_db().await;
    let vocab = VocabularyCache::fetch(&setup.db).await.unwrap();
    let loader = StudyLoader::new(&setup.db, &vocab);

    let record = extract_study(&summary_grid(), &tmc_file(12345)).unwrap();
    let breakdown = parse_volume_grid(&volume_grid()).unwrap();
    loader.load_study(&record, &breakdown).await.unwrap();

    let study = entity::prelude::Study::find_by_id(12345)
        .one(&setup.db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(study.study_name, "Test");
    assert_eq!(study.study_duration, 2.0);
    assert_eq!(study.study_type, "TMC");
    assert_eq!(study.study_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(study.latitude, 53.5);
    assert_eq!(study.longitude, -113.5);
    assert_eq!(study.project_name.as_deref(), Some("P1"));
}

#[tokio::test]
async fn fact_hierarchy_round_trips() {
    let setup = setup_db().await;
    let vocab = VocabularyCache::fetch(&setup.db).await.unwrap();
    let loader = StudyLoader::new(&setup.db, &vocab);

    let record = extract_study(&summary_grid(), &tmc_file(12345)).unwrap();
    let breakdown = parse_volume_grid(&volume_grid()).unwrap();
    loader.load_study(&record, &breakdown).await.unwrap();

    // One direction block: Northbound.
    let directions = entity::prelude::StudyDirection::find()
        .all(&setup.db)
        .await
        .unwrap();
    assert_eq!(directions.len(), 1);
    assert_eq!(directions[0].miovision_id, 12345);

    // Two movement columns survive: Left, and the unrecognized label
    // resolved to Thru. The "App Total" column contributes nothing.
    let movements = entity::prelude::DirectionMovement::find()
        .all(&setup.db)
        .await
        .unwrap();
    assert_eq!(movements.len(), 2);
    assert!(movements
        .iter()
        .all(|m| m.study_direction_id == directions[0].id));

    let movement_names: Vec<String> = {
        let mut names = Vec::new();
        for movement in &movements {
            let row = entity::prelude::MovementType::find_by_id(movement.movement_type_id)
                .one(&setup.db)
                .await
                .unwrap()
                .unwrap();
            names.push(row.movement_name);
        }
        names
    };
    assert_eq!(movement_names, vec!["Left", "Thru"]);

    // Left column: Cars 8, Buses 2. Thru column: Cars 0 kept, blank Buses
    // omitted.
    let counts = entity::prelude::MovementVehicleClass::find()
        .all(&setup.db)
        .await
        .unwrap();
    assert_eq!(counts.len(), 3);

    let left_counts: Vec<i32> = counts
        .iter()
        .filter(|c| c.direction_movement_id == movements[0].id)
        .map(|c| c.vehicle_count)
        .collect();
    assert_eq!(left_counts, vec![8, 2]);

    let thru_counts: Vec<i32> = counts
        .iter()
        .filter(|c| c.direction_movement_id == movements[1].id)
        .map(|c| c.vehicle_count)
        .collect();
    assert_eq!(thru_counts, vec![0]);
}

#[tokio::test]
async fn duplicate_study_id_fails_without_clobbering_first_load() {
    let setup = setup_db().await;
    let vocab = VocabularyCache::fetch(&setup.db).await.unwrap();
    let loader = StudyLoader::new(&setup.db, &vocab);

    let record = extract_study(&summary_grid(), &tmc_file(12345)).unwrap();
    let breakdown = parse_volume_grid(&volume_grid()).unwrap();

    loader.load_study(&record, &breakdown).await.unwrap();
    assert!(loader.load_study(&record, &breakdown).await.is_err());

    let studies = entity::prelude::Study::find().all(&setup.db).await.unwrap();
    assert_eq!(studies.len(), 1);

    // The failed second load rolled back its direction rows too.
    let directions = entity::prelude::StudyDirection::find()
        .all(&setup.db)
        .await
        .unwrap();
    assert_eq!(directions.len(), 1);
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[tokio::test]
async fn load_file_reads_a_workbook_end_to_end() {
    let setup = setup_db().await;
    let vocab = VocabularyCache::fetch(&setup.db).await.unwrap();
    let loader = StudyLoader::new(&setup.db, &vocab);

    let miovision_id = loader.load_file(&fixture("TMC-12345.xlsx")).await.unwrap();
    assert_eq!(miovision_id, 12345);

    // The summary sheet is matched despite its upper-cased name, and the
    // date-formatted Start/End cells come through as real timestamps: the
    // fixture spans 12:00 to 18:00 on 2020-01-01.
    let study = entity::prelude::Study::find_by_id(12345)
        .one(&setup.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(study.study_name, "Test");
    assert_eq!(study.study_duration, 6.0);
    assert_eq!(study.study_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(study.latitude, 53.5);
    assert_eq!(study.longitude, -113.5);
    assert_eq!(study.project_name.as_deref(), Some("P1"));

    // Same fact shape as the constructed-grid tests: one direction, two
    // movement columns, three count rows.
    let directions = entity::prelude::StudyDirection::find()
        .all(&setup.db)
        .await
        .unwrap();
    assert_eq!(directions.len(), 1);

    let movements = entity::prelude::DirectionMovement::find()
        .all(&setup.db)
        .await
        .unwrap();
    assert_eq!(movements.len(), 2);

    let counts = entity::prelude::MovementVehicleClass::find()
        .all(&setup.db)
        .await
        .unwrap();
    assert_eq!(counts.len(), 3);
}

#[test]
fn workbook_without_summary_sheet_is_rejected() {
    assert!(matches!(
        workbook::open(&fixture("single-sheet.xlsx")),
        Err(IngestError::SheetNotFound("summary"))
    ));
}

#[tokio::test]
async fn corpus_load_isolates_per_file_failures() {
    let setup = setup_db().await;
    let vocab = VocabularyCache::fetch(&setup.db).await.unwrap();
    let loader = StudyLoader::new(&setup.db, &vocab);

    // Neither file exists and one has a malformed name; both are reported
    // as skipped without failing the corpus walk.
    let files = vec![
        PathBuf::from("/nonexistent/TMC-77.xlsx"),
        PathBuf::from("/nonexistent/badname.xlsx"),
    ];
    let report = loader.load_corpus(&files).await;

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.loaded_count(), 0);
    assert_eq!(report.skipped_count(), 2);
    assert!(report
        .outcomes
        .iter()
        .all(|o| matches!(o.status, FileStatus::Skipped { .. })));
}
