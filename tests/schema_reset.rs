//! Schema reset behavior: repeatable, and always ends with empty relations.

use crossflow::{data::vocabulary::VocabularyRepository, startup};
use crossflow_test_utils::fixtures::study_active_model;
use sea_orm::{ActiveModelTrait, Database, EntityTrait};

#[tokio::test]
async fn reset_is_idempotent_and_clears_all_rows() {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    startup::reset_schema(&db).await.unwrap();
    startup::seed_vocabularies(&db).await.unwrap();
    study_active_model(555).insert(&db).await.unwrap();

    // Second reset recreates everything from empty rather than erroring.
    startup::reset_schema(&db).await.unwrap();

    assert!(entity::prelude::Study::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());
    assert!(entity::prelude::DirectionType::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());
    assert!(entity::prelude::MovementType::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());
    assert!(entity::prelude::VehicleType::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());
    assert!(entity::prelude::StudyDirection::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());
    assert!(entity::prelude::DirectionMovement::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());
    assert!(entity::prelude::MovementVehicleClass::find()
        .all(&db)
        .await
        .unwrap()
        .is_empty());

    // And the fresh schema is immediately seedable again.
    VocabularyRepository::new(&db).seed_all().await.unwrap();
}
