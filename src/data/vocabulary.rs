use std::collections::HashMap;

use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::vocab::{Direction, Movement, VehicleClass};

/// Seeds and reads the three vocabulary dimension tables.
///
/// Seeding runs once per load, after the schema reset and before any file
/// is processed. After that the tables are only ever read back as name→id
/// maps keyed by the closed vocabulary enums.
pub struct VocabularyRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VocabularyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn seed_all(&self) -> Result<(), DbErr> {
        let directions = Direction::ALL
            .iter()
            .map(|d| entity::direction_type::ActiveModel {
                direction_name: ActiveValue::Set(d.name().to_string()),
                ..Default::default()
            });
        entity::prelude::DirectionType::insert_many(directions)
            .exec(self.db)
            .await?;

        let movements = Movement::ALL
            .iter()
            .map(|m| entity::movement_type::ActiveModel {
                movement_name: ActiveValue::Set(m.name().to_string()),
                ..Default::default()
            });
        entity::prelude::MovementType::insert_many(movements)
            .exec(self.db)
            .await?;

        let vehicles = VehicleClass::ALL
            .iter()
            .map(|v| entity::vehicle_type::ActiveModel {
                vehicle_type_name: ActiveValue::Set(v.name().to_string()),
                ..Default::default()
            });
        entity::prelude::VehicleType::insert_many(vehicles)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn direction_ids(&self) -> Result<HashMap<Direction, i32>, DbErr> {
        let rows = entity::prelude::DirectionType::find().all(self.db).await?;

        Ok(rows
            .iter()
            .filter_map(|row| Direction::from_label(&row.direction_name).map(|d| (d, row.id)))
            .collect())
    }

    pub async fn movement_ids(&self) -> Result<HashMap<Movement, i32>, DbErr> {
        let rows = entity::prelude::MovementType::find().all(self.db).await?;

        Ok(rows
            .iter()
            .filter_map(|row| Movement::from_label(&row.movement_name).map(|m| (m, row.id)))
            .collect())
    }

    pub async fn vehicle_ids(&self) -> Result<HashMap<VehicleClass, i32>, DbErr> {
        let rows = entity::prelude::VehicleType::find().all(self.db).await?;

        Ok(rows
            .iter()
            .filter_map(|row| VehicleClass::from_label(&row.vehicle_type_name).map(|v| (v, row.id)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crossflow_test_utils::setup::TestSetup;

    use super::*;

    async fn setup() -> TestSetup {
        let setup = TestSetup::new().await.unwrap();
        setup.with_vocabulary_tables().await.unwrap();
        setup
    }

    #[tokio::test]
    async fn seed_covers_every_vocabulary_entry() {
        let setup = setup().await;
        let repo = VocabularyRepository::new(&setup.db);

        repo.seed_all().await.unwrap();

        assert_eq!(repo.direction_ids().await.unwrap().len(), Direction::ALL.len());
        assert_eq!(repo.movement_ids().await.unwrap().len(), Movement::ALL.len());
        assert_eq!(
            repo.vehicle_ids().await.unwrap().len(),
            VehicleClass::ALL.len()
        );
    }

    #[tokio::test]
    async fn ids_resolve_back_to_seeded_names() {
        let setup = setup().await;
        let repo = VocabularyRepository::new(&setup.db);
        repo.seed_all().await.unwrap();

        let directions = repo.direction_ids().await.unwrap();
        let northbound = directions[&Direction::Northbound];
        let row = entity::prelude::DirectionType::find_by_id(northbound)
            .one(&setup.db)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(row.direction_name, "Northbound");
    }
}
