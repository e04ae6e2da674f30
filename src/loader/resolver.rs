use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::vocabulary::VocabularyRepository,
    error::Error,
    model::vocab::{Direction, Movement, VehicleClass},
};

/// In-memory name→surrogate-key mappings for the three vocabulary tables.
///
/// Fetched once per load run, one query per table, immediately after
/// seeding. Read-only afterwards, so concurrent file workers can share a
/// reference without coordination.
pub struct VocabularyCache {
    directions: HashMap<Direction, i32>,
    movements: HashMap<Movement, i32>,
    vehicles: HashMap<VehicleClass, i32>,
}

impl VocabularyCache {
    pub async fn fetch(db: &DatabaseConnection) -> Result<Self, Error> {
        let repo = VocabularyRepository::new(db);

        Ok(Self {
            directions: repo.direction_ids().await?,
            movements: repo.movement_ids().await?,
            vehicles: repo.vehicle_ids().await?,
        })
    }

    pub fn direction_id(&self, direction: Direction) -> Result<i32, Error> {
        self.directions
            .get(&direction)
            .copied()
            .ok_or_else(|| unseeded("direction", direction.name()))
    }

    pub fn movement_id(&self, movement: Movement) -> Result<i32, Error> {
        self.movements
            .get(&movement)
            .copied()
            .ok_or_else(|| unseeded("movement", movement.name()))
    }

    pub fn vehicle_id(&self, vehicle: VehicleClass) -> Result<i32, Error> {
        self.vehicles
            .get(&vehicle)
            .copied()
            .ok_or_else(|| unseeded("vehicle class", vehicle.name()))
    }
}

// A miss can only mean the cache was fetched before seeding ran.
fn unseeded(table: &str, name: &str) -> Error {
    Error::InternalError(format!("{table} vocabulary entry {name:?} was never seeded"))
}
