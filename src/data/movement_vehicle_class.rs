use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct MovementVehicleClassRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MovementVehicleClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert the leaf count rows for one direction movement.
    pub async fn create_many(
        &self,
        direction_movement_id: i32,
        counts: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        if counts.is_empty() {
            return Ok(());
        }

        let rows = counts
            .iter()
            .map(
                |&(vehicle_type_id, vehicle_count)| entity::movement_vehicle_class::ActiveModel {
                    direction_movement_id: ActiveValue::Set(direction_movement_id),
                    vehicle_type_id: ActiveValue::Set(vehicle_type_id),
                    vehicle_count: ActiveValue::Set(vehicle_count),
                    ..Default::default()
                },
            );

        entity::prelude::MovementVehicleClass::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
