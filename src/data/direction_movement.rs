use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct DirectionMovementRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DirectionMovementRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        study_direction_id: i32,
        movement_type_id: i32,
    ) -> Result<entity::direction_movement::Model, DbErr> {
        let direction_movement = entity::direction_movement::ActiveModel {
            study_direction_id: ActiveValue::Set(study_direction_id),
            movement_type_id: ActiveValue::Set(movement_type_id),
            ..Default::default()
        };

        direction_movement.insert(self.db).await
    }
}
