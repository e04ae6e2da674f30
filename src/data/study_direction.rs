use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct StudyDirectionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyDirectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert one study-direction link, returning the model with its
    /// store-generated id for chaining movement inserts.
    pub async fn create(
        &self,
        miovision_id: i32,
        direction_type_id: i32,
    ) -> Result<entity::study_direction::Model, DbErr> {
        let study_direction = entity::study_direction::ActiveModel {
            miovision_id: ActiveValue::Set(miovision_id),
            direction_type_id: ActiveValue::Set(direction_type_id),
            ..Default::default()
        };

        study_direction.insert(self.db).await
    }
}
