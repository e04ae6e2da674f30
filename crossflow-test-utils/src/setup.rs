use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create only the three vocabulary dimension tables.
    pub async fn with_vocabulary_tables(&self) -> Result<(), TestError> {
        let schema = Schema::new(DbBackend::Sqlite);

        self.with_tables(vec![
            schema.create_table_from_entity(entity::prelude::DirectionType),
            schema.create_table_from_entity(entity::prelude::MovementType),
            schema.create_table_from_entity(entity::prelude::VehicleType),
        ])
        .await
    }

    /// Create all seven tables in dependency order.
    pub async fn with_full_schema(&self) -> Result<(), TestError> {
        let schema = Schema::new(DbBackend::Sqlite);

        self.with_tables(vec![
            schema.create_table_from_entity(entity::prelude::DirectionType),
            schema.create_table_from_entity(entity::prelude::MovementType),
            schema.create_table_from_entity(entity::prelude::VehicleType),
            schema.create_table_from_entity(entity::prelude::Study),
            schema.create_table_from_entity(entity::prelude::StudyDirection),
            schema.create_table_from_entity(entity::prelude::DirectionMovement),
            schema.create_table_from_entity(entity::prelude::MovementVehicleClass),
        ])
        .await
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided, create the full schema
    () => {{
        async {
            let setup = $crate::setup::TestSetup::new().await?;
            setup.with_full_schema().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::setup::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
