use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    /// Connects to a fresh in-memory SQLite database with no tables.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Connected test setup
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Creates the statements for every table of the shop schema, parents before children.
pub fn shop_tables() -> Vec<TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Category),
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Product),
        schema.create_table_from_entity(entity::prelude::Order),
        schema.create_table_from_entity(entity::prelude::OrderProduct),
        schema.create_table_from_entity(entity::prelude::Point),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;
            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;
            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_shop_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup.with_tables($crate::setup::shop_tables()).await?;
            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
