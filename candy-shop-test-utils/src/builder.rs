//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together, with all operations queued and executed during the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::shop_tables, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixture
/// records. Fixtures are inserted in declaration order per kind, parents first, so identities are
/// predictable: the first mock category is `1`, the first mock product is `1`, and so on.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_shop_tables: bool,

    // Database fixtures to insert
    categories: usize,
    users: usize,
    products: Vec<Option<i64>>,           // category_id
    orders: Vec<(Option<i64>, Vec<i64>)>, // (user_id, product_ids)
    points: Vec<Option<i64>>,             // user_id
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_shop_tables: false,
            categories: 0,
            users: 0,
            products: Vec::new(),
            orders: Vec::new(),
            points: Vec::new(),
        }
    }

    /// Add every table of the shop schema to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_shop_tables(mut self) -> Self {
        self.include_shop_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use candy_shop_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), candy_shop_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Point)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock category into the database.
    pub fn with_mock_category(mut self) -> Self {
        self.categories += 1;
        self
    }

    /// Insert a mock product into the database, optionally belonging to a category.
    pub fn with_mock_product(mut self, category_id: Option<i64>) -> Self {
        self.products.push(category_id);
        self
    }

    /// Insert a mock user into the database.
    pub fn with_mock_user(mut self) -> Self {
        self.users += 1;
        self
    }

    /// Insert a mock order linked to `product_ids`.
    ///
    /// The products must be added via `with_mock_product` before building.
    pub fn with_mock_order(mut self, user_id: Option<i64>, product_ids: Vec<i64>) -> Self {
        self.orders.push((user_id, product_ids));
        self
    }

    /// Insert a mock point into the database, optionally belonging to a user.
    pub fn with_mock_point(mut self, user_id: Option<i64>) -> Self {
        self.points.push(user_id);
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (shop tables if specified, then custom tables)
    /// 2. Inserts fixtures (categories, users, products, orders with their links, points)
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        if self.include_shop_tables {
            all_tables.extend(shop_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for _ in 0..self.categories {
            setup.shop().insert_mock_category().await?;
        }
        for _ in 0..self.users {
            setup.shop().insert_mock_user().await?;
        }
        for category_id in self.products {
            setup.shop().insert_mock_product(category_id).await?;
        }
        for (user_id, product_ids) in self.orders {
            setup.shop().insert_mock_order(user_id, &product_ids).await?;
        }
        for user_id in self.points {
            setup.shop().insert_mock_point(user_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
