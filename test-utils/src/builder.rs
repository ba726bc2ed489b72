use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Add entity tables, then call `build()` to create the context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Series, Season};
///
/// let test = TestBuilder::new()
///     .with_table(Series)
///     .with_table(Season)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared on its relations. Tables
    /// should be added in dependency order (referenced tables first).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the series-level tables: series, tags and their join rows.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_series_tables(self) -> Self {
        self.with_table(Series)
            .with_table(Tag)
            .with_table(TagTranslation)
            .with_table(SeriesTag)
    }

    /// Adds every table of the content hierarchy in dependency order.
    ///
    /// Series and tag tables followed by Season, Chapter, ChapterImage,
    /// TextLayer and Translation.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_comic_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_comic_tables(self) -> Self {
        self.with_series_tables()
            .with_table(Season)
            .with_table(Chapter)
            .with_table(ChapterImage)
            .with_table(TextLayer)
            .with_table(Translation)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
