//! Category table binding.

use super::{SqlEntity, SqliteQuery};
use productify_core::{Category, EntityId, ProductifyResult};
use sqlx::FromRow;

/// Database row representation of a category.
#[derive(Debug, FromRow)]
pub struct CategoryRow {
    id: i64,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::with_id(EntityId::new(row.id), row.name)
    }
}

impl SqlEntity for Category {
    type Row = CategoryRow;

    const TABLE: &'static str = "categories";
    const SELECT: &'static str = "SELECT id, name FROM categories";
    const ID_COLUMN: &'static str = "id";
    const INSERT: &'static str = "INSERT INTO categories (name) VALUES (?)";
    const UPDATE: &'static str = "UPDATE categories SET name = ? WHERE id = ?";

    fn from_row(row: CategoryRow) -> ProductifyResult<Self> {
        Ok(row.into())
    }

    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.name.as_str())
    }
}
