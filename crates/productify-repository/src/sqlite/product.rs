//! Product table binding.
//!
//! Reads join the owning category so the product carries its name.

use super::{SqlEntity, SqliteQuery};
use productify_core::{Category, EntityId, Product, ProductifyError, ProductifyResult};
use rust_decimal::Decimal;
use sqlx::FromRow;
use std::str::FromStr;

/// Database row representation of a product and its category name.
#[derive(Debug, FromRow)]
pub struct ProductRow {
    id: i64,
    name: String,
    price: String,
    category_id: i64,
    category_name: Option<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductifyError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&row.price)
            .map_err(|e| ProductifyError::Internal(format!("Invalid price in database: {e}")))?;
        let category_id = EntityId::new(row.category_id);

        Ok(Product {
            id: EntityId::new(row.id),
            name: row.name,
            price,
            category_id,
            category: row
                .category_name
                .map(|name| Category::with_id(category_id, name)),
        })
    }
}

impl SqlEntity for Product {
    type Row = ProductRow;

    const TABLE: &'static str = "products";
    const SELECT: &'static str = r"
        SELECT p.id, p.name, p.price, p.category_id, c.name AS category_name
        FROM products p
        LEFT JOIN categories c ON c.id = p.category_id";
    const ID_COLUMN: &'static str = "p.id";
    const INSERT: &'static str =
        "INSERT INTO products (name, price, category_id) VALUES (?, ?, ?)";
    const UPDATE: &'static str =
        "UPDATE products SET name = ?, price = ?, category_id = ? WHERE id = ?";

    fn from_row(row: ProductRow) -> ProductifyResult<Self> {
        Product::try_from(row)
    }

    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.price.normalize().to_string())
            .bind(self.category_id.into_inner())
    }
}
