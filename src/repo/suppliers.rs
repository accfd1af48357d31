use sqlx::PgPool;

use crate::dtos::supplier::CreateSupplierRequest;
use crate::models::product::Product;
use crate::models::supplier::Supplier;

const SUPPLIER_COLUMNS: &str = "id, name, email, country, contact_person, phone, created_at";

pub async fn create(pool: &PgPool, input: &CreateSupplierRequest) -> Result<Supplier, sqlx::Error> {
    sqlx::query_as::<_, Supplier>(
        "INSERT INTO suppliers (name, email, country, contact_person, phone)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, email, country, contact_person, phone, created_at",
    )
    .bind(input.name.trim())
    .bind(input.email.trim())
    .bind(input.country.trim())
    .bind(input.contact_person.trim())
    .bind(input.phone.trim())
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Supplier>, sqlx::Error> {
    sqlx::query_as::<_, Supplier>(&format!(
        "SELECT {SUPPLIER_COLUMNS} FROM suppliers ORDER BY id OFFSET $1 LIMIT $2"
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Supplier>, sqlx::Error> {
    sqlx::query_as::<_, Supplier>(&format!(
        "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<Supplier>, sqlx::Error> {
    sqlx::query_as::<_, Supplier>(&format!(
        "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// All products owned by one supplier, for the embedded detail view.
pub async fn products_of(pool: &PgPool, supplier_id: i64) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, supplier_id, name, category, price, stock_quantity,
                certification_status, certification_expiry_date, description, created_at
         FROM products WHERE supplier_id = $1 ORDER BY id",
    )
    .bind(supplier_id)
    .fetch_all(pool)
    .await
}

/// Not exposed as a route; products go with the supplier via the FK cascade.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
