use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::dtos::product::{CreateProductRequest, UpdateProductRequest};
use crate::models::product::{Category, CertificationStatus, Product};
use crate::models::supplier::Supplier;

const PRODUCT_COLUMNS: &str = "id, supplier_id, name, category, price, stock_quantity, \
     certification_status, certification_expiry_date, description, created_at";

pub async fn create(pool: &PgPool, input: &CreateProductRequest) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (supplier_id, name, category, price, stock_quantity,
                               certification_status, certification_expiry_date, description)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(input.supplier_id)
    .bind(input.name.trim())
    .bind(input.category)
    .bind(input.price)
    .bind(input.stock_quantity)
    .bind(input.certification_status)
    .bind(input.certification_expiry_date)
    .bind(&input.description)
    .fetch_one(pool)
    .await
}

/// Joined row for the list view; supplier columns are aliased apart from the
/// product's own id/name/created_at.
#[derive(FromRow)]
struct ProductSupplierRow {
    id: i64,
    supplier_id: i64,
    name: String,
    category: Category,
    price: f64,
    stock_quantity: i32,
    certification_status: CertificationStatus,
    certification_expiry_date: Option<DateTime<Utc>>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    supplier_name: String,
    supplier_email: String,
    supplier_country: String,
    supplier_contact_person: String,
    supplier_phone: String,
    supplier_created_at: DateTime<Utc>,
}

impl ProductSupplierRow {
    fn split(self) -> (Product, Supplier) {
        let supplier = Supplier {
            id: self.supplier_id,
            name: self.supplier_name,
            email: self.supplier_email,
            country: self.supplier_country,
            contact_person: self.supplier_contact_person,
            phone: self.supplier_phone,
            created_at: self.supplier_created_at,
        };
        let product = Product {
            id: self.id,
            supplier_id: self.supplier_id,
            name: self.name,
            category: self.category,
            price: self.price,
            stock_quantity: self.stock_quantity,
            certification_status: self.certification_status,
            certification_expiry_date: self.certification_expiry_date,
            description: self.description,
            created_at: self.created_at,
        };
        (product, supplier)
    }
}

/// Page of products with their owning supplier. The two filters are
/// independent equality matches, combined with AND when both are given.
pub async fn list(
    pool: &PgPool,
    skip: i64,
    limit: i64,
    category: Option<Category>,
    certification_status: Option<CertificationStatus>,
) -> Result<Vec<(Product, Supplier)>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProductSupplierRow>(
        "SELECT p.id, p.supplier_id, p.name, p.category, p.price, p.stock_quantity,
                p.certification_status, p.certification_expiry_date, p.description, p.created_at,
                s.name AS supplier_name, s.email AS supplier_email, s.country AS supplier_country,
                s.contact_person AS supplier_contact_person, s.phone AS supplier_phone,
                s.created_at AS supplier_created_at
         FROM products p
         JOIN suppliers s ON s.id = p.supplier_id
         WHERE ($1::product_category IS NULL OR p.category = $1)
           AND ($2::certification_status IS NULL OR p.certification_status = $2)
         ORDER BY p.id
         OFFSET $3 LIMIT $4",
    )
    .bind(category)
    .bind(certification_status)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ProductSupplierRow::split).collect())
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Sparse patch: load the row, overlay only the fields present in the patch,
/// write the result back. Returns None when the id does not exist.
pub async fn update(
    pool: &PgPool,
    id: i64,
    patch: &UpdateProductRequest,
) -> Result<Option<Product>, sqlx::Error> {
    let Some(current) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let name = patch.name.as_deref().unwrap_or(&current.name).trim();
    let category = patch.category.unwrap_or(current.category);
    let price = patch.price.unwrap_or(current.price);
    let stock_quantity = patch.stock_quantity.unwrap_or(current.stock_quantity);
    let certification_status = patch
        .certification_status
        .unwrap_or(current.certification_status);
    let certification_expiry_date = match &patch.certification_expiry_date {
        Some(value) => *value,
        None => current.certification_expiry_date,
    };
    let description = match &patch.description {
        Some(value) => value.clone(),
        None => current.description.clone(),
    };

    let updated = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products
         SET name = $1, category = $2, price = $3, stock_quantity = $4,
             certification_status = $5, certification_expiry_date = $6, description = $7
         WHERE id = $8
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(name)
    .bind(category)
    .bind(price)
    .bind(stock_quantity)
    .bind(certification_status)
    .bind(certification_expiry_date)
    .bind(description)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(Some(updated))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
