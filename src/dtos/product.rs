// src/dtos/product.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::dtos::supplier::SupplierResponse;
use crate::error::AppError;
use crate::models::product::{Category, CertificationStatus, Product};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub supplier_id: i64,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock_quantity: i32,
    pub certification_status: CertificationStatus,
    pub certification_expiry_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_stock(self.stock_quantity)
    }
}

/// Patch body for PUT /products/{id}. Every field is optional; for the two
/// nullable columns an explicit null clears the stored value while omission
/// leaves it untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub certification_status: Option<CertificationStatus>,
    // Some(Some(d)) set, Some(None) clear, None ignore
    #[serde(default, deserialize_with = "double_option")]
    pub certification_expiry_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock_quantity {
            validate_stock(stock)?;
        }
        Ok(())
    }
}

// Keeps null distinct from absent: serde collapses both to None for a plain
// Option, so the outer Some is added here and a missing field takes the
// field default instead.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    if name.chars().count() > 200 {
        return Err(AppError::validation("name must be at most 200 characters"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::validation("price must be greater than 0"));
    }
    Ok(())
}

fn validate_stock(stock: i32) -> Result<(), AppError> {
    if stock < 0 {
        return Err(AppError::validation("stock_quantity cannot be negative"));
    }
    Ok(())
}

/// Query string for GET /products: pagination plus optional equality filters.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub category: Option<Category>,
    pub certification_status: Option<CertificationStatus>,
}

fn default_limit() -> i64 {
    100
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub supplier_id: i64,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock_quantity: i32,
    pub certification_status: CertificationStatus,
    pub certification_expiry_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            supplier_id: p.supplier_id,
            name: p.name,
            category: p.category,
            price: p.price,
            stock_quantity: p.stock_quantity,
            certification_status: p.certification_status,
            certification_expiry_date: p.certification_expiry_date,
            description: p.description,
            created_at: p.created_at,
        }
    }
}

/// List view: the product plus its owning supplier, embedded in full.
#[derive(Debug, Serialize)]
pub struct ProductWithSupplier {
    #[serde(flatten)]
    pub product: ProductResponse,
    pub supplier: SupplierResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_create() -> CreateProductRequest {
        CreateProductRequest {
            supplier_id: 1,
            name: "Tea".into(),
            category: Category::Handmade,
            price: 5.0,
            stock_quantity: 10,
            certification_status: CertificationStatus::Pending,
            certification_expiry_date: None,
            description: None,
        }
    }

    #[test]
    fn create_request_parses_labels() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{
                "supplier_id": 1,
                "name": "Tea",
                "category": "Organic Food",
                "price": 5.0,
                "stock_quantity": 10,
                "certification_status": "Certified"
            }"#,
        )
        .unwrap();
        assert_eq!(req.category, Category::OrganicFood);
        assert_eq!(req.certification_status, CertificationStatus::Certified);
        assert!(req.certification_expiry_date.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_bad_ranges() {
        let mut req = base_create();
        req.price = 0.0;
        assert!(req.validate().is_err());

        let mut req = base_create();
        req.price = -2.5;
        assert!(req.validate().is_err());

        let mut req = base_create();
        req.stock_quantity = -1;
        assert!(req.validate().is_err());

        let mut req = base_create();
        req.name = "x".repeat(201);
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_patch_has_no_fields_present() {
        let patch: UpdateProductRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_none());
        assert!(patch.category.is_none());
        assert!(patch.price.is_none());
        assert!(patch.stock_quantity.is_none());
        assert!(patch.certification_status.is_none());
        assert!(patch.certification_expiry_date.is_none());
        assert!(patch.description.is_none());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn null_description_is_distinct_from_absent() {
        let patch: UpdateProductRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(patch.description, Some(None));

        let patch: UpdateProductRequest =
            serde_json::from_str(r#"{"description": "loose leaf"}"#).unwrap();
        assert_eq!(patch.description, Some(Some("loose leaf".into())));
    }

    #[test]
    fn null_expiry_clears_while_absent_ignores() {
        let patch: UpdateProductRequest =
            serde_json::from_str(r#"{"certification_expiry_date": null}"#).unwrap();
        assert_eq!(patch.certification_expiry_date, Some(None));
    }

    #[test]
    fn patch_rejects_out_of_range_values() {
        let patch: UpdateProductRequest =
            serde_json::from_str(r#"{"price": -1.5}"#).unwrap();
        assert!(patch.validate().is_err());

        let patch: UpdateProductRequest =
            serde_json::from_str(r#"{"stock_quantity": -3}"#).unwrap();
        assert!(patch.validate().is_err());
    }

    #[test]
    fn list_query_defaults_and_filters() {
        let q: ListProductsQuery =
            serde_urlencoded::from_str("category=Handmade").unwrap();
        assert_eq!(q.skip, 0);
        assert_eq!(q.limit, 100);
        assert_eq!(q.category, Some(Category::Handmade));
        assert_eq!(q.certification_status, None);

        let q: ListProductsQuery =
            serde_urlencoded::from_str("skip=5&limit=2&certification_status=Not+Certified")
                .unwrap();
        assert_eq!(q.skip, 5);
        assert_eq!(q.limit, 2);
        assert_eq!(
            q.certification_status,
            Some(CertificationStatus::NotCertified)
        );
    }

    #[test]
    fn product_with_supplier_embeds_full_record() {
        let entry = ProductWithSupplier {
            product: ProductResponse {
                id: 7,
                supplier_id: 1,
                name: "Tea".into(),
                category: Category::OrganicFood,
                price: 5.0,
                stock_quantity: 10,
                certification_status: CertificationStatus::Certified,
                certification_expiry_date: None,
                description: None,
                created_at: chrono::Utc::now(),
            },
            supplier: SupplierResponse {
                id: 1,
                name: "Acme".into(),
                email: "a@x.com".into(),
                country: "US".into(),
                contact_person: "Jo".into(),
                phone: "555".into(),
                created_at: chrono::Utc::now(),
            },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "Organic Food");
        assert_eq!(json["supplier"]["email"], "a@x.com");
    }
}
