use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dtos::product::ProductResponse;
use crate::error::AppError;
use crate::models::supplier::Supplier;

#[derive(Debug, Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    pub email: String,
    pub country: String,
    pub contact_person: String,
    pub phone: String,
}

impl CreateSupplierRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name, 200)?;
        require_text("country", &self.country, 100)?;
        require_text("contact_person", &self.contact_person, 200)?;
        require_text("phone", &self.phone, 20)?;
        if !is_valid_email(&self.email) {
            return Err(AppError::validation("Invalid email address"));
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Structural check only: one '@', non-empty local part, dotted domain,
/// no whitespace. The database unique constraint handles duplicates.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(l), Some(d)) => (l, d),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|seg| !seg.is_empty())
}

#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub country: String,
    pub contact_person: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<Supplier> for SupplierResponse {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            country: s.country,
            contact_person: s.contact_person,
            phone: s.phone,
            created_at: s.created_at,
        }
    }
}

/// Detail view: the supplier plus all of its products (possibly empty).
#[derive(Debug, Serialize)]
pub struct SupplierWithProducts {
    #[serde(flatten)]
    pub supplier: SupplierResponse,
    pub products: Vec<ProductResponse>,
}
