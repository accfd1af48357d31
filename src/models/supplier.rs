use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub country: String,
    pub contact_person: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}
