use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product category, stored as the `product_category` Postgres enum and
/// serialized with the same labels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_category")]
pub enum Category {
    #[serde(rename = "Organic Food")]
    #[sqlx(rename = "Organic Food")]
    OrganicFood,
    #[serde(rename = "Handmade")]
    #[sqlx(rename = "Handmade")]
    Handmade,
    #[serde(rename = "Sustainable Goods")]
    #[sqlx(rename = "Sustainable Goods")]
    SustainableGoods,
}

impl Category {
    pub fn as_label(&self) -> &'static str {
        match self {
            Category::OrganicFood => "Organic Food",
            Category::Handmade => "Handmade",
            Category::SustainableGoods => "Sustainable Goods",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "certification_status")]
pub enum CertificationStatus {
    #[serde(rename = "Certified")]
    #[sqlx(rename = "Certified")]
    Certified,
    #[serde(rename = "Pending")]
    #[sqlx(rename = "Pending")]
    Pending,
    #[serde(rename = "Not Certified")]
    #[sqlx(rename = "Not Certified")]
    NotCertified,
}

impl CertificationStatus {
    pub fn as_label(&self) -> &'static str {
        match self {
            CertificationStatus::Certified => "Certified",
            CertificationStatus::Pending => "Pending",
            CertificationStatus::NotCertified => "Not Certified",
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Product {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_json() {
        for (variant, label) in [
            (Category::OrganicFood, "\"Organic Food\""),
            (Category::Handmade, "\"Handmade\""),
            (Category::SustainableGoods, "\"Sustainable Goods\""),
        ] {
            assert_eq!(serde_json::to_string(&variant).unwrap(), label);
            let back: Category = serde_json::from_str(label).unwrap();
            assert_eq!(back, variant);
        }
    }

    #[test]
    fn certification_labels_round_trip_through_json() {
        for (variant, label) in [
            (CertificationStatus::Certified, "\"Certified\""),
            (CertificationStatus::Pending, "\"Pending\""),
            (CertificationStatus::NotCertified, "\"Not Certified\""),
        ] {
            assert_eq!(serde_json::to_string(&variant).unwrap(), label);
            let back: CertificationStatus = serde_json::from_str(label).unwrap();
            assert_eq!(back, variant);
        }
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        assert!(serde_json::from_str::<Category>("\"Electronics\"").is_err());
        assert!(serde_json::from_str::<CertificationStatus>("\"Expired\"").is_err());
    }

    #[test]
    fn as_label_matches_wire_form() {
        let json = serde_json::to_string(&Category::SustainableGoods).unwrap();
        assert_eq!(json, format!("\"{}\"", Category::SustainableGoods.as_label()));
        let json = serde_json::to_string(&CertificationStatus::NotCertified).unwrap();
        assert_eq!(
            json,
            format!("\"{}\"", CertificationStatus::NotCertified.as_label())
        );
    }
}
