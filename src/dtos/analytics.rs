use serde::Serialize;

use crate::models::product::{Category, CertificationStatus};

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct CertificationCount {
    pub certification_status: CertificationStatus,
    pub count: i64,
}

/// Catalog-wide counts. Only groups with at least one product appear.
#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_suppliers: i64,
    pub total_products: i64,
    pub products_by_category: Vec<CategoryCount>,
    pub products_by_certification: Vec<CertificationCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_group_labels() {
        let summary = AnalyticsSummary {
            total_suppliers: 2,
            total_products: 3,
            products_by_category: vec![CategoryCount {
                category: Category::OrganicFood,
                count: 3,
            }],
            products_by_certification: vec![
                CertificationCount {
                    certification_status: CertificationStatus::Certified,
                    count: 1,
                },
                CertificationCount {
                    certification_status: CertificationStatus::NotCertified,
                    count: 2,
                },
            ],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_suppliers"], 2);
        assert_eq!(json["total_products"], 3);
        assert_eq!(json["products_by_category"][0]["category"], "Organic Food");
        assert_eq!(
            json["products_by_certification"][1]["certification_status"],
            "Not Certified"
        );
    }
}
