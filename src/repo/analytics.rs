use sqlx::PgPool;

use crate::dtos::analytics::{AnalyticsSummary, CategoryCount, CertificationCount};
use crate::models::product::{Category, CertificationStatus};

/// Entity totals plus product counts grouped by category and by
/// certification status. Groups with no products are absent.
pub async fn summary(pool: &PgPool) -> Result<AnalyticsSummary, sqlx::Error> {
    let total_suppliers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
        .fetch_one(pool)
        .await?;

    let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let by_category = sqlx::query_as::<_, (Category, i64)>(
        "SELECT category, COUNT(*) FROM products GROUP BY category",
    )
    .fetch_all(pool)
    .await?;

    let by_certification = sqlx::query_as::<_, (CertificationStatus, i64)>(
        "SELECT certification_status, COUNT(*) FROM products GROUP BY certification_status",
    )
    .fetch_all(pool)
    .await?;

    Ok(AnalyticsSummary {
        total_suppliers,
        total_products,
        products_by_category: by_category
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
        products_by_certification: by_certification
            .into_iter()
            .map(|(certification_status, count)| CertificationCount {
                certification_status,
                count,
            })
            .collect(),
    })
}
