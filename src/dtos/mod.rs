pub mod analytics;
pub mod product;
pub mod supplier;

use serde::Deserialize;

/// skip/limit query pair shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_hundred() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn pagination_accepts_explicit_values() {
        let p: Pagination = serde_json::from_str(r#"{"skip":20,"limit":5}"#).unwrap();
        assert_eq!(p.skip, 20);
        assert_eq!(p.limit, 5);
    }
}
