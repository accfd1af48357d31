use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Origin allowed for CORS; unset means allow any origin.
    pub cors_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let database_url = std::env::var("DATABASE_URL")?;
        let host = std::env::var("HOST")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or_else(|| "127.0.0.1".parse().unwrap());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);
        let cors_origin = std::env::var("CORS_ORIGIN").ok().filter(|o| !o.is_empty());
        Ok(Self {
            database_url,
            host,
            port,
            cors_origin,
        })
    }
}
