#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://cinelog.db?mode=rwc".to_string());
        if database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is empty");
        }
        let database_url = database_url.trim().to_string();

        let log_filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "info,cinelog=debug,sqlx=warn".to_string());

        Ok(Self { database_url, log_filter })
    }
}
