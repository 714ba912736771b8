use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub identity_base_url: String,
    pub identity_api_key: String,
    pub image_base_url: String,
    pub image_api_key: String,
    pub email_base_url: String,
    pub email_api_key: String,
    pub email_sender: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            identity_base_url: std::env::var("IDENTITY_BASE_URL")
                .context("Cannot load IDENTITY_BASE_URL env variable")?,
            identity_api_key: std::env::var("IDENTITY_API_KEY")
                .context("Cannot load IDENTITY_API_KEY env variable")?,
            image_base_url: std::env::var("IMAGE_BASE_URL")
                .context("Cannot load IMAGE_BASE_URL env variable")?,
            image_api_key: std::env::var("IMAGE_API_KEY")
                .context("Cannot load IMAGE_API_KEY env variable")?,
            email_base_url: std::env::var("EMAIL_BASE_URL")
                .context("Cannot load EMAIL_BASE_URL env variable")?,
            email_api_key: std::env::var("EMAIL_API_KEY")
                .context("Cannot load EMAIL_API_KEY env variable")?,
            email_sender: std::env::var("EMAIL_SENDER")
                .unwrap_or_else(|_| "noreply@edblazon.example".to_string()),
        })
    }
}
