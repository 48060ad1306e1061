use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_PORT: u16 = 5432;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: required("DATABASE_HOST", "DB_HOST")?,
            port: match lookup("DATABASE_PORT", "DB_PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("DATABASE_PORT must be a port number")?,
                None => DEFAULT_DATABASE_PORT,
            },
            username: required("DATABASE_USERNAME", "DB_USER")?,
            password: required("DATABASE_PASSWORD", "DB_PASSWORD")?,
            database: required("DATABASE_NAME", "DB_NAME")?,
        };
        let server = ServerConfig {
            port: match std::env::var("PORT") {
                Ok(port) => port.parse::<u16>().context("PORT must be a port number")?,
                Err(_) => DEFAULT_PORT,
            },
        };
        Ok(Self { database, server })
    }
}

// DATABASE_* を優先し、無ければ旧来の DB_* を見る
fn lookup(name: &str, legacy: &str) -> Option<String> {
    std::env::var(name).or_else(|_| std::env::var(legacy)).ok()
}

fn required(name: &str, legacy: &str) -> Result<String> {
    lookup(name, legacy).with_context(|| format!("{name} (or {legacy}) is not set"))
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_legacy_name() {
        std::env::set_var("SPACE_RENTAL_TEST_LEGACY_HOST", "db.internal");
        assert_eq!(
            lookup("SPACE_RENTAL_TEST_HOST", "SPACE_RENTAL_TEST_LEGACY_HOST").as_deref(),
            Some("db.internal")
        );

        std::env::set_var("SPACE_RENTAL_TEST_HOST", "db.primary");
        assert_eq!(
            lookup("SPACE_RENTAL_TEST_HOST", "SPACE_RENTAL_TEST_LEGACY_HOST").as_deref(),
            Some("db.primary")
        );
    }

    #[test]
    fn required_reports_both_names() {
        let err = required("SPACE_RENTAL_TEST_UNSET", "SPACE_RENTAL_TEST_UNSET_LEGACY").unwrap_err();
        assert_eq!(
            err.to_string(),
            "SPACE_RENTAL_TEST_UNSET (or SPACE_RENTAL_TEST_UNSET_LEGACY) is not set"
        );
    }
}
