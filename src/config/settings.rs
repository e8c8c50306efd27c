use serde::Deserialize;
use crate::config::env::{self, EnvKey};

// Same accepted-origins set the frontend deployments use.
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:8080,http://localhost:1234,https://movies.com,https://midu.dev";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub allowed_origins: Vec<String>,
    pub movies_data: String,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 1234),
            allowed_origins: parse_origins(&env::get_or(
                EnvKey::AllowedOrigins,
                DEFAULT_ALLOWED_ORIGINS,
            )),
            movies_data: env::get_or(EnvKey::MoviesData, "data/movies.json"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins("http://localhost:8080, https://movies.com,");
        assert_eq!(origins, vec!["http://localhost:8080", "https://movies.com"]);
    }
}
