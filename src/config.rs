use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("PORT must be a number, got {raw:?}"))?,
            Err(_) => 4000,
        };

        // Comma-separated list; defaults to the Vite dev-server origins.
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:5174".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.is_empty() {
            return Err("CORS_ORIGINS must contain at least one origin".to_string());
        }

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("SEED_DEMO_DATA must be true or false, got {raw:?}"))?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            cors_origins,
            seed_demo_data,
        })
    }
}
