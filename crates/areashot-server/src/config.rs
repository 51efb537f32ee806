use std::env;
use std::path::PathBuf;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub google_api_key: String,
    pub webdriver_url: String,
    pub screenshot_dir: PathBuf,
    pub public_path: String,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let google_api_key =
            env::var("GOOGLE_MAPS_API_KEY").expect("GOOGLE_MAPS_API_KEY must be set");

        // chromedriver's default port
        let webdriver_url =
            env::var("WEBDRIVER_URL").unwrap_or_else(|_| "http://localhost:9515".to_string());

        let screenshot_dir = env::var("SCREENSHOT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("screenshots"));

        let public_path = env::var("PUBLIC_PATH").unwrap_or_else(|_| "static".to_string());

        Self {
            port,
            google_api_key,
            webdriver_url,
            screenshot_dir,
            public_path,
        }
    }
}
