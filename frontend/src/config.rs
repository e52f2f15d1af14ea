use lazy_static::lazy_static;

pub const ANALYZE_PATH: &str = "/api/trending/analyze";
pub const LOGIN_ACTION: &str = "/auth/login";
pub const SIGNUP_ACTION: &str = "/auth/signup";

pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/480x360";

pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while analyzing trends";
pub const DEFAULT_EMPTY_MESSAGE: &str =
    "No trending videos found for your search. Please try a different category.";
pub const EMPTY_VIDEO_LIST_NOTICE: &str = "No trending videos found for this category.";

pub const DEFAULT_TREND_LABEL: &str = "Trending";
// Only used when trend_strength is absent or unparseable. An explicit 0 is
// shown as "0/10" with the low-strength badge.
pub const DEFAULT_TREND_STRENGTH: i64 = 5;
pub const UNTITLED_VIDEO: &str = "Untitled Video";
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

pub const MIN_PASSWORD_LENGTH: usize = 8;

// Milliseconds
pub const AUTH_CARD_REVEAL_DELAY: u32 = 100;
pub const DASHBOARD_STAGGER_STEP: u32 = 100;
pub const RIPPLE_DURATION: u32 = 600;
pub const NOTIFICATION_DURATION: u32 = 3000;

lazy_static! {
    pub static ref APP_CONFIG: AppConfig = AppConfig::from_lookup(read_env_config);
}

/// Settings the hosting page provides through `window.ENV_CONFIG`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prepended to API paths. Empty means same origin.
    pub api_base_url: String,
    pub app_name: String,
    pub debug_mode: bool,
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            app_name: lookup("APP_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "TrendLens".to_string()),
            debug_mode: lookup("DEBUG_MODE")
                .and_then(|flag| flag.trim().parse().ok())
                .unwrap_or(false),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn read_env_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;
    if value.is_undefined() {
        log::debug!("ENV_CONFIG.{key} is not set");
        None
    } else {
        value.as_string()
    }
}
