//! Client configuration resolved at build time.
//!
//! WASM builds have no process environment, so the API origin is baked in
//! through `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://giraffeclaude.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `KITCHEN_API_BASE_URL`: backend origin, default [`DEFAULT_API_BASE_URL`]
    pub fn from_build_env() -> Self {
        option_env!("KITCHEN_API_BASE_URL").map_or_else(Self::default, Self::with_base_url)
    }

    /// Config pointing at `base_url`, with any trailing slashes removed.
    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim();
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL
        } else {
            trimmed.trim_end_matches('/')
        };
        Self { api_base_url: api_base_url.to_owned() }
    }
}
