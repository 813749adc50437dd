//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honoured via `dotenvy` in the binaries.
//!
//! ## Server
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `CACHE_MAX_AGE` - `Cache-Control` max-age for rendered images in
//!   seconds (default: 31536000)
//!
//! ## Rendering
//!
//! ```bash
//! export QR_DEFAULT_SIZE=256
//! export QR_MIN_SIZE=32
//! export QR_MAX_SIZE=1024
//! export QR_MARGIN_RATIO=0.05
//! export QR_LOGO_RATIO=0.22     # 0 disables the badge
//! export QR_LOGO_MAX_PX=25      # optional cap on the badge side
//! export QR_LOGO_HALO=true
//! ```

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::domain::composite::LayoutConfig;
use crate::domain::entities::SizeLimits;

/// Hard upper bound on any canvas side, regardless of configuration.
pub const CANVAS_LIMIT: u32 = 4096;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    /// `max-age` advertised for rendered images. Renders are pure functions
    /// of the query string, so responses are marked `immutable`.
    pub cache_max_age: u64,
    pub size_limits: SizeLimits,
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
            cache_max_age: 31_536_000,
            size_limits: SizeLimits::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);
        let cache_max_age = parse_var("CACHE_MAX_AGE")?.unwrap_or(defaults.cache_max_age);

        let size_limits = SizeLimits {
            min: parse_var("QR_MIN_SIZE")?.unwrap_or(defaults.size_limits.min),
            max: parse_var("QR_MAX_SIZE")?.unwrap_or(defaults.size_limits.max),
            default: parse_var("QR_DEFAULT_SIZE")?.unwrap_or(defaults.size_limits.default),
        };

        let layout = LayoutConfig {
            margin_ratio: parse_var("QR_MARGIN_RATIO")?.unwrap_or(defaults.layout.margin_ratio),
            logo_ratio: parse_var("QR_LOGO_RATIO")?.unwrap_or(defaults.layout.logo_ratio),
            logo_max_px: parse_var("QR_LOGO_MAX_PX")?.or(defaults.layout.logo_max_px),
            halo: env::var("QR_LOGO_HALO")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.layout.halo),
            ..defaults.layout
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            cache_max_age,
            size_limits,
            layout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - size limits are out of order or outside `16..=4096`
    /// - layout ratios leave no room for the QR code
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let SizeLimits { min, max, default } = self.size_limits;
        if min < 16 {
            anyhow::bail!("QR_MIN_SIZE must be at least 16, got {}", min);
        }
        if max > CANVAS_LIMIT {
            anyhow::bail!(
                "QR_MAX_SIZE is too large (max: {}), got {}",
                CANVAS_LIMIT,
                max
            );
        }
        if !(min <= default && default <= max) {
            anyhow::bail!(
                "QR sizes must satisfy QR_MIN_SIZE <= QR_DEFAULT_SIZE <= QR_MAX_SIZE, got {} / {} / {}",
                min,
                default,
                max
            );
        }

        let layout = &self.layout;
        if !(0.0..0.25).contains(&layout.margin_ratio) {
            anyhow::bail!(
                "QR_MARGIN_RATIO must be in [0, 0.25), got {}",
                layout.margin_ratio
            );
        }
        if !(0.0..=0.3).contains(&layout.logo_ratio) {
            anyhow::bail!(
                "QR_LOGO_RATIO must be in [0, 0.3], got {}",
                layout.logo_ratio
            );
        }
        if let Some(max_px) = layout.logo_max_px
            && max_px <= 0.0
        {
            anyhow::bail!("QR_LOGO_MAX_PX must be greater than 0, got {}", max_px);
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Sizes: default {} (min {}, max {})",
            self.size_limits.default,
            self.size_limits.min,
            self.size_limits.max
        );
        tracing::info!(
            "  Layout: margin {}, logo {}{}, halo {}",
            self.layout.margin_ratio,
            self.layout.logo_ratio,
            self.layout
                .logo_max_px
                .map(|px| format!(" (max {px}px)"))
                .unwrap_or_default(),
            self.layout.halo
        );
        tracing::info!("  Cache max-age: {}s", self.cache_max_age);
    }
}

/// Reads and parses an optional environment variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
