use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Id of the `<script type="application/json">` the server embeds the
/// settings in, read back by the client before hydrating.
pub const SETTINGS_ELEMENT_ID: &str = "site-settings";

/// Client-visible settings, provided as context when the app is composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub viewer_script: String,
    pub scene_url: String,
    pub audio_src: String,
    pub audio_volume: f64,
    /// Root margin handed to the reveal observers; negative so sections
    /// trigger slightly before they are fully on screen.
    pub reveal_margin: String,
    /// How long a success/error status stays on screen.
    pub status_reset: Duration,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            viewer_script: "https://unpkg.com/@splinetool/viewer@1.12.28/build/spline-viewer.js"
                .to_string(),
            scene_url: "https://prod.spline.design/9ULHNzmv8iyfhWlX/scene.splinecode".to_string(),
            audio_src: "https://cdn.pixabay.com/audio/2024/11/04/audio_4956b4edd1.mp3".to_string(),
            audio_volume: 0.3,
            reveal_margin: "-100px".to_string(),
            status_reset: Duration::from_secs(5),
        }
    }
}

impl SiteSettings {
    /// Defaults, overridden by `SITE_VIEWER_SCRIPT`, `SITE_SCENE_URL`,
    /// `SITE_AUDIO_SRC`, `SITE_AUDIO_VOLUME` and `SITE_STATUS_RESET_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        for (name, field) in [
            ("SITE_VIEWER_SCRIPT", &mut settings.viewer_script),
            ("SITE_SCENE_URL", &mut settings.scene_url),
            ("SITE_AUDIO_SRC", &mut settings.audio_src),
        ] {
            if let Some(url) = var(name) {
                let absolute = url.starts_with("http://") || url.starts_with("https://");
                if !absolute && !url.starts_with('/') {
                    return Err(ConfigError::InvalidSetting(name, url));
                }
                *field = url;
            }
        }
        if let Some(v) = var("SITE_AUDIO_VOLUME") {
            settings.audio_volume = match v.trim().parse::<f64>() {
                Ok(vol) if (0.0..=1.0).contains(&vol) => vol,
                _ => return Err(ConfigError::InvalidSetting("SITE_AUDIO_VOLUME", v)),
            };
        }
        if let Some(v) = var("SITE_STATUS_RESET_SECS") {
            settings.status_reset = match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidSetting("SITE_STATUS_RESET_SECS", v)),
            };
        }
        Ok(settings)
    }

    /// JSON safe to place inside a `<script>` element.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        // `<` only appears inside strings, where `\u003c` decodes back to it
        serde_json::to_string(self).map(|json| json.replace('<', "\\u003c"))
    }

    pub fn from_script_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Server-only settings for the form relay. The access key never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("CONTACT_RELAY_ENDPOINT must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
    #[error("{0} has an invalid value {1:?}")]
    InvalidSetting(&'static str, String),
}

impl RelayConfig {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: Some(access_key.into()),
        }
    }

    /// Reads `WEB3FORMS_ACCESS_KEY` and `CONTACT_RELAY_ENDPOINT`.
    ///
    /// A missing key is not an error here: the site still renders and the
    /// contact form reports a failure when used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("CONTACT_RELAY_ENDPOINT").ok(),
            std::env::var("WEB3FORMS_ACCESS_KEY").ok(),
        )
    }

    fn from_vars(endpoint: Option<String>, access_key: Option<String>) -> Result<Self, ConfigError> {
        let endpoint = match endpoint.filter(|e| !e.trim().is_empty()) {
            Some(e) if e.starts_with("http://") || e.starts_with("https://") => e,
            Some(e) => return Err(ConfigError::InvalidEndpoint(e)),
            None => DEFAULT_RELAY_ENDPOINT.to_string(),
        };
        let access_key = access_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Ok(Self {
            endpoint,
            access_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }
}
