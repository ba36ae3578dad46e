use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Earlier sources win field by field.
    pub fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_empty(self.api_base_url).or(non_empty(fallback.api_base_url)),
            log_level: non_empty(self.log_level).or(non_empty(fallback.log_level)),
        }
    }

    pub fn base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::LevelFilter::Info)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn cache_config(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg);
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};
    use wasm_bindgen::JsValue;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let lookup = |keys: &[&str]| {
            keys.iter().find_map(|key| {
                js_sys::Reflect::get(&any, &JsValue::from_str(key))
                    .ok()
                    .and_then(|v| v.as_string())
            })
        };
        Some(RuntimeConfig {
            api_base_url: lookup(&["API_BASE_URL", "api_base_url"]),
            log_level: lookup(&["LOG_LEVEL", "log_level"]),
        })
    }

    /// `window.__EHOSPITAL_ENV` (env.js) over `window.__EHOSPITAL_CONFIG`.
    pub(super) fn snapshot_from_globals() -> RuntimeConfig {
        read_global("__EHOSPITAL_ENV")
            .unwrap_or_default()
            .merge(read_global("__EHOSPITAL_CONFIG").unwrap_or_default())
    }

    pub(super) async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let href = web_sys::window()
            .ok_or_else(|| anyhow!("no global window"))?
            .location()
            .href()
            .map_err(|_| anyhow!("window.location is unavailable"))?;
        let url = reqwest::Url::parse(&href)
            .and_then(|base| base.join("./config.json"))
            .context("resolving config.json")?;
        let response = reqwest::get(url).await.context("fetching config.json")?;
        if !response.status().is_success() {
            return Err(anyhow!("config.json returned {}", response.status()));
        }
        response
            .json::<RuntimeConfig>()
            .await
            .context("decoding config.json")
    }
}

pub async fn load() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        let globals = browser::snapshot_from_globals();
        if globals.api_base_url.is_some() {
            return cache_config(globals);
        }
        match browser::fetch_runtime_config().await {
            Ok(file) => return cache_config(globals.merge(file)),
            Err(err) => log::debug!("runtime config file skipped: {:#}", err),
        }
        cache_config(globals)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        cache_config(RuntimeConfig::default())
    }
}

pub async fn await_api_base_url() -> String {
    load().await.base_url()
}

pub async fn init() -> RuntimeConfig {
    load().await
}
