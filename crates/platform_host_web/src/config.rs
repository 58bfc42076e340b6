//! Browser-backed configuration fetch.

use platform_host::{ConfigError, ConfigFuture, ConfigService};

#[cfg(target_arch = "wasm32")]
use content_contract::SiteConfig;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

/// Fixed same-origin path of the configuration document.
pub const CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Copy, Default)]
/// Config service backed by the browser fetch API.
///
/// No timeout wraps the request; a hung fetch keeps the page on the loading
/// surface, and only rejection or a bad status reaches the error path.
pub struct WebConfigService;

impl ConfigService for WebConfigService {
    fn load_config(&self) -> ConfigFuture<'_, Result<content_contract::SiteConfig, ConfigError>> {
        Box::pin(async move {
            #[cfg(not(target_arch = "wasm32"))]
            {
                Err(ConfigError::Request(
                    "config fetch is only available when compiled for wasm32".to_string(),
                ))
            }

            #[cfg(target_arch = "wasm32")]
            {
                fetch_site_config().await
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_site_config() -> Result<SiteConfig, ConfigError> {
    let window =
        web_sys::window().ok_or_else(|| ConfigError::Request("window unavailable".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(CONFIG_PATH))
        .await
        .map_err(|err| ConfigError::Request(format!("{err:?}")))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| ConfigError::Request("fetch resolved to a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }

    let body = JsFuture::from(
        response
            .text()
            .map_err(|err| ConfigError::Request(format!("{err:?}")))?,
    )
    .await
    .map_err(|err| ConfigError::Request(format!("{err:?}")))?;
    let body = body
        .as_string()
        .ok_or_else(|| ConfigError::Parse("response body is not text".to_string()))?;

    // Parse from text rather than `Response::json()` so failures carry a real
    // serde diagnostic instead of an opaque JsValue.
    serde_json::from_str(&body).map_err(|err| ConfigError::Parse(err.to_string()))
}
