//! Projects document source backed by the browser `fetch` API.

use folio_core::{ProjectSource, SourceError, SourceResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches the projects document from a URL relative to the page.
#[derive(Debug, Clone)]
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn unreachable(&self, message: String) -> SourceError {
        SourceError::Unreachable {
            location: self.url.clone(),
            message,
        }
    }
}

impl ProjectSource for FetchSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> SourceResult<String> {
        let window =
            web_sys::window().ok_or_else(|| self.unreachable("no global window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|err| self.unreachable(describe(&err)))?
            .dyn_into::<Response>()
            .map_err(|_| SourceError::Malformed("fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(SourceError::Status {
                location: self.url.clone(),
                status: response.status(),
            });
        }

        let text = response
            .text()
            .map_err(|err| SourceError::Malformed(describe(&err)))?;
        JsFuture::from(text)
            .await
            .map_err(|err| SourceError::Malformed(describe(&err)))?
            .as_string()
            .ok_or_else(|| SourceError::Malformed("response body is not text".to_string()))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
