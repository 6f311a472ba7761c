//! Thin fetch helpers for the admin API.
//!
//! The listing engine never fetches; each resource page owns its calls and
//! funnels them through these helpers so the request boilerplate exists once.
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Build API base URL. Always use port 3000 for the backend API.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    let has_body = body.is_some();
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

/// GET `path` and deserialize the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = send("GET", path, None).await?;
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// POST `body` as JSON to `path`, succeeding on any 2xx response.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let json = serde_json::to_string(body).map_err(|e| format!("{e}"))?;
    send("POST", path, Some(json)).await.map(|_| ())
}

/// DELETE `path`, succeeding on any 2xx response.
pub async fn send_delete(path: &str) -> Result<(), String> {
    send("DELETE", path, None).await.map(|_| ())
}
