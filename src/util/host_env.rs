//! Host webview environment bindings.
//!
//! Reads the player identity from the context object the messaging app
//! injects into the webview (`window.Telegram.WebApp`) and fires its
//! `expand()`/`ready()` lifecycle hooks once at startup. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! The host object is untyped, so access goes through `js_sys::Reflect`
//! and degrades to `None` at any missing link instead of throwing; native
//! builds no-op so tests stay deterministic.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

/// Resolve the host context: call the lifecycle hooks and return the
/// player identifier, or `None` when the page runs outside the host app.
pub fn resolve_identity() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let app = host_app()?;
        call_hook(&app, "expand");
        call_hook(&app, "ready");
        user_id(&app)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// The injected `window.Telegram.WebApp` object.
#[cfg(feature = "csr")]
fn host_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("Telegram")).ok()?;
    let app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if app.is_undefined() || app.is_null() {
        return None;
    }
    Some(app)
}

/// Invoke a zero-argument lifecycle method on the host object, ignoring
/// hosts that do not provide it.
#[cfg(feature = "csr")]
fn call_hook(app: &JsValue, name: &str) {
    if let Ok(hook) = js_sys::Reflect::get(app, &JsValue::from_str(name))
        && let Some(hook) = hook.dyn_ref::<js_sys::Function>()
    {
        let _ = hook.call0(app);
    }
}

/// Extract `initDataUnsafe.user.id`, accepting either a numeric or a
/// string identifier.
#[cfg(feature = "csr")]
fn user_id(app: &JsValue) -> Option<String> {
    let init_data = js_sys::Reflect::get(app, &JsValue::from_str("initDataUnsafe")).ok()?;
    let user = js_sys::Reflect::get(&init_data, &JsValue::from_str("user")).ok()?;
    let id = js_sys::Reflect::get(&user, &JsValue::from_str("id")).ok()?;
    #[allow(clippy::cast_possible_truncation)]
    if let Some(numeric) = id.as_f64() {
        return Some(format!("{}", numeric as i64));
    }
    id.as_string().filter(|s| !s.is_empty())
}
