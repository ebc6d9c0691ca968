//! reCAPTCHA Widget Bindings
//!
//! Thin `js_sys::Reflect` calls into the global `grecaptcha` object loaded by
//! `index.html`. A missing script means no widget and no token.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn grecaptcha() -> Option<JsValue> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str("grecaptcha")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value)
}

fn call(method: &str, args: &Array) -> Option<JsValue> {
    let api = grecaptcha()?;
    let function = Reflect::get(&api, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    match function.apply(&api, args) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("grecaptcha.{} failed: {:?}", method, err);
            None
        }
    }
}

fn widget_args(widget: Option<f64>) -> Array {
    match widget {
        Some(id) => Array::of1(&JsValue::from_f64(id)),
        None => Array::new(),
    }
}

/// Render the widget into the element with `container_id`; returns the widget id.
pub fn render(container_id: &str, site_key: &str) -> Option<f64> {
    if site_key.is_empty() {
        log::warn!("No reCAPTCHA site key configured");
        return None;
    }
    let params = Object::new();
    Reflect::set(&params, &JsValue::from_str("sitekey"), &JsValue::from_str(site_key)).ok()?;
    call("render", &Array::of2(&JsValue::from_str(container_id), &params))?.as_f64()
}

/// Current token, `None` until the user solves the challenge.
pub fn response(widget: Option<f64>) -> Option<String> {
    call("getResponse", &widget_args(widget))?
        .as_string()
        .filter(|token| !token.is_empty())
}

/// Tokens are single-use; clear the widget after a submit.
pub fn reset(widget: Option<f64>) {
    let _ = call("reset", &widget_args(widget));
}
