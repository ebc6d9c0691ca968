//! Taskboard Frontend Entry Point

mod app;
mod captcha;
mod components;
mod config;
mod context;
mod navigation;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(config::log_level()) {
        web_sys::console::warn_1(&format!("logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
