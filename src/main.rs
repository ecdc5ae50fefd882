//! Folder Todo Frontend Entry Point

mod app;
mod components;
mod dialogs;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(tracing::Level::DEBUG);
    mount_to_body(App);
}
