use leptos::prelude::*;
use softdist::App;
use softdist::config::{LOG_LEVEL, MOUNT_ELEMENT_ID};
use softdist::utils::logger;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LOG_LEVEL);

    let root = document()
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .expect("Failed to find mount element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
