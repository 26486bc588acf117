//! Employee profile client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use employee_profile_client::{
    components::profile::{FormServices, ProfileForm},
    logging, FormConfig, SimulatedSubmitter,
};

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = FormConfig::from_env();
        employee_profile_client::log_debug!("Profile form config: {:?}", config);
        FormServices {
            submitter: Rc::new(SimulatedSubmitter::from_config(&config)),
            config,
        }
    });

    rsx! {
        ProfileForm {}
    }
}
