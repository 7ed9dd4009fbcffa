mod config_reader;
mod console_sink;
mod gallery;
mod modal;

use common::api::api_wrapper::ApiAny;
use config_reader::retrieve_config;
use gallery::Gallery;
use leptos::{component, create_local_resource, view, IntoView, SignalGet};

pub(crate) fn log(entry: &str) {
    leptos::leptos_dom::logging::console_log(entry);
}

#[component]
pub fn App() -> impl IntoView {
    let configuration_getter =
        create_local_resource(|| (), move |_| async { retrieve_config().await });

    let main_page_view = move || match configuration_getter.get() {
        Some(Ok(config)) => {
            let api = ApiAny::from_mode(config.mode);
            if api.is_mock() {
                log("Initializing mock object");
            } else {
                log("Initializing live object");
            }
            view! { <Gallery api=api /> }.into_view()
        }
        Some(Err(e)) => {
            view! { <p class="config-error">{format!("Error loading config: {e}")}</p> }
                .into_view()
        }
        None => view! {
            <div class="config-loading-page">
                <LoadingSpinner />
            </div>
        }
        .into_view(),
    };

    view! { <main class="app">{main_page_view}</main> }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! { <div class="loading-spinner" role="status" aria-label="Loading..."></div> }
}
