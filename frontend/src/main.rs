mod app;
mod bootstrap;
mod styles;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = bootstrap::bootstrap() {
        leptos::logging::error!("Failed to start the gallery: {e}");
    }
}
