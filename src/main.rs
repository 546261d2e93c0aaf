mod app_config;
mod throw_controller;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    let config = app_config::widget_config();
    if config.debug {
        gloo::console::log!("shuriken stadium starting, sprite:", config.sprite_src.clone());
    }
    if let Err(err) = yew_app::mount(config) {
        gloo::console::error!("failed to mount widget:", err.to_string());
    }
}
