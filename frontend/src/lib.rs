pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Loads runtime config, installs the console logger and mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    leptos::spawn_local(async move {
        let cfg = config::init().await;
        let level = cfg.level_filter().to_level().unwrap_or(log::Level::Info);
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }
        log::info!("starting e-hospital frontend against {}", cfg.base_url());
        router::mount_app();
    });
}
