fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails when a logger is already installed; keep going either way.
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("charon-ui logger not installed: {err}").into());
    }

    if let Err(err) = charon_ui::boot() {
        log::error!("charon-ui failed to start: {err}");
    }
}
