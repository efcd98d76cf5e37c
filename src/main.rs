use log::info;

use portfolio_frontend::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page scripts");
    if let Err(err) = portfolio_frontend::start() {
        gloo_console::error!(format!("Could not schedule page setup: {}", err));
    }
}
