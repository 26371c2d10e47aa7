// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_loader;
mod slider;
mod startup;
mod state;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = env_logger::Builder::from_default_env();
    #[cfg(debug_assertions)]
    logger.filter_level(log::LevelFilter::Debug);
    logger.init();

    let options = match startup::options_from_env() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}\n\n{}", e, startup::USAGE);
            std::process::exit(2);
        }
    };

    let app = AppWindow::new().map_err(error::AppError::from)?;
    let app_state = state::AppState::new(options);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state);

    app.run().map_err(error::AppError::from)?;

    Ok(())
}
