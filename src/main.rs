use analog_clock;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Export dialogs are spawned onto this runtime
    let runtime = tokio::runtime::Runtime::new().map_err(|e| {
        log::error!("Failed to start tokio runtime: {e}");
        eframe::Error::AppCreation(Box::new(e))
    })?;
    let _guard = runtime.enter();

    // Run the clock application
    analog_clock::run_app()
}
