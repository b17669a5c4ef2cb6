use crunchy_counter::{App, Config, print_banner, setup_environment, tui};

fn main() -> anyhow::Result<()> {
    // 1. Load configuration (.env honored)
    let config = Config::from_env();

    // 2. Prepare environment (work directory, logging)
    setup_environment(&config)?;

    print_banner();
    tracing::info!(work_dir = %config.work_dir, "Crunchy Counter starting");

    // 3. Open storage and rehydrate the stores
    let app = App::initialize(&config)?;

    // 4. Hand the terminal to the UI until quit
    tui::run(app)
}
