//! Crunchy Counter - quick-service restaurant counter POS
//!
//! Browse a product catalog, build concurrent in-progress orders (drafts),
//! bill and confirm them into a delivery queue, and mark them delivered or
//! cancelled into a searchable sales history. All state is held in memory and
//! mirrored to an embedded key-value store on every change.
//!
//! # Module structure
//!
//! ```text
//! crunchy-counter/src/
//! ├── core/          # Configuration, application state, view routing
//! ├── catalog/       # Product catalog store and seed data
//! ├── sessions/      # Session lifecycle store, persistence, money
//! ├── views/         # Derived view computations (filter/sort/aggregate)
//! ├── printing/      # Plain-text receipt rendering
//! ├── utils/         # Formatting and logging helpers
//! └── tui.rs         # Terminal front-end
//! ```
//!
//! # Data flow
//!
//! ```text
//! TUI intent → App → CatalogStore / SessionStore → CounterStorage (redb)
//!                        ↓
//!                  views re-render from the new collections
//! ```

pub mod catalog;
pub mod core;
pub mod printing;
pub mod sessions;
pub mod tui;
pub mod utils;
pub mod views;

// Re-export public types
pub use catalog::CatalogStore;
pub use self::core::{App, AppView, Config, ConfirmAction};
pub use sessions::{CounterStorage, SessionStore, StorageError, StorageResult};
pub use utils::logger::init_logger;

/// Prepare the process environment: .env, work directory, logging
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;
    utils::logger::init_logger(&config.log_level, config.log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______                       __
  / ____/______  ______  _____/ /_  __  __
 / /   / ___/ / / / __ \/ ___/ __ \/ / / /
/ /___/ /  / /_/ / / / / /__/ / / / /_/ /
\____/_/   \__,_/_/ /_/\___/_/ /_/\__, /
   ______                  __    /____/
  / ____/___  __  ______  / /____  _____
 / /   / __ \/ / / / __ \/ __/ _ \/ ___/
/ /___/ /_/ / /_/ / / / / /_/  __/ /
\____/\____/\__,_/_/ /_/\__/\___/_/
    "#
    );
}
