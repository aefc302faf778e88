// Entrypoint for the CLI application.
// - Keeps `main` small: open a session over the roster file and hand it
//   to the UI loop.
// - Returns `anyhow::Result` so fatal errors print once, at the top.

use flexi_logger::Logger;
use rosterman_cli::{session::RosterSession, store::FileStore, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and default to `warn`; RUST_LOG overrides
    // the filter. User-facing output stays on plain stdout prints.
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    // The roster file path comes from the environment variable
    // `ROSTER_FILE` or defaults to `employees.txt` in the working
    // directory. See `store::FileStore::from_env`.
    let session = RosterSession::open(FileStore::from_env())?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(session)?;
    Ok(())
}
