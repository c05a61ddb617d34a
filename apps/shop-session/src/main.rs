//! Entry point for the `shop-session` binary.
//!
//! ```bash
//! shop-session add:3 add:6 add:6 remove:6
//! shop-session --catalog ./catalog.json add:1
//! ```

use clap::Parser;
use shop_session::{init_tracing, run, AppResult, Cli};
use tracing::error;

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(&config);

    let summary = run(&config, &cli.operations).map_err(|err| {
        error!(error = %err, "session failed");
        err
    })?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
