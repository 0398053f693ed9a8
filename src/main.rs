use std::io;

use anyhow::Result;
use tracing::info;

use congklak_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "congklak starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new().run(stdin.lock(), &mut stdout)?;

    info!("congklak shutting down");
    Ok(())
}
