mod commands;
mod config;
mod error;
mod session;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "menucard={level},engine={level}",
            level = config.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting menu session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = session::Session::new(stdin.lock(), stdout.lock(), &config);
    session.run()?;
    tracing::info!(dishes = session.menu().count(), "session closed");

    Ok(())
}
