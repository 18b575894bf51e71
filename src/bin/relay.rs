// poe2_relay - forwards /poe2-leagues to poe.ninja so browsers can read it

use poe2_leagues::constants::relay::{LISTEN_ADDR, LISTEN_PORT, LISTING_PATH};
use poe2_leagues::error::AppError;
use poe2_leagues::logging::{LogOutput, setup_logging};
use poe2_leagues::relay::{RelayState, serve};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let (log_file_path, _guard) = setup_logging(LogOutput::StdoutAndFile, None, "poe2_relay.log").await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let state = RelayState::from_defaults()?;
    let listener = TcpListener::bind(LISTEN_ADDR).await?;

    println!("Proxy running at http://localhost:{LISTEN_PORT}{LISTING_PATH}");
    tracing::info!("Relaying {LISTING_PATH} to {}", state.upstream_url());

    serve(listener, state).await
}
