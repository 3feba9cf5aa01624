use axum::Router;
use common::config::ServerConfig;
use common::models::STARTUP_WARNING;
use std::future::Future;
use std::io::{self, Write};
use tokio::net::TcpListener;

/// Write the startup warning line. Called once, before the listener binds.
pub fn announce<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", STARTUP_WARNING)?;
    out.flush()
}

/// Bind the configured address. Port 0 picks an ephemeral port.
#[tracing::instrument]
pub async fn bind(server: &ServerConfig) -> io::Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    tracing::debug!(addr = %listener.local_addr()?, "Listener bound");
    Ok(listener)
}

/// Serve `app` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    tracing::info!(port, "Vulnerable app running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
