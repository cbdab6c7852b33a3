use axum::Router;
use tokio::net::TcpListener;

use crate::error::TestError;

/// Serves `router` on `127.0.0.1` at an ephemeral port.
///
/// # Returns
/// - `Ok(String)` - Base URL such as `http://127.0.0.1:41234`
/// - `Err(TestError::Io)` - The port could not be bound
pub async fn spawn_router(router: Router) -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{}", addr))
}

/// Base URL of a local port with nothing listening on it.
pub async fn unreachable_url() -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}", addr))
}
