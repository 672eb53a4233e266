//! Loopback HTTP upstream for outbound-client tests.

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral 127.0.0.1 port and return its base URL
/// (no trailing slash). The server runs until the test runtime shuts down.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}
