//! Shared utilities for integration tests.

use std::net::SocketAddr;

use device_stub::config::StubConfig;
use device_stub::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A stub server bound to an ephemeral port. Stops when dropped.
pub struct TestStub {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestStub {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestStub {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a stub with the default configuration.
pub async fn start_stub() -> TestStub {
    start_stub_with(StubConfig::default()).await
}

/// Start a stub with a custom configuration.
pub async fn start_stub_with(mut config: StubConfig) -> TestStub {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let server = HttpServer::new(config).expect("valid test config");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestStub {
        addr,
        client,
        shutdown,
    }
}
