use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use url::Url;

/// Fake site for tests, served on an ephemeral loopback port.
pub struct Booter {
    pub addr: SocketAddr,
    tcp_listener: TcpListener,
}

impl Booter {
    pub async fn new() -> Self {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr).await.unwrap();
        let addr = listener.local_addr().unwrap();

        Self {
            addr,
            tcp_listener: listener,
        }
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    pub fn start(self, router: Router) -> Url {
        let base_url = self.base_url();
        tokio::spawn(async move { axum::serve(self.tcp_listener, router).await.unwrap() });
        base_url
    }

    // the listener is dropped straight away, so connections are refused
    pub async fn unreachable() -> Url {
        Self::new().await.base_url()
    }
}
