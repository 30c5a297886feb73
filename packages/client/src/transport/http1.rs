//! Blocking HTTP/1.1 POST over hyper
//!
//! Each call opens one connection (TLS for `https`), sends the request and
//! reads the full response on a current-thread tokio runtime. Called from
//! inside a runtime, the request moves to a scoped worker thread so the
//! caller's runtime is never nested.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, HOST, USER_AGENT};
use http::{Method, Request};
use http_body_util::{BodyExt, Empty};
use hyper_util::rt::TokioIo;
use rustls::ClientConfig;
use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use url::{Host, Url};

use super::{Transport, TransportError, TransportResponse, tls};
use crate::config::CollectConfig;

/// Default transport: one HTTP/1.1 connection per POST.
#[derive(Debug, Clone)]
pub struct HyperTransport {
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
    tls: Arc<OnceLock<Arc<ClientConfig>>>,
}

impl HyperTransport {
    #[must_use]
    pub fn new(config: &CollectConfig) -> Self {
        Self {
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
            user_agent: config.user_agent.clone(),
            tls: Arc::new(OnceLock::new()),
        }
    }

    fn tls_config(&self) -> Result<Arc<ClientConfig>, TransportError> {
        if let Some(config) = self.tls.get() {
            return Ok(Arc::clone(config));
        }
        let config = Arc::new(tls::client_config()?);
        Ok(Arc::clone(self.tls.get_or_init(|| config)))
    }

    async fn post_async(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        // Ipv6 hosts are written without brackets for connect and SNI
        let host = match url.host() {
            Some(Host::Ipv6(addr)) => addr.to_string(),
            Some(host) => host.to_string(),
            None => return Err(TransportError::InvalidTarget(url.to_string())),
        };
        let host = host.as_str();
        let port = url
            .port_or_known_default()
            .ok_or_else(|| TransportError::InvalidTarget(url.to_string()))?;

        let tcp = tokio::time::timeout(self.connect_timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| TransportError::Timeout(self.connect_timeout))?
            .map_err(|source| TransportError::Connect {
                host: host.to_string(),
                port,
                source,
            })?;
        if let Err(e) = tcp.set_nodelay(true) {
            tracing::debug!("Failed to set TCP_NODELAY for {}:{}: {}", host, port, e);
        }

        if url.scheme() == "https" {
            let server_name = ServerName::try_from(host.to_string())
                .map_err(|e| TransportError::InvalidTarget(format!("{host}: {e}")))?;
            let connector = TlsConnector::from(self.tls_config()?);
            let stream = tokio::time::timeout(self.connect_timeout, connector.connect(server_name, tcp))
                .await
                .map_err(|_| TransportError::Timeout(self.connect_timeout))?
                .map_err(|source| TransportError::Tls {
                    host: host.to_string(),
                    source,
                })?;
            self.send(TokioIo::new(stream), url).await
        } else {
            self.send(TokioIo::new(tcp), url).await
        }
    }

    async fn send<T>(
        &self,
        io: TokioIo<T>,
        url: &Url,
    ) -> Result<TransportResponse, TransportError>
    where
        T: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (mut sender, connection) = hyper::client::conn::http1::handshake(io).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::debug!("Collect connection closed with error: {}", e);
            }
        });

        let target = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let host = url.host_str().unwrap_or_default();
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let request = Request::builder()
            .method(Method::POST)
            .uri(target)
            .header(HOST, authority)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(CONTENT_LENGTH, "0")
            .body(Empty::<Bytes>::new())?;

        let response = sender.send_request(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        Ok(TransportResponse { status, body })
    }

    fn post_blocking(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(TransportError::Runtime)?;

        runtime.block_on(async {
            tokio::time::timeout(self.timeout, self.post_async(url))
                .await
                .map_err(|_| TransportError::Timeout(self.timeout))?
        })
    }
}

impl Transport for HyperTransport {
    fn post(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return self.post_blocking(url);
        }

        // block_on cannot nest inside a running runtime; use a scoped worker thread
        tracing::debug!("Posting {} from a worker thread outside the caller's runtime", url);
        std::thread::scope(|scope| {
            scope
                .spawn(|| self.post_blocking(url))
                .join()
                .unwrap_or(Err(TransportError::WorkerPanicked))
        })
    }
}
