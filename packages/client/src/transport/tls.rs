//! Rustls client configuration for https endpoints

use std::sync::Arc;

use rustls::{ClientConfig, RootCertStore};

/// Client configuration trusting the bundled webpki roots.
///
/// # Errors
///
/// Returns a `rustls::Error` if the ring provider rejects the default
/// protocol versions.
pub fn client_config() -> Result<ClientConfig, rustls::Error> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    tracing::debug!("Loaded {} webpki root certificates", root_store.len());

    let config = ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()?
    .with_root_certificates(root_store)
    .with_no_client_auth();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_bundled_roots() {
        let config = client_config().expect("ring supports the default versions");
        assert!(config.alpn_protocols.is_empty());
    }
}
