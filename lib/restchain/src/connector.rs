//! HTTPS connectors using rustls.

use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::{HttpConnector, proxy::Tunnel};
use rustls::pki_types::CertificateDer;
use url::Url;

use crate::{Certificate, Error, Result, TransportConfig};

/// Create an HTTPS connector with rustls.
///
/// Trusts the Mozilla root certificates plus `extra_roots`. Speaks HTTP/1.1
/// and HTTP/2, and plain HTTP for `http://` hosts.
///
/// # Errors
///
/// Returns [`Error::Tls`] if an extra certificate is not a valid trust anchor.
pub fn https_connector(
    config: &TransportConfig,
    extra_roots: &[Certificate],
) -> Result<HttpsConnector<HttpConnector>> {
    wrap(http_connector(config), extra_roots)
}

/// Create an HTTPS connector reaching every host through an HTTP `CONNECT`
/// tunnel opened on `proxy`.
///
/// TLS runs inside the tunnel, so the proxy never sees `https://` traffic.
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] if `proxy` is not a usable `http://` URL,
/// and [`Error::Tls`] for an invalid extra certificate.
pub fn tunnel_connector(
    config: &TransportConfig,
    extra_roots: &[Certificate],
    proxy: &Url,
) -> Result<HttpsConnector<Tunnel<HttpConnector>>> {
    if proxy.scheme() != "http" {
        return Err(Error::invalid_request(format!(
            "proxy {proxy} must use the http scheme"
        )));
    }
    if !proxy.username().is_empty() || proxy.password().is_some() {
        return Err(Error::invalid_request(
            "proxy credentials are not supported",
        ));
    }
    let proxy_uri = proxy
        .as_str()
        .parse::<http::Uri>()
        .map_err(|err| Error::invalid_request(format!("invalid proxy {proxy}: {err}")))?;

    tracing::debug!(%proxy, "tunneling through proxy");
    wrap(Tunnel::new(proxy_uri, http_connector(config)), extra_roots)
}

fn http_connector(config: &TransportConfig) -> HttpConnector {
    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(config.connect_timeout));
    http
}

fn wrap<C>(inner: C, extra_roots: &[Certificate]) -> Result<HttpsConnector<C>> {
    let mut root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();
    for certificate in extra_roots {
        root_store
            .add(CertificateDer::from(certificate.der().to_vec()))
            .map_err(|err| Error::tls(format!("invalid certificate: {err}")))?;
    }

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(inner))
}
