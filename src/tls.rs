//! TLS certificate inspector
//!
//! Opens a raw TLS connection to port 443 and extracts issuer and expiry
//! metadata from the peer certificate. Trust is not established: the
//! handshake accepts self-signed, expired and hostname-mismatched
//! certificates, because the goal is data collection against misconfigured
//! hosts. `inspect` is a total function; every failure mode yields the
//! default `TlsInfo`.

use crate::models::TlsInfo;
use chrono::DateTime;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use x509_parser::der_parser::oid::Oid;
use x509_parser::prelude::*;

const TLS_PORT: u16 = 443;
const INSPECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Inspect the certificate presented by `host` on port 443.
///
/// Returns the default failure value if the host does not resolve, nothing
/// listens on 443, the handshake fails or no certificate can be read. The
/// whole operation is bounded by a single timeout envelope, and the
/// underlying stream is dropped (and thereby closed) on every exit path.
pub async fn inspect(host: &str) -> TlsInfo {
    match timeout(INSPECT_TIMEOUT, handshake(host)).await {
        Ok(Some(info)) => info,
        _ => TlsInfo::default(),
    }
}

async fn handshake(host: &str) -> Option<TlsInfo> {
    let connector = native_tls::TlsConnector::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build()
        .ok()?;
    let connector = tokio_native_tls::TlsConnector::from(connector);

    let stream = TcpStream::connect((host, TLS_PORT)).await.ok()?;
    let stream = connector.connect(host, stream).await.ok()?;

    let cert = stream.get_ref().peer_certificate().ok()??;
    let der = cert.to_der().ok()?;
    read_certificate(&der)
}

fn read_certificate(der: &[u8]) -> Option<TlsInfo> {
    let (_, certificate) = parse_x509_certificate(der).ok()?;

    Some(TlsInfo {
        ok: true,
        issuer: format_issuer(certificate.issuer()),
        expire: format_expiry(&certificate.validity().not_after),
    })
}

/// Render the issuer distinguished name as `attr=value` pairs.
fn format_issuer(issuer: &X509Name) -> String {
    let mut parts = Vec::new();

    for rdn in issuer.iter() {
        for attribute in rdn.iter() {
            if let Ok(value) = attribute.as_str() {
                parts.push(format!("{}={}", dn_key(attribute.attr_type()), value));
            }
        }
    }

    parts.join(" / ")
}

fn dn_key(oid: &Oid) -> String {
    match oid.to_id_string().as_str() {
        "2.5.4.3" => "CN".to_string(),
        "2.5.4.6" => "C".to_string(),
        "2.5.4.7" => "L".to_string(),
        "2.5.4.8" => "ST".to_string(),
        "2.5.4.10" => "O".to_string(),
        "2.5.4.11" => "OU".to_string(),
        other => other.to_string(),
    }
}

/// Render `notAfter` as RFC 3339, keeping the raw ASN.1 text if the
/// timestamp cannot be converted.
fn format_expiry(not_after: &ASN1Time) -> String {
    DateTime::from_timestamp(not_after.timestamp(), 0)
        .map(|expiry| expiry.to_rfc3339())
        .unwrap_or_else(|| not_after.to_string())
}
