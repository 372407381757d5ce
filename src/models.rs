//! Probe result data model

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// TLS certificate metadata for a probed host.
///
/// `Default` is the failure value: `ok` is only set once issuer and expiry
/// extraction have both completed, so a value with `ok == true` always
/// carries whatever the certificate actually contained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsInfo {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub expire: String,
}

/// Outcome of one successful probe of a candidate URL.
///
/// Transport-level failures never produce a `ProbeResult`; the candidate is
/// simply dropped. `ssl` is `None` for plain-HTTP endpoints and serializes as
/// an empty JSON object to keep the `results.json` shape stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub url: String,
    pub status: u16,
    pub title: String,
    #[serde(serialize_with = "empty_object_when_none", default)]
    pub ssl: Option<TlsInfo>,
}

fn empty_object_when_none<S>(ssl: &Option<TlsInfo>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ssl {
        Some(info) => info.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
