use std::collections::BTreeMap;

use crate::Result;

const BEGIN_MARKER: &[u8] = b"-----BEGIN ";

/// A single decoded PEM block.
///
/// # Fields
/// * `label` - The type label from the `-----BEGIN <label>-----` line.
/// * `headers` - RFC 1421 style headers such as `Proc-Type`, keyed by name.
/// * `contents` - The base64-decoded payload.
#[derive(Clone, PartialEq, Eq)]
pub struct PemBlock {
    pub label: String,
    pub headers: BTreeMap<String, String>,
    pub contents: Vec<u8>,
}

impl PemBlock {
    /// Returns the value of the header `name`, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

// The payload may be private key material.
impl std::fmt::Debug for PemBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemBlock")
            .field("label", &self.label)
            .field("headers", &self.headers)
            .field("contents", &format_args!("<{} bytes>", self.contents.len()))
            .finish()
    }
}

/// Decodes the first PEM block found in `input`.
///
/// Anything after the first block is ignored, so a certificate chain yields only its
/// leading certificate.
///
/// # Errors
/// Returns [`PemDerError::MalformedPem`](crate::error::PemDerError::MalformedPem) when no
/// complete `BEGIN`/`END` envelope with a valid base64 body is present.
pub fn decode_first(input: &[u8]) -> Result<PemBlock> {
    let pem = pem::parse(input)?;

    let headers = pem
        .headers()
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect::<BTreeMap<_, _>>();

    let extra_blocks = count_begin_markers(input).saturating_sub(1);
    if extra_blocks > 0 {
        tracing::debug!(
            label = pem.tag(),
            ignored = extra_blocks,
            "using first PEM block, ignoring trailing blocks"
        );
    }

    tracing::debug!(
        label = pem.tag(),
        headers = headers.len(),
        "decoded PEM block"
    );

    Ok(PemBlock {
        label: pem.tag().to_string(),
        headers,
        contents: pem.into_contents(),
    })
}

fn count_begin_markers(input: &[u8]) -> usize {
    input
        .windows(BEGIN_MARKER.len())
        .filter(|window| *window == BEGIN_MARKER)
        .count()
}
