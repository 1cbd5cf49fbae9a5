use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bon::Builder;

use crate::Result;
use crate::cert::normalize_certificate;
use crate::identity::derive_identity;
use crate::key::normalize_private_key;

/// Inputs for converting a certificate and its private key in one step.
///
/// # Fields
/// * `cert_pem` - PEM certificate. Only the first block is used.
/// * `private_key_pem` - PEM private key.
/// * `private_key_password` - Password for an encrypted key. Empty means none.
///
/// # Example
/// ```rust,no_run
/// use pemder::bundle::PemInputs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let inputs = PemInputs::builder()
///     .cert_pem(std::fs::read_to_string("server.crt")?)
///     .private_key_pem(std::fs::read_to_string("server.key")?)
///     .build();
///
/// let bundle = inputs.convert()?;
/// println!("{}: {}", bundle.id, bundle.cert_der_base64());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Builder)]
pub struct PemInputs {
    #[builder(into)]
    pub cert_pem: String,
    #[builder(into)]
    pub private_key_pem: String,
    #[builder(into, default)]
    pub private_key_password: String,
}

impl PemInputs {
    /// Normalizes the certificate, then the key, and derives the bundle id from the
    /// concatenation of all three inputs. The first failure is returned.
    pub fn convert(&self) -> Result<DerBundle> {
        let cert_der = normalize_certificate(self.cert_pem.as_bytes())?;
        let key_der = normalize_private_key(
            self.private_key_pem.as_bytes(),
            self.private_key_password.as_bytes(),
        )?;

        let seed = [
            self.cert_pem.as_str(),
            self.private_key_pem.as_str(),
            self.private_key_password.as_str(),
        ]
        .concat();

        Ok(DerBundle {
            id: derive_identity(&seed),
            cert_der,
            key_der,
        })
    }
}

impl std::fmt::Debug for PemInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemInputs")
            .field("cert_pem", &self.cert_pem)
            .field("private_key_pem", &"<redacted>")
            .field("private_key_password", &"<redacted>")
            .finish()
    }
}

/// DER outputs of a [`PemInputs`] conversion.
#[derive(Clone, PartialEq, Eq)]
pub struct DerBundle {
    /// Content-derived identity of the inputs.
    pub id: String,
    /// X.509 certificate DER.
    pub cert_der: Vec<u8>,
    /// PKCS#8 private key DER.
    pub key_der: Vec<u8>,
}

impl DerBundle {
    /// The certificate DER in standard padded base64.
    pub fn cert_der_base64(&self) -> String {
        STANDARD.encode(&self.cert_der)
    }

    /// The private key DER in standard padded base64.
    pub fn key_der_base64(&self) -> String {
        STANDARD.encode(&self.key_der)
    }
}

impl std::fmt::Debug for DerBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerBundle")
            .field("id", &self.id)
            .field("cert_der", &format_args!("<{} bytes>", self.cert_der.len()))
            .field("key_der", &"<redacted>")
            .finish()
    }
}
