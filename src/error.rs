//! Error types for PEM to DER normalization.

use thiserror::Error;

use crate::key::KeyFormat;

/// Represents errors that can occur while normalizing PEM input into DER.
///
/// Every variant is final for the call that produced it and carries enough context
/// (the offending label, the attempted format or the rejected algorithm) for an operator
/// to fix the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PemDerError {
    /// No decodable PEM envelope was found.
    #[error("Failed to decode PEM: {0}")]
    MalformedPem(String),

    /// The certificate path was handed a block that is not a certificate.
    #[error("Expected CERTIFICATE block, got {0}")]
    WrongBlockType(String),

    /// The certificate payload is not a well-formed X.509 certificate.
    #[error("Failed to parse certificate: {0}")]
    InvalidCertificate(String),

    /// The key block is encrypted and no password was supplied.
    #[error("Private key ({0}) is encrypted but no password provided")]
    PasswordRequired(String),

    /// The key block uses legacy PEM encryption, which is refused.
    #[error(
        "Encrypted PEM blocks ({0}) are not supported; please use PKCS#8 encrypted format instead"
    )]
    LegacyEncryptionUnsupported(String),

    /// The payload does not parse under the format its label declares.
    #[error("Failed to parse {format} private key: {reason}")]
    InvalidKey { format: KeyFormat, reason: String },

    /// A PKCS#8 key holds an algorithm other than RSA or ECDSA.
    #[error("Unsupported private key type: {0}")]
    UnsupportedKeyType(String),

    /// The block label is not one of the accepted private key labels.
    #[error(
        "Unsupported private key format: {0} (expected RSA PRIVATE KEY, EC PRIVATE KEY, or PRIVATE KEY)"
    )]
    UnsupportedKeyFormat(String),
}

impl PemDerError {
    pub(crate) fn invalid_key(format: KeyFormat, reason: impl ToString) -> Self {
        PemDerError::InvalidKey {
            format,
            reason: reason.to_string(),
        }
    }
}

impl From<pem::PemError> for PemDerError {
    /// Converts a `pem::PemError` into a `PemDerError`.
    fn from(err: pem::PemError) -> Self {
        PemDerError::MalformedPem(err.to_string())
    }
}
