use const_oid::ObjectIdentifier;
use const_oid::db::rfc5912::{
    ID_EC_PUBLIC_KEY, RSA_ENCRYPTION, SECP_224_R_1, SECP_256_R_1, SECP_384_R_1, SECP_521_R_1,
};
use der::Decode;
use pkcs8::{DecodePrivateKey, EncodePrivateKey, PrivateKeyInfo};
use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;

use super::KeyFormat;
use crate::Result;
use crate::error::PemDerError;

/// A parsed private key of one of the supported algorithms.
///
/// Only lives between parsing the input payload and re-encoding it as PKCS#8.
pub(crate) enum PrivateKey {
    Rsa(Box<RsaPrivateKey>),
    Ecdsa(EcdsaPrivateKey),
}

/// Supported ECDSA curves.
pub(crate) enum EcdsaPrivateKey {
    P224(p224::SecretKey),
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
}

impl PrivateKey {
    /// Parses a PKCS#1 `RSAPrivateKey`.
    pub(crate) fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        let key = RsaPrivateKey::from_pkcs1_der(der)
            .map_err(|e| PemDerError::invalid_key(KeyFormat::Pkcs1Rsa, e))?;
        Ok(PrivateKey::Rsa(Box::new(key)))
    }

    /// Parses a SEC1 `ECPrivateKey`. The curve is taken from the embedded named-curve
    /// parameters, which must be present.
    pub(crate) fn from_sec1_der(der: &[u8]) -> Result<Self> {
        let format = KeyFormat::Sec1Ec;
        let ec_key =
            sec1::EcPrivateKey::from_der(der).map_err(|e| PemDerError::invalid_key(format, e))?;
        let curve = ec_key
            .parameters
            .and_then(|params| params.named_curve())
            .ok_or_else(|| PemDerError::invalid_key(format, "missing named curve parameter"))?;

        let key = match curve {
            SECP_224_R_1 => p224::SecretKey::from_sec1_der(der).map(EcdsaPrivateKey::P224),
            SECP_256_R_1 => p256::SecretKey::from_sec1_der(der).map(EcdsaPrivateKey::P256),
            SECP_384_R_1 => p384::SecretKey::from_sec1_der(der).map(EcdsaPrivateKey::P384),
            SECP_521_R_1 => p521::SecretKey::from_sec1_der(der).map(EcdsaPrivateKey::P521),
            other => return Err(unsupported_curve(format, other)),
        }
        .map_err(|e| PemDerError::invalid_key(format, e))?;

        Ok(PrivateKey::Ecdsa(key))
    }

    /// Parses a PKCS#8 `PrivateKeyInfo` and checks that it holds an RSA or ECDSA key.
    pub(crate) fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        let format = KeyFormat::Pkcs8Wrapped;
        let info = PrivateKeyInfo::try_from(der).map_err(|e| PemDerError::invalid_key(format, e))?;

        match info.algorithm.oid {
            RSA_ENCRYPTION => {
                let key = RsaPrivateKey::from_pkcs8_der(der)
                    .map_err(|e| PemDerError::invalid_key(format, e))?;
                Ok(PrivateKey::Rsa(Box::new(key)))
            }
            ID_EC_PUBLIC_KEY => {
                let curve = info
                    .algorithm
                    .parameters_oid()
                    .map_err(|e| PemDerError::invalid_key(format, e))?;
                let key = match curve {
                    SECP_224_R_1 => p224::SecretKey::from_pkcs8_der(der).map(EcdsaPrivateKey::P224),
                    SECP_256_R_1 => p256::SecretKey::from_pkcs8_der(der).map(EcdsaPrivateKey::P256),
                    SECP_384_R_1 => p384::SecretKey::from_pkcs8_der(der).map(EcdsaPrivateKey::P384),
                    SECP_521_R_1 => p521::SecretKey::from_pkcs8_der(der).map(EcdsaPrivateKey::P521),
                    other => return Err(unsupported_curve(format, other)),
                }
                .map_err(|e| PemDerError::invalid_key(format, e))?;
                Ok(PrivateKey::Ecdsa(key))
            }
            other => Err(PemDerError::UnsupportedKeyType(oid_name(other))),
        }
    }

    /// Human-readable algorithm name, for diagnostics.
    pub(crate) fn algorithm(&self) -> &'static str {
        match self {
            PrivateKey::Rsa(_) => "RSA",
            PrivateKey::Ecdsa(EcdsaPrivateKey::P224(_)) => "ECDSA P-224",
            PrivateKey::Ecdsa(EcdsaPrivateKey::P256(_)) => "ECDSA P-256",
            PrivateKey::Ecdsa(EcdsaPrivateKey::P384(_)) => "ECDSA P-384",
            PrivateKey::Ecdsa(EcdsaPrivateKey::P521(_)) => "ECDSA P-521",
        }
    }

    /// Encodes the key as PKCS#8 DER. `source` names the format the key was read from.
    pub(crate) fn to_pkcs8_der(&self, source: KeyFormat) -> Result<Vec<u8>> {
        let document = match self {
            PrivateKey::Rsa(key) => key.to_pkcs8_der(),
            PrivateKey::Ecdsa(EcdsaPrivateKey::P224(key)) => key.to_pkcs8_der(),
            PrivateKey::Ecdsa(EcdsaPrivateKey::P256(key)) => key.to_pkcs8_der(),
            PrivateKey::Ecdsa(EcdsaPrivateKey::P384(key)) => key.to_pkcs8_der(),
            PrivateKey::Ecdsa(EcdsaPrivateKey::P521(key)) => key.to_pkcs8_der(),
        }
        .map_err(|e| PemDerError::invalid_key(source, format!("failed to encode as PKCS#8: {e}")))?;

        Ok(document.as_bytes().to_vec())
    }
}

fn unsupported_curve(format: KeyFormat, curve: ObjectIdentifier) -> PemDerError {
    PemDerError::invalid_key(format, format!("unsupported elliptic curve {}", oid_name(curve)))
}

/// Names an OID from the const-oid database, falling back to dotted notation.
fn oid_name(oid: ObjectIdentifier) -> String {
    match const_oid::db::DB.by_oid(&oid) {
        Some(name) => format!("{name} ({oid})"),
        None => oid.to_string(),
    }
}
