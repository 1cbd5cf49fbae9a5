#![allow(dead_code)]

use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;
use openssl::x509::{X509, X509NameBuilder};

pub fn generate_rsa(bits: u32) -> Rsa<Private> {
    Rsa::generate(bits).unwrap()
}

pub fn generate_ec(curve: Nid) -> EcKey<Private> {
    let group = EcGroup::from_curve_name(curve).unwrap();
    EcKey::generate(&group).unwrap()
}

/// Builds a self-signed P-256 certificate for `common_name`.
pub fn generate_self_signed_cert(common_name: &str) -> X509 {
    let key = PKey::from_ec_key(generate_ec(Nid::X9_62_PRIME256V1)).unwrap();

    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_nid(Nid::COMMONNAME, common_name).unwrap();
    let name = name.build();

    let serial = BigNum::from_u32(1).unwrap().to_asn1_integer().unwrap();
    let not_before = Asn1Time::days_from_now(0).unwrap();
    let not_after = Asn1Time::days_from_now(1).unwrap();

    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    builder.set_serial_number(&serial).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(&key).unwrap();
    builder.set_not_before(&not_before).unwrap();
    builder.set_not_after(&not_after).unwrap();
    builder.sign(&key, MessageDigest::sha256()).unwrap();
    builder.build()
}

/// Armors `contents` as a PEM block labelled `label`.
pub fn to_pem(label: &str, contents: &[u8]) -> String {
    pem::encode(&pem::Pem::new(label, contents.to_vec()))
}

/// Decodes the payload of the first PEM block in `input`.
pub fn pem_contents(input: &[u8]) -> Vec<u8> {
    pem::parse(input).unwrap().into_contents()
}

/// Parses `der` strictly as PKCS#8 with OpenSSL and returns its SubjectPublicKeyInfo DER.
pub fn pkcs8_public_key_der(der: &[u8]) -> Vec<u8> {
    PKey::private_key_from_pkcs8(der)
        .expect("OpenSSL failed to parse PKCS#8")
        .public_key_to_der()
        .unwrap()
}
