use std::fmt;

/// The private key containers accepted as input.
///
/// Each format is selected by exactly one PEM label. Every format is normalized to
/// [`KeyFormat::Pkcs8Wrapped`] on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// PKCS#1 `RSAPrivateKey`, labelled `RSA PRIVATE KEY`.
    Pkcs1Rsa,
    /// SEC1 `ECPrivateKey`, labelled `EC PRIVATE KEY`.
    Sec1Ec,
    /// PKCS#8 `PrivateKeyInfo`, labelled `PRIVATE KEY`.
    Pkcs8Wrapped,
}

impl KeyFormat {
    /// All accepted formats, in the order their labels are reported.
    pub const ALL: [KeyFormat; 3] = [
        KeyFormat::Pkcs1Rsa,
        KeyFormat::Sec1Ec,
        KeyFormat::Pkcs8Wrapped,
    ];

    /// Looks up the format declared by a PEM label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.label() == label)
    }

    /// The PEM label that declares this format.
    pub fn label(self) -> &'static str {
        match self {
            KeyFormat::Pkcs1Rsa => "RSA PRIVATE KEY",
            KeyFormat::Sec1Ec => "EC PRIVATE KEY",
            KeyFormat::Pkcs8Wrapped => "PRIVATE KEY",
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyFormat::Pkcs1Rsa => "PKCS#1 RSA",
            KeyFormat::Sec1Ec => "SEC1 EC",
            KeyFormat::Pkcs8Wrapped => "PKCS#8",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_select_formats() {
        assert_eq!(KeyFormat::from_label("RSA PRIVATE KEY"), Some(KeyFormat::Pkcs1Rsa));
        assert_eq!(KeyFormat::from_label("EC PRIVATE KEY"), Some(KeyFormat::Sec1Ec));
        assert_eq!(KeyFormat::from_label("PRIVATE KEY"), Some(KeyFormat::Pkcs8Wrapped));
    }

    #[test]
    fn other_labels_are_not_formats() {
        for label in [
            "CERTIFICATE",
            "ENCRYPTED PRIVATE KEY",
            "OPENSSH PRIVATE KEY",
            "private key",
            "",
        ] {
            assert_eq!(KeyFormat::from_label(label), None, "{label}");
        }
    }
}
