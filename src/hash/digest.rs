use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sha2::Digest as _;

use crate::foundation::error::{MirageError, MirageResult};

/// Text shown for algorithm names outside [`HashAlgorithm`].
pub const UNSUPPORTED_ALGORITHM: &str = "Unsupported algorithm";

/// Digest algorithms offered by the hash calculator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5, 128-bit.
    #[default]
    Md5,
    /// SHA-1, 160-bit.
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
}

impl HashAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Lowercase identifier, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Length of the hex digest in characters.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = MirageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(MirageError::unsupported(UNSUPPORTED_ALGORITHM)),
        }
    }
}

/// Lowercase hex digest of `bytes`.
pub fn digest_hex(alg: HashAlgorithm, bytes: &[u8]) -> String {
    match alg {
        HashAlgorithm::Md5 => to_hex(&md5::Md5::digest(bytes)),
        HashAlgorithm::Sha1 => to_hex(&sha1::Sha1::digest(bytes)),
        HashAlgorithm::Sha256 => to_hex(&sha2::Sha256::digest(bytes)),
        HashAlgorithm::Sha512 => to_hex(&sha2::Sha512::digest(bytes)),
    }
}

/// Digest UTF-8 text under an algorithm named at runtime.
pub fn digest_text(alg_name: &str, text: &str) -> MirageResult<String> {
    let alg: HashAlgorithm = alg_name.parse()?;
    Ok(digest_hex(alg, text.as_bytes()))
}

fn to_hex(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/hash/digest.rs"]
mod tests;
