use sha2::{Digest, Sha256};

const ANONYMOUS: &str = "anon";

/// Salted SHA-256 of the caller's IP, sent upstream as the `user` field for
/// abuse tracking. Neither the input nor the digest is stored.
#[derive(Clone)]
pub struct Fingerprinter {
    salt: String,
}

impl Fingerprinter {
    pub fn new(salt: String) -> Self {
        Self { salt }
    }

    pub fn fingerprint(&self, client_ip: Option<&str>) -> String {
        let identity = client_ip
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .unwrap_or(ANONYMOUS);

        let mut hasher = Sha256::new();
        hasher.update(identity.as_bytes());
        hasher.update(self.salt.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
