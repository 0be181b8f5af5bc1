//! Profile key derivation.
//!
//! Profiles give one seed many independent hidden accounts: each
//! password derives an unrelated 64-byte key from the master key, and
//! without the password a profile cannot even be shown to exist.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroize;

use super::{MasterKey, KEY_LEN};

type HmacSha512 = Hmac<Sha512>;

/// A 64-byte profile key derived from a master key and a password.
///
/// Zeroed on drop.
#[derive(Clone)]
pub struct ProfileKey([u8; KEY_LEN]);

impl ProfileKey {
    /// The full 64 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Drop for ProfileKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for ProfileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileKey").finish_non_exhaustive()
    }
}

/// Derives a profile key from a master key and a password.
///
/// An empty password returns the master key unchanged (the default
/// profile). Anything else is a single domain-separated HMAC-SHA-512:
/// deterministic, independent across passwords, and cheap enough to try
/// interactively.
pub fn derive_profile(master: &MasterKey, password: &str) -> ProfileKey {
    if password.is_empty() {
        return ProfileKey(*master.as_bytes());
    }

    let mut mac =
        HmacSha512::new_from_slice(master.as_bytes()).expect("HMAC accepts any key length");
    mac.update(super::DOMAIN);
    mac.update(b"-profile");
    mac.update(password.as_bytes());

    let mut out = [0u8; KEY_LEN];
    out.copy_from_slice(&mac.finalize().into_bytes());
    ProfileKey(out)
}
