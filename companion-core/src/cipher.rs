//! Cipher port: the reversible text transform applied to the whole record.
//!
//! The store is generic over [`Cipher`]; key management and algorithm choice
//! live behind the trait and are not this crate's concern. The transform is
//! assumed deterministic and total — if a decrypted record turns out to be
//! garbage, the codec reports it as a malformed record or an invalid field.
//!
//! [`RotationCipher`] is the shipped adapter: a keyed rotation over the
//! printable ASCII range. It keeps casual eyes off the file and makes no
//! stronger claim.

/// Reversible whole-record text transform.
pub trait Cipher {
    /// Transform plaintext into the stored form.
    fn encrypt(&self, plaintext: &str) -> String;

    /// Invert [`Cipher::encrypt`].
    fn decrypt(&self, ciphertext: &str) -> String;
}

/// Keyed rotation over printable ASCII (`' '..='~'`); any other character
/// passes through unchanged, so arbitrary UTF-8 survives a round trip.
#[derive(Debug, Clone, Copy)]
pub struct RotationCipher {
    key: u8,
}

impl RotationCipher {
    /// Create a cipher rotating by `key` positions.
    #[must_use]
    pub fn new(key: u8) -> Self {
        Self { key }
    }

    fn rotate(text: &str, amount: i32) -> String {
        const BASE: i32 = 0x20; // ' '
        const SPAN: i32 = 0x5F; // ' '..='~'
        text.chars()
            .map(|c| {
                if c.is_ascii_graphic() || c == ' ' {
                    let shifted = (c as i32 - BASE + amount).rem_euclid(SPAN) + BASE;
                    char::from_u32(shifted.unsigned_abs()).unwrap_or(c)
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Default for RotationCipher {
    fn default() -> Self {
        Self::new(7)
    }
}

impl Cipher for RotationCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        Self::rotate(plaintext, i32::from(self.key))
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        Self::rotate(ciphertext, -i32::from(self.key))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
