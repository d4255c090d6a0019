use crate::crypto::error::CipherError;

pub trait KeyExpansion {
    type RoundKey;

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Self::RoundKey>, CipherError>;
}
