use crate::crypto::error::CipherError;

pub trait CipherAlgorithm {
    /// Размер блока в байтах.
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// Шифры, для которых реализовано обратное преобразование.
pub trait InvertibleCipher: CipherAlgorithm {
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

pub trait SymmetricCipherWithRounds: SymmetricCipher {
    fn rounds(&self) -> usize;
    /// Раундовые ключи, сериализованные подряд; `None`, пока ключ не задан.
    fn export_round_keys(&self) -> Option<Vec<u8>>;
}
