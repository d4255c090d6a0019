use crate::crypto::cipher_traits::{
    CipherAlgorithm, InvertibleCipher, SymmetricCipher, SymmetricCipherWithRounds,
};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{DES_BLOCK_BITS, DES_ROUNDS, DES_SUBKEY_BITS, FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, permute};
use bitvec::prelude::{BitSlice, BitVec};
use std::sync::Arc;

const DES_BLOCK_BYTES: usize = DES_BLOCK_BITS / 8;

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn check_block_bits(block: &BitSlice) -> Result<(), CipherError> {
    if block.len() != DES_BLOCK_BITS {
        return Err(CipherError::InvalidBlockSize {
            algorithm: "DES",
            expected: "64 bits",
            actual: block.len(),
        });
    }
    Ok(())
}

fn check_block_bytes(block: &[u8]) -> Result<(), CipherError> {
    if block.len() != DES_BLOCK_BYTES {
        return Err(CipherError::InvalidBlockSize {
            algorithm: "DES",
            expected: "8 bytes",
            actual: block.len(),
        });
    }
    Ok(())
}

fn check_subkeys(subkeys: &[BitVec]) -> Result<(), CipherError> {
    if subkeys.len() != DES_ROUNDS {
        return Err(CipherError::InvalidKeySchedule {
            algorithm: "DES",
            expected: "16 subkeys",
            actual: subkeys.len(),
        });
    }
    if let Some(bad) = subkeys.iter().find(|k| k.len() != DES_SUBKEY_BITS) {
        return Err(CipherError::InvalidKeySchedule {
            algorithm: "DES",
            expected: "48-bit subkeys",
            actual: bad.len(),
        });
    }
    Ok(())
}

/// IP -> 16 раундов Фейстеля -> IP⁻¹.
fn run_des(
    network: &FeistelNetwork,
    block: &BitSlice,
    round_keys: &[BitVec],
    direction: Direction,
) -> Result<BitVec, CipherError> {
    let permuted = permute(block, &IP);
    let preoutput = match direction {
        Direction::Encrypt => network.encrypt_with_round_keys(&permuted, round_keys)?,
        Direction::Decrypt => network.decrypt_with_round_keys(&permuted, round_keys)?,
    };
    Ok(permute(&preoutput, &FP))
}

fn default_network() -> FeistelNetwork {
    FeistelNetwork::new(DES_ROUNDS, Arc::new(DesTransformation))
}

/// Шифрование одного 64-битного блока готовым расписанием из 16 подключей.
pub fn des_encrypt_block(plaintext: &BitSlice, subkeys: &[BitVec]) -> Result<BitVec, CipherError> {
    check_block_bits(plaintext)?;
    check_subkeys(subkeys)?;
    run_des(&default_network(), plaintext, subkeys, Direction::Encrypt)
}

/// Расшифрование: та же сеть, подключи в обратном порядке.
pub fn des_decrypt_block(ciphertext: &BitSlice, subkeys: &[BitVec]) -> Result<BitVec, CipherError> {
    check_block_bits(ciphertext)?;
    check_subkeys(subkeys)?;
    run_des(&default_network(), ciphertext, subkeys, Direction::Decrypt)
}

pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion<RoundKey = BitVec> + Send + Sync>,
    round_keys: Vec<BitVec>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion<RoundKey = BitVec> + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        DES {
            feistel_network: FeistelNetwork::new(DES_ROUNDS, transformation),
            key_expansion,
            round_keys: Vec::new(),
        }
    }

    pub fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        let mut des = DES::default();
        des.set_key(key)?;
        Ok(des)
    }

    pub fn round_keys(&self) -> &[BitVec] {
        &self.round_keys
    }

    pub fn encrypt(&self, block: &BitSlice) -> Result<BitVec, CipherError> {
        check_block_bits(block)?;
        check_subkeys(&self.round_keys)?;
        run_des(&self.feistel_network, block, &self.round_keys, Direction::Encrypt)
    }

    pub fn decrypt(&self, block: &BitSlice) -> Result<BitVec, CipherError> {
        check_block_bits(block)?;
        check_subkeys(&self.round_keys)?;
        run_des(&self.feistel_network, block, &self.round_keys, Direction::Decrypt)
    }
}

impl Default for DES {
    fn default() -> Self {
        DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }
}

impl CipherAlgorithm for DES {
    fn block_size(&self) -> usize {
        DES_BLOCK_BYTES
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_bytes(block)?;
        let encrypted = self.encrypt(&bytes_to_bits(block))?;
        Ok(bits_to_bytes(&encrypted))
    }
}

impl InvertibleCipher for DES {
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        check_block_bytes(block)?;
        let decrypted = self.decrypt(&bytes_to_bits(block))?;
        Ok(bits_to_bytes(&decrypted))
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let round_keys = self.key_expansion.generate_round_keys(key)?;
        // расписание от подключаемой реализации проверяется до сохранения
        check_subkeys(&round_keys)?;
        self.round_keys = round_keys;
        Ok(())
    }
}

impl SymmetricCipherWithRounds for DES {
    fn rounds(&self) -> usize {
        self.feistel_network.num_round()
    }

    fn export_round_keys(&self) -> Option<Vec<u8>> {
        if self.round_keys.is_empty() {
            return None;
        }
        Some(self.round_keys.iter().flat_map(|k| bits_to_bytes(k)).collect())
    }
}
