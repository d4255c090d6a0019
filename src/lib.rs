//! Блочные шифры AES (Rijndael) и DES: расписание ключей и шифрование одного блока.
//!
//! Ядро живёт в двух крейтах рабочего пространства: `rijndael` (AES, GF(2^8))
//! и `symmetric_cipher` (DES, сеть Фейстеля, битовые утилиты). Здесь собран
//! вычислительный API верхнего уровня и удобные обёртки над целыми и байтами.

use bitvec::prelude::BitVec;

pub use rijndael::gf::arithmetic::{gf_inv, gf_mul, gf_pow, xtime};
pub use rijndael::rijndael::cipher::{aes_encrypt_block, cipher as aes_cipher, Rijndael, State};
pub use rijndael::rijndael::key_schedule::{
    expand_key as aes_expand_key, key_expansion as aes_key_expansion, AesVariant, Word,
};
pub use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, InvertibleCipher, SymmetricCipher, SymmetricCipherWithRounds,
};
pub use symmetric_cipher::crypto::des::{des_decrypt_block, des_encrypt_block, DES};
pub use symmetric_cipher::crypto::des_key_expansion::des_key_schedule;
pub use symmetric_cipher::crypto::error::CipherError;
pub use symmetric_cipher::crypto::utils::{bits_to_bytes, bits_to_int, bytes_to_bits, int_to_bits, permute};

/// Шифрует один 16-байтовый блок; вариант AES выбирается по длине ключа (16/24/32).
pub fn aes_encrypt(key: &[u8], plaintext: &[u8]) -> Result<[u8; 16], CipherError> {
    let variant = AesVariant::from_key_len(key.len())?;
    let schedule = aes_key_expansion(key, variant.nk(), variant.nr())?;
    aes_encrypt_block(plaintext, &schedule, variant.nr())
}

fn des_subkeys(key: u64) -> Result<Vec<BitVec>, CipherError> {
    des_key_schedule(&int_to_bits(key, 64))
}

/// DES над 64-битными целыми: `des_encrypt(0x133457799BBCDFF1, 0x0123456789ABCDEF)`.
pub fn des_encrypt(key: u64, plaintext: u64) -> Result<u64, CipherError> {
    let subkeys = des_subkeys(key)?;
    let out = des_encrypt_block(&int_to_bits(plaintext, 64), &subkeys)?;
    Ok(bits_to_int(&out))
}

pub fn des_decrypt(key: u64, ciphertext: u64) -> Result<u64, CipherError> {
    let subkeys = des_subkeys(key)?;
    let out = des_decrypt_block(&int_to_bits(ciphertext, 64), &subkeys)?;
    Ok(bits_to_int(&out))
}

/// Байтовая форма DES: ключ и блок ровно по 8 байт.
pub fn des_encrypt_bytes(key: &[u8], plaintext: &[u8]) -> Result<[u8; 8], CipherError> {
    let des = DES::with_key(key)?;
    let out = des.encrypt_block(plaintext)?;
    out.as_slice()
        .try_into()
        .map_err(|_| CipherError::InvalidBlockSize {
            algorithm: "DES",
            expected: "8 bytes",
            actual: out.len(),
        })
}
