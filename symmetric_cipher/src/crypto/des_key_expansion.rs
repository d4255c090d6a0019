use crate::crypto::des_tables::{DES_KEY_BITS, PC1, PC2, SHIFT_BITS};
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{bytes_to_bits, permute};
use bitvec::prelude::{BitSlice, BitVec};

/// 16 подключей по 48 бит из 64-битного ключа.
///
/// C0 и D0 сами в подключи не входят: сдвиг выполняется до PC-2 уже в первом раунде.
pub fn des_key_schedule(key: &BitSlice) -> Result<Vec<BitVec>, CipherError> {
    if key.len() != DES_KEY_BITS {
        return Err(CipherError::InvalidKeySize {
            algorithm: "DES",
            expected: "64 bits",
            actual: key.len(),
        });
    }

    // PC-1: 64 -> 56 бит
    let key_plus = permute(key, &PC1);
    let (c, d) = key_plus.split_at(28);
    let mut c = c.to_bitvec();
    let mut d = d.to_bitvec();

    let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
    for &shift in &SHIFT_BITS {
        c.rotate_left(shift);
        d.rotate_left(shift);

        let mut cd = BitVec::with_capacity(56);
        cd.extend_from_bitslice(&c);
        cd.extend_from_bitslice(&d);

        round_keys.push(permute(&cd, &PC2));
    }

    log::debug!("DES: derived {} subkeys", round_keys.len());
    Ok(round_keys)
}

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    type RoundKey = BitVec;

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<BitVec>, CipherError> {
        if key.len() != DES_KEY_BITS / 8 {
            return Err(CipherError::InvalidKeySize {
                algorithm: "DES",
                expected: "8 bytes",
                actual: key.len(),
            });
        }
        des_key_schedule(&bytes_to_bits(key))
    }
}
