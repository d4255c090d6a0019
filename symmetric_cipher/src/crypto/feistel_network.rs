use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::utils::xor_bits;
use bitvec::prelude::{BitSlice, BitVec};
use std::sync::Arc;

/// Сеть Фейстеля на `num_round` раундов:
///
/// `L(n) = R(n-1)`, `R(n) = L(n-1) ^ F(R(n-1), K(n))`,
/// на выходе половины переставлены: `R(num_round) ‖ L(num_round)`.
///
/// Благодаря финальной перестановке половин расшифрование выполняется тем же проходом
/// с ключами в обратном порядке.
pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &BitSlice,
        round_keys: &[BitVec],
    ) -> Result<BitVec, CipherError> {
        self.check(block, round_keys)?;
        Ok(self.run(block, round_keys.iter()))
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &BitSlice,
        round_keys: &[BitVec],
    ) -> Result<BitVec, CipherError> {
        self.check(block, round_keys)?;
        Ok(self.run(block, round_keys.iter().rev()))
    }

    fn check(&self, block: &BitSlice, round_keys: &[BitVec]) -> Result<(), CipherError> {
        if block.is_empty() || block.len() % 2 != 0 {
            return Err(CipherError::InvalidBlockSize {
                algorithm: "Feistel network",
                expected: "a non-empty even number of bits",
                actual: block.len(),
            });
        }
        if round_keys.len() != self.num_round {
            return Err(CipherError::InvalidKeySchedule {
                algorithm: "Feistel network",
                expected: "one round key per round",
                actual: round_keys.len(),
            });
        }
        Ok(())
    }

    fn run<'a>(&self, block: &BitSlice, round_keys: impl Iterator<Item = &'a BitVec>) -> BitVec {
        let (left, right) = block.split_at(block.len() / 2);

        let mut left = left.to_bitvec();
        let mut right = right.to_bitvec();

        for (index, round_key) in round_keys.enumerate() {
            let feistel_out = self.transformation.transform(&right, round_key);
            let new_right = xor_bits(&left, &feistel_out);
            left = right;
            right = new_right;
            log::trace!("round {:2}: L={:b} R={:b}", index + 1, left, right);
        }

        right.extend_from_bitslice(&left);
        right
    }
}
