use bitvec::prelude::{BitSlice, BitVec};

/// Раундовая функция сети Фейстеля: половина блока и раундовый ключ -> половина блока.
pub trait EncryptionTransformation {
    fn transform(&self, half_block: &BitSlice, round_key: &BitSlice) -> BitVec;
}
