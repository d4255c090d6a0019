use crate::crypto::des_tables::{SBox, E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{bits_to_int, int_to_bits, permute, xor_bits};
use bitvec::prelude::{BitSlice, BitVec};

/// Функция F раунда DES.
pub struct DesTransformation;

/// Подстановка шести бит через S-блок: строка = b0 b5, столбец = b1..b4.
pub fn substitute(group: &BitSlice, s_box: &SBox) -> u8 {
    debug_assert_eq!(group.len(), 6);
    let row = (usize::from(group[0]) << 1) | usize::from(group[5]);
    let col = bits_to_int(&group[1..5]) as usize;
    s_box[row][col]
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, r_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        // 1. Expansion
        let expanded = permute(r_block, &E);

        // 2. XOR
        let mixed = xor_bits(&expanded, round_key);

        // 3. S-boxes
        let mut s_result = BitVec::with_capacity(32);
        for (group, s_box) in mixed.chunks(6).zip(S_BOXES.iter()) {
            let s_val = substitute(group, s_box);
            s_result.extend_from_bitslice(&int_to_bits(u64::from(s_val), 4));
        }

        // 4. P-permutation
        permute(&s_result, &P)
    }
}
