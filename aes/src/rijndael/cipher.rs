use crate::gf::arithmetic::gf_mul;
use crate::rijndael::key_schedule::{expand_key, AesVariant, Word};
use crate::rijndael::sbox::sbox;
use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};
use symmetric_cipher::crypto::error::CipherError;

pub const BLOCK_SIZE: usize = 16;

/// Состояние 4x4, `state[r][c]`.
pub type State = [[u8; 4]; 4];

const MIX_MATRIX: [[u8; 4]; 4] = [
    [2, 3, 1, 1],
    [1, 2, 3, 1],
    [1, 1, 2, 3],
    [3, 1, 1, 2],
];

/// s[r, c] = in[r + 4c]
pub fn block_to_state(block: &[u8; BLOCK_SIZE]) -> State {
    let mut state = [[0u8; 4]; 4];
    for (r, row) in state.iter_mut().enumerate() {
        for (c, byte) in row.iter_mut().enumerate() {
            *byte = block[r + 4 * c];
        }
    }
    state
}

/// out[r + 4c] = s[r, c]
pub fn state_to_block(state: &State) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (r, row) in state.iter().enumerate() {
        for (c, &byte) in row.iter().enumerate() {
            out[r + 4 * c] = byte;
        }
    }
    out
}

/// Слово c раундового ключа складывается со столбцом c состояния.
pub fn add_round_key(state: &mut State, round_key: &[Word]) {
    for (r, row) in state.iter_mut().enumerate() {
        for (c, byte) in row.iter_mut().enumerate() {
            *byte ^= round_key[c][r];
        }
    }
}

pub fn sub_bytes(state: &mut State) {
    for row in state.iter_mut() {
        for byte in row.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

/// s'[r, c] = s[r, (c + r) mod 4]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

pub fn mix_columns(state: &mut State) {
    for c in 0..4 {
        let col = [state[0][c], state[1][c], state[2][c], state[3][c]];
        for (r, coeffs) in MIX_MATRIX.iter().enumerate() {
            state[r][c] = col
                .iter()
                .zip(coeffs.iter())
                .fold(0, |acc, (&a, &m)| acc ^ gf_mul(a, m));
        }
    }
}

fn check_schedule(schedule: &[Word], nr: usize) -> Result<(), CipherError> {
    if !matches!(nr, 10 | 12 | 14) {
        return Err(CipherError::InvalidKeySchedule {
            algorithm: "AES",
            expected: "nr of 10, 12 or 14",
            actual: nr,
        });
    }
    if schedule.len() != 4 * (nr + 1) {
        return Err(CipherError::InvalidKeySchedule {
            algorithm: "AES",
            expected: "4 * (nr + 1) words",
            actual: schedule.len(),
        });
    }
    Ok(())
}

/// Cipher(in, nr, w) из FIPS-197. Возвращает итоговое состояние.
pub fn cipher(block: &[u8; BLOCK_SIZE], nr: usize, schedule: &[Word]) -> Result<State, CipherError> {
    check_schedule(schedule, nr)?;
    let rk = |round: usize| &schedule[4 * round..4 * round + 4];

    let mut state = block_to_state(block);
    add_round_key(&mut state, rk(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, rk(round));
        log::trace!("round {:2}: {:02x?}", round, state);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, rk(nr));
    log::trace!("round {:2}: {:02x?}", nr, state);

    Ok(state)
}

/// Шифрование одного 16-байтового блока.
pub fn aes_encrypt_block(
    plaintext: &[u8],
    schedule: &[Word],
    nr: usize,
) -> Result<[u8; BLOCK_SIZE], CipherError> {
    let block: &[u8; BLOCK_SIZE] = plaintext.try_into().map_err(|_| CipherError::InvalidBlockSize {
        algorithm: "AES",
        expected: "16 bytes",
        actual: plaintext.len(),
    })?;
    let state = cipher(block, nr, schedule)?;
    Ok(state_to_block(&state))
}

#[derive(Debug, Clone, Default)]
pub struct Rijndael {
    variant: Option<AesVariant>,
    round_keys: Vec<Word>,
}

impl Rijndael {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        let mut rijndael = Self::new();
        rijndael.set_key(key)?;
        Ok(rijndael)
    }

    pub fn variant(&self) -> Option<AesVariant> {
        self.variant
    }

    pub fn round_keys(&self) -> &[Word] {
        &self.round_keys
    }

    pub fn encrypt(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let variant = self.variant.ok_or(CipherError::InvalidKeySchedule {
            algorithm: "AES",
            expected: "a key to be set",
            actual: 0,
        })?;
        aes_encrypt_block(block, &self.round_keys, variant.nr())
    }
}

impl CipherAlgorithm for Rijndael {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt(block).map(|out| out.to_vec())
    }
}

impl SymmetricCipher for Rijndael {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let variant = AesVariant::from_key_len(key.len())?;
        self.round_keys = expand_key(key)?;
        self.variant = Some(variant);
        Ok(())
    }
}

impl SymmetricCipherWithRounds for Rijndael {
    fn rounds(&self) -> usize {
        self.variant.map_or(0, AesVariant::nr)
    }

    fn export_round_keys(&self) -> Option<Vec<u8>> {
        self.variant?;
        Some(self.round_keys.iter().flatten().copied().collect())
    }
}
