use crate::rijndael::sbox::sbox;
use std::fmt;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

/// Слово расписания ключей: 4 байта.
pub type Word = [u8; 4];

/// Rcon[j], 1 <= j <= 10 (хранится с нуля).
pub const R_CON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36];

/// Вариант AES: длина ключа nk (в словах) и число раундов nr.
///
/// AES-128 -> nk = 4, nr = 10
/// AES-192 -> nk = 6, nr = 12
/// AES-256 -> nk = 8, nr = 14
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesVariant {
    Aes128,
    Aes192,
    Aes256,
}

impl AesVariant {
    pub const ALL: [AesVariant; 3] = [AesVariant::Aes128, AesVariant::Aes192, AesVariant::Aes256];

    pub fn from_key_len(len: usize) -> Result<Self, CipherError> {
        match len {
            16 => Ok(AesVariant::Aes128),
            24 => Ok(AesVariant::Aes192),
            32 => Ok(AesVariant::Aes256),
            _ => Err(CipherError::InvalidKeySize {
                algorithm: "AES",
                expected: "16, 24 or 32 bytes",
                actual: len,
            }),
        }
    }

    /// Проверка согласованности пары (nk, nr).
    pub fn from_params(nk: usize, nr: usize) -> Result<Self, CipherError> {
        let variant = match nk {
            4 => AesVariant::Aes128,
            6 => AesVariant::Aes192,
            8 => AesVariant::Aes256,
            _ => {
                return Err(CipherError::InvalidKeySize {
                    algorithm: "AES",
                    expected: "nk of 4, 6 or 8 words",
                    actual: nk,
                });
            }
        };
        if variant.nr() != nr {
            return Err(CipherError::InvalidKeySchedule {
                algorithm: "AES",
                expected: "nr of 10, 12 or 14 matching nk",
                actual: nr,
            });
        }
        Ok(variant)
    }

    pub const fn nk(self) -> usize {
        match self {
            AesVariant::Aes128 => 4,
            AesVariant::Aes192 => 6,
            AesVariant::Aes256 => 8,
        }
    }

    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    pub const fn key_len(self) -> usize {
        4 * self.nk()
    }

    /// Число слов расписания: 4 * (nr + 1).
    pub const fn schedule_len(self) -> usize {
        4 * (self.nr() + 1)
    }
}

impl fmt::Display for AesVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.key_len() * 8)
    }
}

/// RotWord([a0, a1, a2, a3]) = [a1, a2, a3, a0]
pub fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

/// SubWord: S-блок к каждому байту слова.
pub fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// KeyExpansion(key, nk, nr) из FIPS-197: 4 * (nr + 1) слов,
/// слова [4r, 4r + 4) образуют раундовый ключ r.
pub fn key_expansion(key: &[u8], nk: usize, nr: usize) -> Result<Vec<Word>, CipherError> {
    let variant = AesVariant::from_params(nk, nr)?;
    if key.len() != variant.key_len() {
        return Err(CipherError::InvalidKeySize {
            algorithm: "AES",
            expected: "4 * nk bytes",
            actual: key.len(),
        });
    }

    let total = variant.schedule_len();
    let mut w: Vec<Word> = Vec::with_capacity(total);
    for chunk in key.chunks_exact(4) {
        w.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= R_CON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }

        let prev = w[i - nk];
        w.push([
            prev[0] ^ temp[0],
            prev[1] ^ temp[1],
            prev[2] ^ temp[2],
            prev[3] ^ temp[3],
        ]);
    }

    log::debug!("{}: expanded key into {} words", variant, w.len());
    Ok(w)
}

/// Расписание ключей с выбором варианта по длине ключа.
pub fn expand_key(key: &[u8]) -> Result<Vec<Word>, CipherError> {
    let variant = AesVariant::from_key_len(key.len())?;
    key_expansion(key, variant.nk(), variant.nr())
}

/// Раундовый ключ `round`: слова [4 * round, 4 * round + 4).
pub fn round_key(schedule: &[Word], round: usize) -> Option<&[Word]> {
    schedule.get(4 * round..4 * round + 4)
}

/// Генератор ключей для фиксированного варианта AES.
pub struct AesKeyExpansion {
    variant: AesVariant,
}

impl AesKeyExpansion {
    pub fn new(variant: AesVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> AesVariant {
        self.variant
    }
}

impl KeyExpansion for AesKeyExpansion {
    type RoundKey = Word;

    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Word>, CipherError> {
        if key.len() != self.variant.key_len() {
            return Err(CipherError::InvalidKeySize {
                algorithm: "AES",
                expected: "key length of the configured variant",
                actual: key.len(),
            });
        }
        key_expansion(key, self.variant.nk(), self.variant.nr())
    }
}
