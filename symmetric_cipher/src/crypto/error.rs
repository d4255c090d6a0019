use thiserror::Error;

/// Ошибки входных данных. Проверяются до начала любых преобразований,
/// частичного результата не бывает.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("{algorithm}: invalid key size {actual}, expected {expected}")]
    InvalidKeySize {
        algorithm: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("{algorithm}: invalid block size {actual}, expected {expected}")]
    InvalidBlockSize {
        algorithm: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("{algorithm}: invalid key schedule ({actual}), expected {expected}")]
    InvalidKeySchedule {
        algorithm: &'static str,
        expected: &'static str,
        actual: usize,
    },
}
