pub mod crypto;
pub use crypto::cipher_traits::*;
pub use crypto::error::CipherError;
pub use crypto::des::{des_decrypt_block, des_encrypt_block, DES};
pub use crypto::des_key_expansion::des_key_schedule;
