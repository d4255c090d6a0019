pub mod gf;
pub mod rijndael;

pub use rijndael::cipher::{aes_encrypt_block, Rijndael, State};
pub use rijndael::key_schedule::{expand_key, key_expansion, AesVariant, Word};
