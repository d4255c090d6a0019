pub mod sbox;
pub mod key_schedule;
pub mod cipher;
