// examples/demo.rs
//
// RUST_LOG=trace cargo run -p rijndael --example demo

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use rijndael::gf::arithmetic::{gf_inv, gf_mul, gf_pow, xtime};
use rijndael::rijndael::cipher::{cipher, Rijndael};
use rijndael::rijndael::key_schedule::{expand_key, round_key, AesVariant};
use rijndael::rijndael::sbox::{affine_sbox, sbox};
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipherWithRounds};
use symmetric_cipher::crypto::error::CipherError;

fn random_key(len: usize, rng: &mut impl RngCore) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

fn main() -> Result<(), CipherError> {
    env_logger::init();

    // --------------------------------------------------------
    // 0) Key schedule & single-block AES demo
    // --------------------------------------------------------
    println!("=== Key schedule & single-block AES demo ===");
    let key128 = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
        0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
    ];
    let block = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d,
        0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34,
    ];
    let schedule = expand_key(&key128)?;
    if let Some(rk) = round_key(&schedule, 1) {
        println!(" Round1 key: {:02x?}", rk);
    }

    let state = cipher(&block, AesVariant::Aes128.nr(), &schedule)?;
    println!(" Output state:");
    for row in &state {
        println!("   {:02x?}", row);
    }

    let aes = Rijndael::with_key(&key128)?;
    println!(" Rounds: {}", aes.rounds());
    println!(" Encrypted block: {:02x?}", aes.encrypt_block(&block)?);

    // --------------------------------------------------------
    // 1) GF(2^8) arithmetic
    // --------------------------------------------------------
    println!("\n=== GF(2^8) arithmetic demo ===");
    println!("  0x57 * 0x83 = 0x{:02x}", gf_mul(0x57, 0x83));
    println!("  xtime(0x57) = 0x{:02x}", xtime(0x57));
    println!("  0x03^5      = 0x{:02x}", gf_pow(0x03, 5));
    println!("  0x53^-1     = 0x{:02x}", gf_inv(0x53));

    // --------------------------------------------------------
    // 2) S-box demo
    // --------------------------------------------------------
    println!("\n=== S-box demo ===");
    for &x in &[0x00u8, 0x53, 0x7f] {
        let y = sbox(x);
        println!("  S(0x{:02x}) = 0x{:02x}, affine(inv) = 0x{:02x}", x, y, affine_sbox(x));
        assert_eq!(y, affine_sbox(x));
    }

    // --------------------------------------------------------
    // 3) Random keys, all variants
    // --------------------------------------------------------
    println!("\n=== Random key demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    for variant in AesVariant::ALL {
        let key = random_key(variant.key_len(), &mut rng);
        let aes = Rijndael::with_key(&key)?;
        let out = aes.encrypt(&block)?;
        println!(
            "{} nk={} nr={} words={} -> {:02x?}",
            variant,
            variant.nk(),
            variant.nr(),
            aes.round_keys().len(),
            out
        );
    }

    Ok(())
}
