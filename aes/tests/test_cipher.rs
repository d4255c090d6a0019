use hex_literal::hex;
use rijndael::rijndael::cipher::{
    add_round_key, aes_encrypt_block, block_to_state, cipher, mix_columns, shift_rows,
    state_to_block, sub_bytes, Rijndael, State,
};
use rijndael::rijndael::key_schedule::{expand_key, key_expansion, AesVariant};
use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};
use symmetric_cipher::crypto::error::CipherError;

const FIPS_KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const FIPS_INPUT: [u8; 16] = hex!("3243f6a8885a308d313198a2e0370734");

#[test]
fn test_aes128_fips_state_matrix() {
    let _ = env_logger::builder().is_test(true).try_init();

    let schedule = key_expansion(&FIPS_KEY, 4, 10).unwrap();
    let state = cipher(&FIPS_INPUT, 10, &schedule).unwrap();

    let expected: State = [
        [0x39, 0x02, 0xdc, 0x19],
        [0x25, 0xdc, 0x11, 0x6a],
        [0x84, 0x09, 0x85, 0x0b],
        [0x1d, 0xfb, 0x97, 0x32],
    ];
    assert_eq!(state, expected);
    assert_eq!(state_to_block(&state), hex!("3925841d02dc09fbdc118597196a0b32"));
}

#[test]
fn test_appendix_b_first_round() {
    let schedule = expand_key(&FIPS_KEY).unwrap();
    let mut state = block_to_state(&FIPS_INPUT);

    add_round_key(&mut state, &schedule[0..4]);
    assert_eq!(state_to_block(&state), hex!("193de3bea0f4e22b9ac68d2ae9f84808"));

    sub_bytes(&mut state);
    assert_eq!(state_to_block(&state), hex!("d42711aee0bf98f1b8b45de51e415230"));

    shift_rows(&mut state);
    assert_eq!(state_to_block(&state), hex!("d4bf5d30e0b452aeb84111f11e2798e5"));

    mix_columns(&mut state);
    assert_eq!(state_to_block(&state), hex!("046681e5e0cb199a48f8d37a2806264c"));

    add_round_key(&mut state, &schedule[4..8]);
    assert_eq!(state_to_block(&state), hex!("a49c7ff2689f352b6b5bea43026a5049"));
}

#[test]
fn test_state_layout_is_column_major() {
    let block: [u8; 16] = core::array::from_fn(|i| i as u8);
    let state = block_to_state(&block);
    assert_eq!(state[0], [0, 4, 8, 12]);
    assert_eq!(state[3], [3, 7, 11, 15]);
    assert_eq!(state_to_block(&state), block);
}

#[test]
fn test_shift_rows_rotates_row_r_by_r() {
    let mut state: State = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [8, 9, 10, 11],
        [12, 13, 14, 15],
    ];
    shift_rows(&mut state);
    assert_eq!(
        state,
        [[0, 1, 2, 3], [5, 6, 7, 4], [10, 11, 8, 9], [15, 12, 13, 14]]
    );
}

#[test]
fn test_mix_columns_known_columns() {
    // db 13 53 45 -> 8e 4d a1 bc, f2 0a 22 5c -> 9f dc 58 9d
    let mut state: State = [
        [0xdb, 0xf2, 0x01, 0xc6],
        [0x13, 0x0a, 0x01, 0xc6],
        [0x53, 0x22, 0x01, 0xc6],
        [0x45, 0x5c, 0x01, 0xc6],
    ];
    mix_columns(&mut state);
    assert_eq!(
        state,
        [
            [0x8e, 0x9f, 0x01, 0xc6],
            [0x4d, 0xdc, 0x01, 0xc6],
            [0xa1, 0x58, 0x01, 0xc6],
            [0xbc, 0x9d, 0x01, 0xc6],
        ]
    );
}

#[test]
fn test_fips_appendix_c_vectors() {
    let plaintext = hex!("00112233445566778899aabbccddeeff");
    let cases: [(&[u8], [u8; 16]); 3] = [
        (
            &hex!("000102030405060708090a0b0c0d0e0f"),
            hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
        ),
        (
            &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
            hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
        ),
        (
            &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
            hex!("8ea2b7ca516745bfeafc49904b496089"),
        ),
    ];

    for (key, expected) in cases {
        let variant = AesVariant::from_key_len(key.len()).unwrap();
        let schedule = expand_key(key).unwrap();
        let ciphertext = aes_encrypt_block(&plaintext, &schedule, variant.nr()).unwrap();
        assert_eq!(ciphertext, expected, "{} encryption mismatch", variant);
    }
}

#[test]
fn test_aes192_known_vector() {
    let key = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
    let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
    let expected_cipher = hex!("bd334f1d6e45f25ff712a214571fa5cc");

    let aes = Rijndael::with_key(&key).unwrap();
    assert_eq!(aes.variant(), Some(AesVariant::Aes192));
    assert_eq!(aes.encrypt(&plaintext).unwrap(), expected_cipher, "AES-192 encryption mismatch");
}

#[test]
fn test_aes256_known_vector() {
    let key = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");
    let expected_cipher = hex!("f3eed1bdb5d2a03c064b5a7e3db181f8");

    let mut aes = Rijndael::new();
    aes.set_key(&key).unwrap();
    assert_eq!(aes.rounds(), 14);
    assert_eq!(
        aes.encrypt_block(&plaintext).unwrap(),
        expected_cipher.to_vec(),
        "AES-256 encryption mismatch"
    );
}

#[test]
fn test_rijndael_without_key() {
    let aes = Rijndael::new();
    assert_eq!(aes.rounds(), 0);
    assert_eq!(aes.block_size(), 16);
    assert!(aes.export_round_keys().is_none());
    assert!(matches!(
        aes.encrypt_block(&[0u8; 16]),
        Err(CipherError::InvalidKeySchedule { .. })
    ));
}

#[test]
fn test_export_round_keys() {
    let aes = Rijndael::with_key(&FIPS_KEY).unwrap();
    let exported = aes.export_round_keys().unwrap();
    assert_eq!(exported.len(), 176);
    assert_eq!(&exported[..16], &FIPS_KEY);
    assert_eq!(&exported[16..20], &hex!("a0fafe17"));
    assert_eq!(aes.round_keys().len(), 44);
}

#[test]
fn test_invalid_inputs_rejected() {
    let schedule = expand_key(&FIPS_KEY).unwrap();

    assert!(matches!(
        aes_encrypt_block(&FIPS_INPUT[..15], &schedule, 10),
        Err(CipherError::InvalidBlockSize { actual: 15, .. })
    ));
    assert!(matches!(
        aes_encrypt_block(&[0u8; 17], &schedule, 10),
        Err(CipherError::InvalidBlockSize { actual: 17, .. })
    ));
    assert!(matches!(
        aes_encrypt_block(&FIPS_INPUT, &schedule, 12),
        Err(CipherError::InvalidKeySchedule { actual: 44, .. })
    ));
    assert!(matches!(
        aes_encrypt_block(&FIPS_INPUT, &schedule[..40], 10),
        Err(CipherError::InvalidKeySchedule { actual: 40, .. })
    ));
    assert!(matches!(
        cipher(&FIPS_INPUT, 11, &schedule),
        Err(CipherError::InvalidKeySchedule { actual: 11, .. })
    ));
    assert!(matches!(
        Rijndael::with_key(&[0u8; 20]),
        Err(CipherError::InvalidKeySize { actual: 20, .. })
    ));
}

#[test]
fn test_encryption_is_deterministic() {
    let schedule = expand_key(&FIPS_KEY).unwrap();
    let first = aes_encrypt_block(&FIPS_INPUT, &schedule, 10).unwrap();
    for _ in 0..8 {
        assert_eq!(aes_encrypt_block(&FIPS_INPUT, &schedule, 10).unwrap(), first);
    }
    // новое расписание из того же ключа даёт тот же результат
    let again = expand_key(&FIPS_KEY).unwrap();
    assert_eq!(aes_encrypt_block(&FIPS_INPUT, &again, 10).unwrap(), first);
}

#[test]
fn test_matches_reference_implementation_random() {
    use aes::cipher::{BlockEncrypt, KeyInit};
    use aes::{Aes128, Aes192, Aes256, Block};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    // Фиксированный сид для воспроизводимости
    let mut rng = StdRng::seed_from_u64(0xdead_beef);

    for variant in AesVariant::ALL {
        for _ in 0..32 {
            let mut key = vec![0u8; variant.key_len()];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);

            let ours = Rijndael::with_key(&key).unwrap().encrypt(&block).unwrap();

            let mut reference = Block::clone_from_slice(&block);
            match variant {
                AesVariant::Aes128 => Aes128::new_from_slice(&key).unwrap().encrypt_block(&mut reference),
                AesVariant::Aes192 => Aes192::new_from_slice(&key).unwrap().encrypt_block(&mut reference),
                AesVariant::Aes256 => Aes256::new_from_slice(&key).unwrap().encrypt_block(&mut reference),
            }

            assert_eq!(ours.as_slice(), reference.as_slice(), "{} mismatch for key {:02x?}", variant, key);
        }
    }
}

#[test]
fn test_shared_schedule_across_threads() {
    use rayon::prelude::*;

    let schedule = expand_key(&FIPS_KEY).unwrap();
    let expected = aes_encrypt_block(&FIPS_INPUT, &schedule, 10).unwrap();

    let results: Vec<[u8; 16]> = (0..256)
        .into_par_iter()
        .map(|_| aes_encrypt_block(&FIPS_INPUT, &schedule, 10).unwrap())
        .collect();

    assert!(results.iter().all(|c| *c == expected));
}

#[test]
fn test_different_keys_give_different_ciphertexts() {
    let mut other_key = FIPS_KEY;
    other_key[15] ^= 0x01;

    let a = Rijndael::with_key(&FIPS_KEY).unwrap().encrypt(&FIPS_INPUT).unwrap();
    let b = Rijndael::with_key(&other_key).unwrap().encrypt(&FIPS_INPUT).unwrap();
    assert_ne!(a, b);
}
