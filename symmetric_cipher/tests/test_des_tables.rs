use quickcheck::quickcheck;
use symmetric_cipher::crypto::des_tables::*;
use symmetric_cipher::crypto::utils::{bits_to_int, int_to_bits, permute};

/// Сколько раз каждый индекс 1..=domain встречается в таблице.
fn occurrences(table: &[usize], domain: usize) -> Vec<usize> {
    let mut counts = vec![0usize; domain + 1];
    for &idx in table {
        assert!(idx >= 1 && idx <= domain, "index {} out of 1..={}", idx, domain);
        counts[idx] += 1;
    }
    counts
}

fn assert_bijection(table: &[usize], domain: usize) {
    assert_eq!(table.len(), domain);
    let counts = occurrences(table, domain);
    assert!(
        counts[1..].iter().all(|&c| c == 1),
        "table is not a bijection over 1..={}",
        domain
    );
}

#[test]
fn test_pc1_selects_56_distinct_non_parity_bits() {
    assert_eq!(PC1.len(), 56);
    let counts = occurrences(&PC1, 64);
    for idx in 1..=64 {
        let expected = if idx % 8 == 0 { 0 } else { 1 };
        assert_eq!(counts[idx], expected, "PC-1 index {}", idx);
    }
}

#[test]
fn test_pc2_selects_48_distinct_bits() {
    assert_eq!(PC2.len(), 48);
    let counts = occurrences(&PC2, 56);
    assert!(counts[1..].iter().all(|&c| c <= 1));
    // PC-2 отбрасывает ровно 8 бит
    assert_eq!(counts[1..].iter().filter(|&&c| c == 0).count(), 8);
}

#[test]
fn test_ip_and_fp_are_bijections() {
    assert_bijection(&IP, 64);
    assert_bijection(&FP, 64);
}

#[test]
fn test_fp_is_inverse_of_ip_as_tables() {
    for (i, &src) in IP.iter().enumerate() {
        assert_eq!(FP[src - 1], i + 1);
    }
}

#[test]
fn test_p_is_bijection() {
    assert_bijection(&P, 32);
}

#[test]
fn test_e_repeats_exactly_sixteen_bits() {
    assert_eq!(E.len(), 48);
    let counts = occurrences(&E, 32);
    assert!(counts[1..].iter().all(|&c| c == 1 || c == 2));
    assert_eq!(counts[1..].iter().filter(|&&c| c == 2).count(), 16);
}

#[test]
fn test_s_box_rows_are_permutations() {
    for (i, s_box) in S_BOXES.iter().enumerate() {
        for (r, row) in s_box.iter().enumerate() {
            let mut seen = [false; 16];
            for &v in row {
                assert!(v < 16);
                assert!(!seen[v as usize], "S{} row {} repeats {}", i + 1, r, v);
                seen[v as usize] = true;
            }
        }
    }
}

#[test]
fn test_s_boxes_are_distinct() {
    for i in 0..S_BOXES.len() {
        for j in i + 1..S_BOXES.len() {
            assert_ne!(S_BOXES[i], S_BOXES[j], "S{} == S{}", i + 1, j + 1);
        }
    }
}

#[test]
fn test_shift_schedule_is_full_rotation() {
    // после 16 раундов C и D возвращаются в исходное положение
    assert_eq!(SHIFT_BITS.iter().sum::<usize>(), 28);
}

quickcheck! {
    fn prop_fp_inverts_ip(x: u64) -> bool {
        let bits = int_to_bits(x, 64);
        bits_to_int(&permute(&permute(&bits, &IP), &FP)) == x
    }

    fn prop_ip_inverts_fp(x: u64) -> bool {
        let bits = int_to_bits(x, 64);
        bits_to_int(&permute(&permute(&bits, &FP), &IP)) == x
    }
}
