use bitvec::prelude::{BitSlice, BitVec};

/// Байты -> биты, старший бит каждого байта идёт первым.
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// Биты -> байты. Неполная последняя группа выравнивается по старшему биту.
pub fn bits_to_bytes(bits: &BitSlice) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Младшие `width` бит числа, старший бит первым.
///
/// При `width > 64` вывод дополняется нулями слева, как при расширении
/// числа до более широкого типа.
pub fn int_to_bits(value: u64, width: usize) -> BitVec {
    let mut bits = BitVec::with_capacity(width);
    for i in (0..width).rev() {
        let bit = u32::try_from(i)
            .ok()
            .and_then(|shift| value.checked_shr(shift))
            .is_some_and(|v| v & 1 != 0);
        bits.push(bit);
    }
    bits
}

/// Двоичная запись -> число.
///
/// Для записи длиннее 64 бит значимы только последние 64: старшие биты
/// выдвигаются за пределы `u64`, как при усечении до младшего слова.
pub fn bits_to_int(bits: &BitSlice) -> u64 {
    let tail = &bits[bits.len().saturating_sub(64)..];
    tail.iter()
        .by_vals()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit))
}

/// Перестановка по таблице с индексами от единицы:
/// `output[i] = input[table[i] - 1]`.
///
/// Таблица может быть короче входа (PC-1, PC-2) или длиннее (расширение E).
///
/// # Panics
///
/// Каждый элемент таблицы должен лежать в `1..=bits.len()`; ноль или индекс
/// за пределами входа приводят к панике. Все таблицы DES этому условию
/// удовлетворяют.
pub fn permute(bits: &BitSlice, table: &[usize]) -> BitVec {
    let mut permuted = BitVec::with_capacity(table.len());
    for &pos in table {
        permuted.push(bits[pos - 1]);
    }
    permuted
}

pub fn xor_bits(a: &BitSlice, b: &BitSlice) -> BitVec {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect()
}
