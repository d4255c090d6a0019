//! Арифметика в GF(2^8) по модулю m(x) = x^8 + x^4 + x^3 + x + 1.

/// m(x) без старшего бита, который подразумевается.
pub const AES_POLYNOMIAL: u8 = 0x1B;

/// Умножение в GF(2^8) «крестьянским» методом.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut result: u8 = 0;
    let mut a_val = a;
    let mut b_val = b;

    for _ in 0..8 {
        if b_val & 1 != 0 {
            result ^= a_val;
        }

        let high_bit = a_val & 0x80;
        a_val <<= 1;

        // редукция по модулю m(x)
        if high_bit != 0 {
            a_val ^= AES_POLYNOMIAL;
        }

        b_val >>= 1;
    }

    result
}

/// Умножение на {02}.
pub fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ AES_POLYNOMIAL
    } else {
        shifted
    }
}

/// Возведение в степень (square-and-multiply).
pub fn gf_pow(a: u8, exp: usize) -> u8 {
    if exp == 0 {
        return 1;
    }

    if a == 0 {
        return 0;
    }

    let mut result: u8 = 1;
    let mut base = a;
    let mut exponent = exp;

    while exponent > 0 {
        if exponent & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exponent >>= 1;
    }

    result
}

/// Мультипликативный обратный: a^254, так как a^255 = 1. Для нуля возвращает 0.
pub fn gf_inv(a: u8) -> u8 {
    gf_pow(a, 254)
}
