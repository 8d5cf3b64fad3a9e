use std::cmp::Ordering;

use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use crate::{NumberError, Ratio, Real};

/// Exact integer: a machine word while the value fits, an allocated
/// `BigInt` otherwise. `Bignum` never holds a value in `i64` range;
/// `Int::from(BigInt)` is the single point that enforces this.
#[derive(Debug, Clone)]
pub enum Int {
    Fixnum(i64),
    Bignum(BigInt),
}

impl From<BigInt> for Int {
    fn from(big: BigInt) -> Int {
        match big.to_i64() {
            Some(small) => Int::Fixnum(small),
            None => Int::Bignum(big),
        }
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Int {
        Int::Fixnum(value)
    }
}

impl Int {
    pub(crate) fn to_bigint(&self) -> BigInt {
        match self {
            Int::Fixnum(a) => BigInt::from(*a),
            Int::Bignum(a) => a.clone(),
        }
    }

    pub fn add(&self, other: &Int) -> Int {
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => match a.checked_add(*b) {
                Some(res) => Int::Fixnum(res),
                None => Int::from(BigInt::from(*a) + *b),
            },
            _ => Int::from(self.to_bigint() + other.to_bigint()),
        }
    }

    pub fn sub(&self, other: &Int) -> Int {
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => match a.checked_sub(*b) {
                Some(res) => Int::Fixnum(res),
                None => Int::from(BigInt::from(*a) - *b),
            },
            _ => Int::from(self.to_bigint() - other.to_bigint()),
        }
    }

    pub fn mul(&self, other: &Int) -> Int {
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => match a.checked_mul(*b) {
                Some(res) => Int::Fixnum(res),
                None => Int::from(BigInt::from(*a) * *b),
            },
            _ => Int::from(self.to_bigint() * other.to_bigint()),
        }
    }

    pub fn neg(&self) -> Int {
        match self {
            Int::Fixnum(a) => match a.checked_neg() {
                Some(res) => Int::Fixnum(res),
                None => Int::from(-BigInt::from(*a)),
            },
            Int::Bignum(a) => Int::from(-a.clone()),
        }
    }

    pub fn abs(&self) -> Int {
        if self.is_negative() { self.neg() } else { self.clone() }
    }

    /// Exact division: an `Int` when the division is even, a reduced
    /// `Ratio` otherwise.
    pub fn div_exact(&self, other: &Int) -> Result<Real, NumberError> {
        Ratio::reduce(self.clone(), other.clone())
    }

    /// Quotient toward zero and remainder, `a == q*b + r` with the
    /// remainder taking the dividend's sign.
    pub fn truncate(&self, other: &Int) -> Result<(Int, Int), NumberError> {
        if other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => {
                // i64::MIN / -1 overflows the word, go through BigInt
                match (a.checked_div(*b), a.checked_rem(*b)) {
                    (Some(q), Some(r)) => Ok((Int::Fixnum(q), Int::Fixnum(r))),
                    _ => {
                        let (q, r) =
                            self.to_bigint().div_rem(&other.to_bigint());
                        Ok((Int::from(q), Int::from(r)))
                    }
                }
            }
            _ => {
                let (q, r) = self.to_bigint().div_rem(&other.to_bigint());
                Ok((Int::from(q), Int::from(r)))
            }
        }
    }

    /// Floor-based remainder, sign matching the divisor.
    pub fn modulo(&self, other: &Int) -> Result<Int, NumberError> {
        if other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => match a.checked_rem(*b) {
                Some(r) => {
                    // flip truncated remainders onto the divisor's side;
                    // |r| < |b| and opposite signs, so r + b cannot overflow
                    if r != 0 && (r < 0) != (*b < 0) {
                        Ok(Int::Fixnum(r + *b))
                    } else {
                        Ok(Int::Fixnum(r))
                    }
                }
                None => {
                    Ok(Int::from(self.to_bigint().mod_floor(&other.to_bigint())))
                }
            },
            _ => Ok(Int::from(self.to_bigint().mod_floor(&other.to_bigint()))),
        }
    }

    pub fn shift_left(&self, bits: usize) -> Int {
        match self {
            Int::Fixnum(a) if bits < 64 => {
                let wide = (*a as i128) << bits;
                match i64::try_from(wide) {
                    Ok(res) => Int::Fixnum(res),
                    Err(_) => Int::from(BigInt::from(*a) << bits),
                }
            }
            Int::Fixnum(a) => Int::from(BigInt::from(*a) << bits),
            Int::Bignum(a) => Int::from(a.clone() << bits),
        }
    }

    pub fn shift_right(&self, bits: usize) -> Int {
        match self {
            Int::Fixnum(a) => {
                if bits >= 64 {
                    // the shift ate every magnitude bit, only the sign is left
                    Int::Fixnum(if *a < 0 { -1 } else { 0 })
                } else {
                    Int::Fixnum(a >> bits)
                }
            }
            Int::Bignum(a) => Int::from(a.clone() >> bits),
        }
    }

    pub fn bit_and(&self, other: &Int) -> Int {
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => Int::Fixnum(a & b),
            _ => Int::from(self.to_bigint() & other.to_bigint()),
        }
    }

    pub fn bit_or(&self, other: &Int) -> Int {
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => Int::Fixnum(a | b),
            _ => Int::from(self.to_bigint() | other.to_bigint()),
        }
    }

    pub fn bit_xor(&self, other: &Int) -> Int {
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => Int::Fixnum(a ^ b),
            _ => Int::from(self.to_bigint() ^ other.to_bigint()),
        }
    }

    pub fn bit_not(&self) -> Int {
        match self {
            Int::Fixnum(a) => Int::Fixnum(!a),
            Int::Bignum(a) => Int::from(-(a.clone() + BigInt::one())),
        }
    }

    pub fn pow(&self, exp: u32) -> Int {
        match self {
            Int::Fixnum(a) => match a.checked_pow(exp) {
                Some(res) => Int::Fixnum(res),
                None => Int::from(Pow::pow(&BigInt::from(*a), exp)),
            },
            Int::Bignum(a) => Int::from(Pow::pow(a, exp)),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Int::Fixnum(a) => *a == 0,
            Int::Bignum(a) => a.is_zero(),
        }
    }

    pub(crate) fn is_one(&self) -> bool {
        match self {
            Int::Fixnum(a) => *a == 1,
            Int::Bignum(a) => a.is_one(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Int::Fixnum(a) => *a < 0,
            Int::Bignum(a) => a.is_negative(),
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Int::Fixnum(a) => *a > 0,
            Int::Bignum(a) => a.is_positive(),
        }
    }

    pub fn is_even(&self) -> bool {
        match self {
            Int::Fixnum(a) => a & 1 == 0,
            Int::Bignum(a) => a.is_even(),
        }
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub(crate) fn bit_len(&self) -> u64 {
        match self {
            Int::Fixnum(a) => u64::from(64 - a.unsigned_abs().leading_zeros()),
            Int::Bignum(a) => a.bits(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Int::Fixnum(a) => *a as f64,
            Int::Bignum(a) => a.to_f64().unwrap_or_else(|| {
                if a.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }),
        }
    }

    pub fn from_str_radix(text: &str, radix: u32) -> Result<Int, NumberError> {
        if !(2..=36).contains(&radix) {
            return Err(NumberError::InvalidRadix(radix));
        }
        if let Ok(small) = i64::from_str_radix(text, radix) {
            return Ok(Int::Fixnum(small));
        }
        match BigInt::parse_bytes(text.as_bytes(), radix) {
            Some(big) => Ok(Int::from(big)),
            None => {
                debug!("rejected integer literal {text:?} (radix {radix})");
                Err(NumberError::InvalidLiteral)
            }
        }
    }

    pub fn to_str_radix(&self, radix: u32) -> Result<String, NumberError> {
        if !(2..=36).contains(&radix) {
            return Err(NumberError::InvalidRadix(radix));
        }
        Ok(self.to_bigint().to_str_radix(radix))
    }
}

// gcd over both rungs, result is non-negative
pub(crate) fn gcd(a: &Int, b: &Int) -> Int {
    match (a, b) {
        (Int::Fixnum(x), Int::Fixnum(y))
            if *x != i64::MIN && *y != i64::MIN =>
        {
            Int::Fixnum(x.gcd(y))
        }
        _ => Int::from(a.to_bigint().gcd(&b.to_bigint())),
    }
}

// pre: `other` divides `self` evenly and is positive
pub(crate) fn quotient(a: &Int, other: &Int) -> Int {
    debug_assert!(other.is_positive());
    match (a, other) {
        (Int::Fixnum(x), Int::Fixnum(y)) => {
            debug_assert_eq!(x % y, 0);
            Int::Fixnum(x / y)
        }
        _ => {
            let (q, r) = a.to_bigint().div_rem(&other.to_bigint());
            debug_assert!(r.is_zero());
            Int::from(q)
        }
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Int) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Int) -> Ordering {
        match (self, other) {
            (Int::Fixnum(a), Int::Fixnum(b)) => a.cmp(b),
            (Int::Bignum(a), Int::Bignum(b)) => a.cmp(b),
            // a canonical bignum lies outside i64 range, its sign decides
            (Int::Bignum(a), Int::Fixnum(_)) => {
                if a.is_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Int::Fixnum(_), Int::Bignum(b)) => {
                if b.is_negative() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    }
}
