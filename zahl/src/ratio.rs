use std::cmp::Ordering;

use crate::{Int, NumberError, Real, int};

/// Exact fraction in lowest terms: `gcd(numer, denom) == 1`, the
/// denominator positive and never one. `reduce` is the only way a
/// `Ratio` comes into existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ratio {
    pub(crate) numer: Int,
    pub(crate) denom: Int,
}

impl Ratio {
    /// Normalize a fraction: signal a zero denominator, collapse a zero
    /// numerator, move the sign onto the numerator, divide out the gcd,
    /// and collapse to an `Int` when the reduced denominator is one.
    pub(crate) fn reduce(numer: Int, denom: Int) -> Result<Real, NumberError> {
        if denom.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self::reduce_nonzero(numer, denom))
    }

    pub(crate) fn reduce_nonzero(numer: Int, denom: Int) -> Real {
        debug_assert!(!denom.is_zero());
        if numer.is_zero() {
            return Real::Int(Int::Fixnum(0));
        }

        let (mut num, mut den) = (numer, denom);
        if den.is_negative() {
            num = num.neg();
            den = den.neg();
        }

        let gcd = int::gcd(&num, &den);
        if !gcd.is_one() {
            num = int::quotient(&num, &gcd);
            den = int::quotient(&den, &gcd);
        }

        if den.is_one() {
            return Real::Int(num);
        }
        Real::Ratio(Ratio { numer: num, denom: den })
    }

    pub fn numer(&self) -> &Int {
        &self.numer
    }

    pub fn denom(&self) -> &Int {
        &self.denom
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    pub fn neg(&self) -> Ratio {
        Ratio {
            numer: self.numer.neg(),
            denom: self.denom.clone(),
        }
    }

    pub fn abs(&self) -> Ratio {
        Ratio {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    pub(crate) fn pow(&self, exp: u32) -> Real {
        Self::reduce_nonzero(self.numer.pow(exp), self.denom.pow(exp))
    }

    /// Numerator over denominator as a double, the documented lossy
    /// boundary. Components past the double range are cut down to their
    /// top bits first so the quotient's exponent survives the trip.
    pub fn to_f64(&self) -> f64 {
        parts_to_f64(&self.numer, &self.denom)
    }
}

// working view of an exact real as numerator/denominator; integers
// enter rational arithmetic as n/1
pub(crate) fn parts(real: &Real) -> (Int, Int) {
    match real {
        Real::Int(n) => (n.clone(), Int::Fixnum(1)),
        Real::Ratio(r) => (r.numer.clone(), r.denom.clone()),
        Real::Float(_) => unreachable!("float operand in exact rational op"),
    }
}

pub(crate) fn add_parts(a: (Int, Int), b: (Int, Int)) -> Real {
    let (a_num, a_den) = a;
    let (b_num, b_den) = b;
    let left = a_num.mul(&b_den);
    let right = b_num.mul(&a_den);
    Ratio::reduce_nonzero(left.add(&right), a_den.mul(&b_den))
}

pub(crate) fn sub_parts(a: (Int, Int), b: (Int, Int)) -> Real {
    let (a_num, a_den) = a;
    let (b_num, b_den) = b;
    let left = a_num.mul(&b_den);
    let right = b_num.mul(&a_den);
    Ratio::reduce_nonzero(left.sub(&right), a_den.mul(&b_den))
}

pub(crate) fn mul_parts(a: (Int, Int), b: (Int, Int)) -> Real {
    let (a_num, a_den) = a;
    let (b_num, b_den) = b;
    Ratio::reduce_nonzero(a_num.mul(&b_num), a_den.mul(&b_den))
}

pub(crate) fn div_parts(
    a: (Int, Int),
    b: (Int, Int),
) -> Result<Real, NumberError> {
    let (a_num, a_den) = a;
    let (b_num, b_den) = b;
    if b_num.is_zero() {
        return Err(NumberError::DivisionByZero);
    }
    Ok(Ratio::reduce_nonzero(a_num.mul(&b_den), a_den.mul(&b_num)))
}

// cross-multiplied compare; sound because denominators are positive
pub(crate) fn cmp_parts(a: (Int, Int), b: (Int, Int)) -> Ordering {
    let (a_num, a_den) = a;
    let (b_num, b_den) = b;
    debug_assert!(a_den.is_positive() && b_den.is_positive());
    a_num.mul(&b_den).cmp(&b_num.mul(&a_den))
}

pub(crate) fn parts_to_f64(numer: &Int, denom: &Int) -> f64 {
    let n = numer.to_f64();
    let d = denom.to_f64();
    if n.is_finite() && d.is_finite() {
        return n / d;
    }

    // keep the top 64 bits of each side and rejoin the scale afterwards
    let n_shift = numer.bit_len().saturating_sub(64) as usize;
    let d_shift = denom.bit_len().saturating_sub(64) as usize;
    let n = numer.shift_right(n_shift).to_f64();
    let d = denom.shift_right(d_shift).to_f64();
    scale_by_pow2(n / d, n_shift as i64 - d_shift as i64)
}

// x * 2^e in two factors so the intermediate cannot overshoot early
fn scale_by_pow2(x: f64, e: i64) -> f64 {
    let e = e.clamp(-2200, 2200);
    let half = (e / 2) as i32;
    let rest = (e - e / 2) as i32;
    x * 2f64.powi(half) * 2f64.powi(rest)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{Ratio, add_parts, cmp_parts, div_parts, mul_parts, sub_parts};
    use crate::{Int, NumberError, Real};

    fn ratio(n: i64, d: i64) -> (Int, Int) {
        match Ratio::reduce(Int::Fixnum(n), Int::Fixnum(d)).unwrap() {
            Real::Ratio(r) => (r.numer, r.denom),
            Real::Int(n) => (n, Int::Fixnum(1)),
            Real::Float(_) => unreachable!(),
        }
    }

    #[test]
    fn ratio_reduces_and_demotes() {
        let half = Ratio::reduce(Int::Fixnum(2), Int::Fixnum(4)).unwrap();
        match &half {
            Real::Ratio(r) => {
                assert_eq!(*r.numer(), Int::Fixnum(1));
                assert_eq!(*r.denom(), Int::Fixnum(2));
            }
            other => panic!("expected ratio, got {other:?}"),
        }

        let two = Ratio::reduce(Int::Fixnum(4), Int::Fixnum(2)).unwrap();
        assert!(matches!(two, Real::Int(Int::Fixnum(2))));
    }

    #[test]
    fn reduce_normalizes_sign_onto_numerator() {
        match Ratio::reduce(Int::Fixnum(1), Int::Fixnum(-2)).unwrap() {
            Real::Ratio(r) => {
                assert_eq!(*r.numer(), Int::Fixnum(-1));
                assert_eq!(*r.denom(), Int::Fixnum(2));
            }
            other => panic!("expected ratio, got {other:?}"),
        }
        match Ratio::reduce(Int::Fixnum(-3), Int::Fixnum(-6)).unwrap() {
            Real::Ratio(r) => {
                assert_eq!(*r.numer(), Int::Fixnum(1));
                assert_eq!(*r.denom(), Int::Fixnum(2));
            }
            other => panic!("expected ratio, got {other:?}"),
        }
    }

    #[test]
    fn reduce_zero_numerator_collapses() {
        let zero = Ratio::reduce(Int::Fixnum(0), Int::Fixnum(7)).unwrap();
        assert!(matches!(zero, Real::Int(Int::Fixnum(0))));
    }

    #[test]
    fn reduce_zero_denominator_errors() {
        let err = Ratio::reduce(Int::Fixnum(1), Int::Fixnum(0)).unwrap_err();
        assert_eq!(err, NumberError::DivisionByZero);
    }

    #[test]
    fn ratio_adds() {
        let sum = add_parts(ratio(1, 2), ratio(1, 3));
        match sum {
            Real::Ratio(r) => {
                assert_eq!(*r.numer(), Int::Fixnum(5));
                assert_eq!(*r.denom(), Int::Fixnum(6));
            }
            other => panic!("expected ratio, got {other:?}"),
        }
    }

    #[test]
    fn adjacent_sums_collapse() {
        let one = add_parts(ratio(1, 3), ratio(2, 3));
        assert!(matches!(one, Real::Int(Int::Fixnum(1))));
        let zero = sub_parts(ratio(1, 2), ratio(1, 2));
        assert!(matches!(zero, Real::Int(Int::Fixnum(0))));
    }

    #[test]
    fn ratio_mul_and_div() {
        let prod = mul_parts(ratio(2, 3), ratio(3, 5));
        match prod {
            Real::Ratio(r) => {
                assert_eq!(*r.numer(), Int::Fixnum(2));
                assert_eq!(*r.denom(), Int::Fixnum(5));
            }
            other => panic!("expected ratio, got {other:?}"),
        }

        let quot = div_parts(ratio(2, 3), ratio(3, 5)).unwrap();
        match quot {
            Real::Ratio(r) => {
                assert_eq!(*r.numer(), Int::Fixnum(10));
                assert_eq!(*r.denom(), Int::Fixnum(9));
            }
            other => panic!("expected ratio, got {other:?}"),
        }

        let err = div_parts(ratio(2, 3), ratio(0, 1)).unwrap_err();
        assert_eq!(err, NumberError::DivisionByZero);
    }

    #[test]
    fn cmp_crosses_denominators() {
        assert_eq!(cmp_parts(ratio(1, 3), ratio(1, 2)), Ordering::Less);
        assert_eq!(cmp_parts(ratio(-1, 2), ratio(-1, 3)), Ordering::Less);
        assert_eq!(cmp_parts(ratio(2, 4), ratio(1, 2)), Ordering::Equal);
    }

    #[test]
    fn ratio_pow_keeps_lowest_terms() {
        let (n, d) = ratio(2, 3);
        let r = Ratio { numer: n, denom: d };
        match r.pow(3) {
            Real::Ratio(p) => {
                assert_eq!(*p.numer(), Int::Fixnum(8));
                assert_eq!(*p.denom(), Int::Fixnum(27));
            }
            other => panic!("expected ratio, got {other:?}"),
        }
        assert!(matches!(r.pow(0), Real::Int(Int::Fixnum(1))));
    }

    #[test]
    fn to_f64_divides() {
        let (n, d) = ratio(1, 2);
        let r = Ratio { numer: n, denom: d };
        assert_eq!(r.to_f64(), 0.5);

        let (n, d) = ratio(-3, 4);
        let r = Ratio { numer: n, denom: d };
        assert_eq!(r.to_f64(), -0.75);
    }

    #[test]
    fn to_f64_survives_oversized_components() {
        // 2^1100 / (2^1100 + 2^1099) == 2/3, both sides overflow f64 alone
        let numer = Int::Fixnum(1).shift_left(1100);
        let denom = numer.add(&Int::Fixnum(1).shift_left(1099));
        assert_eq!(super::parts_to_f64(&numer, &denom), 2.0 / 3.0);

        // magnitudes beyond the double range still round to inf / zero
        let huge = Int::Fixnum(1).shift_left(3000);
        assert_eq!(super::parts_to_f64(&huge, &Int::Fixnum(3)), f64::INFINITY);
        assert_eq!(super::parts_to_f64(&huge.neg(), &Int::Fixnum(3)), f64::NEG_INFINITY);
        assert_eq!(super::parts_to_f64(&Int::Fixnum(3), &huge), 0.0);
    }
}
