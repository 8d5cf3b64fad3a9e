use crate::dispatch::{
    real_add, real_div, real_eq, real_is_zero, real_mul, real_neg, real_sub,
};
use crate::float::real_to_f64;
use crate::{Number, NumberError, Real};

/// A value off the real line. Both components sit on the real rungs,
/// floats infect each other, and `im` is never zero after construction.
#[derive(Debug, Clone)]
pub struct Complex {
    pub(crate) re: Real,
    pub(crate) im: Real,
}

impl Complex {
    pub fn re(&self) -> &Real {
        &self.re
    }

    pub fn im(&self) -> &Real {
        &self.im
    }

    /// Canonical constructor. A float in either slot converts the other,
    /// and a zero imaginary part collapses onto the real line.
    pub(crate) fn make(re: Real, im: Real) -> Number {
        let (re, im) = match (re, im) {
            (Real::Float(x), im) => {
                (Real::Float(x), Real::Float(real_to_f64(&im)))
            }
            (re, Real::Float(y)) => {
                (Real::Float(real_to_f64(&re)), Real::Float(y))
            }
            (re, im) => (re, im),
        };
        if real_is_zero(&im) {
            return Number::Real(re);
        }
        Number::Complex(Box::new(Complex { re, im }))
    }
}

pub(crate) fn add_parts(
    (ar, ai): (&Real, &Real),
    (br, bi): (&Real, &Real),
) -> Number {
    Complex::make(real_add(ar, br), real_add(ai, bi))
}

pub(crate) fn sub_parts(
    (ar, ai): (&Real, &Real),
    (br, bi): (&Real, &Real),
) -> Number {
    Complex::make(real_sub(ar, br), real_sub(ai, bi))
}

pub(crate) fn mul_parts(
    (ar, ai): (&Real, &Real),
    (br, bi): (&Real, &Real),
) -> Number {
    // Gauss product, three real multiplies.
    let ac = real_mul(ar, br);
    let bd = real_mul(ai, bi);
    let cross = real_mul(&real_add(ar, ai), &real_add(br, bi));
    let re = real_sub(&ac, &bd);
    let im = real_sub(&real_sub(&cross, &ac), &bd);
    Complex::make(re, im)
}

pub(crate) fn div_parts(
    (ar, ai): (&Real, &Real),
    (br, bi): (&Real, &Real),
) -> Result<Number, NumberError> {
    // Conjugate division. An exact zero denominator surfaces from
    // real_div; a float zero follows IEEE through to infinities.
    let den = real_add(&real_mul(br, br), &real_mul(bi, bi));
    let re_n = real_add(&real_mul(ar, br), &real_mul(ai, bi));
    let im_n = real_sub(&real_mul(ai, br), &real_mul(ar, bi));
    let re = real_div(&re_n, &den)?;
    let im = real_div(&im_n, &den)?;
    Ok(Complex::make(re, im))
}

pub(crate) fn eq_parts(
    (ar, ai): (&Real, &Real),
    (br, bi): (&Real, &Real),
) -> bool {
    real_eq(ar, br) && real_eq(ai, bi)
}

pub(crate) fn abs(z: &Complex) -> f64 {
    real_to_f64(&z.re).hypot(real_to_f64(&z.im))
}

pub(crate) fn conjugate(z: &Complex) -> Number {
    Complex::make(z.re.clone(), real_neg(&z.im))
}

pub(crate) fn pow(z: &Complex, exp: u32) -> Number {
    // Intermediate squares may collapse onto the real line, so the
    // loop multiplies whole numbers. A float base keeps every power
    // inexact, the zeroth included.
    let mut acc = if z.re.is_exact() {
        Number::from(1)
    } else {
        Number::from(1.0)
    };
    let mut base = Number::Complex(Box::new(z.clone()));
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            acc = acc.mul(&base);
        }
        e >>= 1;
        if e > 0 {
            base = base.mul(&base);
        }
    }
    acc
}
