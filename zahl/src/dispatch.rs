use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use crate::float::{self, real_to_f64};
use crate::{Complex, Int, Number, NumberError, NumberKind, Real, complex, ratio};

// Real arithmetic peels ranks from the top: float operands force a
// float result, everything below that stays exact through the ratio
// representation.

pub(crate) fn real_add(a: &Real, b: &Real) -> Real {
    match (a, b) {
        (Real::Int(x), Real::Int(y)) => Real::Int(x.add(y)),
        (Real::Float(x), other) => Real::Float(x + real_to_f64(other)),
        (other, Real::Float(y)) => Real::Float(real_to_f64(other) + y),
        (x, y) => ratio::add_parts(ratio::parts(x), ratio::parts(y)),
    }
}

pub(crate) fn real_sub(a: &Real, b: &Real) -> Real {
    match (a, b) {
        (Real::Int(x), Real::Int(y)) => Real::Int(x.sub(y)),
        (Real::Float(x), other) => Real::Float(x - real_to_f64(other)),
        (other, Real::Float(y)) => Real::Float(real_to_f64(other) - y),
        (x, y) => ratio::sub_parts(ratio::parts(x), ratio::parts(y)),
    }
}

pub(crate) fn real_mul(a: &Real, b: &Real) -> Real {
    match (a, b) {
        (Real::Int(x), Real::Int(y)) => Real::Int(x.mul(y)),
        (Real::Float(x), other) => Real::Float(x * real_to_f64(other)),
        (other, Real::Float(y)) => Real::Float(real_to_f64(other) * y),
        (x, y) => ratio::mul_parts(ratio::parts(x), ratio::parts(y)),
    }
}

pub(crate) fn real_div(a: &Real, b: &Real) -> Result<Real, NumberError> {
    match (a, b) {
        (Real::Int(x), Real::Int(y)) => x.div_exact(y),
        (Real::Float(x), other) => Ok(Real::Float(x / real_to_f64(other))),
        (other, Real::Float(y)) => Ok(Real::Float(real_to_f64(other) / y)),
        (x, y) => ratio::div_parts(ratio::parts(x), ratio::parts(y)),
    }
}

pub(crate) fn real_neg(a: &Real) -> Real {
    match a {
        Real::Int(n) => Real::Int(n.neg()),
        Real::Ratio(r) => Real::Ratio(r.neg()),
        Real::Float(x) => Real::Float(-x),
    }
}

pub(crate) fn real_abs(a: &Real) -> Real {
    match a {
        Real::Int(n) => Real::Int(n.abs()),
        Real::Ratio(r) => Real::Ratio(r.abs()),
        Real::Float(x) => Real::Float(x.abs()),
    }
}

pub(crate) fn real_is_zero(a: &Real) -> bool {
    match a {
        Real::Int(n) => n.is_zero(),
        // a canonical ratio is never a whole number, let alone zero
        Real::Ratio(_) => false,
        Real::Float(x) => *x == 0.0,
    }
}

pub(crate) fn real_is_negative(a: &Real) -> bool {
    match a {
        Real::Int(n) => n.is_negative(),
        Real::Ratio(r) => r.is_negative(),
        Real::Float(x) => *x < 0.0,
    }
}

pub(crate) fn real_is_positive(a: &Real) -> bool {
    match a {
        Real::Int(n) => n.is_positive(),
        Real::Ratio(r) => r.is_positive(),
        Real::Float(x) => *x > 0.0,
    }
}

/// Order two reals. `None` only when a NaN is involved. Mixed
/// exact/float pairs compare exactly: the float side converts to exact
/// form, never the other way around, so wide integers keep their last
/// bits in play.
pub(crate) fn real_cmp(a: &Real, b: &Real) -> Option<Ordering> {
    match (a, b) {
        (Real::Int(x), Real::Int(y)) => Some(x.cmp(y)),
        (Real::Float(x), Real::Float(y)) => x.partial_cmp(y),
        (Real::Float(x), other) => {
            cmp_exact_float(other, *x).map(Ordering::reverse)
        }
        (other, Real::Float(y)) => cmp_exact_float(other, *y),
        (x, y) => Some(ratio::cmp_parts(ratio::parts(x), ratio::parts(y))),
    }
}

// the exact operand against a float, reported from the exact side
fn cmp_exact_float(exact: &Real, x: f64) -> Option<Ordering> {
    if x.is_nan() {
        return None;
    }
    if x == f64::INFINITY {
        return Some(Ordering::Less);
    }
    if x == f64::NEG_INFINITY {
        return Some(Ordering::Greater);
    }
    real_cmp(exact, &float::finite_to_exact(x))
}

pub(crate) fn real_eq(a: &Real, b: &Real) -> bool {
    real_cmp(a, b) == Some(Ordering::Equal)
}

// view any number as a component pair; reals get an exact zero imag
pub(crate) fn complex_parts(n: &Number) -> (Real, Real) {
    match n {
        Number::Real(r) => (r.clone(), Real::Int(Int::Fixnum(0))),
        Number::Complex(z) => (z.re.clone(), z.im.clone()),
    }
}

impl Number {
    pub fn add(&self, other: &Number) -> Number {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => Number::Real(real_add(a, b)),
            _ => {
                let a = complex_parts(self);
                let b = complex_parts(other);
                complex::add_parts((&a.0, &a.1), (&b.0, &b.1))
            }
        }
    }

    pub fn sub(&self, other: &Number) -> Number {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => Number::Real(real_sub(a, b)),
            _ => {
                let a = complex_parts(self);
                let b = complex_parts(other);
                complex::sub_parts((&a.0, &a.1), (&b.0, &b.1))
            }
        }
    }

    pub fn mul(&self, other: &Number) -> Number {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => Number::Real(real_mul(a, b)),
            _ => {
                let a = complex_parts(self);
                let b = complex_parts(other);
                complex::mul_parts((&a.0, &a.1), (&b.0, &b.1))
            }
        }
    }

    /// Division; exact operands stay exact. An exact zero divisor
    /// signals, a float zero follows IEEE.
    pub fn div(&self, other: &Number) -> Result<Number, NumberError> {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => {
                Ok(Number::Real(real_div(a, b)?))
            }
            _ => {
                let a = complex_parts(self);
                let b = complex_parts(other);
                complex::div_parts((&a.0, &a.1), (&b.0, &b.1))
            }
        }
    }

    pub fn neg(&self) -> Number {
        match self {
            Number::Real(r) => Number::Real(real_neg(r)),
            Number::Complex(z) => {
                Complex::make(real_neg(&z.re), real_neg(&z.im))
            }
        }
    }

    /// Magnitude. Real values keep their kind; a complex magnitude is
    /// the float hypotenuse.
    pub fn abs(&self) -> Number {
        match self {
            Number::Real(r) => Number::Real(real_abs(r)),
            Number::Complex(z) => Number::Real(Real::Float(complex::abs(z))),
        }
    }

    pub fn conjugate(&self) -> Number {
        match self {
            Number::Real(_) => self.clone(),
            Number::Complex(z) => complex::conjugate(z),
        }
    }

    /// Quotient toward zero and the matching remainder, integers only.
    pub fn truncate(
        &self,
        other: &Number,
    ) -> Result<(Number, Number), NumberError> {
        let (q, r) = self.require_int()?.truncate(other.require_int()?)?;
        Ok((q.into(), r.into()))
    }

    /// Floor-based remainder taking the divisor's sign, integers only.
    pub fn modulo(&self, other: &Number) -> Result<Number, NumberError> {
        Ok(self.require_int()?.modulo(other.require_int()?)?.into())
    }

    pub fn shift_left(&self, bits: usize) -> Result<Number, NumberError> {
        Ok(self.require_int()?.shift_left(bits).into())
    }

    pub fn shift_right(&self, bits: usize) -> Result<Number, NumberError> {
        Ok(self.require_int()?.shift_right(bits).into())
    }

    pub fn bit_and(&self, other: &Number) -> Result<Number, NumberError> {
        Ok(self.require_int()?.bit_and(other.require_int()?).into())
    }

    pub fn bit_or(&self, other: &Number) -> Result<Number, NumberError> {
        Ok(self.require_int()?.bit_or(other.require_int()?).into())
    }

    pub fn bit_xor(&self, other: &Number) -> Result<Number, NumberError> {
        Ok(self.require_int()?.bit_xor(other.require_int()?).into())
    }

    pub fn bit_not(&self) -> Result<Number, NumberError> {
        Ok(self.require_int()?.bit_not().into())
    }

    pub fn is_even(&self) -> Result<bool, NumberError> {
        Ok(self.require_int()?.is_even())
    }

    pub fn is_odd(&self) -> Result<bool, NumberError> {
        Ok(self.require_int()?.is_odd())
    }

    fn try_cmp(&self, other: &Number) -> Result<Option<Ordering>, NumberError> {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => Ok(real_cmp(a, b)),
            _ => Err(NumberError::TypeError {
                expected: "real number",
                found: NumberKind::Complex,
            }),
        }
    }

    pub fn lt(&self, other: &Number) -> Result<bool, NumberError> {
        Ok(self.try_cmp(other)? == Some(Ordering::Less))
    }

    pub fn le(&self, other: &Number) -> Result<bool, NumberError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    pub fn gt(&self, other: &Number) -> Result<bool, NumberError> {
        Ok(self.try_cmp(other)? == Some(Ordering::Greater))
    }

    pub fn ge(&self, other: &Number) -> Result<bool, NumberError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    /// Numeric equality across every kind; never signals.
    pub fn num_eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => real_eq(a, b),
            (Number::Complex(a), Number::Complex(b)) => {
                complex::eq_parts((&a.re, &a.im), (&b.re, &b.im))
            }
            // a canonical complex keeps a nonzero imaginary part
            _ => false,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Real(r) => real_is_zero(r),
            Number::Complex(_) => false,
        }
    }

    pub fn is_positive(&self) -> Result<bool, NumberError> {
        match self {
            Number::Real(r) => Ok(real_is_positive(r)),
            Number::Complex(_) => Err(NumberError::TypeError {
                expected: "real number",
                found: NumberKind::Complex,
            }),
        }
    }

    pub fn is_negative(&self) -> Result<bool, NumberError> {
        match self {
            Number::Real(r) => Ok(real_is_negative(r)),
            Number::Complex(_) => Err(NumberError::TypeError {
                expected: "real number",
                found: NumberKind::Complex,
            }),
        }
    }

    pub fn incr(&self) -> Number {
        if let Number::Real(Real::Int(Int::Fixnum(a))) = self {
            if let Some(res) = a.checked_add(1) {
                return Number::from(res);
            }
        }
        self.add(&Number::from(1))
    }

    pub fn decr(&self) -> Number {
        if let Number::Real(Real::Int(Int::Fixnum(a))) = self {
            if let Some(res) = a.checked_sub(1) {
                return Number::from(res);
            }
        }
        self.sub(&Number::from(1))
    }

    /// Raise to an integer power. A negative exponent goes through the
    /// reciprocal, so an exact zero base signals `DivisionByZero`.
    pub fn pow(&self, exp: i32) -> Result<Number, NumberError> {
        if let Number::Real(Real::Float(x)) = self {
            return Ok(Number::from(x.powi(exp)));
        }
        let raised = self.pow_unsigned(exp.unsigned_abs());
        if exp < 0 {
            Number::from(1).div(&raised)
        } else {
            Ok(raised)
        }
    }

    fn pow_unsigned(&self, exp: u32) -> Number {
        match self {
            Number::Real(Real::Int(n)) => n.pow(exp).into(),
            Number::Real(Real::Ratio(r)) => Number::Real(r.pow(exp)),
            Number::Real(Real::Float(_)) => {
                unreachable!("float base peeled off in pow")
            }
            Number::Complex(z) => complex::pow(z, exp),
        }
    }

    /// The exact counterpart: floats become integers or ratios, complex
    /// components convert independently. Non-finite floats refuse.
    pub fn exact(&self) -> Result<Number, NumberError> {
        match self {
            Number::Real(Real::Float(x)) => {
                Ok(Number::Real(float::to_exact(*x)?))
            }
            Number::Real(_) => Ok(self.clone()),
            Number::Complex(z) => {
                let re = real_to_exact(&z.re)?;
                let im = real_to_exact(&z.im)?;
                Ok(Complex::make(re, im))
            }
        }
    }

    pub fn inexact(&self) -> Number {
        match self {
            Number::Real(r) => Number::Real(Real::Float(real_to_f64(r))),
            Number::Complex(z) => Complex::make(
                Real::Float(real_to_f64(&z.re)),
                Real::Float(real_to_f64(&z.im)),
            ),
        }
    }

    /// The value as a double; complex values refuse.
    pub fn to_f64(&self) -> Result<f64, NumberError> {
        match self {
            Number::Real(r) => Ok(real_to_f64(r)),
            Number::Complex(_) => Err(NumberError::TypeError {
                expected: "real number",
                found: NumberKind::Complex,
            }),
        }
    }
}

fn real_to_exact(r: &Real) -> Result<Real, NumberError> {
    match r {
        Real::Float(x) => float::to_exact(*x),
        _ => Ok(r.clone()),
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Real) -> bool {
        real_eq(self, other)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.num_eq(other)
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        Number::add(self, rhs)
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        Number::sub(self, rhs)
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        Number::mul(self, rhs)
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number::neg(self)
    }
}
