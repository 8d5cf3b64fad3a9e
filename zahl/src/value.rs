use num_bigint::BigInt;

use crate::{Complex, Int, NumberError, Ratio};

/// A real number: one of the three non-complex rungs.
#[derive(Debug, Clone)]
pub enum Real {
    Int(Int),
    Ratio(Ratio),
    Float(f64),
}

/// Any tower value. Complex numbers sit behind a box so the enum stays
/// two words, and the type itself guarantees they never nest.
#[derive(Debug, Clone)]
pub enum Number {
    Real(Real),
    Complex(Box<Complex>),
}

/// Representation kind, in contagion rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumberKind {
    Int,
    Ratio,
    Float,
    Complex,
}

impl Real {
    pub(crate) fn kind(&self) -> NumberKind {
        match self {
            Real::Int(_) => NumberKind::Int,
            Real::Ratio(_) => NumberKind::Ratio,
            Real::Float(_) => NumberKind::Float,
        }
    }

    pub(crate) fn is_exact(&self) -> bool {
        match self {
            Real::Int(_) | Real::Ratio(_) => true,
            Real::Float(_) => false,
        }
    }
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Real(r) => r.kind(),
            Number::Complex(_) => NumberKind::Complex,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.kind() == NumberKind::Int
    }

    pub fn is_ratio(&self) -> bool {
        self.kind() == NumberKind::Ratio
    }

    pub fn is_float(&self) -> bool {
        self.kind() == NumberKind::Float
    }

    pub fn is_complex(&self) -> bool {
        self.kind() == NumberKind::Complex
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Number::Real(_))
    }

    pub fn is_exact(&self) -> bool {
        match self {
            Number::Real(r) => r.is_exact(),
            Number::Complex(z) => z.re.is_exact() && z.im.is_exact(),
        }
    }

    pub fn is_inexact(&self) -> bool {
        !self.is_exact()
    }

    /// Numerator of an exact rational; integers count as themselves.
    pub fn numerator(&self) -> Result<Number, NumberError> {
        match self {
            Number::Real(Real::Int(n)) => Ok(n.clone().into()),
            Number::Real(Real::Ratio(r)) => Ok(r.numer.clone().into()),
            _ => Err(NumberError::TypeError {
                expected: "exact rational",
                found: self.kind(),
            }),
        }
    }

    /// Denominator of an exact rational; integers have denominator one.
    pub fn denominator(&self) -> Result<Number, NumberError> {
        match self {
            Number::Real(Real::Int(_)) => Ok(Int::Fixnum(1).into()),
            Number::Real(Real::Ratio(r)) => Ok(r.denom.clone().into()),
            _ => Err(NumberError::TypeError {
                expected: "exact rational",
                found: self.kind(),
            }),
        }
    }

    pub fn real_part(&self) -> Number {
        match self {
            Number::Real(r) => Number::Real(r.clone()),
            Number::Complex(z) => Number::Real(z.re.clone()),
        }
    }

    /// Imaginary part; exact zero for exact reals, `0.0` for floats.
    pub fn imag_part(&self) -> Number {
        match self {
            Number::Real(Real::Float(_)) => Number::Real(Real::Float(0.0)),
            Number::Real(_) => Int::Fixnum(0).into(),
            Number::Complex(z) => Number::Real(z.im.clone()),
        }
    }

    /// The raw double of a float, `None` for every other kind.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Real(Real::Float(x)) => Some(*x),
            _ => None,
        }
    }

    pub(crate) fn require_int(&self) -> Result<&Int, NumberError> {
        match self {
            Number::Real(Real::Int(n)) => Ok(n),
            _ => Err(NumberError::TypeError {
                expected: "integer",
                found: self.kind(),
            }),
        }
    }
}

impl From<Int> for Number {
    fn from(n: Int) -> Number {
        Number::Real(Real::Int(n))
    }
}

impl From<Ratio> for Number {
    fn from(r: Ratio) -> Number {
        Number::Real(Real::Ratio(r))
    }
}

impl From<Real> for Number {
    fn from(r: Real) -> Number {
        Number::Real(r)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Number {
        Number::Real(Real::Int(Int::Fixnum(value)))
    }
}

impl From<BigInt> for Number {
    fn from(big: BigInt) -> Number {
        Number::Real(Real::Int(Int::from(big)))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Number {
        Number::Real(Real::Float(value))
    }
}
