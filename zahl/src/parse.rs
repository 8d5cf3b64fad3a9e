use crate::{Complex, Int, Number, NumberError, NumberKind, Ratio, Real, float};

impl Number {
    /// Parse an integer literal in the given radix (2 through 36).
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Number, NumberError> {
        Ok(Int::from_str_radix(text, radix)?.into())
    }

    /// Parse a decimal float literal. `+inf.0`, `-inf.0` and `+nan.0`
    /// spell the non-finite values.
    pub fn float_from_str(text: &str) -> Result<Number, NumberError> {
        Ok(Number::from(float::from_str(text)?))
    }

    /// An exact ratio from two integers, reduced and demoted on the way
    /// in.
    pub fn ratio(numer: Number, denom: Number) -> Result<Number, NumberError> {
        let n = numer.require_int()?.clone();
        let d = denom.require_int()?.clone();
        Ok(Number::Real(Ratio::reduce(n, d)?))
    }

    /// A complex from real and imaginary parts. A zero imaginary part
    /// hands back the real part alone.
    pub fn complex(re: Number, im: Number) -> Result<Number, NumberError> {
        Ok(Complex::make(as_real(re)?, as_real(im)?))
    }
}

fn as_real(n: Number) -> Result<Real, NumberError> {
    match n {
        Number::Real(r) => Ok(r),
        Number::Complex(_) => Err(NumberError::TypeError {
            expected: "real number",
            found: NumberKind::Complex,
        }),
    }
}
