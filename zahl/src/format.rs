use std::fmt;

use crate::{Complex, Int, Number, NumberError, Ratio, Real};

// Finite floats print through `{:?}`, which keeps a `.0` or exponent on
// integral values and round-trips through the reader. The non-finite
// values use the `+nan.0` / `+inf.0` / `-inf.0` spellings the float
// parser accepts.
fn write_f64(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "+nan.0")
    } else if x == f64::INFINITY {
        write!(f, "+inf.0")
    } else if x == f64::NEG_INFINITY {
        write!(f, "-inf.0")
    } else {
        write!(f, "{x:?}")
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int::Fixnum(a) => write!(f, "{a}"),
            Int::Bignum(a) => write!(f, "{a}"),
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Real::Int(n) => n.fmt(f),
            Real::Ratio(r) => r.fmt(f),
            Real::Float(x) => write_f64(f, *x),
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // an exact zero real part drops out; a float 0.0 stays visible
        let bare = matches!(&self.re, Real::Int(n) if n.is_zero());
        if !bare {
            write!(f, "{}", self.re)?;
        }
        write_imag(f, &self.im, !bare)
    }
}

fn write_imag(
    f: &mut fmt::Formatter<'_>,
    im: &Real,
    joint: bool,
) -> fmt::Result {
    if let Real::Int(Int::Fixnum(1)) = im {
        return if joint { write!(f, "+i") } else { write!(f, "i") };
    }
    if let Real::Int(Int::Fixnum(-1)) = im {
        return write!(f, "-i");
    }
    let text = im.to_string();
    if joint && !text.starts_with(['-', '+']) {
        write!(f, "+{text}i")
    } else {
        write!(f, "{text}i")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(r) => r.fmt(f),
            Number::Complex(z) => z.fmt(f),
        }
    }
}

impl Number {
    /// Render an integer in the given radix (2 through 36), lowercase
    /// digits with a leading `-` when negative.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, NumberError> {
        self.require_int()?.to_str_radix(radix)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Number, NumberError, NumberKind};

    fn ratio(n: i64, d: i64) -> Number {
        Number::ratio(n.into(), d.into()).unwrap()
    }

    fn gauss(re: i64, im: i64) -> Number {
        Number::complex(re.into(), im.into()).unwrap()
    }

    #[test]
    fn integers_print_plainly() {
        assert_eq!(Number::from(42).to_string(), "42");
        assert_eq!(Number::from(-7).to_string(), "-7");
        let wide = Number::from_str_radix("123456789012345678901234567890", 10)
            .unwrap();
        assert_eq!(wide.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn ratios_print_with_a_slash() {
        assert_eq!(ratio(7, 2).to_string(), "7/2");
        assert_eq!(ratio(-1, 2).to_string(), "-1/2");
        assert_eq!(ratio(3, -6).to_string(), "-1/2");
    }

    #[test]
    fn floats_always_look_like_floats() {
        assert_eq!(Number::from(1.0).to_string(), "1.0");
        assert_eq!(Number::from(-2.5).to_string(), "-2.5");
        assert_eq!(Number::from(0.1).to_string(), "0.1");
        assert_eq!(Number::from(1e300).to_string(), "1e300");
        assert_eq!(Number::from(-0.0).to_string(), "-0.0");
        assert_eq!(Number::from(f64::INFINITY).to_string(), "+inf.0");
        assert_eq!(Number::from(f64::NEG_INFINITY).to_string(), "-inf.0");
        assert_eq!(Number::from(f64::NAN).to_string(), "+nan.0");
    }

    #[test]
    fn float_text_round_trips() {
        for x in [0.1, -2.75, 1.0, 1e300, f64::INFINITY, f64::NEG_INFINITY] {
            let text = Number::from(x).to_string();
            let back = Number::float_from_str(&text).unwrap();
            assert_eq!(back.as_f64(), Some(x));
        }
    }

    #[test]
    fn complex_values_print_in_rectangular_form() {
        assert_eq!(gauss(3, 2).to_string(), "3+2i");
        assert_eq!(gauss(3, -2).to_string(), "3-2i");
        assert_eq!(gauss(3, 1).to_string(), "3+i");
        assert_eq!(gauss(3, -1).to_string(), "3-i");
        assert_eq!(gauss(0, 2).to_string(), "2i");
        assert_eq!(gauss(0, -2).to_string(), "-2i");
        assert_eq!(gauss(0, 1).to_string(), "i");
        assert_eq!(gauss(0, -1).to_string(), "-i");

        let halves = Number::complex(ratio(1, 2), ratio(-3, 2)).unwrap();
        assert_eq!(halves.to_string(), "1/2-3/2i");

        let floats =
            Number::complex(Number::from(1.5), Number::from(2.5)).unwrap();
        assert_eq!(floats.to_string(), "1.5+2.5i");
        let nan_im =
            Number::complex(Number::from(1.0), Number::from(f64::NAN)).unwrap();
        assert_eq!(nan_im.to_string(), "1.0+nan.0i");
    }

    #[test]
    fn radix_text_needs_an_integer() {
        assert_eq!(Number::from(255).to_str_radix(16).unwrap(), "ff");
        assert_eq!(Number::from(-255).to_str_radix(16).unwrap(), "-ff");
        assert_eq!(Number::from(5).to_str_radix(2).unwrap(), "101");
        assert_eq!(
            ratio(1, 2).to_str_radix(16).unwrap_err(),
            NumberError::TypeError {
                expected: "integer",
                found: NumberKind::Ratio,
            }
        );
    }
}
