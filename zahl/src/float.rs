use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::One;
use num_traits::float::FloatCore;

use crate::{Int, NumberError, Ratio, Real};

/// Coerce any real onto the float rung. Integers past 2^53 and ratios
/// round; values past the double range become infinities.
pub(crate) fn real_to_f64(real: &Real) -> f64 {
    match real {
        Real::Int(n) => n.to_f64(),
        Real::Ratio(r) => r.to_f64(),
        Real::Float(x) => *x,
    }
}

/// The no-loss direction: a finite double's precise binary value as an
/// `Int` or reduced `Ratio`. Mixed exact/float comparisons ride on this
/// so the exact side is never rounded.
pub(crate) fn to_exact(x: f64) -> Result<Real, NumberError> {
    if !x.is_finite() {
        trace!("no exact value for {x}");
        return Err(NumberError::NotFinite);
    }
    Ok(finite_to_exact(x))
}

pub(crate) fn finite_to_exact(x: f64) -> Real {
    debug_assert!(x.is_finite());
    if x == 0.0 {
        return Real::Int(Int::Fixnum(0));
    }
    if x.fract() == 0.0 && x.abs() < 9.0e18 {
        return Real::Int(Int::Fixnum(x as i64));
    }

    let (mantissa, exponent, sign) = x.integer_decode();
    let mut numer = BigInt::from(mantissa);
    if sign < 0 {
        numer = -numer;
    }
    if exponent >= 0 {
        Real::Int(Int::from(numer << (exponent as usize)))
    } else {
        let denom = BigInt::one() << ((-exponent) as usize);
        Ratio::reduce_nonzero(Int::from(numer), Int::from(denom))
    }
}

/// Decimal-text float constructor for the reader. Accepts plain decimal
/// and exponent forms plus the printed special spellings; everything
/// else is an `InvalidLiteral`.
pub(crate) fn from_str(text: &str) -> Result<f64, NumberError> {
    match text {
        "+inf.0" => return Ok(f64::INFINITY),
        "-inf.0" => return Ok(f64::NEG_INFINITY),
        "+nan.0" => return Ok(f64::NAN),
        _ => {}
    }
    if !valid_decimal(text) {
        debug!("rejected float literal {text:?}");
        return Err(NumberError::InvalidLiteral);
    }
    text.parse::<f64>().map_err(|_| NumberError::InvalidLiteral)
}

fn valid_decimal(text: &str) -> bool {
    let rest = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (rest, None),
    };

    let all_digits =
        |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => {
            (all_digits(int_part) && (frac_part.is_empty() || all_digits(frac_part)))
                || (int_part.is_empty() && all_digits(frac_part))
        }
        None => all_digits(mantissa),
    };

    let exponent_ok = match exponent {
        Some(e) => all_digits(e.strip_prefix(['+', '-']).unwrap_or(e)),
        None => true,
    };

    mantissa_ok && exponent_ok
}
