mod complex;
mod dispatch;
mod error;
mod float;
mod format;
mod int;
mod parse;
mod ratio;
mod value;

pub use complex::Complex;
pub use error::NumberError;
pub use int::Int;
pub use ratio::Ratio;
pub use value::{Number, NumberKind, Real};
