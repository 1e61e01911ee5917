//! 크기 접두어(SI/bit) 붙이기와 역변환.

pub mod parse;
pub mod scale;

pub use parse::MagnitudeParser;
pub use scale::MagnitudeScaler;
