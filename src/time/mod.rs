//! 시간 간격 표현과 역변환.

pub mod humanize;
pub mod parse;

pub use humanize::DurationHumanizer;
pub use parse::DurationParser;
