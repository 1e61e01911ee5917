//! 접두어/시간 단위 정의 모듈 모음.

pub mod prefix;
pub mod time;

pub use prefix::{load_magnitude_table, MagnitudeTable, PrefixDef, ScaleFamily};
pub use time::{
    Declension, TimeTable, TimeUnitRange, DAY, HOUR, MINUTE, MONTH, SECOND, UNBOUNDED, WEEK,
    YEAR,
};
