//! 시간 차이와 큰 수를 사람이 읽는 문장으로 바꾸고, 그 반대로 해석하는 로직을
//! 라이브러리로 분리하여 CLI 외의 프로그램에서도 쓰기 쉽게 한다.

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod humanizer;
pub mod i18n;
pub mod lang;
pub mod magnitude;
pub mod number;
pub mod parts;
pub mod search;
pub mod time;
pub mod ui_cli;
pub mod units;

pub use error::{HumanizeError, HumanizeResult};
pub use humanizer::Humanizer;
pub use lang::{Language, LanguageProvider, LanguageRegistry};
pub use magnitude::{MagnitudeParser, MagnitudeScaler};
pub use time::{DurationHumanizer, DurationParser};
pub use units::{MagnitudeTable, ScaleFamily, TimeTable};
