//! 영어 데이터.

use std::collections::BTreeMap;

use crate::units::{
    TimeTable, TimeUnitRange, DAY, HOUR, MINUTE, MONTH, SECOND, UNBOUNDED, WEEK,
    YEAR,
};

pub fn time_table() -> TimeTable {
    TimeTable {
        ranges: vec![
            TimeUnitRange::new(MINUTE, SECOND, "1 second").declension(UNBOUNDED, "%d seconds"),
            TimeUnitRange::new(HOUR, MINUTE, "1 minute").declension(UNBOUNDED, "%d minutes"),
            TimeUnitRange::new(DAY, HOUR, "1 hour").declension(UNBOUNDED, "%d hours"),
            TimeUnitRange::new(WEEK, DAY, "1 day").declension(UNBOUNDED, "%d days"),
            TimeUnitRange::new(MONTH, WEEK, "1 week")
                .skip_when_precise()
                .declension(UNBOUNDED, "%d weeks"),
            TimeUnitRange::new(YEAR, MONTH, "1 month").declension(UNBOUNDED, "%d months"),
            TimeUnitRange::new(UNBOUNDED, YEAR, "1 year").declension(UNBOUNDED, "%d years"),
        ],
        future: "in %s".into(),
        past: "%s ago".into(),
        now: "now".into(),
        remainder_sep: "and".into(),
        units: BTreeMap::from([
            ("second".to_string(), SECOND),
            ("minute".to_string(), MINUTE),
            ("hour".to_string(), HOUR),
            ("day".to_string(), DAY),
            ("week".to_string(), WEEK),
            ("month".to_string(), MONTH),
            ("year".to_string(), YEAR),
        ]),
    }
}

pub const PREFIX_NAMES: &[(&str, &str)] = &[
    ("Y", "yotta"),
    ("Z", "zetta"),
    ("E", "exa"),
    ("P", "peta"),
    ("T", "tera"),
    ("G", "giga"),
    ("M", "mega"),
    ("k", "kilo"),
    ("h", "hecto"),
    ("da", "deca"),
    ("d", "deci"),
    ("c", "centi"),
    ("m", "milli"),
    ("µ", "micro"),
    ("n", "nano"),
    ("p", "pico"),
    ("f", "femto"),
    ("a", "atto"),
    ("z", "zepto"),
    ("y", "yocto"),
    ("Yi", "yobi"),
    ("Zi", "zebi"),
    ("Ei", "exbi"),
    ("Pi", "pebi"),
    ("Ti", "tebi"),
    ("Gi", "gibi"),
    ("Mi", "mebi"),
    ("Ki", "kibi"),
];
