//! 폴란드어 데이터. 20을 넘는 개수는 끝자리로 어형을 고른다.

use std::collections::BTreeMap;

use crate::units::{
    TimeTable, TimeUnitRange, DAY, HOUR, MINUTE, MONTH, SECOND, UNBOUNDED, WEEK, YEAR,
};

pub fn time_table() -> TimeTable {
    TimeTable {
        ranges: vec![
            TimeUnitRange::new(MINUTE, SECOND, "sekundę")
                .only_last_digit_after(20)
                .declension(2, "%d sekund")
                .declension(5, "%d sekundy")
                .declension(UNBOUNDED, "%d sekund"),
            TimeUnitRange::new(HOUR, MINUTE, "minutę")
                .only_last_digit_after(20)
                .declension(2, "%d minut")
                .declension(5, "%d minuty")
                .declension(UNBOUNDED, "%d minut"),
            TimeUnitRange::new(DAY, HOUR, "godzinę")
                .only_last_digit_after(20)
                .declension(2, "%d godzin")
                .declension(5, "%d godziny")
                .declension(UNBOUNDED, "%d godzin"),
            TimeUnitRange::new(WEEK, DAY, "1 dzień")
                .only_last_digit_after(20)
                .declension(UNBOUNDED, "%d dni"),
            TimeUnitRange::new(MONTH, WEEK, "tydzień")
                .skip_when_precise()
                .only_last_digit_after(20)
                .declension(2, "%d tygodni")
                .declension(5, "%d tygodnie")
                .declension(UNBOUNDED, "%d tygodni"),
            TimeUnitRange::new(YEAR, MONTH, "miesiąc")
                .only_last_digit_after(20)
                .declension(2, "%d miesięcy")
                .declension(5, "%d miesiące")
                .declension(UNBOUNDED, "%d miesięcy"),
            TimeUnitRange::new(UNBOUNDED, YEAR, "rok")
                .only_last_digit_after(20)
                .declension(2, "%d lat")
                .declension(5, "%d lata")
                .declension(UNBOUNDED, "%d lat"),
        ],
        future: "za %s".into(),
        past: "%s temu".into(),
        now: "teraz".into(),
        remainder_sep: "i".into(),
        units: BTreeMap::from([
            ("sekund".to_string(), SECOND),
            ("minut".to_string(), MINUTE),
            ("godzin".to_string(), HOUR),
            ("dzie".to_string(), DAY),
            ("dni".to_string(), DAY),
            ("ty".to_string(), WEEK),
            ("miesi".to_string(), MONTH),
            ("rok".to_string(), YEAR),
            ("lat".to_string(), YEAR),
        ]),
    }
}

pub const PREFIX_NAMES: &[(&str, &str)] = &[
    ("Y", "jotta"),
    ("Z", "zetta"),
    ("E", "eksa"),
    ("P", "peta"),
    ("T", "tera"),
    ("G", "giga"),
    ("M", "mega"),
    ("k", "kilo"),
    ("h", "hekto"),
    ("da", "deka"),
    ("d", "decy"),
    ("c", "centy"),
    ("m", "mili"),
    ("µ", "mikro"),
    ("n", "nano"),
    ("p", "piko"),
    ("f", "femto"),
    ("a", "atto"),
    ("z", "zepto"),
    ("y", "jokto"),
    ("Yi", "yobi"),
    ("Zi", "zebi"),
    ("Ei", "exbi"),
    ("Pi", "pebi"),
    ("Ti", "tebi"),
    ("Gi", "gibi"),
    ("Mi", "mebi"),
    ("Ki", "kibi"),
];
