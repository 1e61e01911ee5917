//! 1에 대한 비율(0.02 → 2%, 0.007 → 7‰)을 읽기 쉽게 만든다.

use crate::format::NumberFormatter;

struct PartUnit {
    divider: f64,
    unit: &'static str,
}

const PART_UNITS: [PartUnit; 5] = [
    PartUnit { divider: 100.0, unit: "%" },
    PartUnit { divider: 1_000.0, unit: "‰" },
    PartUnit { divider: 10_000.0, unit: "‱" },
    PartUnit { divider: 100_000.0, unit: "pcm" },
    // 백만분율. 딱 맞지는 않지만 더 작은 단위가 없다.
    PartUnit { divider: 1_000_000.0, unit: "ppm" },
];

/// `allowed_zeroes`: 더 작은 단위로 넘어가기 전에 허용할 소수부 앞자리 0의 개수.
pub fn humanize_parts(value: f64, allowed_zeroes: u32, formatter: &dyn NumberFormatter) -> String {
    let boost = 10f64.powi(allowed_zeroes as i32);
    let part = PART_UNITS
        .iter()
        .find(|p| value * p.divider * boost > 1.0)
        .unwrap_or(&PART_UNITS[PART_UNITS.len() - 1]);

    let digits = if allowed_zeroes > 0 {
        allowed_zeroes as usize + 1
    } else {
        0
    };
    format!("{}{}", formatter.format_decimal(value * part.divider, digits), part.unit)
}
