use std::num::NonZeroU32;

use num_rational::BigRational;

use crate::number::exact_pow;

/// 접두어 계열. 같은 밑(10 또는 2)을 공유하는 접두어 묶음이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleFamily {
    /// SI 10진 접두어 (10^-24 ~ 10^24)
    Decimal,
    /// 2진(bit) 접두어 (2^10 ~ 2^80)
    Binary,
}

const DECIMAL_BASE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(base) => base,
    None => unreachable!(),
};

const BINARY_BASE: NonZeroU32 = match NonZeroU32::new(2) {
    Some(base) => base,
    None => unreachable!(),
};

/// 계열 정의 한 줄. 영어 긴 이름을 기본값으로 둔다.
struct PrefixSpec {
    power: i32,
    approx: f64,
    short: &'static str,
    long: &'static str,
}

const fn spec(power: i32, approx: f64, short: &'static str, long: &'static str) -> PrefixSpec {
    PrefixSpec {
        power,
        approx,
        short,
        long,
    }
}

const DECIMAL_SPECS: [PrefixSpec; 20] = [
    spec(24, 1e24, "Y", "yotta"),
    spec(21, 1e21, "Z", "zetta"),
    spec(18, 1e18, "E", "exa"),
    spec(15, 1e15, "P", "peta"),
    spec(12, 1e12, "T", "tera"),
    spec(9, 1e9, "G", "giga"),
    spec(6, 1e6, "M", "mega"),
    spec(3, 1e3, "k", "kilo"),
    spec(2, 1e2, "h", "hecto"),
    spec(1, 1e1, "da", "deca"),
    spec(-1, 1e-1, "d", "deci"),
    spec(-2, 1e-2, "c", "centi"),
    spec(-3, 1e-3, "m", "milli"),
    spec(-6, 1e-6, "µ", "micro"),
    spec(-9, 1e-9, "n", "nano"),
    spec(-12, 1e-12, "p", "pico"),
    spec(-15, 1e-15, "f", "femto"),
    spec(-18, 1e-18, "a", "atto"),
    spec(-21, 1e-21, "z", "zepto"),
    spec(-24, 1e-24, "y", "yocto"),
];

// 2^n 은 f64 로 정확히 표현되므로 approx 도 정확하다.
const BINARY_SPECS: [PrefixSpec; 8] = [
    spec(80, 1_208_925_819_614_629_174_706_176.0, "Yi", "yobi"),
    spec(70, 1_180_591_620_717_411_303_424.0, "Zi", "zebi"),
    spec(60, 1_152_921_504_606_846_976.0, "Ei", "exbi"),
    spec(50, 1_125_899_906_842_624.0, "Pi", "pebi"),
    spec(40, 1_099_511_627_776.0, "Ti", "tebi"),
    spec(30, 1_073_741_824.0, "Gi", "gibi"),
    spec(20, 1_048_576.0, "Mi", "mebi"),
    spec(10, 1_024.0, "Ki", "kibi"),
];

impl ScaleFamily {
    /// 계열의 밑.
    pub fn base(self) -> NonZeroU32 {
        match self {
            ScaleFamily::Decimal => DECIMAL_BASE,
            ScaleFamily::Binary => BINARY_BASE,
        }
    }

    fn specs(self) -> &'static [PrefixSpec] {
        match self {
            ScaleFamily::Decimal => &DECIMAL_SPECS,
            ScaleFamily::Binary => &BINARY_SPECS,
        }
    }
}

/// 접두어 하나의 정의.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixDef {
    /// 밑의 거듭제곱으로 정확히 계산한 배율. 파싱 결과 계산에만 쓴다.
    pub exact: BigRational,
    /// 크기 비교용 근사 배율.
    pub approx: f64,
    pub power: i32,
    pub short: &'static str,
    pub long: &'static str,
}

/// 한 계열의 접두어 표. 배율 기준 내림차순이다.
#[derive(Debug, Clone)]
pub struct MagnitudeTable {
    family: ScaleFamily,
    prefixes: Vec<PrefixDef>,
}

impl MagnitudeTable {
    /// 계열 정의와 언어별 긴 이름(`(short, long)` 목록)으로 표를 만든다.
    pub fn build(family: ScaleFamily, names: &[(&'static str, &'static str)]) -> Self {
        let base = family.base();
        let prefixes = family
            .specs()
            .iter()
            .map(|s| {
                let long = names
                    .iter()
                    .find(|(short, _)| *short == s.short)
                    .map_or(s.long, |(_, long)| *long);
                PrefixDef {
                    exact: exact_pow(base, s.power),
                    approx: s.approx,
                    power: s.power,
                    short: s.short,
                    long,
                }
            })
            .collect();
        Self { family, prefixes }
    }

    pub fn family(&self) -> ScaleFamily {
        self.family
    }

    pub fn prefixes(&self) -> &[PrefixDef] {
        &self.prefixes
    }

    /// 짧은 기호 또는 긴 이름이 일치하는 접두어를 찾는다.
    pub fn find_token(&self, token: &str) -> Option<&PrefixDef> {
        self.prefixes
            .iter()
            .find(|p| p.short == token || p.long == token)
    }
}

/// 영어 긴 이름을 쓰는 표를 만든다.
pub fn load_magnitude_table(family: ScaleFamily) -> MagnitudeTable {
    MagnitudeTable::build(family, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::ToPrimitive;

    #[test]
    fn tables_are_strictly_descending() {
        for family in [ScaleFamily::Decimal, ScaleFamily::Binary] {
            let table = load_magnitude_table(family);
            for pair in table.prefixes().windows(2) {
                assert!(pair[0].approx > pair[1].approx, "{family:?} {}", pair[1].short);
                assert!(pair[0].exact > pair[1].exact, "{family:?} {}", pair[1].short);
            }
        }
    }

    #[test]
    fn approx_agrees_with_exact() {
        for family in [ScaleFamily::Decimal, ScaleFamily::Binary] {
            for prefix in load_magnitude_table(family).prefixes() {
                let exact = prefix.exact.to_f64().unwrap();
                assert!(
                    ((exact - prefix.approx) / prefix.approx).abs() < 1e-15,
                    "{} {} vs {}",
                    prefix.short,
                    exact,
                    prefix.approx
                );
            }
        }
    }

    #[test]
    fn exact_multiplier_is_exact() {
        let table = load_magnitude_table(ScaleFamily::Decimal);
        let yotta = table.find_token("yotta").unwrap();
        let expected: BigInt = "1000000000000000000000000".parse().unwrap();
        assert_eq!(yotta.exact, BigRational::from_integer(expected));

        let yocto = table.find_token("y").unwrap();
        assert_eq!(yocto.exact.recip(), yotta.exact);
    }

    #[test]
    fn language_names_override_defaults() {
        let table = MagnitudeTable::build(ScaleFamily::Decimal, &[("Y", "jotta")]);
        assert_eq!(table.find_token("Y").unwrap().long, "jotta");
        assert_eq!(table.find_token("k").unwrap().long, "kilo");
        assert!(table.find_token("yotta").is_none());
    }
}
