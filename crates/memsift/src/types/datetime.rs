use crate::types::Date;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    sync::OnceLock,
};
use time::{PrimitiveDateTime, format_description::FormatItem};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

const MILLIS_PER_DAY: i64 = 86_400_000;

///
/// DateTime
///
/// Civil timestamp stored as whole milliseconds since the Unix epoch.
/// Millisecond precision is the contract: day-end bounds land exactly on
/// `23:59:59.999`.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct DateTime(i64);

impl DateTime {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The `00:00:00.000` instant of the given date.
    #[must_use]
    pub const fn day_start(date: Date) -> Self {
        Self(date.get() as i64 * MILLIS_PER_DAY)
    }

    /// The `23:59:59.999` instant of the given date.
    #[must_use]
    pub const fn day_end(date: Date) -> Self {
        Self(date.get() as i64 * MILLIS_PER_DAY + (MILLIS_PER_DAY - 1))
    }

    /// Parse a civil timestamp.
    ///
    /// Accepts `YYYY-MM-DD HH:MM:SS`, the `T`-separated variant, and an
    /// optional fractional-second suffix (truncated to milliseconds).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (main, frac) = match s.split_once('.') {
            Some((main, frac)) => (main, Some(frac)),
            None => (s, None),
        };

        let main = main.replacen('T', " ", 1);
        let format = FORMAT.get_or_init(|| {
            time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
                .unwrap()
        });
        let datetime = PrimitiveDateTime::parse(&main, format).ok()?;

        let date = Date::new_checked(
            datetime.year(),
            datetime.month().into(),
            datetime.day(),
        )?;
        let second_of_day = i64::from(datetime.hour()) * 3_600
            + i64::from(datetime.minute()) * 60
            + i64::from(datetime.second());

        let millis =
            i64::from(date.get()) * MILLIS_PER_DAY + second_of_day * 1_000 + parse_frac(frac)?;

        Some(Self(millis))
    }

    const fn split(self) -> (i64, i64) {
        (self.0.div_euclid(MILLIS_PER_DAY), self.0.rem_euclid(MILLIS_PER_DAY))
    }
}

// Fractional seconds: up to three digits are milliseconds, the rest truncate.
fn parse_frac(frac: Option<&str>) -> Option<i64> {
    let Some(frac) = frac else {
        return Some(0);
    };
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut millis = 0i64;
    for digit in frac.bytes().take(3) {
        millis = millis * 10 + i64::from(digit - b'0');
    }
    for _ in frac.len()..3 {
        millis *= 10;
    }

    Some(millis)
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTime({self})")
    }
}

impl Display for DateTime {
    #[expect(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (days, ms_of_day) = self.split();
        let date = Date::from_days(days as i32);
        let seconds = ms_of_day / 1_000;
        write!(
            f,
            "{date} {:02}:{:02}:{:02}.{:03}",
            seconds / 3_600,
            seconds % 3_600 / 60,
            seconds % 60,
            ms_of_day % 1_000
        )
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}")))
    }
}

///
/// TESTS
///
