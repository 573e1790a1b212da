use std::fmt;

/// Region name used when a line has no second column.
pub const MISSING_REGION: &str = "undefined";

/// A population count, or `NaN` when the column was missing or not numeric.
///
/// The sentinel is carried through aggregation and ratio computation unchanged,
/// so a malformed row shows up as `NaN` in the report instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population(Option<i64>);

impl Population {
    pub const ZERO: Population = Population(Some(0));
    pub const NAN: Population = Population(None);

    pub fn new(value: i64) -> Self {
        Population(Some(value))
    }

    pub fn is_nan(self) -> bool {
        self.0.is_none()
    }

    pub fn as_f64(self) -> f64 {
        self.0.map_or(f64::NAN, |v| v as f64)
    }
}

impl From<Option<i64>> for Population {
    fn from(value: Option<i64>) -> Self {
        Population(value)
    }
}

impl Default for Population {
    fn default() -> Self {
        Population::ZERO
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("NaN"),
        }
    }
}

/// One parsed CSV line. Only columns 0, 1 and 3 are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub year: Option<i64>,
    pub region: &'a str,
    pub population: Population,
}

impl<'a> RawRecord<'a> {
    pub fn parse(line: &'a str) -> Self {
        let columns: Vec<&str> = line.split(',').collect();
        let column = |idx: usize| columns.get(idx).copied();

        RawRecord {
            year: column(0).and_then(parse_leading_int),
            region: column(1).unwrap_or(MISSING_REGION),
            population: column(3).and_then(parse_leading_int).into(),
        }
    }
}

/// Parses the integer prefix of `field`: leading whitespace (byte order mark
/// included), an optional sign, an optional `0x`/`0X` hex prefix, then digits
/// up to the first one outside the radix. `None` when no digits are found or
/// the value does not fit in an `i64`.
pub fn parse_leading_int(field: &str) -> Option<i64> {
    let trimmed = field.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = u64::from_str_radix(&rest[..digits_end], radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}
