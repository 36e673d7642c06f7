use std::fmt;

/// A parsed store type: a lowercase base name and its size arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreType {
    pub base: String,
    pub size: Option<StoreSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSize {
    /// `(max)`
    Max,

    /// `(n)`
    Length(u32),

    /// `(p, s)`
    PrecisionScale(u32, u32),
}

/// Temporal types whose default precision is 7.
const TEMPORAL: &[&str] = &["datetime2", "datetimeoffset", "time"];

impl StoreType {
    /// Parses a store type such as `nvarchar(200)`, `decimal(14, 3)` or
    /// `varbinary(MAX)`.
    ///
    /// Parsing never fails: arguments that cannot be read are kept in the
    /// base name so the type is reported as unknown.
    pub fn parse(input: &str) -> StoreType {
        let input = input.trim();

        let (base, size) = match input.split_once('(') {
            Some((base, rest)) if rest.trim_end().ends_with(')') => {
                let args = rest.trim_end().trim_end_matches(')');
                match parse_size(args) {
                    Some(size) => (base.trim(), Some(size)),
                    None => (input, None),
                }
            }
            _ => (input, None),
        };

        let mut base = base.split_whitespace().collect::<Vec<_>>().join(" ");
        base.make_ascii_lowercase();

        if base == "timestamp" {
            base = "rowversion".to_string();
        }

        let size = match size {
            Some(StoreSize::Length(7)) if TEMPORAL.contains(&base.as_str()) => None,
            size => size,
        };

        StoreType { base, size }
    }

    pub fn length(&self) -> Option<u32> {
        match self.size {
            Some(StoreSize::Length(n)) => Some(n),
            _ => None,
        }
    }

    pub fn is_max(&self) -> bool {
        self.size == Some(StoreSize::Max)
    }
}

fn parse_size(args: &str) -> Option<StoreSize> {
    let args = args.trim();

    if args.eq_ignore_ascii_case("max") {
        return Some(StoreSize::Max);
    }

    match args.split_once(',') {
        Some((p, s)) => Some(StoreSize::PrecisionScale(
            p.trim().parse().ok()?,
            s.trim().parse().ok()?,
        )),
        None => Some(StoreSize::Length(args.parse().ok()?)),
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;

        match self.size {
            None => Ok(()),
            Some(StoreSize::Max) => f.write_str("(max)"),
            Some(StoreSize::Length(n)) => write!(f, "({n})"),
            Some(StoreSize::PrecisionScale(p, s)) => write!(f, "({p},{s})"),
        }
    }
}
