/// Cell contents treated as missing when parsing text input.
pub const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "-"];

/// A single untyped observation as it comes out of the data-loading layer.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum RawValue {
    /// An empty or explicitly missing cell.
    Missing,
    /// A value that is already numeric.
    Number(f64),
    /// Free text. May still be coercible to a number.
    Text(String),
}

impl RawValue {
    /// Parses a text cell.
    ///
    /// Surrounding whitespace is ignored. Empty cells, the markers in
    /// [`MISSING_MARKERS`] and anything that parses as NaN become
    /// [`RawValue::Missing`]. Everything else stays text, so `"007"` keeps
    /// its spelling as a category label and is only read as a number when a
    /// numeric sample is built.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varstat_stats::raw::RawValue;
    /// assert_eq!(RawValue::parse(" 42.5 "), RawValue::Text("42.5".to_owned()));
    /// assert_eq!(RawValue::parse(" 42.5 ").as_f64(), Some(42.5));
    /// assert_eq!(RawValue::parse("NA"), RawValue::Missing);
    /// assert_eq!(RawValue::parse("Single"), RawValue::Text("Single".to_owned()));
    /// ```
    #[must_use]
    pub fn parse(cell: &str) -> Self {
        let cell = cell.trim();
        if MISSING_MARKERS.contains(&cell) || cell.parse::<f64>().is_ok_and(f64::is_nan) {
            return Self::Missing;
        }
        Self::Text(cell.to_owned())
    }

    /// Returns `true` for missing cells and NaN numbers.
    ///
    /// Text is never absent; [`RawValue::parse`] already turns NaN-like cells
    /// into [`RawValue::Missing`].
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Number(value) => value.is_nan(),
            Self::Text(_) => false,
        }
    }

    /// Coerces the value to a number, if possible.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    #[expect(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T> From<Option<T>> for RawValue
where
    T: Into<RawValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// A named column of raw observations, e.g. one field of a CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawColumn {
    /// The label carried by the input itself, such as a header cell.
    pub name: Option<String>,
    /// Observations in input order.
    pub values: Vec<RawValue>,
}

impl RawColumn {
    #[must_use]
    pub fn new(name: Option<String>, values: Vec<RawValue>) -> Self {
        Self { name, values }
    }

    /// Builds a column by parsing every cell with [`RawValue::parse`].
    #[must_use]
    pub fn parse_cells<I, S>(name: Option<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = cells
            .into_iter()
            .map(|cell| RawValue::parse(cell.as_ref()))
            .collect();
        Self { name, values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of cells that are neither missing nor NaN.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|value| !value.is_absent()).count()
    }
}

impl FromIterator<RawValue> for RawColumn {
    fn from_iter<T: IntoIterator<Item = RawValue>>(iter: T) -> Self {
        Self {
            name: None,
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing_markers() {
        for marker in MISSING_MARKERS {
            assert_eq!(RawValue::parse(marker), RawValue::Missing, "{marker:?}");
        }
        assert_eq!(RawValue::parse("   "), RawValue::Missing);
    }

    #[test]
    fn test_parse_numeric_cells_keep_their_text() {
        assert_eq!(RawValue::parse("3").as_f64(), Some(3.0));
        assert_eq!(RawValue::parse("-1.5e2").as_f64(), Some(-150.0));
        assert_eq!(RawValue::parse("inf").as_f64(), Some(f64::INFINITY));
        assert_eq!(RawValue::parse(" 01234 "), RawValue::Text("01234".to_owned()));
        assert_eq!(RawValue::parse("1.50"), RawValue::Text("1.50".to_owned()));
    }

    #[test]
    fn test_parse_nan_spellings_are_missing() {
        assert_eq!(RawValue::parse("NAN"), RawValue::Missing);
        assert_eq!(RawValue::parse("+nan"), RawValue::Missing);
    }

    #[test]
    fn test_parse_text_is_trimmed() {
        assert_eq!(RawValue::parse("  Married "), RawValue::Text("Married".to_owned()));
    }

    #[test]
    fn test_as_f64_coerces_numeric_text() {
        assert_eq!(RawValue::from("12.25").as_f64(), Some(12.25));
        assert_eq!(RawValue::from("twelve").as_f64(), None);
        assert_eq!(RawValue::Missing.as_f64(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RawValue::from(None::<f64>), RawValue::Missing);
        assert_eq!(RawValue::from(Some(2.0)), RawValue::Number(2.0));
    }

    #[test]
    fn test_present_count_skips_missing_and_nan() {
        let column = RawColumn::from_iter([
            RawValue::Number(1.0),
            RawValue::Missing,
            RawValue::Number(f64::NAN),
            RawValue::from("x"),
        ]);
        assert_eq!(column.len(), 4);
        assert_eq!(column.present_count(), 2);
    }
}
