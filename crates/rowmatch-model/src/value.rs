//! Scalar cell values and their text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar value read from an input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Missing,
}

impl CellValue {
    /// Renders the value as text, verbatim for strings.
    ///
    /// Missing values render as the empty string and floats drop trailing
    /// zeros, so `12.0` renders as `12`.
    ///
    /// A missing cell never renders as a `nan` placeholder. Keys built from
    /// it therefore contain no `NAN` token that could match a literal "NaN"
    /// in the other file.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowmatch_model::CellValue;
    ///
    /// assert_eq!(CellValue::Float(1.50).render(), "1.5");
    /// assert_eq!(CellValue::Integer(-7).render(), "-7");
    /// assert_eq!(CellValue::Missing.render(), "");
    /// ```
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(v) => v.to_string(),
            Self::Float(v) => format_numeric(*v),
            Self::Boolean(b) => b.to_string(),
            Self::Missing => String::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Short type name used when listing columns.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use rowmatch_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    // Only fractional digits may be trimmed; "100" must stay "100".
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(CellValue::from("Lincoln Elementary").render(), "Lincoln Elementary");
        assert_eq!(CellValue::Integer(42).render(), "42");
        assert_eq!(CellValue::Float(12.0).render(), "12");
        assert_eq!(CellValue::Float(0.25).render(), "0.25");
        assert_eq!(CellValue::Boolean(true).render(), "true");
        assert_eq!(CellValue::Missing.render(), "");
    }

    #[test]
    fn test_missing_renders_empty_not_nan() {
        assert_eq!(CellValue::from(None::<String>), CellValue::Missing);
        assert!(CellValue::Missing.render().is_empty());
        assert_ne!(CellValue::Missing.render(), CellValue::from("NaN").render());
    }

    #[test]
    fn test_render_keeps_whitespace() {
        assert_eq!(CellValue::from("  padded ").render(), "  padded ");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::Missing);
        assert_eq!(CellValue::from(Some(3_i64)), CellValue::Integer(3));
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(2500.0), "2500");
        assert_eq!(format_numeric(3.125), "3.125");
        assert_eq!(format_numeric(-4.5), "-4.5");
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&CellValue::Integer(5)).unwrap();
        assert_eq!(json, r#"{"kind":"Integer","value":5}"#);
        let missing = serde_json::to_string(&CellValue::Missing).unwrap();
        assert_eq!(missing, r#"{"kind":"Missing"}"#);
    }
}
