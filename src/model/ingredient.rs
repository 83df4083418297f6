//! Model for a single ingredient entry.
use crate::filters::parse_numeric;

/// One ingredient entry: a base quantity, a unit, a name, and the text
/// currently displayed for it.
///
/// The quantity, unit, and name are read-only input sourced from markup
/// attributes; only the displayed text is ever rewritten.
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    quantity: f64,
    unit: String,
    name: String,
    text: String,
}

impl Ingredient {
    /// Create an entry from already-typed values. The unit may be empty.
    #[must_use]
    pub fn new(quantity: f64, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            name: name.into(),
            text: String::new(),
        }
    }

    /// Build an entry from its markup attribute values.
    ///
    /// Returns `None` when the name is missing or the quantity attribute
    /// cannot be coerced to a number; such entries are skipped and keep
    /// whatever text they already display.
    #[must_use]
    pub fn from_attributes(
        quantity: Option<&str>,
        unit: Option<&str>,
        name: Option<&str>,
    ) -> Option<Self> {
        let name = name.map(str::trim).filter(|name| !name.is_empty())?;
        let quantity = parse_numeric(quantity?)?;
        Some(Self::new(quantity, unit.unwrap_or("").trim(), name))
    }

    /// Base quantity, as authored for the list's base servings.
    #[must_use]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Unit string; empty for unit-less ingredients.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Ingredient name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn builds_from_attributes() {
        let entry = Ingredient::from_attributes(Some("100"), Some(" g "), Some(" lardons ")).unwrap();
        assert_approx_eq!(f64, 100.0, entry.quantity());
        assert_eq!("g", entry.unit());
        assert_eq!("lardons", entry.name());
        assert_eq!("", entry.text());
    }

    #[test]
    fn missing_unit_defaults_to_empty() {
        let entry = Ingredient::from_attributes(Some("3"), None, Some("oignon")).unwrap();
        assert_eq!("", entry.unit());
    }

    #[test]
    fn fraction_quantities_coerce() {
        let entry = Ingredient::from_attributes(Some("1/2"), Some("kg"), Some("farine")).unwrap();
        assert_approx_eq!(f64, 0.5, entry.quantity());
    }

    #[test]
    fn missing_name_is_skipped() {
        assert!(Ingredient::from_attributes(Some("3"), None, None).is_none());
        assert!(Ingredient::from_attributes(Some("3"), None, Some("  ")).is_none());
    }

    #[test]
    fn uncoercible_quantity_is_skipped() {
        assert!(Ingredient::from_attributes(None, None, Some("oignon")).is_none());
        assert!(Ingredient::from_attributes(Some("une"), None, Some("oignon")).is_none());
    }
}
