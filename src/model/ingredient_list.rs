//! Model for an ingredient list.
use super::Ingredient;

/// Base servings assumed when the attribute is missing or invalid.
pub(crate) const DEFAULT_BASE_SERVINGS: u32 = 2;

/// An ordered ingredient list whose quantities were authored for a shared
/// base serving count.
#[derive(Clone, Debug, PartialEq)]
pub struct IngredientList {
    base_servings: u32,
    ingredients: Vec<Ingredient>,
}

impl IngredientList {
    /// Create a list for a known base serving count. Zero takes the default
    /// of 2, like any other invalid base-servings value.
    #[must_use]
    pub fn new(base_servings: u32, ingredients: Vec<Ingredient>) -> Self {
        let base_servings = if base_servings == 0 {
            DEFAULT_BASE_SERVINGS
        } else {
            base_servings
        };
        Self {
            base_servings,
            ingredients,
        }
    }

    /// Build a list from the container's base-servings attribute.
    ///
    /// A missing, non-numeric, or zero attribute falls back to 2.
    #[must_use]
    pub fn from_attributes(base_servings: Option<&str>, ingredients: Vec<Ingredient>) -> Self {
        let base_servings = base_servings
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|&parsed| parsed > 0)
            .unwrap_or(DEFAULT_BASE_SERVINGS);
        Self {
            base_servings,
            ingredients,
        }
    }

    /// The serving count the quantities were authored for.
    #[must_use]
    pub fn base_servings(&self) -> u32 {
        self.base_servings
    }

    /// The entries, in document order.
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub(crate) fn ingredients_mut(&mut self) -> &mut [Ingredient] {
        &mut self.ingredients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("4"), 4; "valid attribute")]
    #[test_case(Some(" 4 "), 4; "attribute trimmed")]
    #[test_case(None, 2; "missing attribute defaults")]
    #[test_case(Some(""), 2; "empty attribute defaults")]
    #[test_case(Some("deux"), 2; "non-numeric attribute defaults")]
    #[test_case(Some("0"), 2; "zero defaults")]
    #[test_case(Some("4.5"), 2; "fractional base servings rejected")]
    #[test_case(Some("-3"), 2; "negative base servings rejected")]
    fn base_servings_attribute(attribute: Option<&str>, expected: u32) {
        let list = IngredientList::from_attributes(attribute, Vec::new());
        assert_eq!(expected, list.base_servings());
    }

    #[test]
    fn zero_base_servings_takes_the_default() {
        assert_eq!(2, IngredientList::new(0, Vec::new()).base_servings());
    }
}
