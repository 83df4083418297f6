//! Model for the servings label element.

/// Wording mode for the servings label, from its unit-mode attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelMode {
    /// Count people: `personne` / `personnes`.
    #[default]
    Persons,
    /// Count portions: `part` / `parts`.
    Parts,
}

impl LabelMode {
    /// Parse the unit-mode attribute. Anything other than `parts`, including
    /// a missing attribute, counts people.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("parts") => Self::Parts,
            _ => Self::Persons,
        }
    }

    /// Word used when servings == 1.
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Persons => "personne",
            Self::Parts => "part",
        }
    }

    /// Word used when servings > 1.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Persons => "personnes",
            Self::Parts => "parts",
        }
    }
}

/// The optional label element showing the current serving count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServingsLabel {
    mode: LabelMode,
    text: String,
}

impl ServingsLabel {
    /// Create a label with an explicit wording mode.
    #[must_use]
    pub fn new(mode: LabelMode) -> Self {
        Self {
            mode,
            text: String::new(),
        }
    }

    /// Build a label from its unit-mode attribute.
    #[must_use]
    pub fn from_attributes(unit_mode: Option<&str>) -> Self {
        Self::new(LabelMode::from_attribute(unit_mode))
    }

    /// The label's wording mode.
    #[must_use]
    pub fn mode(&self) -> LabelMode {
        self.mode
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
    use test_case::test_case;

    #[test_case(Some("parts"), LabelMode::Parts; "parts mode")]
    #[test_case(Some("personnes"), LabelMode::Persons; "explicit persons mode")]
    #[test_case(Some("anything"), LabelMode::Persons; "unknown mode counts people")]
    #[test_case(None, LabelMode::Persons; "missing attribute counts people")]
    fn mode_attribute(attribute: Option<&str>, expected: LabelMode) {
        assert_eq!(expected, ServingsLabel::from_attributes(attribute).mode());
    }

    #[test]
    fn wording() {
        assert_eq!("part", LabelMode::Parts.singular());
        assert_eq!("parts", LabelMode::Parts.plural());
        assert_eq!("personne", LabelMode::Persons.singular());
        assert_eq!("personnes", LabelMode::Persons.plural());
    }
}
