use super::Rounding;
use crate::error::Error;
use serde::Deserialize;
use std::path::Path;

/// Names of ingredients counted in whole items.
const DISCRETE_KEYWORDS: [&str; 10] = [
    "œuf", "oeuf", "oignon", "carotte", "tomate", "pain", "tranche", "bouquet", "feuille", "gousse",
];

/// Accepted tablespoon and teaspoon spellings.
const SPOON_MARKERS: [&str; 4] = ["c. à soupe", "c. a soupe", "c. à café", "c. a cafe"];

/// What a [`Rule`] matches an ingredient on.
///
/// All matching is case-insensitive; the unit is trimmed before matching.
/// Keyword matching is plain substring search, so accent variants must be
/// listed explicitly (the default rules carry both `œuf` and `oeuf`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    /// The ingredient name contains any of these keywords.
    NameContains(Vec<String>),
    /// The unit equals this string exactly.
    UnitIs(String),
    /// The unit contains any of these markers.
    UnitContains(Vec<String>),
}

impl Matcher {
    /// `unit` and `name` must already be trimmed and lowercased.
    fn matches(&self, unit: &str, name: &str) -> bool {
        match self {
            Self::NameContains(keywords) => {
                keywords.iter().any(|k| name.contains(&k.to_lowercase()))
            }
            Self::UnitIs(expected) => unit == expected.to_lowercase(),
            Self::UnitContains(markers) => {
                markers.iter().any(|m| unit.contains(&m.to_lowercase()))
            }
        }
    }
}

/// One classification rule: a matcher and the policy it selects.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Rule {
    /// What the rule matches on.
    #[serde(rename = "match", with = "serde_yaml::with::singleton_map")]
    pub matcher: Matcher,
    /// Policy applied when the rule matches.
    pub round: Rounding,
}

/// Maps an ingredient's unit and name to a rounding policy.
///
/// Rules are evaluated in order and the first match wins; ingredients no rule
/// matches take the fallback policy. The default classifier reproduces the
/// built-in behavior: whole items for discrete ingredients (eggs, onions,
/// cloves, …), 5-unit steps for `g` and `cl`, 0.05 steps for `kg`, half steps
/// for spoons, and two decimals otherwise.
///
/// Rule sets can also be loaded from YAML:
///
/// ```yaml
/// rules:
///   - match:
///       name_contains: [œuf, oeuf]
///     round: { step: 1, min: 1 }
///   - match:
///       unit_is: g
///     round: { step: 5, min: 5 }
/// fallback: { decimals: 2 }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Classifier {
    rules: Vec<Rule>,
    fallback: Rounding,
}

impl Default for Classifier {
    fn default() -> Self {
        let discrete = DISCRETE_KEYWORDS.iter().map(ToString::to_string).collect();
        let spoons = SPOON_MARKERS.iter().map(ToString::to_string).collect();
        Self {
            rules: vec![
                Rule {
                    matcher: Matcher::NameContains(discrete),
                    round: Rounding::Step { step: 1.0, min: 1.0 },
                },
                Rule {
                    matcher: Matcher::UnitIs("cl".to_string()),
                    round: Rounding::Step { step: 5.0, min: 5.0 },
                },
                Rule {
                    matcher: Matcher::UnitIs("g".to_string()),
                    round: Rounding::Step { step: 5.0, min: 5.0 },
                },
                Rule {
                    matcher: Matcher::UnitIs("kg".to_string()),
                    round: Rounding::Step {
                        step: 0.05,
                        min: 0.05,
                    },
                },
                Rule {
                    matcher: Matcher::UnitContains(spoons),
                    round: Rounding::Step { step: 0.5, min: 0.5 },
                },
            ],
            fallback: Rounding::Decimals { decimals: 2 },
        }
    }
}

impl Classifier {
    /// Create a classifier from an explicit rule list and fallback policy.
    #[must_use]
    pub fn new(rules: Vec<Rule>, fallback: Rounding) -> Self {
        Self { rules, fallback }
    }

    /// Select the rounding policy for an ingredient.
    #[must_use]
    pub fn classify(&self, unit: &str, name: &str) -> Rounding {
        let unit = unit.trim().to_lowercase();
        let name = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(&unit, &name))
            .map_or(self.fallback, |rule| rule.round)
    }

    /// Classify and round a raw scaled quantity in one step.
    #[must_use]
    pub fn round(&self, quantity: f64, unit: &str, name: &str) -> f64 {
        self.classify(unit, name).apply(quantity)
    }

    /// Load a rule set from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`][`Error::RulesError`] if the YAML does not
    /// describe a rule list and fallback policy.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a rule set from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`][`Error::IoError`] if the file cannot be read, and
    /// [`RulesError`][`Error::RulesError`] if its contents do not describe a
    /// rule list and fallback policy.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }
}
