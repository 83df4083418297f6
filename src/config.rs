//! Configuration struct for page rendering.
use crate::rounding::Classifier;

/// Struct for render configuration.
///
/// At present, configuration contains the rounding [`Classifier`] and
/// optional template overrides for the ingredient line and servings label
/// phrasing. The built-in templates are used when no override is set.
///
/// Construct via [`ConfigBuilder`] or [`default()`][`Self::default`].
///
/// # Examples
///
/// Use [`Config::builder()`][`Config::builder`] to get a [`ConfigBuilder`]
/// and then chain calls to set the desired configuration. Call
/// [`build()`][`ConfigBuilder::build`] to get a `Config`.
///
/// ```
/// use portions::config::Config;
/// let config = Config::builder().label_template("{{ servings }}x").build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub(crate) classifier: Classifier,
    pub(crate) ingredient_template: Option<String>,
    pub(crate) label_template: Option<String>,
}

impl Config {
    /// Return a [`ConfigBuilder`] for building a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for building a [`Config`].
#[derive(Default)]
pub struct ConfigBuilder {
    classifier: Classifier,
    ingredient_template: Option<String>,
    label_template: Option<String>,
}

impl ConfigBuilder {
    /// Replace the default rounding classifier.
    pub fn classifier(&mut self, classifier: Classifier) -> &mut Self {
        self.classifier = classifier;
        self
    }

    /// Override the ingredient line template.
    ///
    /// The template context exposes `raw` (the unrounded scaled quantity),
    /// `unit`, `name`, and `bare`, plus the `quantity` and `numeric` filters.
    pub fn ingredient_template<S: Into<String>>(&mut self, template: S) -> &mut Self {
        self.ingredient_template = Some(template.into());
        self
    }

    /// Override the servings label template.
    ///
    /// The template context exposes `servings`, `singular`, and `plural`.
    pub fn label_template<S: Into<String>>(&mut self, template: S) -> &mut Self {
        self.label_template = Some(template.into());
        self
    }

    /// Return a new [`Config`] based on the builder's properties.
    pub fn build(&mut self) -> Config {
        Config {
            classifier: self.classifier.clone(),
            ingredient_template: self.ingredient_template.clone(),
            label_template: self.label_template.clone(),
        }
    }
}
