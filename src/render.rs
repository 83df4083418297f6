//! Pure rendering of a page into display strings.

use crate::config::Config;
use crate::error::Error;
use crate::filters::{numeric_filter, quantity_filter};
use crate::model::{Ingredient, RecipePage};
use crate::scale;
use minijinja::{Environment, context};

/// Default phrasing for one ingredient line.
pub(crate) const INGREDIENT_TEMPLATE: &str = "{% if bare %}{{ raw | quantity(unit, name) }} {{ name }}{% else %}{{ raw | quantity(unit, name) }} {{ unit }} de {{ name }}{% endif %}";

/// Default phrasing for the servings label.
pub(crate) const LABEL_TEMPLATE: &str =
    "{{ servings }} {{ plural if servings > 1 else singular }}";

/// The computed display strings for a page.
///
/// Produced by [`render_page`][`crate::render_page`]; carries one line per
/// ingredient entry plus the servings label string. Writing them back into
/// the page is a separate step, [`RecipePage::apply`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPage {
    lists: Vec<Vec<String>>,
    servings_label: Option<String>,
}

impl RenderedPage {
    /// Rendered lines, one inner vector per ingredient list.
    #[must_use]
    pub fn lists(&self) -> &[Vec<String>] {
        &self.lists
    }

    /// Rendered servings label, when the page has one.
    #[must_use]
    pub fn servings_label(&self) -> Option<&str> {
        self.servings_label.as_deref()
    }
}

pub(crate) fn render_page(
    page: &RecipePage,
    servings: u32,
    config: &Config,
) -> Result<RenderedPage, Error> {
    let env = environment(config)?;

    let ingredient_template = env.get_template("ingredient")?;
    let mut lists = Vec::with_capacity(page.lists().len());
    for list in page.lists() {
        let ratio = scale::ratio(list.base_servings(), servings);
        let mut lines = Vec::with_capacity(list.ingredients().len());
        for ingredient in list.ingredients() {
            let raw = ingredient.quantity() * ratio;
            let line = ingredient_template.render(context! {
                raw,
                unit => ingredient.unit(),
                name => ingredient.name(),
                bare => bare(ingredient),
            })?;
            lines.push(line.trim().to_string());
        }
        lists.push(lines);
    }

    let servings_label = match page.servings_label() {
        Some(label) => Some(env.get_template("label")?.render(context! {
            servings,
            singular => label.mode().singular(),
            plural => label.mode().plural(),
        })?),
        None => None,
    };

    Ok(RenderedPage {
        lists,
        servings_label,
    })
}

/// Whether the line skips the unit and linking word: unit-less entries, and
/// egg names where "de œufs" would read wrong.
fn bare(ingredient: &Ingredient) -> bool {
    let name = ingredient.name().to_lowercase();
    ingredient.unit().is_empty() || name.starts_with("œuf") || name.starts_with("oeuf")
}

/// Build the template environment for the given configuration.
fn environment(config: &Config) -> Result<Environment<'_>, Error> {
    let mut env = Environment::new();
    env.add_template(
        "ingredient",
        config
            .ingredient_template
            .as_deref()
            .unwrap_or(INGREDIENT_TEMPLATE),
    )?;
    env.add_template(
        "label",
        config.label_template.as_deref().unwrap_or(LABEL_TEMPLATE),
    )?;

    let classifier = config.classifier.clone();
    env.add_filter("quantity", move |raw: f64, unit: String, name: String| {
        quantity_filter(&classifier, raw, &unit, &name)
    });
    env.add_filter("numeric", numeric_filter);
    Ok(env)
}
