//! A Rust library for rescaling recipe ingredient lists when the desired
//! serving count changes.
//!
//! Ingredient quantities authored for a base serving count are scaled
//! linearly, snapped to natural display steps (whole eggs, 5 g, 0.05 kg,
//! half spoons) by a pluggable [rounding classifier][`rounding::Classifier`],
//! and re-rendered as display text through [Jinja2][01]-style templates.
//! Rendering is pure; writing the strings back into the page is a separate
//! step, so the scaling pipeline can be tested without any display layer.
//!
//! ```
//! use portions::{Config, Ingredient, IngredientList, RecipePage, ServingsController};
//!
//! let list = IngredientList::from_attributes(
//!     Some("2"),
//!     vec![
//!         Ingredient::new(100.0, "g", "lardons"),
//!         Ingredient::new(3.0, "", "oignon"),
//!     ],
//! );
//! let mut page = RecipePage::new(vec![list]);
//!
//! let controller = ServingsController::from_input("4");
//! portions::rescale_page(&mut page, controller.servings(), &Config::default())?;
//!
//! assert_eq!("200 g de lardons", page.lists()[0].ingredients()[0].text());
//! assert_eq!("6 oignon", page.lists()[0].ingredients()[1].text());
//! # Ok::<(), portions::Error>(())
//! ```
//!
//! [01]: https://jinja.palletsprojects.com/en/stable/

pub mod config;
mod error;
mod filters;
mod model;
mod render;
pub mod rounding;
mod scale;
mod servings;

pub use config::Config;
pub use error::Error;
pub use model::{Ingredient, IngredientList, LabelMode, RecipePage, ServingsLabel};
pub use render::RenderedPage;
pub use servings::ServingsController;

/// Render a page with the default configuration.
///
/// This is equivalent to calling [`render_page_with_config`] with a default
/// [`Config`].
///
/// # Errors
///
/// Returns [`TemplateError`][`Error::TemplateError`] if rendering fails;
/// with the built-in templates this does not happen.
pub fn render_page(page: &RecipePage, servings: u32) -> Result<RenderedPage, Error> {
    render_page_with_config(page, servings, &Config::default())
}

/// Render a page to display strings with the provided [`Config`].
///
/// On success, returns a [`RenderedPage`] with one line per ingredient entry
/// and the servings label string, leaving `page` untouched. Pass the result
/// to [`RecipePage::apply`] to rewrite the page texts, or use
/// [`rescale_page`] to do both in one step.
///
/// # Parameters
///
/// * `page` is the element model built from the page's markup attributes.
/// * `servings` is the serving count to render for, normally owned by a
///   [`ServingsController`].
/// * `config` is a [`Config`][`config::Config`] with the rounding classifier
///   and any template overrides.
///
/// # Errors
///
/// Returns [`TemplateError`][`Error::TemplateError`] if a template override
/// has a syntax error or rendering fails.
pub fn render_page_with_config(
    page: &RecipePage,
    servings: u32,
    config: &Config,
) -> Result<RenderedPage, Error> {
    render::render_page(page, servings, config)
}

/// Render a page and write the strings back into it.
///
/// The controller's render trigger: composes [`render_page_with_config`] and
/// [`RecipePage::apply`].
///
/// # Errors
///
/// Returns [`TemplateError`][`Error::TemplateError`] if a template override
/// has a syntax error or rendering fails; the page is left untouched then.
pub fn rescale_page(page: &mut RecipePage, servings: u32, config: &Config) -> Result<(), Error> {
    let rendered = render::render_page(page, servings, config)?;
    page.apply(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiche_page() -> RecipePage {
        let list = IngredientList::from_attributes(
            Some("2"),
            vec![
                Ingredient::new(3.0, "", "oignon"),
                Ingredient::new(100.0, "g", "lardons"),
                Ingredient::new(0.5, "kg", "farine"),
                Ingredient::new(2.0, "gros", "œufs"),
                Ingredient::new(1.0, "c. à soupe", "huile d'olive"),
                Ingredient::new(10.0, "cl", "vin blanc"),
            ],
        );
        RecipePage::new(vec![list]).with_servings_label(ServingsLabel::from_attributes(None))
    }

    #[test]
    fn renders_a_full_page_at_several_servings() {
        let page = quiche_page();

        let rendered = render_page(&page, 4).unwrap();
        let lines = &rendered.lists()[0];
        assert_eq!("6 oignon", lines[0]);
        assert_eq!("200 g de lardons", lines[1]);
        assert_eq!("1 kg de farine", lines[2]);
        assert_eq!("4 œufs", lines[3]);
        assert_eq!("2 c. à soupe de huile d'olive", lines[4]);
        assert_eq!("20 cl de vin blanc", lines[5]);
        assert_eq!(Some("4 personnes"), rendered.servings_label());

        let rendered = render_page(&page, 1).unwrap();
        let lines = &rendered.lists()[0];
        assert_eq!("2 oignon", lines[0]);
        assert_eq!("50 g de lardons", lines[1]);
        assert_eq!("0.25 kg de farine", lines[2]);
        assert_eq!("1 œufs", lines[3]);
        assert_eq!("0.5 c. à soupe de huile d'olive", lines[4]);
        assert_eq!("5 cl de vin blanc", lines[5]);
        assert_eq!(Some("1 personne"), rendered.servings_label());
    }

    #[test]
    fn rendering_does_not_touch_the_page() {
        let page = quiche_page();
        let _ = render_page(&page, 4).unwrap();
        assert_eq!("", page.lists()[0].ingredients()[0].text());
    }

    #[test]
    fn rescale_writes_the_page_texts() {
        let mut page = quiche_page();
        rescale_page(&mut page, 3, &Config::default()).unwrap();

        assert_eq!("5 oignon", page.lists()[0].ingredients()[0].text());
        assert_eq!("150 g de lardons", page.lists()[0].ingredients()[1].text());
        assert_eq!("3 personnes", page.servings_label().unwrap().text());
    }

    #[test]
    fn controller_driven_flow() {
        let mut page = quiche_page();
        let config = Config::default();

        // Initial render from the input's current value
        let mut controller = ServingsController::from_input("0");
        rescale_page(&mut page, controller.servings(), &config).unwrap();
        assert_eq!("1 personne", page.servings_label().unwrap().text());

        // "+" twice, then re-render
        controller.increment();
        let servings = controller.increment();
        rescale_page(&mut page, servings, &config).unwrap();
        assert_eq!("3 personnes", page.servings_label().unwrap().text());
        assert_eq!("150 g de lardons", page.lists()[0].ingredients()[1].text());

        // "-" below the floor stays at 1
        controller.set_input("1");
        let servings = controller.decrement();
        rescale_page(&mut page, servings, &config).unwrap();
        assert_eq!("1 personne", page.servings_label().unwrap().text());
    }

    #[test]
    fn ingredient_template_override_keeps_the_rounding_pipeline() {
        let page = quiche_page();
        let config = Config::builder()
            .ingredient_template("{{ name }}: {{ raw | quantity(unit, name) }}")
            .build();

        let rendered = render_page_with_config(&page, 3, &config).unwrap();
        assert_eq!("lardons: 150", rendered.lists()[0][1]);
        assert_eq!("farine: 0.75", rendered.lists()[0][2]);
    }

    #[test]
    fn numeric_filter_is_available_to_template_overrides() {
        let page = quiche_page();
        let config = Config::builder()
            .label_template("{{ servings }} fois {{ '1/2' | numeric }}")
            .build();

        let rendered = render_page_with_config(&page, 2, &config).unwrap();
        assert_eq!(Some("2 fois 0.5"), rendered.servings_label());
    }

    #[test]
    fn broken_template_override_is_a_template_error() {
        let page = quiche_page();
        let config = Config::builder()
            .ingredient_template("{% if bare %}{{ name }}{% endif")
            .build();

        let err = render_page_with_config(&page, 2, &config).unwrap_err();
        assert!(matches!(err, Error::TemplateError(_)));
        assert!(err.format_with_source().contains("Hint"));
    }
}
