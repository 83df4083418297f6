//! Model for the recipe page as a whole.
use super::{IngredientList, ServingsLabel};
use crate::render::RenderedPage;

/// The page the renderer reads from and writes to: every ingredient list
/// plus an optional servings label.
///
/// Read-only input except for the displayed texts, which
/// [`apply`][`Self::apply`] rewrites in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipePage {
    lists: Vec<IngredientList>,
    servings_label: Option<ServingsLabel>,
}

impl RecipePage {
    /// Create a page from its ingredient lists.
    #[must_use]
    pub fn new(lists: Vec<IngredientList>) -> Self {
        Self {
            lists,
            servings_label: None,
        }
    }

    /// Attach the optional servings label element.
    #[must_use]
    pub fn with_servings_label(mut self, label: ServingsLabel) -> Self {
        self.servings_label = Some(label);
        self
    }

    /// The ingredient lists, in document order.
    #[must_use]
    pub fn lists(&self) -> &[IngredientList] {
        &self.lists
    }

    /// The servings label, when the page has one.
    #[must_use]
    pub fn servings_label(&self) -> Option<&ServingsLabel> {
        self.servings_label.as_ref()
    }

    /// Write rendered strings back into the page texts.
    ///
    /// The side-effect half of rendering: every rendered line lands in the
    /// matching entry's text, the label string in the label's text. Elements
    /// without a rendered counterpart are left untouched.
    pub fn apply(&mut self, rendered: &RenderedPage) {
        for (list, lines) in self.lists.iter_mut().zip(rendered.lists()) {
            for (ingredient, line) in list.ingredients_mut().iter_mut().zip(lines) {
                ingredient.set_text(line.clone());
            }
        }
        if let Some(label) = self.servings_label.as_mut() {
            if let Some(text) = rendered.servings_label() {
                label.set_text(text.to_string());
            }
        }
    }
}
