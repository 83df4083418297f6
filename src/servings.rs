//! Serving-count state bound to the numeric input and its +/- controls.

/// Lowest serving count the controls allow.
const MIN_SERVINGS: u32 = 1;

/// State machine for the serving-count input.
///
/// Holds the single integer the page is rendered for, floor-clamped to 1.
/// Every transition returns the clamped value so the host can write it back
/// to the input control and trigger
/// [`rescale_page`][`crate::rescale_page`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServingsController {
    servings: u32,
}

impl Default for ServingsController {
    fn default() -> Self {
        Self {
            servings: MIN_SERVINGS,
        }
    }
}

impl ServingsController {
    /// Initial state from the input control's current value.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        Self {
            servings: coerce(raw),
        }
    }

    /// Current serving count.
    #[must_use]
    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Canonical value to write back to the input control.
    #[must_use]
    pub fn input_value(&self) -> String {
        self.servings.to_string()
    }

    /// Re-coerce and re-clamp after the input was edited.
    pub fn set_input(&mut self, raw: &str) -> u32 {
        self.servings = coerce(raw);
        self.servings
    }

    /// The "+" control.
    pub fn increment(&mut self) -> u32 {
        self.servings = self.servings.saturating_add(1);
        self.servings
    }

    /// The "-" control. Never drops below 1.
    pub fn decrement(&mut self) -> u32 {
        self.servings = self.servings.saturating_sub(1).max(MIN_SERVINGS);
        self.servings
    }
}

/// Coerce a raw input value to a serving count: optional sign, then leading
/// integer digits. Anything else, including negative or zero counts, falls
/// back to 1.
fn coerce(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>();
    match digits.parse::<u32>() {
        Ok(parsed) if !negative => parsed.max(MIN_SERVINGS),
        _ => MIN_SERVINGS,
    }
}
