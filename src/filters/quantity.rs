use crate::rounding::Classifier;

/// Format a quantity for display: at most two decimal places, integral values
/// without a decimal point.
pub(crate) fn format_quantity(value: f64) -> String {
    ((value * 100.0).round() / 100.0).to_string()
}

/// Round a raw scaled quantity for the ingredient and format it for display.
pub(crate) fn quantity_filter(classifier: &Classifier, value: f64, unit: &str, name: &str) -> String {
    format_quantity(classifier.round(value, unit, name))
}
