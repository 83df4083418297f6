use minijinja::{Error, ErrorKind::InvalidOperation};

/// Coerce a numeric-ish attribute string to a float.
///
/// Takes the leading numeric prefix of the trimmed value, so trailing text is
/// tolerated. Fractions like `1/2` are accepted.
pub(crate) fn parse_numeric(value: &str) -> Option<f64> {
    let numeric_part = value
        .trim()
        .chars()
        .take_while(|c| c.is_numeric() || *c == '.' || *c == '/')
        .collect::<String>();

    if numeric_part.contains('/') {
        // Handle fractions (e.g., "1/4")
        let parts: Vec<&str> = numeric_part.split('/').collect();
        if parts.len() == 2 {
            if let (Ok(num), Ok(denom)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
                let fraction = num / denom;
                if fraction.is_finite() {
                    return Some(fraction);
                }
            }
        }
        None
    } else {
        numeric_part.parse::<f64>().ok()
    }
}

pub(crate) fn numeric_filter(value: &str) -> Result<f64, Error> {
    parse_numeric(value).ok_or_else(|| Error::new(InvalidOperation, "could not parse numeric"))
}
