mod numeric;
mod quantity;

pub(crate) use numeric::{numeric_filter, parse_numeric};
pub(crate) use quantity::quantity_filter;
