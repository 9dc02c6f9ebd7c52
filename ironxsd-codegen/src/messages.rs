//! Exception messages thrown by generated constructors.
//!
//! The renderer embeds these in the emitted code and the reference
//! evaluator returns them, so both always agree on the text.

use crate::naming::variable;

/// Required field is absent.
#[must_use]
pub fn must_be_set(field: &str) -> String {
    format!("{} must be set.", variable(field))
}

/// String shorter than `minLength`.
#[must_use]
pub fn min_length(field: &str, min: usize) -> String {
    format!("{} must be at least {} characters.", variable(field), min)
}

/// String longer than `maxLength`.
#[must_use]
pub fn max_length(field: &str, max: usize) -> String {
    format!("{} must be no more than {} characters.", variable(field), max)
}

/// Decimal or integer value rejected.
#[must_use]
pub fn numeric(field: &str) -> String {
    format!("{} must be numeric.", variable(field))
}

/// Multi-valued field not given as an array.
#[must_use]
pub fn not_array(field: &str, of: &str) -> String {
    format!("{} must be an Array[] of {} objects.", variable(field), of)
}

/// Too many items.
#[must_use]
pub fn max_items(field: &str, max: u32) -> String {
    format!("{} can have a maximum of {} items.", variable(field), max)
}

/// Too few items.
#[must_use]
pub fn min_items(field: &str, min: u32) -> String {
    format!("{} must have at least {} items.", variable(field), min)
}

/// An item of a multi-valued complex field has the wrong class.
#[must_use]
pub fn item_type(field: &str, type_name: &str) -> String {
    format!("Each item in {} must be of type {}.", variable(field), type_name)
}

/// A complex field has the wrong class.
#[must_use]
pub fn instance_type(field: &str, type_name: &str) -> String {
    format!("{} must be of type {}.", variable(field), type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        assert_eq!(must_be_set("isbn"), "$isbn must be set.");
        assert_eq!(min_length("code", 2), "$code must be at least 2 characters.");
        assert_eq!(max_length("code", 5), "$code must be no more than 5 characters.");
        assert_eq!(numeric("price"), "$price must be numeric.");
        assert_eq!(not_array("tags", "tags"), "$tags must be an Array[] of tags objects.");
        assert_eq!(max_items("tags", 3), "$tags can have a maximum of 3 items.");
        assert_eq!(min_items("tags", 1), "$tags must have at least 1 items.");
        assert_eq!(item_type("lines", "Line"), "Each item in $lines must be of type Line.");
        assert_eq!(instance_type("shipTo", "Address"), "$shipTo must be of type Address.");
    }
}
