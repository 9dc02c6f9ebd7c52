//! Naming helpers for generated classes.

/// Converts a schema name into a class name by upper-casing the first
/// character of each whitespace-separated word. The rest of the name is
/// kept as written, so `purchaseOrder` becomes `PurchaseOrder`.
#[must_use]
pub fn class_name(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c.is_whitespace() {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Returns the PHP variable token for a field (`$name`).
#[must_use]
pub fn variable(field: &str) -> String {
    format!("${}", field)
}
