//! Constructor body emission.
//!
//! Renders one [`FieldValidation`] as the PHP statements that check and
//! assign the field. Statements sit at two levels of indentation inside the
//! constructor; blocks nested under a loop or a null guard are shifted by
//! one more level line by line, trailing empty line included.

use crate::messages;
use crate::naming::variable;
use crate::synth::{FieldValidation, LeafCheck, Rule};

const INDENT: &str = "    ";

const ITEM_NULL_GUARD: &str =
    "        if ( $item == null ) {\n            // Do nothing, $minOccurs is 0\n        } else";

/// Renders the validation and assignment statements for one field.
#[must_use]
pub fn render_validation(validation: &FieldValidation) -> String {
    match &validation.rule {
        Rule::Leaf(check) => render_simple(validation, check),
        Rule::Instance { type_name } => render_complex(validation, type_name),
    }
}

fn render_simple(v: &FieldValidation, check: &LeafCheck) -> String {
    let name = &v.field;
    let var = variable(name);

    let mut leaf = render_leaf(name, check);
    if v.is_optional() {
        leaf = format!("{}{}", ITEM_NULL_GUARD, leaf.trim_start());
    }

    let mut output = String::new();
    if v.is_many() {
        output.push_str(&render_count_checks(v, name));
        output.push_str(&format!(
            "        foreach ( {} as $item ) {{\n{};\n        }}\n",
            var,
            indent_lines(&leaf)
        ));
    } else {
        if v.requires_value() {
            output.push_str(&render_must_be_set(name));
        }
        output.push_str(&format!("        $item = {};\n{}", var, leaf));
    }

    output
}

fn render_complex(v: &FieldValidation, type_name: &str) -> String {
    let name = &v.field;
    let var = variable(name);

    let mut output = String::new();
    if v.is_many() {
        output.push_str(&render_count_checks(v, type_name));
        output.push_str(&format!("        foreach ( {} as $item ) {{\n", var));
        output.push_str(&format!(
            "            if ( get_class($item) != '{}' ) {{\n",
            type_name
        ));
        output.push_str(&format!(
            "                throw new Exception('{}');\n",
            messages::item_type(name, type_name)
        ));
        output.push_str("            }\n");
        output.push_str("        }\n");
    } else {
        if v.requires_value() {
            output.push_str(&render_must_be_set(name));
        }
        output.push_str(&format!(
            "        if ( get_class({}) != '{}' ) {{\n",
            var, type_name
        ));
        output.push_str(&throw(&messages::instance_type(name, type_name)));
        output.push_str("        }\n");
    }
    output.push_str(&format!("        $this->{} = {};\n", name, var));

    if v.is_optional() {
        output = format!(
            "        if ( {} == null ) {{\n            // Do nothing, $minOccurs is 0\n        }} else {{\n{}\n        }}\n",
            var,
            indent_lines(&output)
        );
    }

    output
}

/// Per-item check, assigning `$item` when it passes.
fn render_leaf(name: &str, check: &LeafCheck) -> String {
    let assign = format!("            $this->{} = $item;\n", name);
    let mut output = String::new();

    match check {
        LeafCheck::Length(bounds) => {
            output.push_str(&format!("        if ( strlen($item) < {} ) {{\n", bounds.min));
            output.push_str(&throw(&messages::min_length(name, bounds.min)));
            if let Some(max) = bounds.max {
                output.push_str(&format!("        }} elseif ( strlen($item) > {} ) {{\n", max));
                output.push_str(&throw(&messages::max_length(name, max)));
            }
            output.push_str("        } else {\n");
            output.push_str(&assign);
            output.push_str("        }\n");
        }
        LeafCheck::Numeric | LeafCheck::Pattern(_) => {
            let condition = match check {
                LeafCheck::Pattern(pattern) => format!("0 !== preg_match(\"/{}/\", $item)", pattern),
                _ => "is_numeric($item)".to_string(),
            };
            output.push_str(&format!("        if ( {} ) {{\n", condition));
            output.push_str(&assign);
            output.push_str("        } else {\n");
            output.push_str(&throw(&messages::numeric(name)));
            output.push_str("        }\n");
        }
    }

    output
}

/// Array, maximum-count and minimum-count checks of a multi-valued field.
fn render_count_checks(v: &FieldValidation, of: &str) -> String {
    let var = variable(&v.field);
    let mut output = String::new();

    output.push_str(&format!(
        "        if ( {} != null && !is_array({}) ) {{\n",
        var, var
    ));
    output.push_str(&throw(&messages::not_array(&v.field, of)));
    output.push_str("        }\n");

    if let Some(max) = v.max_occurs.bound() {
        output.push_str(&format!(
            "        if ( {} != null && count({}) > {} ) {{\n",
            var, var, max
        ));
        output.push_str(&throw(&messages::max_items(&v.field, max)));
        output.push_str("        }\n");
    }

    output.push_str(&format!("        if ( count({}) < {} ) {{\n", var, v.min_occurs));
    output.push_str(&throw(&messages::min_items(&v.field, v.min_occurs)));
    output.push_str("        }\n");

    output
}

fn render_must_be_set(name: &str) -> String {
    format!(
        "        if ( {} == null ) {{\n{}        }}\n",
        variable(name),
        throw(&messages::must_be_set(name))
    )
}

fn throw(message: &str) -> String {
    format!("            throw new Exception('{}');\n", message)
}

/// Prefixes every line, including the empty one after a trailing newline.
fn indent_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}
