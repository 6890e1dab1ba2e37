//! Constraint resolution: field kind → HTML constraint attributes
//!
//! A pure lookup keyed by [`ConstraintClass`]: only the constraints present
//! in the definition are applied, and kinds with no constraint class render
//! with none (silently, not as an error).

use crate::definition::{ConstraintClass, FieldDefinition};
use crate::html::Element;

/// Resolve the constraint attributes a definition contributes to its control.
///
/// Returns `(attribute name, value)` pairs for every constraint the field's
/// kind accepts and the definition actually supplies.
pub fn constraint_attrs(fd: &FieldDefinition) -> Vec<(&'static str, String)> {
    let pairs: Vec<(&'static str, Option<&String>)> = match fd.kind().constraint_class() {
        ConstraintClass::TextLength => {
            vec![("maxlength", fd.max.as_ref()), ("minlength", fd.min.as_ref())]
        }
        ConstraintClass::NumericRange => vec![
            ("max", fd.max.as_ref()),
            ("min", fd.min.as_ref()),
            ("step", fd.step.as_ref()),
        ],
        ConstraintClass::FileUpload => vec![
            ("accept", fd.accept.as_ref()),
            ("multiple", fd.multiple.as_ref()),
        ],
        ConstraintClass::Repeat => {
            vec![("data-max", fd.max.as_ref()), ("data-min", fd.min.as_ref())]
        }
        ConstraintClass::Unconstrained => Vec::new(),
    };

    pairs
        .into_iter()
        .filter_map(|(attr, value)| value.map(|v| (attr, v.clone())))
        .collect()
}

/// Apply the resolved constraints onto an element.
pub fn apply_constraints(element: &mut Element, fd: &FieldDefinition) {
    for (attr, value) in constraint_attrs(fd) {
        element.set_attr(attr, value);
    }
}
