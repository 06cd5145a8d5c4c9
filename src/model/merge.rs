//! Applying provider results to the entity graph.
//!
//! Merging only fills gaps: a value that is already known is never replaced.
//! Multi-segment results land on every child of the head collection, either
//! element-wise (for a [`Value::List`]) or broadcast (for a scalar).

use super::{AttrPath, ModelError, Shape, Thing, Value};

/// Merge one `(path, value)` result into `thing`.
///
/// Returns whether anything changed. When the head collection of a
/// multi-segment path is still unknown, a list value discovers the children:
/// one fresh Thing of the collection's kind per element.
pub fn merge_result(thing: &mut Thing, path: &AttrPath, value: Value) -> Result<bool, ModelError> {
    merge_segments(thing, path.segments(), value)
}

fn merge_segments(thing: &mut Thing, segments: &[String], value: Value) -> Result<bool, ModelError> {
    let (head, rest) = segments.split_first().ok_or(ModelError::EmptyPath)?;

    if rest.is_empty() {
        return thing.fill(head, value);
    }

    let kind = thing.kind();
    let child_kind = match kind.attribute(head).map(|spec| spec.shape) {
        Some(Shape::Collection(child_kind)) => child_kind,
        Some(_) => {
            return Err(ModelError::NotACollection {
                kind,
                attr: head.clone(),
            });
        }
        None => {
            return Err(ModelError::UnknownAttribute {
                kind,
                attr: head.clone(),
            });
        }
    };

    let mut changed = false;
    if !thing.is_known(head) {
        let Value::List(items) = &value else {
            return Ok(false);
        };
        let discovered = items.iter().map(|_| child_kind.new_thing()).collect();
        changed = thing.adopt(head, discovered)?;
    }

    let Some(children) = thing.children_mut(head) else {
        return Ok(changed);
    };

    match value {
        Value::List(items) => {
            for (child, item) in children.iter_mut().zip(items) {
                changed |= merge_segments(child, rest, item)?;
            }
        }
        scalar => {
            for child in children.iter_mut() {
                changed |= merge_segments(child, rest, scalar.clone())?;
            }
        }
    }

    Ok(changed)
}
