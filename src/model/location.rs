//! Addresses of descendants relative to an investigation root.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Thing;

/// One hop: the `index`-th child of collection `attr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LocationStep {
    attr: String,
    index: usize,
}

/// Path of collection hops from the root to a descendant.
///
/// Displayed as `/` for the root, otherwise `albums[1].tracks[3]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ThingLocation {
    steps: Vec<LocationStep>,
}

impl ThingLocation {
    pub fn root() -> Self {
        Self::default()
    }

    /// The location of child `index` of collection `attr` below this one.
    pub fn child(&self, attr: &str, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(LocationStep {
            attr: attr.to_string(),
            index,
        });
        Self { steps }
    }

    pub fn resolve<'a>(&self, root: &'a Thing) -> Option<&'a Thing> {
        let mut current = root;
        for step in &self.steps {
            current = current.children(&step.attr)?.get(step.index)?;
        }
        Some(current)
    }

    pub fn resolve_mut<'a>(&self, root: &'a mut Thing) -> Option<&'a mut Thing> {
        let mut current = root;
        for step in &self.steps {
            current = current.children_mut(&step.attr)?.get_mut(step.index)?;
        }
        Some(current)
    }
}

impl fmt::Display for ThingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("/");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}[{}]", step.attr, step.index)?;
        }
        Ok(())
    }
}

impl Serialize for ThingLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
