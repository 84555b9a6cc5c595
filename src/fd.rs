use std::fmt;

use crate::attr::AttributeSet;

/// An accepted functional dependency `determinant -> dependent`.
///
/// Only the validator builds these, so a value of this type always has two
/// non-empty, disjoint sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionalDependency {
    determinant: AttributeSet,
    dependent: AttributeSet,
}

impl FunctionalDependency {
    pub(crate) fn new(determinant: AttributeSet, dependent: AttributeSet) -> Self {
        Self {
            determinant,
            dependent,
        }
    }

    pub fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    pub fn dependent(&self) -> &AttributeSet {
        &self.dependent
    }

    /// Both sides have the same members as `other`'s, ignoring order.
    pub fn same_sides(&self, other: &FunctionalDependency) -> bool {
        self.determinant.same_members(&other.determinant)
            && self.dependent.same_members(&other.dependent)
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.determinant, self.dependent)
    }
}
