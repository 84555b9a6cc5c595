use std::fmt;

use tracing::debug;

use crate::error::ValidationError;

/// Longest attribute name accepted, in characters.
pub const MAX_TOKEN_LEN: usize = 5;

/// A single attribute name: 1 to 5 characters, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attribute(String);

impl Attribute {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty list of distinct attributes.
///
/// Order is the order the user typed them in and is kept for display only.
/// Every comparison (`is_subset`, `intersects`, `same_members`) ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    attrs: Vec<Attribute>,
}

impl AttributeSet {
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn contains(&self, attr: &Attribute) -> bool {
        self.attrs.contains(attr)
    }

    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        self.attrs.iter().all(|a| other.contains(a))
    }

    pub fn intersects(&self, other: &AttributeSet) -> bool {
        self.attrs.iter().any(|a| other.contains(a))
    }

    /// Attributes of `self` also present in `other`, in `self`'s order.
    pub fn shared_with<'a>(&'a self, other: &'a AttributeSet) -> impl Iterator<Item = &'a Attribute> {
        self.attrs.iter().filter(move |a| other.contains(a))
    }

    /// Set equality.
    pub fn same_members(&self, other: &AttributeSet) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(attr.as_str())?;
        }
        Ok(())
    }
}

/// Parse one comma-separated attribute field.
///
/// Rules are checked in order and the first failing rule is reported:
/// empty input, missing separator, duplicates, inner whitespace, length.
pub fn parse_attribute_list(raw: &str, field: &str) -> Result<AttributeSet, ValidationError> {
    let label = || field.to_string();

    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyInput { field: label() });
    }

    let tokens: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ValidationError::EmptyInput { field: label() });
    }
    if tokens.len() > 1 && !raw.contains(',') {
        return Err(ValidationError::MissingSeparator { field: label() });
    }

    if let Some(dup) = first_duplicate(&tokens) {
        return Err(ValidationError::DuplicateAttribute {
            field: label(),
            token: dup.to_string(),
        });
    }

    if let Some(tok) = tokens.iter().find(|t| t.chars().any(char::is_whitespace)) {
        return Err(ValidationError::WhitespaceInToken {
            field: label(),
            token: tok.to_string(),
        });
    }

    if let Some(tok) = tokens.iter().find(|t| t.chars().count() > MAX_TOKEN_LEN) {
        return Err(ValidationError::TokenTooLong {
            field: label(),
            token: tok.to_string(),
        });
    }

    debug!(field, count = tokens.len(), "parsed attribute list");
    Ok(AttributeSet {
        attrs: tokens.into_iter().map(|t| Attribute(t.to_string())).collect(),
    })
}

/// First token that has already been seen earlier in the list.
fn first_duplicate<'s>(tokens: &[&'s str]) -> Option<&'s str> {
    for (i, tok) in tokens.iter().enumerate() {
        if tokens[..i].contains(tok) {
            return Some(*tok);
        }
    }
    None
}
