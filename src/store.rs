use std::collections::VecDeque;
use std::fmt;

use tracing::info;

use crate::error::ValidationError;
use crate::fd::FunctionalDependency;
use crate::validator::validate_dependency;

/// Identity of a stored dependency. Issued by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FdId(u64);

impl FdId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Accepted dependencies, newest first.
#[derive(Debug, Clone, Default)]
pub struct FdStore {
    entries: VecDeque<(FdId, FunctionalDependency)>,
    last_id: u64,
}

impl FdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `fd` without validating it. Callers run the validator first.
    pub fn insert_front(&mut self, fd: FunctionalDependency) -> FdId {
        self.last_id += 1;
        let id = FdId(self.last_id);
        self.entries.push_front((id, fd));
        id
    }

    /// Remove the entry with identity `id`. Returns `None` if it is not here.
    pub fn remove(&mut self, id: FdId) -> Option<FunctionalDependency> {
        let pos = self.entries.iter().position(|(eid, _)| *eid == id)?;
        self.entries.remove(pos).map(|(_, fd)| fd)
    }

    /// Validate the raw fields against this store and insert on success.
    ///
    /// Returns the new identity together with the stored dependency.
    pub fn submit(
        &mut self,
        det_raw: &str,
        dep_raw: &str,
    ) -> Result<(FdId, &FunctionalDependency), Vec<ValidationError>> {
        let fd = validate_dependency(det_raw, dep_raw, self)?;
        let id = self.insert_front(fd);
        let stored = &self.entries[0].1;
        info!(%id, fd = %stored, "dependency accepted");
        Ok((id, stored))
    }

    pub fn get(&self, id: FdId) -> Option<&FunctionalDependency> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, fd)| fd)
    }

    pub fn contains(&self, id: FdId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionalDependency> {
        self.entries.iter().map(|(_, fd)| fd)
    }

    pub fn entries(&self) -> impl Iterator<Item = (FdId, &FunctionalDependency)> {
        self.entries.iter().map(|(id, fd)| (*id, fd))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
