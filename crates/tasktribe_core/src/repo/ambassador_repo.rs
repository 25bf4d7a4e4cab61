//! Ambassador repository.
//!
//! # Responsibility
//! - Allocate ambassador ids and store records in insertion order.
//! - Apply blank-keeps-current edit semantics.
//!
//! # Invariants
//! - Deleted ambassadors stay in storage as tombstones; `get`/`list` skip
//!   them, `get_including_deleted` resolves them.
//! - Delete never scans or rewrites task or session references.

use crate::model::ambassador::{Ambassador, AmbassadorId};
use crate::repo::{RepoError, RepoResult};
use log::{debug, info};

#[derive(Debug)]
pub struct AmbassadorRepository {
    ambassadors: Vec<Ambassador>,
    next_id: AmbassadorId,
}

impl Default for AmbassadorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbassadorRepository {
    pub fn new() -> Self {
        Self {
            ambassadors: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds an ambassador with the next sequential id.
    pub fn add(&mut self, name: impl Into<String>, role: impl Into<String>) -> &Ambassador {
        let id = self.next_id;
        self.next_id += 1;
        self.ambassadors.push(Ambassador::new(id, name, role));
        info!("event=ambassador_add module=repo status=ok ambassador_id={id}");
        &self.ambassadors[self.ambassadors.len() - 1]
    }

    /// Gets one active ambassador.
    pub fn get(&self, id: AmbassadorId) -> Option<&Ambassador> {
        self.get_including_deleted(id)
            .filter(|ambassador| ambassador.is_active())
    }

    /// Gets one ambassador, tombstones included.
    ///
    /// Used to render references held by tasks and sessions after delete.
    pub fn get_including_deleted(&self, id: AmbassadorId) -> Option<&Ambassador> {
        self.ambassadors.iter().find(|ambassador| ambassador.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: AmbassadorId) -> Option<&mut Ambassador> {
        self.ambassadors
            .iter_mut()
            .find(|ambassador| ambassador.id == id && ambassador.is_active())
    }

    /// Replaces name and/or role.
    ///
    /// A `None` or blank value keeps the current field.
    ///
    /// # Errors
    /// - `AmbassadorNotFound` when `id` is unknown or deleted.
    pub fn edit(
        &mut self,
        id: AmbassadorId,
        new_name: Option<&str>,
        new_role: Option<&str>,
    ) -> RepoResult<&Ambassador> {
        let ambassador = self
            .get_mut(id)
            .ok_or(RepoError::AmbassadorNotFound(id))?;

        let mut changed_fields = 0;
        if let Some(name) = non_blank(new_name) {
            ambassador.name = name.to_string();
            changed_fields += 1;
        }
        if let Some(role) = non_blank(new_role) {
            ambassador.role = role.to_string();
            changed_fields += 1;
        }

        debug!(
            "event=ambassador_edit module=repo status=ok ambassador_id={id} changed_fields={changed_fields}"
        );
        Ok(&*ambassador)
    }

    /// Removes an ambassador from roster reads.
    ///
    /// # Errors
    /// - `AmbassadorNotFound` when `id` is unknown or already deleted.
    pub fn delete(&mut self, id: AmbassadorId) -> RepoResult<()> {
        let ambassador = self
            .get_mut(id)
            .ok_or(RepoError::AmbassadorNotFound(id))?;
        ambassador.soft_delete();
        info!("event=ambassador_delete module=repo status=ok ambassador_id={id}");
        Ok(())
    }

    /// Active ambassadors in insertion order.
    pub fn list(&self) -> Vec<&Ambassador> {
        self.ambassadors
            .iter()
            .filter(|ambassador| ambassador.is_active())
            .collect()
    }

    /// Returns whether no active ambassador exists.
    pub fn is_empty(&self) -> bool {
        !self.ambassadors.iter().any(Ambassador::is_active)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
