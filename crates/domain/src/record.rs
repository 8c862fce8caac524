//! Record: the contract every persisted entity fulfils.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::event::Collection;

/// An entity stored in its own collection and addressed by a generated id.
///
/// `Draft` is the record without its id (what `create` consumes) and `Patch`
/// is a set of optional fields shallow-merged by `update`: a `None` field keeps
/// the stored value.
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Hash + Default + fmt::Display;
    type Draft;
    type Patch;

    /// Human-readable entity name used in error messages.
    const NAME: &'static str;
    /// Collection this entity is stored in.
    const COLLECTION: Collection;

    fn id(&self) -> Self::Id;

    /// Attach a freshly generated id to a draft.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Overwrite the fields present in `patch`, keep the others.
    fn apply(&mut self, patch: Self::Patch);
}

/// Overwrite `target` when `value` is present.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
