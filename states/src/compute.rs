use std::any::{Any, TypeId, type_name};

use log::warn;

use crate::{Dep, Updater};

/// `(state dependencies, compute dependencies)` of a compute.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A value derived from states and other computes.
///
/// `compute` must be pure: it reads its dependencies and publishes the new value through
/// the updater. The context re-runs it whenever a dependency changes.
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

pub fn assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("type mismatch while assigning compute {}", type_name::<T>()),
    }
}
