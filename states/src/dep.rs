use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::ctx::{ComputeSlot, StateSlot};
use crate::{Compute, Error, State};

/// Read-only view of a context's states and computes, handed to computes and commands.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, StateSlot>,
    computes: &'a BTreeMap<TypeId, ComputeSlot>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, StateSlot>,
        computes: &'a BTreeMap<TypeId, ComputeSlot>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn try_state<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never added to the context.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_compute<T: Compute>(&self) -> Result<&'a T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::compute_not_found(type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never recorded in the context.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.try_compute::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }
}
