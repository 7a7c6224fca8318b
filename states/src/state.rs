use std::any::{Any, type_name};

use log::warn;

/// Plain data owned by a [`StateCtx`](crate::StateCtx).
///
/// States are mutated explicitly (`StateCtx::update`, `Updater::update`) and every mutation
/// marks the computes depending on them dirty.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value posted through `Updater::set`.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        warn!(
            "{} does not accept whole-value assignment, update dropped",
            type_name::<Self>()
        );
        drop(new_self);
    }
}

/// Default `assign_box` body for states that can be replaced wholesale.
pub fn state_assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("type mismatch while assigning {}", type_name::<T>()),
    }
}
