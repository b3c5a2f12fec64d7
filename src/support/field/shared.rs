use std::cell::{Ref, RefCell, RefMut};

/// A named, host-owned field that models may read while the host updates it.
///
/// The host keeps ownership and replaces the value between timesteps with
/// [`Shared::set`]. Models hold a `&Shared<F>` for their whole lifetime and
/// call [`Shared::get`] whenever they need the current value.
///
/// # Panics
///
/// [`Shared::get`] panics if the host currently holds the value mutably
/// (through [`Shared::get_mut`]), and vice versa.
/// Hosts drive models sequentially, so this never happens in a correct host.
///
/// # Example
///
/// ```
/// use cavitation_models::support::field::{ScalarField, Shared};
///
/// let p = Shared::new("p", ScalarField::uniform(1, 1.0e5));
/// p.set(ScalarField::uniform(1, 2.0e3));
/// assert_eq!(p.get()[0], 2.0e3);
/// ```
#[derive(Debug)]
pub struct Shared<F> {
    name: String,
    value: RefCell<F>,
}

impl<F> Shared<F> {
    pub fn new(name: impl Into<String>, value: F) -> Self {
        Self {
            name: name.into(),
            value: RefCell::new(value),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the current value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed mutably.
    pub fn get(&self) -> Ref<'_, F> {
        self.value.borrow()
    }

    /// Mutably borrows the current value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed.
    pub fn get_mut(&self) -> RefMut<'_, F> {
        self.value.borrow_mut()
    }

    /// Replaces the current value, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed.
    pub fn set(&self, value: F) -> F {
        self.value.replace(value)
    }
}
