//! Construction gate for guarded types.
//!
//! A guarded type exposes its constructor publicly but requires an
//! [`Access<T>`](Access) token bound to that type. Outside code can only
//! obtain [`Access::direct`], which every guarded constructor rejects.
//!
//! Tokens carry one of three grants:
//!
//! - direct: anything outside a registry creation routine
//! - registry: minted by [`SingletonApi::get_instance`](crate::SingletonApi::get_instance)
//!   for whatever `build` it calls, including user implementations
//! - owner: minted only by the crate's own registries for [`Singleton`](crate::Singleton)
//!   and the [`Family`](crate::Family) variants
//!
//! A token is neither `Clone` nor `Copy` and [`Access::check`] consumes it, so
//! one grant pays for one construction.
//!
//! ```compile_fail
//! use singleton_family::Access;
//!
//! let token = Access::<String>::direct();
//! let copy = token.clone();
//! ```

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grant {
    Direct,
    Registry,
    Owner,
}

/// Access token handed to the guarded constructor of `T`.
pub struct Access<T: ?Sized> {
    grant: Grant,
    target: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Access<T> {
    /// The only token available to callers outside a registry.
    pub const fn direct() -> Self {
        Self::with(Grant::Direct)
    }

    pub(crate) const fn privileged() -> Self {
        Self::with(Grant::Registry)
    }

    const fn with(grant: Grant) -> Self {
        Self {
            grant,
            target: PhantomData,
        }
    }

    /// Raises a registry grant to an owner grant. A direct token stays direct.
    pub(crate) fn into_owned(self) -> Self {
        match self.grant {
            Grant::Direct => self,
            Grant::Registry | Grant::Owner => Self::with(Grant::Owner),
        }
    }

    /// Rebinds the grant to another target type.
    pub(crate) fn retarget<U: ?Sized>(self) -> Access<U> {
        Access::with(self.grant)
    }

    /// Gate for the constructor of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DirectConstruction`] naming `T` unless the
    /// token came from a registry creation routine.
    pub fn check(self) -> Result<(), RegistryError> {
        match self.grant {
            Grant::Registry | Grant::Owner => Ok(()),
            Grant::Direct => Err(Self::refused()),
        }
    }

    /// Gate for types only the crate's own registries may create.
    pub(crate) fn check_owned(self) -> Result<(), RegistryError> {
        match self.grant {
            Grant::Owner => Ok(()),
            Grant::Direct | Grant::Registry => Err(Self::refused()),
        }
    }

    fn refused() -> RegistryError {
        RegistryError::DirectConstruction {
            type_name: type_name::<T>(),
        }
    }
}

impl<T: ?Sized> Default for Access<T> {
    fn default() -> Self {
        Self::direct()
    }
}

impl<T: ?Sized> fmt::Debug for Access<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Access")
            .field("target", &type_name::<T>())
            .field("grant", &self.grant)
            .finish()
    }
}
