use std::borrow::Cow;

use parking_lot::RwLock;

use crate::ReadError;

/// The entry points a generated asset module exposes to the facade.
///
/// Generated code builds one of these in its `register()` function.
#[derive(Debug, Clone, Copy)]
pub struct Backend {
    pub asset: fn(&str) -> Result<Cow<'static, [u8]>, ReadError>,
    pub asset_dir: fn(&str) -> Result<Vec<&'static str>, ReadError>,
    pub asset_names: fn() -> Vec<&'static str>,
}

/// An indirection table that forwards lookups to the registered [`Backend`].
///
/// Callers depend on the registry instead of the generated module, so the
/// encoding chosen at build time can change without touching them.
#[derive(Debug, Default)]
pub struct Registry {
    backend: RwLock<Option<Backend>>,
}

impl Registry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            backend: parking_lot::const_rwlock(None),
        }
    }

    /// Installs `backend`, returning the one it replaces.
    pub fn register(&self, backend: Backend) -> Option<Backend> {
        self.backend.write().replace(backend)
    }

    fn current(&self) -> Option<Backend> {
        *self.backend.read()
    }

    /// Returns the bytes of the asset called `name`.
    ///
    /// # Errors
    /// Returns [`ReadError::NotRegistered`] before anything was registered, or
    /// whatever the backend reports for `name`.
    pub fn asset(&self, name: &str) -> Result<Cow<'static, [u8]>, ReadError> {
        let backend = self.current().ok_or(ReadError::NotRegistered)?;
        (backend.asset)(name)
    }

    /// Lists the children of the directory `name` (`""` is the root).
    ///
    /// # Errors
    /// Returns [`ReadError::NotRegistered`] before anything was registered, or
    /// whatever the backend reports for `name`.
    pub fn asset_dir(&self, name: &str) -> Result<Vec<&'static str>, ReadError> {
        let backend = self.current().ok_or(ReadError::NotRegistered)?;
        (backend.asset_dir)(name)
    }

    /// Names of every registered asset, empty if nothing is registered.
    pub fn asset_names(&self) -> Vec<&'static str> {
        self.current()
            .map(|backend| (backend.asset_names)())
            .unwrap_or_default()
    }
}

static GLOBAL: Registry = Registry::new();

/// Installs `backend` into the process-wide registry.
///
/// Generated modules call this from their `register()` function, which the
/// application invokes once during startup.
pub fn register(backend: Backend) -> Option<Backend> {
    GLOBAL.register(backend)
}

/// Looks up an asset through the process-wide registry.
///
/// # Errors
/// See [`Registry::asset`].
pub fn asset(name: &str) -> Result<Cow<'static, [u8]>, ReadError> {
    GLOBAL.asset(name)
}

/// Lists a directory through the process-wide registry.
///
/// # Errors
/// See [`Registry::asset_dir`].
pub fn asset_dir(name: &str) -> Result<Vec<&'static str>, ReadError> {
    GLOBAL.asset_dir(name)
}

/// Names of every asset in the process-wide registry.
pub fn asset_names() -> Vec<&'static str> {
    GLOBAL.asset_names()
}
