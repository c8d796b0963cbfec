//! Closed mapping from variant tags to constructors.
//!
//! The table is built by a `const fn`, so declaring it as a `static` evaluates
//! it at compile time. A duplicated tag aborts compilation.

use std::sync::Arc;

use crate::{Access, InstanceParams, Named, RegistryError};

/// Constructor for one variant. Receives the caller's access token unchanged.
pub type VariantFactory =
    fn(Access<dyn Named>, InstanceParams) -> Result<Arc<dyn Named>, RegistryError>;

/// One row of a [`VariantTable`].
#[derive(Clone, Copy)]
pub struct VariantEntry {
    tag: &'static str,
    factory: VariantFactory,
}

impl VariantEntry {
    pub const fn new(tag: &'static str, factory: VariantFactory) -> Self {
        Self { tag, factory }
    }

    pub const fn tag(&self) -> &'static str {
        self.tag
    }
}

impl std::fmt::Debug for VariantEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantEntry").field("tag", &self.tag).finish()
    }
}

/// Read-only tag to factory mapping.
///
/// # Examples
///
/// ```rust
/// use singleton_family::{
///     Access, InstanceParams, Named, RegistryError, VariantEntry, VariantTable,
/// };
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Lp(String);
///
/// impl Named for Lp {
///     fn label(&self) -> &str { &self.0 }
///     fn kind(&self) -> &'static str { "Lp" }
/// }
///
/// fn lp(
///     access: Access<dyn Named>,
///     params: InstanceParams,
/// ) -> Result<Arc<dyn Named>, RegistryError> {
///     access.check()?;
///     Ok(Arc::new(Lp(params.into_name())))
/// }
///
/// const ENTRIES: &[VariantEntry] = &[VariantEntry::new("lp", lp)];
/// static TABLE: VariantTable = VariantTable::new(ENTRIES);
///
/// assert!(TABLE.resolve("lp").is_ok());
/// assert!(TABLE.resolve("fax").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VariantTable {
    entries: &'static [VariantEntry],
}

impl VariantTable {
    /// # Panics
    ///
    /// If two entries share a tag. In a `static` or `const` this is a
    /// compile-time error.
    pub const fn new(entries: &'static [VariantEntry]) -> Self {
        let mut i = 0;
        while i < entries.len() {
            let mut j = i + 1;
            while j < entries.len() {
                if str_eq(entries[i].tag, entries[j].tag) {
                    panic!("duplicate tag in variant table");
                }
                j += 1;
            }
            i += 1;
        }
        Self { entries }
    }

    /// Looks up the factory registered for `tag`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownVariant`] if no entry carries `tag`.
    pub fn resolve(&self, tag: &str) -> Result<VariantFactory, RegistryError> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.factory)
            .ok_or_else(|| RegistryError::UnknownVariant {
                tag: tag.to_string(),
            })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry.tag == tag)
    }

    /// Tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [VariantEntry] = self.entries;
        entries.iter().map(VariantEntry::tag)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
