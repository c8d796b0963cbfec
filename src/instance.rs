use std::borrow::Cow;
use std::fmt;

/// Parameters for the first construction of a registered instance.
///
/// Only the first successful `get_instance` call consumes them. Later calls
/// drop them unused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceParams {
    name: String,
}

impl InstanceParams {
    /// Parameters carrying the identity label `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl From<&str> for InstanceParams {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for InstanceParams {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/// Capability shared by every registered instance.
///
/// `get_name` has a default body returning the label verbatim. An
/// implementation may override it to decorate the label; nothing else about
/// an instance is meant to vary between implementations.
pub trait Named: Send + Sync + fmt::Debug + 'static {
    /// Identity label supplied at construction.
    fn label(&self) -> &str;

    /// Short name of the concrete implementation that produced this instance.
    fn kind(&self) -> &'static str;

    fn get_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.label())
    }
}
