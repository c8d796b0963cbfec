use thiserror::Error;

/// Misuse of a guarded registry.
///
/// Every variant is a programmer error at the call site. None of them mutate
/// the registry slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A guarded type was constructed without the privileged access token.
    #[error("creating an instance of {type_name} directly is not available")]
    DirectConstruction {
        /// Type that refused construction.
        type_name: &'static str,
    },

    /// `get_instance` was called through a variant instead of the family root.
    #[error("creating an instance from {identity} is not available, use the family root")]
    SubclassAccess {
        /// Variant identity the call went through.
        identity: &'static str,
    },

    /// The requested tag has no entry in the variant table.
    #[error("unknown variant tag: {tag}")]
    UnknownVariant {
        /// Tag as supplied by the caller.
        tag: String,
    },
}
