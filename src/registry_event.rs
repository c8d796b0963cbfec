use crate::RegistryError;

/// Events emitted by a guarded registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use singleton_family::RegistryEvent;
///
/// let event = RegistryEvent::Reset { cleared: false };
/// assert_eq!(event.to_string(), "reset { cleared: false }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// The slot was empty and a new instance was constructed and stored.
    Create {
        /// Concrete type of the stored instance.
        type_name: &'static str,
    },

    /// The slot was already populated; the stored instance was returned.
    Fetch {
        /// Concrete type of the stored instance.
        type_name: &'static str,
    },

    /// `reset_instance` was called.
    Reset {
        /// Whether an instance was actually removed.
        cleared: bool,
    },

    /// A call was refused. The slot is unchanged.
    Denied {
        /// Reason for the refusal.
        error: RegistryError,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Create { type_name } => {
                write!(f, "create {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Fetch { type_name } => {
                write!(f, "fetch {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Reset { cleared } => write!(f, "reset {{ cleared: {} }}", cleared),
            RegistryEvent::Denied { error } => write!(f, "denied {{ error: {} }}", error),
        }
    }
}
