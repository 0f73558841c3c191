/// Identifies records that may carry a backend-assigned identifier.
pub trait Identifiable {
    fn id(&self) -> Option<&str>;

    /// A record is persisted once the backend has assigned it a non-empty id.
    fn is_persisted(&self) -> bool {
        self.id().is_some_and(|id| !id.is_empty())
    }
}

/// Supplies a presentation-ready label for listings and logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

// Re-export serde so consumers can rely on this module as a façade.
pub use serde;
