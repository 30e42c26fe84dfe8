/// Errors reported by [`super::DragNDropList::on_pointer_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragNDropError {
    /// A drag hook had to fire but no [`super::DragNDropAdapter`] is attached.
    AdapterMissing { hook: &'static str },
}

impl std::fmt::Display for DragNDropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdapterMissing { hook } => {
                write!(
                    f,
                    "adapter contract not satisfied: no drag-n-drop adapter attached for `{hook}`"
                )
            }
        }
    }
}

impl std::error::Error for DragNDropError {}
