//! Three-state result for fetched collections.

/// Outcome of loading a collection from the API.
///
/// Distinguishes "nothing there" from "could not fetch", which a plain
/// empty `Vec` cannot.
///
/// ```
/// use workshop_core::LoadState;
///
/// let loaded: LoadState<Vec<u8>> = LoadState::from_result(Ok::<_, String>(vec![1, 2]));
/// assert_eq!(loaded.items(), Some(&vec![1, 2]));
///
/// let empty: LoadState<Vec<u8>> = LoadState::from_result(Ok::<_, String>(vec![]));
/// assert!(empty.is_empty());
///
/// let failed: LoadState<Vec<u8>> = LoadState::from_result(Err("timeout"));
/// assert_eq!(failed.error(), Some("timeout"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    /// Fetch has not completed yet.
    #[default]
    Loading,
    /// Fetch succeeded with no records.
    Empty,
    /// Fetch succeeded with at least one record.
    Loaded(T),
    /// Fetch failed; carries a log-safe description.
    Failed(String),
}

impl<T> LoadState<Vec<T>> {
    /// Build a state from a fetch result, mapping an empty collection to
    /// [`LoadState::Empty`].
    pub fn from_result<E: ToString>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Loaded(items),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// The loaded records, or an empty slice for every other state.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            Self::Loading | Self::Empty | Self::Failed(_) => &[],
        }
    }

    /// Consume the state, returning the records or an empty `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Loaded(items) => items,
            Self::Loading | Self::Empty | Self::Failed(_) => Vec::new(),
        }
    }
}

impl<T> LoadState<T> {
    /// Whether the fetch is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the fetch succeeded with no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The loaded value, if any.
    #[must_use]
    pub const fn items(&self) -> Option<&T> {
        match self {
            Self::Loaded(items) => Some(items),
            _ => None,
        }
    }

    /// The failure description, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Transform the loaded value, keeping the other states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Empty => LoadState::Empty,
            Self::Loaded(items) => LoadState::Loaded(f(items)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        assert!(LoadState::<Vec<u8>>::default().is_loading());
    }

    #[test]
    fn test_failed_has_no_items() {
        let state: LoadState<Vec<u8>> = LoadState::from_result(Err("boom"));
        assert!(state.as_slice().is_empty());
        assert!(!state.is_empty());
        assert_eq!(state.error(), Some("boom"));
    }

    #[test]
    fn test_map_keeps_state() {
        let state: LoadState<Vec<u8>> = LoadState::Loaded(vec![1, 2, 3]);
        assert_eq!(state.map(|v| v.len()), LoadState::Loaded(3));

        let empty: LoadState<Vec<u8>> = LoadState::Empty;
        assert_eq!(empty.map(|v| v.len()), LoadState::Empty);
    }
}
