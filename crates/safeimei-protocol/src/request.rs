//! Lifecycle of a single in-flight boundary call

/// State of a form's pending request
///
/// Triggers are disabled while a request is [`RequestState::Pending`], so a
/// second click cannot start an overlapping call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing requested yet
    Idle,
    /// Waiting on the registry
    Pending,
    /// The last request succeeded
    Ready(T),
    /// The last request failed with a user-facing message
    Failed(String),
}

// Manual impl so `T` needs no `Default`
impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    /// Move to `Pending` unless a request is already in flight
    ///
    /// Returns `false` when the caller should not start a new request.
    pub fn try_begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Whether a request is in flight
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Record the outcome of the request
    pub fn settle<E: ToString>(&mut self, outcome: std::result::Result<T, E>) {
        *self = match outcome {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    /// The successful value, if any
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_begin_blocks_overlap() {
        let mut state: RequestState<u32> = RequestState::default();
        assert!(state.try_begin());
        assert!(state.is_pending());
        assert!(!state.try_begin());
    }

    #[test]
    fn test_settle_success() {
        let mut state = RequestState::Pending;
        state.settle::<String>(Ok(7));
        assert_eq!(state.ready(), Some(&7));
        assert!(state.try_begin());
    }

    #[test]
    fn test_settle_failure_keeps_message() {
        let mut state: RequestState<u32> = RequestState::Pending;
        state.settle(Err("registry unavailable"));
        assert_eq!(state.error(), Some("registry unavailable"));
        assert_eq!(state.ready(), None);
    }
}
