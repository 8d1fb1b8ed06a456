//! Change notification for hosts that watch providers.
//!
//! Archives are immutable for a provider's lifetime, so the only token a
//! provider ever hands out is [`NullChangeToken`].

/// Reports whether the watched content changed.
pub trait ChangeToken: Send + Sync {
    /// Returns `true` once a change has happened.
    fn has_changed(&self) -> bool;

    /// Returns `true` if the token invokes callbacks on change.
    fn active_change_callbacks(&self) -> bool;
}

/// A token that never changes and never calls back.
///
/// Stateless; every `watch` call returns a reference to the same constant.
///
/// # Examples
///
/// ```
/// use zipfs_core::ChangeToken;
/// use zipfs_core::NullChangeToken;
///
/// let token = NullChangeToken::singleton();
/// assert!(!token.has_changed());
/// assert!(!token.active_change_callbacks());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullChangeToken;

impl NullChangeToken {
    /// Returns the shared instance.
    #[must_use]
    pub fn singleton() -> &'static Self {
        &Self
    }
}

impl ChangeToken for NullChangeToken {
    fn has_changed(&self) -> bool {
        false
    }

    fn active_change_callbacks(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_change_token() {
        let token = NullChangeToken::singleton();
        assert!(!token.has_changed());
        assert!(!token.active_change_callbacks());
    }

    #[test]
    fn test_null_change_token_as_trait_object() {
        let token: &dyn ChangeToken = NullChangeToken::singleton();
        assert!(!token.has_changed());
        assert_eq!(*NullChangeToken::singleton(), NullChangeToken);
    }
}
