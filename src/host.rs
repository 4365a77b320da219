//! Host identity lookup.
//!
//! The name the operating system reports for the current machine or
//! container. Handlers reach it through the `HostIdentity` trait so tests can
//! swap in a fixed or failing implementation.

/// Host identity lookup error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("host name is empty")]
    Empty,

    #[error("host name is not valid UTF-8: {0}")]
    NotUnicode(String),
}

/// Source of the host name reported in responses.
pub trait HostIdentity: Send + Sync + 'static {
    fn hostname(&self) -> Result<String, LookupError>;
}

/// Queries the operating system on every call. An empty name is reported
/// as `LookupError::Empty` rather than returned as `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostIdentity for SystemHost {
    fn hostname(&self) -> Result<String, LookupError> {
        let name = gethostname::gethostname()
            .into_string()
            .map_err(|raw| LookupError::NotUnicode(raw.to_string_lossy().into_owned()))?;

        if name.is_empty() {
            return Err(LookupError::Empty);
        }
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_host_matches_os() {
        let expected = gethostname::gethostname().into_string().unwrap();
        assert_eq!(SystemHost.hostname().unwrap(), expected);
    }

    #[test]
    fn test_system_host_is_stable() {
        assert_eq!(SystemHost.hostname(), SystemHost.hostname());
    }
}
