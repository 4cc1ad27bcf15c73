//! Access policy evaluated by the HTTP layer before mutating requests.
//!
//! The deployment this service ships into treats the inventory as a
//! read-only mirror of an upstream dealer management system, so the
//! default posture blocks every write. Content generation is a pure
//! computation over vehicle data and stays writable via path exemptions.

/// Whether the service accepts mutating requests at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

/// Decides which request paths may carry mutating verbs.
///
/// A `ReadWrite` policy permits everything. A `ReadOnly` policy rejects
/// mutations unless the request path starts with one of the registered
/// exempt prefixes.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    mode: AccessMode,
    exempt_prefixes: Vec<String>,
}

impl AccessPolicy {
    pub fn read_only() -> Self {
        Self {
            mode: AccessMode::ReadOnly,
            exempt_prefixes: Vec::new(),
        }
    }

    pub fn read_write() -> Self {
        Self {
            mode: AccessMode::ReadWrite,
            exempt_prefixes: Vec::new(),
        }
    }

    /// Adds a path prefix whose routes stay writable under `ReadOnly`.
    pub fn exempting(mut self, prefix: impl Into<String>) -> Self {
        self.exempt_prefixes.push(prefix.into());
        self
    }

    /// Returns true when a mutating verb on `path` should be allowed through.
    pub fn permits_write(&self, path: &str) -> bool {
        match self.mode {
            AccessMode::ReadWrite => true,
            AccessMode::ReadOnly => self
                .exempt_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str())),
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::read_only()
    }
}
