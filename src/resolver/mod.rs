//! DNS resolution capability.
//!
//! The verification engine talks to nameservers only through the [`Resolver`]
//! trait: a forward lookup by name and a reverse lookup by address, each
//! addressed to an explicit server. The production implementation
//! ([`HickoryResolver`]) wraps `hickory-resolver`; tests supply an in-memory
//! fixture keyed by `(server, name)`.

mod hickory;
mod types;

pub use hickory::HickoryResolver;
pub use types::{RecordType, ResolveAnswer, ResolveResult, ResolveStatus};

use async_trait::async_trait;

/// Stateless DNS query capability, safe for concurrent invocation.
///
/// Implementations must map every failure — including timeouts and transport
/// errors — to a [`ResolveResult::Status`]; the engine never handles resolver
/// errors.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolves `name` against the given server, returning the first answer
    /// record or a status code.
    async fn resolve_forward(&self, name: &str, server: &str) -> ResolveResult;

    /// Looks up the PTR record for `address` against the given server.
    async fn resolve_reverse(&self, address: &str, server: &str) -> ResolveResult;
}
