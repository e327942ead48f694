//! DNS resolver initialization.

use std::sync::Arc;

use crate::config::Profile;
use crate::error_handling::InitializationError;
use crate::resolver::HickoryResolver;

/// Builds the production resolver capability for the profile's nameservers.
///
/// Returned in an `Arc` so concurrent runners can share it.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` when a configured server
/// address cannot be parsed.
pub fn init_resolver(profile: &Profile) -> Result<Arc<HickoryResolver>, InitializationError> {
    Ok(Arc::new(HickoryResolver::new(profile)?))
}
