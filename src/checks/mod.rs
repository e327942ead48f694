//! The verification engine.
//!
//! Four operations — added, removed, renamed, changed — each runnable in two
//! temporal modes. In [`Mode::Check`] (pre-promotion) the test server is the
//! *candidate* expected to show the staged change and the prod server is the
//! *reference* holding the pre-image. In [`Mode::Verify`] (post-promotion)
//! the roles swap: prod is the candidate that must now match what test
//! showed. The operations are written once against those roles; only
//! pre-image preconditions (which have no post-change analogue) are gated on
//! check mode.
//!
//! Every check is a single linear decision tree: the first failure seals the
//! verdict and returns. Reverse-DNS and TTL sub-checks only ever add
//! secondary notes or warnings, never flip the outcome.

mod added;
mod changed;
mod removed;
mod renamed;
mod verdict;

pub use verdict::{Verdict, VerdictBuilder};

use crate::config::Profile;
use crate::parser::ChangeRecord;
use crate::resolver::Resolver;


/// Temporal mode of a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Pre-promotion: the staged change should be visible on TEST while PROD
    /// still shows the old state.
    Check,
    /// Post-promotion: PROD should now show the change.
    Verify,
}

/// Executes verification checks against the configured nameservers.
///
/// Stateless between calls: each check sees only the read-only profile and
/// the resolver capability.
pub struct Checker<'a> {
    profile: &'a Profile,
    resolver: &'a dyn Resolver,
}

/// Which server plays which part for a given [`Mode`].
struct Roles<'a> {
    candidate: &'a str,
    candidate_label: &'static str,
    reference: &'a str,
    reference_label: &'static str,
    is_check: bool,
}

impl<'a> Checker<'a> {
    /// Creates a checker over a profile and resolver capability.
    pub fn new(profile: &'a Profile, resolver: &'a dyn Resolver) -> Self {
        Self { profile, resolver }
    }

    /// Runs the check matching the change record's variant.
    pub async fn check(&self, record: &ChangeRecord, mode: Mode) -> Verdict {
        match record {
            ChangeRecord::Add { hostname, value } => self.added(mode, hostname, value).await,
            ChangeRecord::Remove { hostname } => self.removed(mode, hostname).await,
            ChangeRecord::Rename { old_name, new_name } => {
                self.renamed(mode, old_name, new_name).await
            }
            ChangeRecord::Change { hostname, new_value } => {
                self.changed(mode, hostname, new_value).await
            }
        }
    }

    /// Checks that `hostname` is a new record resolving to `value`.
    pub async fn added(&self, mode: Mode, hostname: &str, value: &str) -> Verdict {
        added::run(self, mode, hostname, value).await
    }

    /// Checks that `hostname` no longer resolves.
    pub async fn removed(&self, mode: Mode, hostname: &str) -> Verdict {
        removed::run(self, mode, hostname).await
    }

    /// Checks that the record moved from `old_name` to `new_name` with its
    /// value intact.
    pub async fn renamed(&self, mode: Mode, old_name: &str, new_name: &str) -> Verdict {
        renamed::run(self, mode, old_name, new_name).await
    }

    /// Checks that `hostname` now resolves to `new_value`.
    pub async fn changed(&self, mode: Mode, hostname: &str, new_value: &str) -> Verdict {
        changed::run(self, mode, hostname, new_value).await
    }

    fn roles(&self, mode: Mode) -> Roles<'_> {
        match mode {
            Mode::Check => Roles {
                candidate: &self.profile.server_test,
                candidate_label: "TEST",
                reference: &self.profile.server_prod,
                reference_label: "PROD",
                is_check: true,
            },
            Mode::Verify => Roles {
                candidate: &self.profile.server_prod,
                candidate_label: "PROD",
                reference: &self.profile.server_test,
                reference_label: "TEST",
                is_check: false,
            },
        }
    }

    fn canonicalize(&self, name: &str) -> String {
        canonicalize(name, &self.profile.default_domain)
    }
}

/// Appends the default domain to bare labels; names that already contain a
/// dot pass through unchanged.
fn canonicalize(name: &str, default_domain: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{name}{default_domain}")
    }
}

/// Name/data equality: one trailing root dot is insignificant, as is ASCII
/// case.
fn names_equal(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
