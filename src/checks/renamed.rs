//! Check for renamed names (same value, record name changes).

use super::{names_equal, Checker, Mode};
use crate::checks::verdict::{Verdict, VerdictBuilder};
use crate::resolver::{RecordType, ResolveResult};

pub(super) async fn run(
    chk: &Checker<'_>,
    mode: Mode,
    old_name: &str,
    new_name: &str,
) -> Verdict {
    let roles = chk.roles(mode);
    let old_fqdn = chk.canonicalize(old_name);
    let new_fqdn = chk.canonicalize(new_name);
    let mut v = VerdictBuilder::new();

    // Pre-change the baseline value still lives at the old name; post-change
    // both servers should agree on the new name.
    let (reference_query, reference_raw) = if roles.is_check {
        (&old_fqdn, old_name)
    } else {
        (&new_fqdn, new_name)
    };

    let reference = match chk
        .resolver
        .resolve_forward(reference_query, roles.reference)
        .await
    {
        ResolveResult::Answer(answer) => answer,
        ResolveResult::Status(code) => {
            return v.fail(format!(
                "{reference_raw} got status {code} from {} - cannot rename a name that doesn't exist ({})",
                roles.reference_label, roles.reference_label
            ));
        }
    };

    let candidate = match chk.resolver.resolve_forward(&new_fqdn, roles.candidate).await {
        ResolveResult::Answer(answer) => answer,
        ResolveResult::Status(code) => {
            return v.fail(format!(
                "{new_name} got status {code} ({})",
                roles.candidate_label
            ));
        }
    };

    if !names_equal(&candidate.data, &reference.data) {
        return v.fail(format!(
            "{old_name} => {new_name} rename is bad, resolves to {} in {} and {} in {}",
            candidate.data, roles.candidate_label, reference.data, roles.reference_label
        ));
    }

    // Same record under a new name, so the TTLs should agree too.
    if !chk.profile.ignore_ttl && candidate.ttl != reference.ttl {
        v.warning(format!(
            "{new_name} TTL is {} on {} but {} on {}",
            candidate.ttl, roles.candidate_label, reference.ttl, roles.reference_label
        ));
    }

    if candidate.record_type == RecordType::A || reference.record_type == RecordType::A {
        match chk
            .resolver
            .resolve_reverse(&candidate.data, roles.candidate)
            .await
        {
            ResolveResult::Answer(rev)
                if names_equal(&rev.data, new_name) || names_equal(&rev.data, &new_fqdn) =>
            {
                v.secondary(format!(
                    "reverse DNS is set correctly for {} ({})",
                    candidate.data, roles.candidate_label
                ));
            }
            ResolveResult::Answer(rev) => {
                v.warning(format!(
                    "{old_name} appears to still have reverse DNS set to {} ({})",
                    rev.data, roles.candidate_label
                ));
            }
            ResolveResult::Status(_) => {
                v.warning(format!(
                    "no reverse DNS appears to be set for {} ({})",
                    candidate.data, roles.candidate_label
                ));
            }
        }
    }

    v.pass(format!(
        "rename {old_name} => {new_name} ({})",
        roles.candidate_label
    ))
}
