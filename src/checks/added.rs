//! Check for added names.

use super::{names_equal, Checker, Mode};
use crate::checks::verdict::{Verdict, VerdictBuilder};
use crate::resolver::{RecordType, ResolveResult, ResolveStatus};

pub(super) async fn run(chk: &Checker<'_>, mode: Mode, hostname: &str, value: &str) -> Verdict {
    let roles = chk.roles(mode);
    let name = chk.canonicalize(hostname);
    let target = chk.canonicalize(value);
    let mut v = VerdictBuilder::new();

    // A brand-new name must still be absent from the pre-change server.
    if roles.is_check {
        match chk.resolver.resolve_forward(&name, roles.reference).await {
            ResolveResult::Answer(_) => {
                return v.fail(format!(
                    "new name {hostname} returned valid result from {} server - cannot add a name that already exists ({})",
                    roles.reference_label, roles.reference_label
                ));
            }
            ResolveResult::Status(ResolveStatus::NxDomain) => {}
            ResolveResult::Status(code) => {
                return v.fail(format!(
                    "{} server returned status {code} for name {hostname} ({})",
                    roles.reference_label, roles.reference_label
                ));
            }
        }
    }

    let answer = match chk.resolver.resolve_forward(&name, roles.candidate).await {
        ResolveResult::Answer(answer) => answer,
        ResolveResult::Status(code) => {
            return v.fail(format!(
                "status {code} for name {hostname} ({})",
                roles.candidate_label
            ));
        }
    };

    if roles.is_check {
        v.secondary(format!(
            "{} server returns NXDOMAIN for {hostname} ({})",
            roles.reference_label, roles.reference_label
        ));
    }

    if !(names_equal(&answer.data, value) || names_equal(&answer.data, &target)) {
        return v.fail(format!(
            "{hostname} resolves to {} instead of {value} ({})",
            answer.data, roles.candidate_label
        ));
    }

    if chk.profile.have_reverse_dns && answer.record_type == RecordType::A {
        match chk.resolver.resolve_reverse(value, roles.candidate).await {
            ResolveResult::Status(code) => {
                v.warning(format!(
                    "REVERSE NG: got status {code} for name {value} ({})",
                    roles.candidate_label
                ));
            }
            ResolveResult::Answer(rev)
                if names_equal(&rev.data, hostname) || names_equal(&rev.data, &name) =>
            {
                v.secondary(format!(
                    "REVERSE OK: {value} => {} ({})",
                    rev.data, roles.candidate_label
                ));
            }
            ResolveResult::Answer(rev) => {
                v.warning(format!(
                    "REVERSE NG: got answer {} for name {value} ({})",
                    rev.data, roles.candidate_label
                ));
            }
        }
    }

    v.pass(format!("{hostname} => {value} ({})", roles.candidate_label))
}
