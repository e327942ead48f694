//! Check for changed values (same name, record value changes).

use super::{names_equal, Checker, Mode};
use crate::checks::verdict::{Verdict, VerdictBuilder};
use crate::resolver::{RecordType, ResolveResult};

pub(super) async fn run(
    chk: &Checker<'_>,
    mode: Mode,
    hostname: &str,
    new_value: &str,
) -> Verdict {
    let roles = chk.roles(mode);
    let name = chk.canonicalize(hostname);
    let target = chk.canonicalize(new_value);
    let mut v = VerdictBuilder::new();

    let reference = match chk.resolver.resolve_forward(&name, roles.reference).await {
        ResolveResult::Answer(answer) => answer,
        ResolveResult::Status(code) => {
            return v.fail(format!(
                "{hostname} got status {code} from {} - cannot change a name that doesn't exist ({})",
                roles.reference_label, roles.reference_label
            ));
        }
    };

    let candidate = match chk.resolver.resolve_forward(&name, roles.candidate).await {
        ResolveResult::Answer(answer) => answer,
        ResolveResult::Status(code) => {
            return v.fail(format!(
                "{hostname} got status {code} ({})",
                roles.candidate_label
            ));
        }
    };

    if !(names_equal(&candidate.data, new_value) || names_equal(&candidate.data, &target)) {
        return v.fail(format!(
            "{hostname} resolves to {} instead of {new_value} ({})",
            candidate.data, roles.candidate_label
        ));
    }

    if chk.profile.have_reverse_dns && candidate.record_type == RecordType::A {
        match chk.resolver.resolve_reverse(new_value, roles.candidate).await {
            ResolveResult::Status(_) => {
                v.warning(format!(
                    "REVERSE NG: no reverse DNS appears to be set for {new_value} ({})",
                    roles.candidate_label
                ));
            }
            ResolveResult::Answer(rev)
                if names_equal(&rev.data, hostname) || names_equal(&rev.data, &name) =>
            {
                v.secondary(format!(
                    "REVERSE OK: {new_value} => {} ({})",
                    rev.data, roles.candidate_label
                ));
            }
            ResolveResult::Answer(rev) => {
                v.warning(format!(
                    "REVERSE NG: got answer {} for name {new_value} ({})",
                    rev.data, roles.candidate_label
                ));
            }
        }
    }

    // Pre-change the reference still shows the old value, which is worth
    // naming in the message; post-change both servers already agree.
    if names_equal(&reference.data, &candidate.data) {
        v.pass(format!(
            "change {hostname} value to '{new_value}' ({})",
            roles.candidate_label
        ))
    } else {
        v.pass(format!(
            "change {hostname} from '{}' to '{new_value}' ({})",
            reference.data, roles.candidate_label
        ))
    }
}
