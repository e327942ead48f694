//! Check for removed names.

use super::{Checker, Mode};
use crate::checks::verdict::{Verdict, VerdictBuilder};
use crate::resolver::{ResolveResult, ResolveStatus};

pub(super) async fn run(chk: &Checker<'_>, mode: Mode, hostname: &str) -> Verdict {
    let roles = chk.roles(mode);
    let name = chk.canonicalize(hostname);
    let mut v = VerdictBuilder::new();

    // A removal only makes sense while the pre-change server still holds the
    // record as the known-good pre-image.
    let former = if roles.is_check {
        match chk.resolver.resolve_forward(&name, roles.reference).await {
            ResolveResult::Answer(answer) => Some(answer),
            ResolveResult::Status(code) => {
                return v.fail(format!(
                    "{hostname} got status {code} from {} - cannot remove a name that doesn't exist ({})",
                    roles.reference_label, roles.reference_label
                ));
            }
        }
    } else {
        None
    };

    match chk.resolver.resolve_forward(&name, roles.candidate).await {
        ResolveResult::Status(ResolveStatus::NxDomain) => {
            if let Some(former) = former {
                v.secondary(format!(
                    "{} value was {} ({})",
                    roles.reference_label, former.data, roles.reference_label
                ));
                // a leftover PTR for the former address means reverse DNS was
                // not cleaned up with the record
                if let ResolveResult::Answer(rev) = chk
                    .resolver
                    .resolve_reverse(&former.data, roles.candidate)
                    .await
                {
                    v.warning(format!(
                        "{hostname} appears to still have reverse DNS set to {} ({})",
                        rev.data, roles.candidate_label
                    ));
                }
            }
            v.pass(format!(
                "{hostname} removed, got status NXDOMAIN ({})",
                roles.candidate_label
            ))
        }
        ResolveResult::Status(code) => v.fail(format!(
            "{hostname} returned status {code} ({})",
            roles.candidate_label
        )),
        ResolveResult::Answer(_) => v.fail(format!(
            "{hostname} returned valid answer, not removed ({})",
            roles.candidate_label
        )),
    }
}
