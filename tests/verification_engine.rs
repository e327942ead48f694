//! End-to-end engine tests through the public API, with an in-memory
//! resolver fixture standing in for the test and prod nameservers.

use std::collections::HashMap;

use async_trait::async_trait;
use dnsvet::checks::{Checker, Mode};
use dnsvet::parser::parse_line;
use dnsvet::resolver::{RecordType, ResolveAnswer, ResolveResult, ResolveStatus, Resolver};
use dnsvet::Profile;

/// Resolver fixture keyed by `(server, name)`; anything unknown is NXDOMAIN.
#[derive(Default)]
struct FixtureResolver {
    forward: HashMap<(String, String), ResolveResult>,
    reverse: HashMap<(String, String), ResolveResult>,
}

impl FixtureResolver {
    fn new() -> Self {
        Self::default()
    }

    fn a(mut self, server: &str, name: &str, data: &str) -> Self {
        self.forward.insert(
            (server.to_string(), name.to_string()),
            ResolveResult::Answer(ResolveAnswer {
                name: name.to_string(),
                data: data.to_string(),
                record_type: RecordType::A,
                class: "IN".to_string(),
                ttl: 360,
            }),
        );
        self
    }

    fn cname(mut self, server: &str, name: &str, data: &str) -> Self {
        self.forward.insert(
            (server.to_string(), name.to_string()),
            ResolveResult::Answer(ResolveAnswer {
                name: name.to_string(),
                data: data.to_string(),
                record_type: RecordType::Cname,
                class: "IN".to_string(),
                ttl: 360,
            }),
        );
        self
    }

    fn fwd_status(mut self, server: &str, name: &str, code: ResolveStatus) -> Self {
        self.forward.insert(
            (server.to_string(), name.to_string()),
            ResolveResult::Status(code),
        );
        self
    }

    fn ptr(mut self, server: &str, address: &str, data: &str) -> Self {
        self.reverse.insert(
            (server.to_string(), address.to_string()),
            ResolveResult::Answer(ResolveAnswer {
                name: address.to_string(),
                data: data.to_string(),
                record_type: RecordType::Ptr,
                class: "IN".to_string(),
                ttl: 360,
            }),
        );
        self
    }
}

#[async_trait]
impl Resolver for FixtureResolver {
    async fn resolve_forward(&self, name: &str, server: &str) -> ResolveResult {
        self.forward
            .get(&(server.to_string(), name.to_string()))
            .cloned()
            .unwrap_or(ResolveResult::Status(ResolveStatus::NxDomain))
    }

    async fn resolve_reverse(&self, address: &str, server: &str) -> ResolveResult {
        self.reverse
            .get(&(server.to_string(), address.to_string()))
            .cloned()
            .unwrap_or(ResolveResult::Status(ResolveStatus::NxDomain))
    }
}

fn profile() -> Profile {
    Profile {
        server_test: "1.2.3.5".to_string(),
        server_prod: "1.2.3.4".to_string(),
        default_domain: ".example.com".to_string(),
        have_reverse_dns: true,
        ignore_ttl: false,
        sleep: 0.0,
    }
}

/// A change set staged correctly on TEST: every check mode verdict passes.
#[tokio::test]
async fn test_staged_change_set_passes_check_mode() {
    let resolver = FixtureResolver::new()
        // added A record, with its PTR
        .a("1.2.3.5", "newhostname.example.com", "10.0.0.1")
        .ptr("1.2.3.5", "10.0.0.1", "newhostname.example.com")
        // added CNAME
        .cname("1.2.3.5", "newcname.example.com", "newhostname.example.com")
        // removal staged: prod still has it, test does not
        .a("1.2.3.4", "removedname1.example.com", "10.0.0.2")
        // rename staged: old on prod, new on test, same value
        .a("1.2.3.4", "oldname.example.com", "10.0.0.3")
        .a("1.2.3.5", "newname.example.com", "10.0.0.3")
        .ptr("1.2.3.5", "10.0.0.3", "newname.example.com")
        // value change staged
        .a("1.2.3.4", "changehost.example.com", "10.0.0.4")
        .a("1.2.3.5", "changehost.example.com", "10.0.0.5")
        .ptr("1.2.3.5", "10.0.0.5", "changehost.example.com");

    let lines = [
        "add newhostname value 10.0.0.1",
        "add newcname value newhostname",
        "remove removedname1",
        "rename oldname to newname",
        "change changehost to 10.0.0.5",
    ];

    let profile = profile();
    let checker = Checker::new(&profile, &resolver);
    for line in lines {
        let record = parse_line(line).unwrap();
        let verdict = checker.check(&record, Mode::Check).await;
        assert!(verdict.passed, "{line}: {}", verdict.message);
    }
}

/// The same end state promoted to PROD: every verify mode verdict passes.
#[tokio::test]
async fn test_promoted_change_set_passes_verify_mode() {
    let resolver = FixtureResolver::new()
        // both servers now show the post-change state
        .a("1.2.3.4", "newhostname.example.com", "10.0.0.1")
        .a("1.2.3.5", "newhostname.example.com", "10.0.0.1")
        .ptr("1.2.3.4", "10.0.0.1", "newhostname.example.com")
        .cname("1.2.3.4", "newcname.example.com", "newhostname.example.com")
        .a("1.2.3.4", "newname.example.com", "10.0.0.3")
        .a("1.2.3.5", "newname.example.com", "10.0.0.3")
        .ptr("1.2.3.4", "10.0.0.3", "newname.example.com")
        .a("1.2.3.4", "changehost.example.com", "10.0.0.5")
        .a("1.2.3.5", "changehost.example.com", "10.0.0.5")
        .ptr("1.2.3.4", "10.0.0.5", "changehost.example.com");

    let lines = [
        "add newhostname value 10.0.0.1",
        "add newcname value newhostname",
        "remove removedname1",
        "rename oldname to newname",
        "change changehost to 10.0.0.5",
    ];

    let profile = profile();
    let checker = Checker::new(&profile, &resolver);
    for line in lines {
        let record = parse_line(line).unwrap();
        let verdict = checker.check(&record, Mode::Verify).await;
        assert!(verdict.passed, "{line}: {}", verdict.message);
    }
    for line in lines {
        let record = parse_line(line).unwrap();
        let verdict = checker.check(&record, Mode::Verify).await;
        assert!(
            verdict.message.ends_with("(PROD)"),
            "verify verdicts describe PROD: {}",
            verdict.message
        );
    }
}

/// Nothing staged at all: check mode fails each change with a pointed message.
#[tokio::test]
async fn test_unstaged_change_set_fails_check_mode() {
    let resolver = FixtureResolver::new()
        // prod pre-images exist, but test mirrors prod instead of the changes
        .a("1.2.3.4", "removedname1.example.com", "10.0.0.2")
        .a("1.2.3.5", "removedname1.example.com", "10.0.0.2")
        .a("1.2.3.4", "oldname.example.com", "10.0.0.3")
        .a("1.2.3.4", "changehost.example.com", "10.0.0.4")
        .a("1.2.3.5", "changehost.example.com", "10.0.0.4");

    let profile = profile();
    let checker = Checker::new(&profile, &resolver);

    let cases = [
        (
            "add newhostname value 10.0.0.1",
            "status NXDOMAIN for name newhostname (TEST)",
        ),
        (
            "remove removedname1",
            "removedname1 returned valid answer, not removed (TEST)",
        ),
        (
            "rename oldname to newname",
            "newname got status NXDOMAIN (TEST)",
        ),
        (
            "change changehost to 10.0.0.5",
            "changehost resolves to 10.0.0.4 instead of 10.0.0.5 (TEST)",
        ),
    ];
    for (line, expected_message) in cases {
        let record = parse_line(line).unwrap();
        let verdict = checker.check(&record, Mode::Check).await;
        assert!(!verdict.passed, "{line} should fail");
        assert_eq!(verdict.message, expected_message, "line: {line}");
    }
}

/// A SERVFAIL from either server is surfaced in the verdict, never a panic.
#[tokio::test]
async fn test_servfail_surfaces_in_verdict() {
    let resolver = FixtureResolver::new()
        .fwd_status(
            "1.2.3.4",
            "flaky.example.com",
            ResolveStatus::ServFail,
        )
        .a("1.2.3.5", "flaky.example.com", "10.0.0.9");

    let profile = profile();
    let checker = Checker::new(&profile, &resolver);
    let record = parse_line("change flaky to 10.0.0.9").unwrap();
    let verdict = checker.check(&record, Mode::Check).await;
    assert!(!verdict.passed);
    assert_eq!(
        verdict.message,
        "flaky got status SERVFAIL from PROD - cannot change a name that doesn't exist (PROD)"
    );
}

/// Timeouts are just another status code to the engine.
#[tokio::test]
async fn test_timeout_status_fails_cleanly() {
    let resolver = FixtureResolver::new()
        .a("1.2.3.4", "slowhost.example.com", "10.0.0.7")
        .fwd_status("1.2.3.5", "slowhost.example.com", ResolveStatus::Timeout);

    let profile = profile();
    let checker = Checker::new(&profile, &resolver);
    let verdict = checker
        .check(&parse_line("remove slowhost").unwrap(), Mode::Check)
        .await;
    assert!(!verdict.passed);
    assert_eq!(verdict.message, "slowhost returned status TIMEOUT (TEST)");
}
