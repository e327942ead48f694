//! Production resolver backed by `hickory-resolver`.
//!
//! One `TokioAsyncResolver` is built per configured nameserver so that the
//! test and prod servers are queried directly rather than through the system
//! resolver path.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, Record, RecordType as WireRecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::config::Profile;
use crate::error_handling::InitializationError;
use crate::resolver::{RecordType, Resolver, ResolveAnswer, ResolveResult, ResolveStatus};

/// [`Resolver`] implementation that queries each configured nameserver
/// directly over UDP.
pub struct HickoryResolver {
    resolvers: HashMap<String, TokioAsyncResolver>,
}

impl HickoryResolver {
    /// Builds one resolver per distinct server address in the profile.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::DnsResolverError` if a server address
    /// cannot be parsed as an IP address (with optional `:port`).
    pub fn new(profile: &Profile) -> Result<Self, InitializationError> {
        let mut resolvers = HashMap::new();
        for server in [&profile.server_test, &profile.server_prod] {
            if server.is_empty() || resolvers.contains_key(server.as_str()) {
                continue;
            }
            resolvers.insert(server.clone(), build_resolver(server)?);
        }
        Ok(Self { resolvers })
    }

    fn resolver_for(&self, server: &str) -> Option<&TokioAsyncResolver> {
        let resolver = self.resolvers.get(server);
        if resolver.is_none() {
            log::warn!("no resolver configured for server {server}");
        }
        resolver
    }
}

#[async_trait]
impl Resolver for HickoryResolver {
    async fn resolve_forward(&self, name: &str, server: &str) -> ResolveResult {
        let Some(resolver) = self.resolver_for(server) else {
            return ResolveResult::Status(ResolveStatus::ServFail);
        };
        match resolver.lookup(name, WireRecordType::A).await {
            Ok(lookup) => match first_record_answer(lookup.records()) {
                Some(answer) => ResolveResult::Answer(answer),
                None => ResolveResult::Status(ResolveStatus::NxDomain),
            },
            Err(e) => ResolveResult::Status(status_from_error(e.kind(), name, server)),
        }
    }

    async fn resolve_reverse(&self, address: &str, server: &str) -> ResolveResult {
        let Some(resolver) = self.resolver_for(server) else {
            return ResolveResult::Status(ResolveStatus::ServFail);
        };
        let ip: IpAddr = match address.parse() {
            Ok(ip) => ip,
            Err(_) => {
                log::debug!("cannot reverse-resolve {address}: not an IP address");
                return ResolveResult::Status(ResolveStatus::FormErr);
            }
        };
        match resolver.reverse_lookup(ip).await {
            Ok(lookup) => match first_record_answer(lookup.as_lookup().records()) {
                Some(answer) => ResolveResult::Answer(answer),
                None => ResolveResult::Status(ResolveStatus::NxDomain),
            },
            Err(e) => ResolveResult::Status(status_from_error(e.kind(), address, server)),
        }
    }
}

fn build_resolver(server: &str) -> Result<TokioAsyncResolver, InitializationError> {
    let addr = parse_server_addr(server)?;

    let mut config = ResolverConfig::new();
    config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // ndots = 0 keeps the resolver from appending search domains; the engine
    // does its own default-domain canonicalization.
    opts.ndots = 0;

    Ok(TokioAsyncResolver::tokio(config, opts))
}

/// Parses `1.2.3.4` or `1.2.3.4:5353` into a socket address, defaulting to
/// port 53.
fn parse_server_addr(server: &str) -> Result<SocketAddr, InitializationError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| {
            InitializationError::DnsResolverError(format!(
                "invalid nameserver address {server:?} (expected an IP address, optionally with :port)"
            ))
        })
}

/// Single-record view of an answer section, matching the engine's data model.
fn first_record_answer(records: &[Record]) -> Option<ResolveAnswer> {
    let record = records.first()?;
    let rdata = record.data()?;
    let data = match rdata {
        RData::A(a) => a.to_string(),
        RData::AAAA(a) => a.to_string(),
        RData::CNAME(c) => strip_root(&c.0.to_utf8()),
        RData::PTR(p) => strip_root(&p.0.to_utf8()),
        other => strip_root(&other.to_string()),
    };
    Some(ResolveAnswer {
        name: strip_root(&record.name().to_utf8()),
        data,
        record_type: record_type_from_wire(record.record_type()),
        class: record.dns_class().to_string(),
        ttl: record.ttl(),
    })
}

fn record_type_from_wire(rt: WireRecordType) -> RecordType {
    match rt {
        WireRecordType::A => RecordType::A,
        WireRecordType::AAAA => RecordType::Aaaa,
        WireRecordType::CNAME => RecordType::Cname,
        WireRecordType::PTR => RecordType::Ptr,
        other => RecordType::Other(u16::from(other)),
    }
}

fn strip_root(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Maps a resolver error onto a status code; transport failures become
/// SERVFAIL rather than unwinding into the engine.
fn status_from_error(kind: &ResolveErrorKind, query: &str, server: &str) -> ResolveStatus {
    match kind {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => ResolveStatus::NxDomain,
            ResponseCode::ServFail => ResolveStatus::ServFail,
            ResponseCode::Refused => ResolveStatus::Refused,
            ResponseCode::FormErr => ResolveStatus::FormErr,
            ResponseCode::NotImp => ResolveStatus::NotImp,
            // An empty answer with NOERROR means the name has no record of
            // the queried type; the checks treat that like a missing name.
            ResponseCode::NoError => ResolveStatus::NxDomain,
            other => ResolveStatus::Other(u16::from(other)),
        },
        ResolveErrorKind::Timeout => ResolveStatus::Timeout,
        other => {
            log::warn!("query for {query} against {server} failed: {other}");
            ResolveStatus::ServFail
        }
    }
}
