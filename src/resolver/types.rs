//! Typed DNS query outcomes.
//!
//! The verification engine never sees a resolver error: every query ends in
//! either an authoritative [`ResolveAnswer`] or a [`ResolveStatus`] code that
//! the engine branches on as a first-class value.

use std::fmt;

/// Outcome of a single forward or reverse DNS query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// The server returned an authoritative answer.
    Answer(ResolveAnswer),
    /// The server returned a response code instead of an answer.
    Status(ResolveStatus),
}

/// A single-record view of a successful resolution.
///
/// Mirrors what a staging comparison needs from an answer section: the first
/// record's name, presentation-format data, type, class, and TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveAnswer {
    /// Owner name of the record, as returned by the server.
    pub name: String,
    /// Record data in presentation format (an IPv4 address for A, a target
    /// name for CNAME/PTR).
    pub data: String,
    /// Resource record type.
    pub record_type: RecordType,
    /// Record class, e.g. `IN`.
    pub class: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
}

/// Resource record types the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// IPv4 host address.
    A,
    /// IPv6 host address.
    Aaaa,
    /// Alias to another name.
    Cname,
    /// Reverse-DNS pointer.
    Ptr,
    /// Any other RR type, by type code.
    Other(u16),
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::Aaaa => f.write_str("AAAA"),
            RecordType::Cname => f.write_str("CNAME"),
            RecordType::Ptr => f.write_str("PTR"),
            RecordType::Other(code) => write!(f, "TYPE{code}"),
        }
    }
}

/// Non-answer outcome of a query.
///
/// Covers the RFC 1035 response codes plus [`ResolveStatus::Timeout`], the
/// resolver-defined code for a query that produced no timely response.
/// Transport failures are mapped to `ServFail` by the resolver rather than
/// surfacing as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    /// The queried name does not exist (RCODE 3).
    NxDomain,
    /// Server-side resolution failure (RCODE 2).
    ServFail,
    /// The server refused the query (RCODE 5).
    Refused,
    /// The server could not interpret the query (RCODE 1).
    FormErr,
    /// The server does not implement the query type (RCODE 4).
    NotImp,
    /// No response arrived within the resolver's deadline.
    Timeout,
    /// Any other response code, by RCODE value.
    Other(u16),
}

impl fmt::Display for ResolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveStatus::NxDomain => f.write_str("NXDOMAIN"),
            ResolveStatus::ServFail => f.write_str("SERVFAIL"),
            ResolveStatus::Refused => f.write_str("REFUSED"),
            ResolveStatus::FormErr => f.write_str("FORMERR"),
            ResolveStatus::NotImp => f.write_str("NOTIMP"),
            ResolveStatus::Timeout => f.write_str("TIMEOUT"),
            ResolveStatus::Other(code) => write!(f, "RCODE{code}"),
        }
    }
}
