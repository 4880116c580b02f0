//! Rendering of resolved records.
//!
//! Pure, stateless transforms from an already-resolved record to a response
//! body. JSON uses the record's own serde field names; XML fills a fixed
//! template keyed by organisation code and service identifier.

use axum::http::{header, HeaderMap};
use std::fmt::Write;

use sds_types::models::duration::format_iso8601;
use sds_types::models::RoutingReliabilityRecord;

/// Which body the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl ResponseFormat {
    /// Accept headers mentioning xml get the XML template; everything else,
    /// including an absent header, gets JSON.
    pub fn negotiate(headers: &HeaderMap) -> Self {
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if accept.to_ascii_lowercase().contains("xml") {
            Self::Xml
        } else {
            Self::Json
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

/// Render the fixed XML template for a resolved record.
///
/// Optional elements (`persistDuration`, `retryInterval`) are omitted when
/// the record carries no value for them.
pub fn to_xml(record: &RoutingReliabilityRecord, org_code: &str, service_id: &str) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<routingEndpoint orgCode=\"{}\" serviceId=\"{}\">",
        escape(org_code),
        escape(service_id)
    );
    let _ = writeln!(out, "    <endPoint>{}</endPoint>", escape(&record.end_point));
    let _ = writeln!(out, "    <ackRequested>{}</ackRequested>", record.ack_requested);
    let _ = writeln!(
        out,
        "    <duplicateElimination>{}</duplicateElimination>",
        record.duplicate_elimination
    );
    let _ = writeln!(out, "    <syncReplyMode>{}</syncReplyMode>", record.sync_reply_mode);
    if let Some(duration) = record.persist_duration {
        let _ = writeln!(
            out,
            "    <persistDuration>{}</persistDuration>",
            format_iso8601(duration)
        );
    }
    let _ = writeln!(out, "    <retries>{}</retries>", record.retries);
    if let Some(interval) = record.retry_interval {
        let _ = writeln!(out, "    <retryInterval>{}</retryInterval>", format_iso8601(interval));
    }
    let _ = writeln!(out, "    <partyKey>{}</partyKey>", escape(&record.party_key));
    let _ = writeln!(out, "    <cpaId>{}</cpaId>", escape(&record.cpa_id));
    let _ = writeln!(out, "    <fqdn>{}</fqdn>", escape(&record.fqdn));
    let _ = writeln!(
        out,
        "    <uniqueIdentifier>{}</uniqueIdentifier>",
        escape(&record.unique_identifier)
    );
    out.push_str("</routingEndpoint>\n");
    out
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use sds_types::models::{AckRequested, DuplicateElimination, SyncReplyMode};
    use std::time::Duration;

    const ORG_CODE: &str = "R8008";
    const SERVICE_ID: &str = "urn:nhs:names:services:psis:REPC_IN150016UK05";

    fn record() -> RoutingReliabilityRecord {
        RoutingReliabilityRecord {
            end_point: "https://192.168.128.11/reliablemessaging/reliablerequest".to_string(),
            ack_requested: AckRequested::Always,
            duplicate_elimination: DuplicateElimination::Always,
            sync_reply_mode: SyncReplyMode::SignalsOnly,
            persist_duration: Some(Duration::from_secs(300)),
            retries: 2,
            retry_interval: Some(Duration::from_secs(60)),
            party_key: "R8008-0000806".to_string(),
            cpa_id: "S20001A000182".to_string(),
            fqdn: "192.168.128.11".to_string(),
            unique_identifier: "227319907548".to_string(),
        }
    }

    #[test]
    fn test_xml_format() {
        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<routingEndpoint orgCode=\"R8008\" serviceId=\"urn:nhs:names:services:psis:REPC_IN150016UK05\">
    <endPoint>https://192.168.128.11/reliablemessaging/reliablerequest</endPoint>
    <ackRequested>always</ackRequested>
    <duplicateElimination>always</duplicateElimination>
    <syncReplyMode>signals-only</syncReplyMode>
    <persistDuration>PT5M</persistDuration>
    <retries>2</retries>
    <retryInterval>PT1M</retryInterval>
    <partyKey>R8008-0000806</partyKey>
    <cpaId>S20001A000182</cpaId>
    <fqdn>192.168.128.11</fqdn>
    <uniqueIdentifier>227319907548</uniqueIdentifier>
</routingEndpoint>
";
        assert_eq!(to_xml(&record(), ORG_CODE, SERVICE_ID), expected);
    }

    #[test]
    fn test_xml_omits_absent_durations() {
        let mut r = record();
        r.persist_duration = None;
        r.retries = 0;
        r.retry_interval = None;
        let xml = to_xml(&r, ORG_CODE, SERVICE_ID);
        assert!(!xml.contains("persistDuration"));
        assert!(!xml.contains("retryInterval"));
        assert!(xml.contains("<retries>0</retries>"));
    }

    #[test]
    fn test_xml_escapes_values() {
        let mut r = record();
        r.end_point = "https://a.example/msg?x=1&y=<2>".to_string();
        let xml = to_xml(&r, ORG_CODE, SERVICE_ID);
        assert!(xml.contains("<endPoint>https://a.example/msg?x=1&amp;y=&lt;2&gt;</endPoint>"));
    }

    #[test]
    fn test_negotiation() {
        let mut headers = HeaderMap::new();
        assert_eq!(ResponseFormat::negotiate(&headers), ResponseFormat::Json);

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert_eq!(ResponseFormat::negotiate(&headers), ResponseFormat::Json);

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/xml"));
        assert_eq!(ResponseFormat::negotiate(&headers), ResponseFormat::Xml);

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/XML"));
        assert_eq!(ResponseFormat::negotiate(&headers), ResponseFormat::Xml);
    }
}
