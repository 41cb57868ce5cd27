use std::str::FromStr;

use rvoip_sip_headers::prelude::*;

const INVITE_HEADERS: &[&str] = &[
    "Call-ID: a84b4c76e66710@pc33.atlanta.com",
    "Subject: Project X",
    "Allow: INVITE, ACK, OPTIONS, CANCEL, BYE",
    "Supported: 100rel",
    "Require: timer",
    "User-Agent: Softphone/1.5 (Linux)",
    "Record-Route: <sip:p1.example.com;lr>",
    "Expires: 7200",
    "X-Campaign: spring-launch",
];

#[test]
fn test_headers_of_a_request() {
    let headers: Vec<TypedHeader> = INVITE_HEADERS
        .iter()
        .map(|line| TypedHeader::from_line(line).unwrap())
        .collect();

    let names: Vec<String> = headers.iter().map(|h| h.name().to_string()).collect();
    assert_eq!(
        names,
        vec![
            "Call-ID",
            "Subject",
            "Allow",
            "Supported",
            "Require",
            "User-Agent",
            "Record-Route",
            "Expires",
            "X-Campaign",
        ]
    );

    // Every line renders back unchanged
    for (line, header) in INVITE_HEADERS.iter().zip(&headers) {
        assert_eq!(&header.to_string(), line);
        assert!(header.is_valid());
    }
}

#[test]
fn test_compact_forms_resolve() {
    let call_id = TypedHeader::from_line("i: 843817637684230@998sdasdh09").unwrap();
    let subject = TypedHeader::from_line("s: Need more boxes").unwrap();
    let supported = TypedHeader::from_line("k: path").unwrap();

    assert_eq!(call_id.name(), HeaderName::CallId);
    assert_eq!(subject.name(), HeaderName::Subject);
    assert_eq!(supported.name(), HeaderName::Supported);
    assert_eq!(call_id.to_string(), "Call-ID: 843817637684230@998sdasdh09");
}

#[test]
fn test_multiplicity_flags() {
    let singletons = ["Call-ID: abc", "Min-Expires: 60", "Subject: hi"];
    for line in singletons {
        assert!(!TypedHeader::from_line(line).unwrap().allow_multiple(), "{}", line);
    }

    let lists = [
        "Alert-Info: <http://www.example.com/sounds/moo.wav>",
        "Allow: INVITE",
        "Error-Info: <sip:not-in-service-recording@atlanta.com>",
        "In-Reply-To: 70710@saturn.bell-tel.com",
        "Require: 100rel",
        "Unsupported: foo",
        "WWW-Authenticate: Digest realm=\"atlanta.com\", nonce=\"xyz\"",
        "X-Anything: 1",
    ];
    for line in lists {
        assert!(TypedHeader::from_line(line).unwrap().allow_multiple(), "{}", line);
    }
}

#[test]
fn test_folded_line() {
    let header = TypedHeader::from_line("Subject: I know you're there,\r\n\tpick up the phone").unwrap();
    assert_eq!(header.to_canonical_string(), "I know you're there, pick up the phone");
}

#[test]
fn test_extension_case_rules() {
    let a = TypedHeader::from_line("X-Foo: Value").unwrap();
    let b = TypedHeader::from_line("x-foo: Value").unwrap();
    let c = TypedHeader::from_line("X-Foo: value").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_extension_from_str_matches_typed() {
    let ext = Extension::from_str("X-Foo: bar").unwrap();
    assert_eq!(TypedHeader::from(ext), TypedHeader::from_line("X-Foo: bar").unwrap());
}

#[test]
fn test_invalid_header_name() {
    assert!(matches!(TypedHeader::from_line("Bad Name: x"), Err(Error::InvalidFormat(_))));
}
