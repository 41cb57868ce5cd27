use std::str::FromStr;

use rvoip_sip_headers::prelude::*;

#[test]
fn test_alert_info_scenario() {
    let line = "Alert-Info: <http://www.example.com/sounds/moo.wav>";
    let alert = AlertInfo::from_str(line).unwrap();

    let uri = alert.uri().unwrap();
    assert_eq!(uri.to_string(), "http://www.example.com/sounds/moo.wav");
    assert_eq!(uri.host(), Some("www.example.com"));
    assert!(alert.params().is_empty());

    assert_eq!(alert.to_header_line(), line);
}

#[test]
fn test_error_info_with_params() {
    let error_info = ErrorInfo::from_str("Error-Info: <sip:not-in-service-recording@atlanta.com>;lang=en").unwrap();
    assert_eq!(error_info.uri().unwrap().scheme(), "sip");
    assert_eq!(error_info.params().get_value("LANG"), Some("en"));
    assert_eq!(error_info.to_canonical_string(), "<sip:not-in-service-recording@atlanta.com>;lang=en");
}

#[test]
fn test_call_info_purpose() {
    let info = CallInfo::from_str("Call-Info: <http://wwww.example.com/alice/photo.jpg>;purpose=icon").unwrap();
    assert_eq!(info.purpose(), Some("icon"));
}

#[test]
fn test_www_authenticate_scenario() {
    let auth = WwwAuthenticate::from_str(
        r#"WWW-Authenticate: Digest realm="atlanta.com", nonce="f84f1cec41e6cbe5aea9c8e88d359", algorithm=MD5"#,
    )
    .unwrap();

    let challenge = auth.challenge();
    assert_eq!(challenge.scheme(), "Digest");
    assert_eq!(challenge.realm(), Some("atlanta.com"));
    assert_eq!(challenge.nonce(), Some("f84f1cec41e6cbe5aea9c8e88d359"));
    assert_eq!(challenge.algorithm(), Some("MD5"));
    assert!(auth.is_valid());

    assert_eq!(
        auth.to_canonical_string(),
        r#"Digest realm="atlanta.com", nonce="f84f1cec41e6cbe5aea9c8e88d359", algorithm=MD5"#
    );

    // Quoted values are case-sensitive, tokens are not
    let other_realm = WwwAuthenticate::from_str(
        r#"Digest realm="Atlanta.com", nonce="f84f1cec41e6cbe5aea9c8e88d359", algorithm=MD5"#,
    )
    .unwrap();
    assert_ne!(auth, other_realm);

    let lower_algorithm = WwwAuthenticate::from_str(
        r#"digest realm="atlanta.com", nonce="f84f1cec41e6cbe5aea9c8e88d359", algorithm=md5"#,
    )
    .unwrap();
    assert_eq!(auth, lower_algorithm);
}

#[test]
fn test_proxy_authenticate_stale() {
    let auth = ProxyAuthenticate::from_str(
        r#"Proxy-Authenticate: Digest realm="biloxi.com", nonce="abc", stale=true, qop="auth,auth-int""#,
    )
    .unwrap();
    assert_eq!(auth.challenge().stale(), Some(true));
    assert_eq!(auth.challenge().qop().to_vec(), vec!["auth".to_string(), "auth-int".to_string()]);
    assert_eq!(
        auth.to_canonical_string(),
        r#"Digest realm="biloxi.com", nonce="abc", stale=TRUE, qop="auth,auth-int""#
    );
}

#[test]
fn test_call_id_is_byte_exact() {
    let a = CallId::from_str("Call-ID: f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com").unwrap();
    let b = CallId::from_str("i: f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com").unwrap();
    let c = CallId::from_str("Call-ID: F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6@foo.bar.com").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.host_part(), Some("foo.bar.com"));
}

#[test]
fn test_generated_call_ids_differ() {
    let a = CallId::generate(Some("pc33.atlanta.com"));
    let b = CallId::generate(Some("pc33.atlanta.com"));
    assert_ne!(a, b);
    assert!(a.is_valid());
    assert_eq!(a.host_part(), Some("pc33.atlanta.com"));
}

#[test]
fn test_in_reply_to_list() {
    let header = InReplyTo::from_str("In-Reply-To: 70710@saturn.bell-tel.com, 17320@saturn.bell-tel.com").unwrap();
    assert_eq!(header.call_ids().len(), 2);
    assert!(header.contains("17320@saturn.bell-tel.com"));
    assert_eq!(header.to_canonical_string(), "70710@saturn.bell-tel.com, 17320@saturn.bell-tel.com");
}

#[test]
fn test_min_expires_overflow() {
    let err = MinExpires::from_str("Min-Expires: 99999999999").unwrap_err();
    assert!(matches!(err, Error::Overflow { .. }));
    assert_eq!(err.field(), Some("Min-Expires"));

    let err = MinExpires::from_str("Min-Expires: -1").unwrap_err();
    assert!(matches!(err, Error::ParseError { .. }));
}

#[test]
fn test_min_expires_zero_is_not_unset() {
    let zero = MinExpires::new(0);
    assert_eq!(zero.to_canonical_string(), "0");
    assert_ne!(zero, MinExpires::default());
    assert!(!MinExpires::default().is_valid());
}

#[test]
fn test_record_route_display_name() {
    let route = RecordRoute::from_str(r#"Record-Route: "Edge Proxy" <sip:p1.example.com;lr>;x-tag=1"#).unwrap();
    assert_eq!(route.display_name(), Some("Edge Proxy"));
    assert!(route.is_loose_route());
    assert_eq!(route.params().get_value("x-tag"), Some("1"));
    assert_eq!(route.to_canonical_string(), r#""Edge Proxy" <sip:p1.example.com;lr>;x-tag=1"#);
}

#[test]
fn test_user_agent_and_server() {
    let ua = UserAgent::from_str("User-Agent: Softphone Beta1.5").unwrap();
    assert_eq!(ua.product_name(), "Softphone");
    assert_eq!(ua.to_canonical_string(), "Softphone");

    let server = Server::from_str("Server: HomeServer2").unwrap();
    assert_eq!(server.to_header_line(), "Server: HomeServer2");
}

#[test]
fn test_errors_name_the_header() {
    let err = RecordRoute::from_str("Record-Route: sip:missing-brackets.example.com").unwrap_err();
    assert_eq!(err.field(), Some("Record-Route"));

    let err = Allow::from_str("Allow: INVITE,,BYE").unwrap_err();
    assert_eq!(err.field(), Some("Allow"));
    assert!(err.to_string().contains("Allow"));
}

#[test]
fn test_failed_parse_leaves_value() {
    let mut alert = AlertInfo::from_str("<http://www.example.com/sounds/moo.wav>").unwrap();
    let before = alert.clone();
    assert!(alert.parse("Alert-Info: http://no-brackets.example.com").is_err());
    assert_eq!(alert, before);
}

#[test]
fn test_clone_is_independent() {
    let original = AlertInfo::from_str("<http://www.example.com/sounds/moo.wav>;appearance=1").unwrap();
    let mut copy = original.clone();
    copy.params_mut().remove("appearance");
    copy.params_mut().push(GenericParam::token("volume", "3").unwrap());

    assert_eq!(original.params().get_value("appearance"), Some("1"));
    assert!(!original.params().contains("volume"));
    assert_ne!(original, copy);
}

#[test]
fn test_parse_opt_none_clears() {
    let mut subject = Subject::from_str("Subject: Lunch").unwrap();
    subject.parse_opt(None).unwrap();
    assert_eq!(subject, Subject::default());
}
