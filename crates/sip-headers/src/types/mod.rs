// Core building blocks
pub mod header_field;
pub mod group;
pub mod header_name;
pub mod typed_header;
pub mod param;
pub mod method;
pub mod uri;
pub mod version;

// Value-shape families
pub mod option_tag;
pub mod call_id;
pub mod uri_header;
pub mod name_addr;
pub mod seconds;
pub mod server;
pub mod auth;

// Single headers and start lines
pub mod allow;
pub mod subject;
pub mod extension;
pub mod request_line;
pub mod status_line;

pub use allow::Allow;
pub use auth::{Challenge, ProxyAuthenticate, WwwAuthenticate};
pub use call_id::{CallId, InReplyTo};
pub use extension::Extension;
pub use group::HeaderFieldGroup;
pub use header_field::HeaderField;
pub use header_name::HeaderName;
pub use method::Method;
pub use name_addr::{NameAddrValue, RecordRoute, Route};
pub use option_tag::{ProxyRequire, Require, Supported, Unsupported};
pub use param::{GenericParam, GenericValue, Params};
pub use request_line::RequestLine;
pub use seconds::{Expires, MinExpires};
pub use server::{Server, ServerValue, UserAgent};
pub use status_line::{StatusCode, StatusLine};
pub use subject::Subject;
pub use typed_header::TypedHeader;
pub use uri::{AbsoluteUri, Host, Scheme, SipUri, Uri};
pub use uri_header::{AbsoluteUriValue, AlertInfo, CallInfo, ErrorInfo};
pub use version::Version;
