//! Fixed protocol strings and error reasons shared by the header types.

/// Protocol name of the start-line version
pub const SIP_SCHEME: &str = "SIP";

/// Separator between start-line elements
pub const SP: &str = " ";

/// Separator between comma-joined list elements
pub const LIST_SEPARATOR: &str = ", ";

// Error reasons
pub const METHOD_REQUIRED: &str = "Method is required";
pub const REQUEST_URI_REQUIRED: &str = "Request-URI is required";
pub const REQUEST_URI_INVALID: &str = "Request-URI is invalid";
pub const VERSION_REQUIRED: &str = "SIP-Version is required";
pub const VERSION_INVALID: &str = "SIP-Version is invalid";
pub const SCHEME_INVALID: &str = "Scheme must be SIP";
pub const STATUS_CODE_REQUIRED: &str = "Status Code is required";
pub const STATUS_CODE_INVALID: &str = "Status Code is invalid";
pub const REASON_PHRASE_INVALID: &str = "Reason Phrase is invalid";
pub const VALUE_REQUIRED: &str = "Value is required";
pub const TOKEN_INVALID: &str = "Value is not a valid token";

/// Name of the start lines when reported in errors
pub const REQUEST_LINE: &str = "Request-Line";
pub const STATUS_LINE: &str = "Status-Line";

/// Default reason phrase for a status code (RFC 3261 Section 21)
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    let phrase = match code {
        100 => "Trying",
        180 => "Ringing",
        181 => "Call Is Being Forwarded",
        182 => "Queued",
        183 => "Session Progress",
        200 => "OK",
        202 => "Accepted",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Moved Temporarily",
        305 => "Use Proxy",
        380 => "Alternative Service",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        410 => "Gone",
        413 => "Request Entity Too Large",
        414 => "Request-URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Unsupported URI Scheme",
        420 => "Bad Extension",
        421 => "Extension Required",
        423 => "Interval Too Brief",
        480 => "Temporarily Unavailable",
        481 => "Call/Transaction Does Not Exist",
        482 => "Loop Detected",
        483 => "Too Many Hops",
        484 => "Address Incomplete",
        485 => "Ambiguous",
        486 => "Busy Here",
        487 => "Request Terminated",
        488 => "Not Acceptable Here",
        491 => "Request Pending",
        493 => "Undecipherable",
        500 => "Server Internal Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Server Time-out",
        505 => "Version Not Supported",
        513 => "Message Too Large",
        600 => "Busy Everywhere",
        603 => "Decline",
        604 => "Does Not Exist Anywhere",
        606 => "Not Acceptable",
        _ => return None,
    };
    Some(phrase)
}
