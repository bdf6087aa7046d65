//! HTTP round-trips described as plain data.
//!
//! # Design
//! The library never touches the network. It produces `Request` values and
//! consumes `Response` values; the host (the terminal binary, or a test)
//! executes the round-trip in between. Every body this client ever sends is
//! JSON, so a request carries an optional JSON body rather than a generic
//! header list.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request to execute. `json_body`, when present, is sent with a
/// `Content-Type: application/json` header.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub json_body: Option<String>,
}

/// The outcome of an executed request, stripped down to what the parsers
/// need: the status code and the raw body.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}
