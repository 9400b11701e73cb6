//! The `occi-server` library crate wires the `occi` codec into
//! [`axum`](https://docs.rs/axum) servers.
//!
//! It negotiates the wire format of every exchange, extracts the decoded
//! requests from incoming HTTP messages, and frames the codec responses,
//! error envelopes included, as `axum` responses.
//!
//! The model store is not part of this crate: route handlers receive the
//! decoded requests through the [`request::OcciRequest`] extractor and
//! answer through the helpers of [`state::OcciState`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Content negotiation.
pub mod media;
/// The request extractor.
pub mod request;
/// Response framing and error responses.
pub mod responses;
/// The shared server state.
pub mod state;

#[cfg(test)]
mod tests;
