//! The protocol codec of an `OCCI` (Open Cloud Computing Interface) server.
//!
//! This crate provides APIs to:
//!
//! - Decode inbound requests into a normalized representation,
//!   [`InputData`](input::InputData). Requests may arrive in the header
//!   rendering (`text/occi`), where categories, attributes, and locations
//!   travel inside repeatable headers, or in the structured rendering
//!   (`application/occi+json`), where a body may describe a collection, a
//!   single resource or link, a mixin tag, or an action invocation.
//! - Render responses, such as status messages, single entities, entity
//!   collections, and bare locations, into both renderings.
//! - Render the discovery document (the `/-/` interface) which lists all
//!   known kinds, mixins, and actions together with their attribute schemas.
//!
//! The domain model store which owns the live kinds, mixins, and entities is
//! **not** part of this crate. The codec queries it through the
//! [`Model`](entity::Model) trait, treating it as a read-only lookup service.
//!
//! Every parse and render call is synchronous and keeps no shared state, so
//! independent requests can be processed concurrently.
//!
//! This crate can be compiled for both `std` and `no_std` environments.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

mod macros;

/// Attribute types, reserved attribute names, and value coercion.
pub mod attributes;
/// Category identifiers and the text grammar of a category declaration.
pub mod category;
/// Rendering configuration.
pub mod config;
/// Entity instances and the domain model collaborator.
pub mod entity;
/// Error management.
pub mod error;
/// The normalized representation of a decoded request.
pub mod input;
/// The discovery document renderer.
pub mod interface;
/// Request parsers for both wire formats.
pub mod parser;
/// Response renderers for both wire formats.
pub mod render;
/// A framed response, independent of any HTTP library.
pub mod response;
/// Definitions of kinds, mixins, actions, and their attributes.
pub mod schema;
/// Transport shapes of the structured rendering.
pub mod wire;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
pub(crate) fn serialize<T: serde::Serialize>(value: T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}

#[cfg(test)]
pub(crate) fn deserialize<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
