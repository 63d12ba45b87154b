//! Thin wrappers over `MediumClient::dispatch`, one per upstream endpoint.
//!
//! Identifiers are interpolated into the path as given; the upstream
//! service is the only validator.

mod articles;
mod lists;
mod publications;
mod search;
mod tags;
mod users;
