//! Typed facades over the Direct API resources.
//!
//! Each resource borrows a shared [`HttpClient`](crate::client::HttpClient) and only
//! composes paths, query parameters and bodies; transport concerns stay in the client.

pub mod charges;
