//! Response envelope decoder
//!
//! Turns a status code and raw body into either the endpoint's success
//! shape or a classified error.
//!
//! # Overview
//!
//! | Status | Body | Outcome |
//! |---|---|---|
//! | 200 | matches shape | decoded value |
//! | 200 | anything else | `MalformedResponse` |
//! | other | `{"success": false, "msg": m}` | `Api(m)` |
//! | other | `{"success": true, "msg": _}` | `Api("<code> <reason>")` |
//! | other | anything else | `UnstructuredApi(status, body)` |

mod envelope;
mod types;

pub use envelope::{decode_envelope, decode_error_body, decode_response, status_text};
pub use types::{
    AssetsPage, CollectionsPage, ErrorResponse, EventsPage, ListingsPage, OrdersPage,
    OrdersV2Page, PageEnvelope, SingleCollection,
};

#[cfg(test)]
mod tests;
