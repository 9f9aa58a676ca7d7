//! Success envelope shared by the handlers.
//!
//! Reads and writes answer `{ "data": ... }`; errors use the shape in
//! [`crate::error`]. Login and refresh return their token pair unwrapped.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
