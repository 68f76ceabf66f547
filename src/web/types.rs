//! Structs the `web` module receives over the wire.

use serde::Deserialize;

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable signup form.
/// Only the shape is checked, the email can be anything and consent can be either value.
/// Absent fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub email: String,
    pub terms_accepted: bool,
}

// ###################################
// ->   IMPLS
// ###################################
impl SignupRequest {
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}
