//! The records this service persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::web::types::SignupRequest;

/// A mailing list subscriber as it is stored, keyed by its raw email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub email: String,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    /// Accepts a signup: the fields are copied as sent, `created_at` is stamped now.
    pub fn accept(request: SignupRequest) -> Self {
        Subscriber {
            email: request.email,
            terms_accepted: request.terms_accepted,
            created_at: Utc::now(),
        }
    }
}
