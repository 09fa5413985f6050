//! User records

use serde::{Deserialize, Serialize};

/// Body of a create-user request, forwarded as-is to the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}
