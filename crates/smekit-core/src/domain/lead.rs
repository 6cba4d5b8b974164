use serde::{Deserialize, Serialize};
use std::fmt;

use super::LeadId;

/// Contact details as supplied by the caller, before an ID is assigned.
///
/// Also used as the probe for duplicate lookups; `phone` is not compared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewLead {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// A saved lead. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Lead {
    pub(crate) fn from_new(id: LeadId, lead: NewLead) -> Self {
        Self {
            id,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
        }
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} | {} | {}", self.id, self.name, self.email, self.phone)
    }
}
