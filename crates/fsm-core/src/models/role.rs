use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Dashboard roles, as issued by the backend in `user.role`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    ZoneUser,
    ServicePerson,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::ZoneUser => "ZONE_USER",
            Self::ServicePerson => "SERVICE_PERSON",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Landing route the user is redirected to after login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::ZoneUser => "/zone/dashboard",
            Self::ServicePerson => "/service-person/dashboard",
            Self::Customer => "/customer/dashboard",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "ZONE_USER" => Ok(Self::ZoneUser),
            "SERVICE_PERSON" => Ok(Self::ServicePerson),
            "CUSTOMER" => Ok(Self::Customer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
