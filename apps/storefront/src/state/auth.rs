//! # Auth State
//!
//! Who is using the client right now. The storefront only records the
//! session the backend handed out; it does not enforce anything with it.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Which console a signed-in user belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    /// Business / merchant console user.
    Merchant,
    /// Operations console user.
    SuperAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    SignedIn {
        session_id: Uuid,
        user_id: String,
        role: Role,
    },
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::SignedIn { role, .. } => Some(*role),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthHandle {
    session: Arc<Mutex<Session>>,
}

impl AuthHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a signed-in session and returns it.
    pub fn sign_in(&self, user_id: impl Into<String>, role: Role) -> Session {
        let session = Session::SignedIn {
            session_id: Uuid::new_v4(),
            user_id: user_id.into(),
            role,
        };
        info!(?role, "session started");
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session.clone();
        session
    }

    pub fn sign_out(&self) {
        info!("session ended");
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Session::Anonymous;
    }

    pub fn current(&self) -> Session {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
