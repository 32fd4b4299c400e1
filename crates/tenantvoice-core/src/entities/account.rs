//! Account entity - the durable record binding an authenticated identity to a
//! moderation status and a role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moderation status of an account.
///
/// New accounts start `Pending` and gain forum access only once an admin
/// approves them. `Pending` and `Rejected` are treated identically by the
/// policy engine; the distinction is informational for the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AccountStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl From<&str> for AccountStatus {
    fn from(value: &str) -> Self {
        match value {
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

/// Role axis, independent of status. An admin is always approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    User,
    Admin,
}

impl AccountRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl From<&str> for AccountRole {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Account entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub status: AccountStatus,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new pending account for a fresh identity.
    pub fn new(id: Uuid, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            display_name: None,
            status: AccountStatus::Pending,
            role: AccountRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == AccountStatus::Approved
    }

    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }

    /// Display name with the generic member fallback.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Community Member")
    }

    /// Approve the account. Returns `false` when the account was already
    /// approved (the transition is idempotent, not an error).
    pub fn approve(&mut self) -> bool {
        if self.status == AccountStatus::Approved {
            return false;
        }
        self.status = AccountStatus::Approved;
        self.updated_at = Utc::now();
        true
    }

    /// Reject the account. Returns `false` when already rejected.
    pub fn reject(&mut self) -> bool {
        if self.status == AccountStatus::Rejected {
            return false;
        }
        self.status = AccountStatus::Rejected;
        self.updated_at = Utc::now();
        true
    }

    /// Promote to admin. Always forces `status = approved`: an admin cannot
    /// remain pending or rejected.
    pub fn promote(&mut self) -> bool {
        if self.role == AccountRole::Admin {
            return false;
        }
        self.role = AccountRole::Admin;
        self.status = AccountStatus::Approved;
        self.updated_at = Utc::now();
        true
    }

    /// Demote an admin back to an ordinary user; status stays approved.
    pub fn demote(&mut self) -> bool {
        if self.role == AccountRole::User {
            return false;
        }
        self.role = AccountRole::User;
        self.updated_at = Utc::now();
        true
    }

    pub fn set_display_name(&mut self, display_name: Option<String>) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(Uuid::new_v4(), "tenant@example.com".to_string())
    }

    #[test]
    fn test_new_account_defaults() {
        let account = account();
        assert_eq!(account.status, AccountStatus::Pending);
        assert_eq!(account.role, AccountRole::User);
        assert!(account.display_name.is_none());
        assert_eq!(account.display_label(), "Community Member");
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut account = account();
        assert!(account.approve());
        let updated = account.updated_at;
        assert!(!account.approve());
        assert_eq!(account.status, AccountStatus::Approved);
        assert_eq!(account.updated_at, updated);
    }

    #[test]
    fn test_approve_reinstates_rejected() {
        let mut account = account();
        account.reject();
        assert!(account.approve());
        assert_eq!(account.status, AccountStatus::Approved);
    }

    #[test]
    fn test_promote_forces_approved() {
        let mut pending = account();
        pending.promote();
        assert_eq!(pending.role, AccountRole::Admin);
        assert_eq!(pending.status, AccountStatus::Approved);

        let mut rejected = account();
        rejected.reject();
        rejected.promote();
        assert_eq!(rejected.status, AccountStatus::Approved);
    }

    #[test]
    fn test_demote_keeps_approved() {
        let mut account = account();
        account.promote();
        assert!(account.demote());
        assert_eq!(account.role, AccountRole::User);
        assert_eq!(account.status, AccountStatus::Approved);
        assert!(!account.demote());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AccountStatus::Pending,
            AccountStatus::Approved,
            AccountStatus::Rejected,
        ] {
            assert_eq!(AccountStatus::from(status.as_str()), status);
        }
        assert_eq!(AccountStatus::from("garbage"), AccountStatus::Pending);
    }

    #[test]
    fn test_display_label_uses_name() {
        let mut account = account();
        account.set_display_name(Some("Jordan".to_string()));
        assert_eq!(account.display_label(), "Jordan");
    }
}
