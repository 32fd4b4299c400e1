//! Access policy engine
//!
//! Pure decision logic: given an actor's account state and a requested
//! action, return allow or deny with a reason. The engine never fetches
//! state; callers load the account and any referenced resources first and
//! pass them in, which keeps every decision trivially testable and
//! request-scoped (no ambient auth context, no caching across requests).
//!
//! Services must evaluate the relevant action here before any store write
//! (fail closed); repositories derive their hidden-row filtering from
//! [`Visibility`] so that listings are restricted in the query layer, not
//! only in rendering.

use uuid::Uuid;

use crate::entities::{Account, Category, Topic};
use crate::error::DomainError;

/// The requesting identity as resolved by the session layer.
#[derive(Debug, Clone, Copy)]
pub enum Actor<'a> {
    /// No authenticated identity on the request.
    Anonymous,
    /// An authenticated identity with its account record.
    Member(&'a Account),
}

impl<'a> Actor<'a> {
    pub fn from_account(account: Option<&'a Account>) -> Self {
        match account {
            Some(account) => Self::Member(account),
            None => Self::Anonymous,
        }
    }

    fn account(&self) -> Option<&'a Account> {
        match self {
            Self::Anonymous => None,
            Self::Member(account) => Some(account),
        }
    }
}

/// Actions an actor can request against the system.
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    /// Marketing/informational pages and the incident report form.
    ViewPublicPages,
    /// Forum index, topic lists, and topic detail.
    ViewForum,
    /// Create a topic in the given category.
    CreateTopic { category: &'a Category },
    /// Comment on the given topic.
    CreateComment { topic: &'a Topic },
    HideTopic,
    UnhideTopic,
    DeleteTopic,
    HideComment,
    UnhideComment,
    DeleteComment,
    /// Approve, reject, promote, or demote an account.
    ModerateAccounts,
    /// Create or edit forum categories.
    ManageCategories,
    /// Read the status of the given account.
    ReadAccountStatus { account_id: Uuid },
    /// File an incident submission (open to everyone, anonymous included).
    SubmitIncident,
    /// List submissions and update their review state.
    ReviewSubmissions,
}

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    NotApproved,
    NotAdmin,
    WrongCategoryRestriction,
    ResourceNotFound,
}

impl DenyReason {
    pub fn code(self) -> &'static str {
        match self {
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::NotApproved => "NOT_APPROVED",
            Self::NotAdmin => "NOT_ADMIN",
            Self::WrongCategoryRestriction => "WRONG_CATEGORY_RESTRICTION",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
        }
    }
}

/// Outcome of a policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    #[inline]
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Convert a denial into the matching domain error. Only valid for
    /// actions that cannot produce `ResourceNotFound`; use
    /// [`Decision::require_with`] when they can.
    pub fn require(self) -> Result<(), DomainError> {
        self.require_with(|| {
            DomainError::InternalError("resource_not_found denial without resource context".into())
        })
    }

    /// Convert a denial into the matching domain error, supplying the
    /// entity-specific not-found error for `ResourceNotFound` denials.
    pub fn require_with(
        self,
        on_not_found: impl FnOnce() -> DomainError,
    ) -> Result<(), DomainError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(DenyReason::NotAuthenticated) => Err(DomainError::NotAuthenticated),
            Self::Deny(DenyReason::NotApproved) => Err(DomainError::NotApproved),
            Self::Deny(DenyReason::NotAdmin) => Err(DomainError::NotAdmin),
            Self::Deny(DenyReason::WrongCategoryRestriction) => {
                Err(DomainError::AnnouncementRestricted)
            }
            Self::Deny(DenyReason::ResourceNotFound) => Err(on_not_found()),
        }
    }
}

/// Which rows a listing may include for an actor. Hidden content is only
/// ever surfaced to admins, tagged as hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    VisibleOnly,
    IncludeHidden,
}

/// Listing filter for an actor. Callers are expected to have already allowed
/// `ViewForum` for the same actor.
pub fn visibility(actor: Actor<'_>) -> Visibility {
    match actor.account() {
        Some(account) if account.is_admin() => Visibility::IncludeHidden,
        _ => Visibility::VisibleOnly,
    }
}

/// Evaluate a policy decision for an actor/action pair.
pub fn decide(actor: Actor<'_>, action: &Action<'_>) -> Decision {
    match action {
        Action::ViewPublicPages | Action::SubmitIncident => Decision::Allow,

        Action::ViewForum => require_approved(actor),

        Action::CreateTopic { category } => match require_approved(actor) {
            Decision::Allow if category.is_announcement && !is_admin(actor) => {
                Decision::Deny(DenyReason::WrongCategoryRestriction)
            }
            decision => decision,
        },

        Action::CreateComment { topic } => match require_approved(actor) {
            // A hidden topic is not browsable for members, so writes against
            // it must not reveal that it exists.
            Decision::Allow if topic.is_hidden && !is_admin(actor) => {
                Decision::Deny(DenyReason::ResourceNotFound)
            }
            decision => decision,
        },

        Action::HideTopic
        | Action::UnhideTopic
        | Action::DeleteTopic
        | Action::HideComment
        | Action::UnhideComment
        | Action::DeleteComment
        | Action::ModerateAccounts
        | Action::ManageCategories
        | Action::ReviewSubmissions => require_admin(actor),

        Action::ReadAccountStatus { account_id } => match actor.account() {
            None => Decision::Deny(DenyReason::NotAuthenticated),
            Some(account) if account.id == *account_id || account.is_admin() => Decision::Allow,
            Some(_) => Decision::Deny(DenyReason::NotAdmin),
        },
    }
}

fn is_admin(actor: Actor<'_>) -> bool {
    actor.account().is_some_and(Account::is_admin)
}

fn require_approved(actor: Actor<'_>) -> Decision {
    match actor.account() {
        None => Decision::Deny(DenyReason::NotAuthenticated),
        Some(account) if account.is_approved() => Decision::Allow,
        Some(_) => Decision::Deny(DenyReason::NotApproved),
    }
}

fn require_admin(actor: Actor<'_>) -> Decision {
    match actor.account() {
        None => Decision::Deny(DenyReason::NotAuthenticated),
        Some(account) if account.is_admin() => Decision::Allow,
        Some(_) => Decision::Deny(DenyReason::NotAdmin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AccountRole, AccountStatus};

    fn account(status: AccountStatus, role: AccountRole) -> Account {
        let mut account = Account::new(Uuid::new_v4(), "member@example.com".to_string());
        account.status = status;
        account.role = role;
        account
    }

    fn category(is_announcement: bool) -> Category {
        Category::new(Uuid::new_v4(), "General".to_string(), None, is_announcement)
    }

    fn topic(is_hidden: bool) -> Topic {
        let mut topic = Topic::new(
            Uuid::new_v4(),
            "Title".to_string(),
            "Body".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        topic.is_hidden = is_hidden;
        topic
    }

    #[test]
    fn test_public_pages_open_to_everyone() {
        assert!(decide(Actor::Anonymous, &Action::ViewPublicPages).is_allow());
        assert!(decide(Actor::Anonymous, &Action::SubmitIncident).is_allow());

        let rejected = account(AccountStatus::Rejected, AccountRole::User);
        assert!(decide(Actor::Member(&rejected), &Action::ViewPublicPages).is_allow());
    }

    #[test]
    fn test_forum_requires_approval() {
        assert_eq!(
            decide(Actor::Anonymous, &Action::ViewForum),
            Decision::Deny(DenyReason::NotAuthenticated)
        );
        // Pending and rejected are indistinguishable to the policy.
        for status in [AccountStatus::Pending, AccountStatus::Rejected] {
            let member = account(status, AccountRole::User);
            assert_eq!(
                decide(Actor::Member(&member), &Action::ViewForum),
                Decision::Deny(DenyReason::NotApproved)
            );
        }
        let approved = account(AccountStatus::Approved, AccountRole::User);
        assert!(decide(Actor::Member(&approved), &Action::ViewForum).is_allow());
    }

    #[test]
    fn test_create_topic_in_regular_category() {
        let category = category(false);
        let approved = account(AccountStatus::Approved, AccountRole::User);
        assert!(decide(Actor::Member(&approved), &Action::CreateTopic { category: &category })
            .is_allow());

        let pending = account(AccountStatus::Pending, AccountRole::User);
        assert_eq!(
            decide(Actor::Member(&pending), &Action::CreateTopic { category: &category }),
            Decision::Deny(DenyReason::NotApproved)
        );
    }

    #[test]
    fn test_announcement_category_is_admin_only() {
        let category = category(true);

        let member = account(AccountStatus::Approved, AccountRole::User);
        assert_eq!(
            decide(Actor::Member(&member), &Action::CreateTopic { category: &category }),
            Decision::Deny(DenyReason::WrongCategoryRestriction)
        );

        let admin = account(AccountStatus::Approved, AccountRole::Admin);
        assert!(decide(Actor::Member(&admin), &Action::CreateTopic { category: &category })
            .is_allow());

        // Approval is checked before the category restriction.
        let pending = account(AccountStatus::Pending, AccountRole::User);
        assert_eq!(
            decide(Actor::Member(&pending), &Action::CreateTopic { category: &category }),
            Decision::Deny(DenyReason::NotApproved)
        );
    }

    #[test]
    fn test_comment_on_hidden_topic() {
        let hidden = topic(true);

        let member = account(AccountStatus::Approved, AccountRole::User);
        assert_eq!(
            decide(Actor::Member(&member), &Action::CreateComment { topic: &hidden }),
            Decision::Deny(DenyReason::ResourceNotFound)
        );

        let admin = account(AccountStatus::Approved, AccountRole::Admin);
        assert!(
            decide(Actor::Member(&admin), &Action::CreateComment { topic: &hidden }).is_allow()
        );

        let visible = topic(false);
        assert!(
            decide(Actor::Member(&member), &Action::CreateComment { topic: &visible }).is_allow()
        );
    }

    #[test]
    fn test_moderation_actions_are_admin_gated() {
        let member = account(AccountStatus::Approved, AccountRole::User);
        let admin = account(AccountStatus::Approved, AccountRole::Admin);

        for action in [
            Action::HideTopic,
            Action::UnhideTopic,
            Action::DeleteTopic,
            Action::HideComment,
            Action::UnhideComment,
            Action::DeleteComment,
            Action::ModerateAccounts,
            Action::ManageCategories,
            Action::ReviewSubmissions,
        ] {
            assert_eq!(
                decide(Actor::Anonymous, &action),
                Decision::Deny(DenyReason::NotAuthenticated)
            );
            assert_eq!(
                decide(Actor::Member(&member), &action),
                Decision::Deny(DenyReason::NotAdmin)
            );
            assert!(decide(Actor::Member(&admin), &action).is_allow());
        }
    }

    #[test]
    fn test_read_own_account_status() {
        let member = account(AccountStatus::Pending, AccountRole::User);
        let other = account(AccountStatus::Approved, AccountRole::User);
        let admin = account(AccountStatus::Approved, AccountRole::Admin);

        assert!(decide(
            Actor::Member(&member),
            &Action::ReadAccountStatus { account_id: member.id }
        )
        .is_allow());
        assert_eq!(
            decide(
                Actor::Member(&other),
                &Action::ReadAccountStatus { account_id: member.id }
            ),
            Decision::Deny(DenyReason::NotAdmin)
        );
        assert!(decide(
            Actor::Member(&admin),
            &Action::ReadAccountStatus { account_id: member.id }
        )
        .is_allow());
        assert_eq!(
            decide(Actor::Anonymous, &Action::ReadAccountStatus { account_id: member.id }),
            Decision::Deny(DenyReason::NotAuthenticated)
        );
    }

    #[test]
    fn test_visibility_filter() {
        let member = account(AccountStatus::Approved, AccountRole::User);
        let admin = account(AccountStatus::Approved, AccountRole::Admin);

        assert_eq!(visibility(Actor::Member(&member)), Visibility::VisibleOnly);
        assert_eq!(visibility(Actor::Member(&admin)), Visibility::IncludeHidden);
        assert_eq!(visibility(Actor::Anonymous), Visibility::VisibleOnly);
    }

    #[test]
    fn test_require_maps_denials_to_errors() {
        let pending = account(AccountStatus::Pending, AccountRole::User);
        let err = decide(Actor::Member(&pending), &Action::ViewForum)
            .require()
            .unwrap_err();
        assert_eq!(err.code(), "NOT_APPROVED");

        let hidden = topic(true);
        let member = account(AccountStatus::Approved, AccountRole::User);
        let topic_id = hidden.id;
        let err = decide(Actor::Member(&member), &Action::CreateComment { topic: &hidden })
            .require_with(|| DomainError::TopicNotFound(topic_id))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_deny_reason_codes() {
        assert_eq!(DenyReason::NotAuthenticated.code(), "NOT_AUTHENTICATED");
        assert_eq!(DenyReason::NotApproved.code(), "NOT_APPROVED");
        assert_eq!(DenyReason::NotAdmin.code(), "NOT_ADMIN");
        assert_eq!(
            DenyReason::WrongCategoryRestriction.code(),
            "WRONG_CATEGORY_RESTRICTION"
        );
        assert_eq!(DenyReason::ResourceNotFound.code(), "RESOURCE_NOT_FOUND");
    }
}
