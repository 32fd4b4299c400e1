//! Account entity <-> model mapper

use tenantvoice_core::entities::{Account, AccountRole, AccountStatus};

use crate::models::AccountModel;

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: model.id,
            email: model.email,
            display_name: model.display_name,
            status: AccountStatus::from(model.status.as_str()),
            role: AccountRole::from(model.role.as_str()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
