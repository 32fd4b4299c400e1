//! Category entity <-> model mapper

use tenantvoice_core::entities::Category;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            is_announcement: model.is_announcement,
            created_at: model.created_at,
        }
    }
}
