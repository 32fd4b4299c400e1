//! Category handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tenantvoice_service::{
    CategoryResponse, CategoryService, CreateCategoryRequest, UpdateCategoryRequest,
};

use super::parse_id;
use crate::extractors::{AuthAccount, OptionalAuthAccount, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List categories (approved members)
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    auth: OptionalAuthAccount,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list(auth.account_id()).await?;
    Ok(Json(response))
}

/// Create a category (admin)
///
/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthAccount,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create(auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a category (admin)
///
/// PATCH /categories/:category_id
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(category_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = parse_id(&category_id, "category_id")?;

    let service = CategoryService::new(state.service_context());
    let response = service.update(auth.account_id, category_id, request).await?;
    Ok(Json(response))
}
