//! JSON REST handlers for categories.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use bistro_app::ports::CategoryRepository;
use bistro_app::services::category_service::CategoryService;
use bistro_domain::category::{Category, CategoryFields};
use bistro_domain::id::CategoryId;

use super::{CreateResponse, DeleteResponse, ItemResponse, ListResponse, lookup_id, parse_id};
use crate::error::ApiError;
use crate::extract::JsonBody;

/// `GET /categories`
pub async fn list<CA>(
    State(service): State<Arc<CategoryService<CA>>>,
) -> Result<ListResponse<Category>, ApiError>
where
    CA: CategoryRepository + Send + Sync + 'static,
{
    let categories = service.list_categories().await?;
    Ok(ListResponse::Ok(Json(categories)))
}

/// `POST /categories`
pub async fn create<CA>(
    State(service): State<Arc<CategoryService<CA>>>,
    JsonBody(fields): JsonBody<CategoryFields>,
) -> Result<CreateResponse<Category>, ApiError>
where
    CA: CategoryRepository + Send + Sync + 'static,
{
    let created = service.create_category(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /categories/:id`
pub async fn get<CA>(
    State(service): State<Arc<CategoryService<CA>>>,
    Path(id): Path<String>,
) -> Result<ItemResponse<Category>, ApiError>
where
    CA: CategoryRepository + Send + Sync + 'static,
{
    let id: CategoryId = parse_id(&id)?;
    let category = service.get_category(id).await?;
    Ok(ItemResponse::Ok(Json(category)))
}

/// `PUT /categories/:id`: overwrite the name.
pub async fn update<CA>(
    State(service): State<Arc<CategoryService<CA>>>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<CategoryFields>,
) -> Result<ItemResponse<Category>, ApiError>
where
    CA: CategoryRepository + Send + Sync + 'static,
{
    let id: CategoryId = lookup_id(&id, Category::KIND)?;
    let updated = service.update_category(id, fields).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /categories/:id`
pub async fn delete<CA>(
    State(service): State<Arc<CategoryService<CA>>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CA: CategoryRepository + Send + Sync + 'static,
{
    let id: CategoryId = parse_id(&id)?;
    service.delete_category(id).await?;
    Ok(DeleteResponse::Deleted("Category deleted successfully"))
}
