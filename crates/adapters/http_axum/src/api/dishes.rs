//! JSON REST handlers for dishes.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use bistro_app::ports::DishRepository;
use bistro_app::services::dish_service::DishService;
use bistro_domain::dish::{Dish, DishFields};
use bistro_domain::id::DishId;

use super::{CreateResponse, DeleteResponse, ItemResponse, ListResponse, lookup_id, parse_id};
use crate::error::ApiError;
use crate::extract::JsonBody;

/// `GET /dishes`: every row carries its category.
pub async fn list<DI>(
    State(service): State<Arc<DishService<DI>>>,
) -> Result<ListResponse<Dish>, ApiError>
where
    DI: DishRepository + Send + Sync + 'static,
{
    let dishes = service.list_dishes().await?;
    Ok(ListResponse::Ok(Json(dishes)))
}

/// `POST /dishes`
pub async fn create<DI>(
    State(service): State<Arc<DishService<DI>>>,
    JsonBody(fields): JsonBody<DishFields>,
) -> Result<CreateResponse<Dish>, ApiError>
where
    DI: DishRepository + Send + Sync + 'static,
{
    let created = service.create_dish(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /dishes/:id`
pub async fn get<DI>(
    State(service): State<Arc<DishService<DI>>>,
    Path(id): Path<String>,
) -> Result<ItemResponse<Dish>, ApiError>
where
    DI: DishRepository + Send + Sync + 'static,
{
    let id: DishId = parse_id(&id)?;
    let dish = service.get_dish(id).await?;
    Ok(ItemResponse::Ok(Json(dish)))
}

/// `PUT /dishes/:id`: overwrite name, price and category.
pub async fn update<DI>(
    State(service): State<Arc<DishService<DI>>>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<DishFields>,
) -> Result<ItemResponse<Dish>, ApiError>
where
    DI: DishRepository + Send + Sync + 'static,
{
    let id: DishId = lookup_id(&id, Dish::KIND)?;
    let updated = service.update_dish(id, fields).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /dishes/:id`
pub async fn delete<DI>(
    State(service): State<Arc<DishService<DI>>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DI: DishRepository + Send + Sync + 'static,
{
    let id: DishId = parse_id(&id)?;
    service.delete_dish(id).await?;
    Ok(DeleteResponse::Deleted("Dish deleted successfully"))
}
