//! JSON REST handlers for order items.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use bistro_app::ports::OrderItemRepository;
use bistro_app::services::order_item_service::OrderItemService;
use bistro_domain::id::OrderItemId;
use bistro_domain::order_item::{OrderItem, OrderItemFields};

use super::{CreateResponse, DeleteResponse, ItemResponse, ListResponse, lookup_id, parse_id};
use crate::error::ApiError;
use crate::extract::JsonBody;

/// `GET /order_items`
pub async fn list<OI>(
    State(service): State<Arc<OrderItemService<OI>>>,
) -> Result<ListResponse<OrderItem>, ApiError>
where
    OI: OrderItemRepository + Send + Sync + 'static,
{
    let order_items = service.list_order_items().await?;
    Ok(ListResponse::Ok(Json(order_items)))
}

/// `POST /order_items`
pub async fn create<OI>(
    State(service): State<Arc<OrderItemService<OI>>>,
    JsonBody(fields): JsonBody<OrderItemFields>,
) -> Result<CreateResponse<OrderItem>, ApiError>
where
    OI: OrderItemRepository + Send + Sync + 'static,
{
    let created = service.create_order_item(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /order_items/:id`
pub async fn get<OI>(
    State(service): State<Arc<OrderItemService<OI>>>,
    Path(id): Path<String>,
) -> Result<ItemResponse<OrderItem>, ApiError>
where
    OI: OrderItemRepository + Send + Sync + 'static,
{
    let id: OrderItemId = parse_id(&id)?;
    let order_item = service.get_order_item(id).await?;
    Ok(ItemResponse::Ok(Json(order_item)))
}

/// `PUT /order_items/:id`: overwrite dish, quantity and order.
pub async fn update<OI>(
    State(service): State<Arc<OrderItemService<OI>>>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<OrderItemFields>,
) -> Result<ItemResponse<OrderItem>, ApiError>
where
    OI: OrderItemRepository + Send + Sync + 'static,
{
    let id: OrderItemId = lookup_id(&id, OrderItem::KIND)?;
    let updated = service.update_order_item(id, fields).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /order_items/:id`
pub async fn delete<OI>(
    State(service): State<Arc<OrderItemService<OI>>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    OI: OrderItemRepository + Send + Sync + 'static,
{
    let id: OrderItemId = parse_id(&id)?;
    service.delete_order_item(id).await?;
    Ok(DeleteResponse::Deleted("Order item deleted successfully"))
}
