//! JSON REST handlers for bills.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use bistro_app::ports::BillRepository;
use bistro_app::services::bill_service::BillService;
use bistro_domain::bill::{Bill, BillFields};
use bistro_domain::id::BillId;

use super::{CreateResponse, DeleteResponse, ItemResponse, ListResponse, lookup_id, parse_id};
use crate::error::ApiError;
use crate::extract::JsonBody;

/// `GET /bills`: every row carries its customer.
pub async fn list<BI>(
    State(service): State<Arc<BillService<BI>>>,
) -> Result<ListResponse<Bill>, ApiError>
where
    BI: BillRepository + Send + Sync + 'static,
{
    let bills = service.list_bills().await?;
    Ok(ListResponse::Ok(Json(bills)))
}

/// `POST /bills`
pub async fn create<BI>(
    State(service): State<Arc<BillService<BI>>>,
    JsonBody(fields): JsonBody<BillFields>,
) -> Result<CreateResponse<Bill>, ApiError>
where
    BI: BillRepository + Send + Sync + 'static,
{
    let created = service.create_bill(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /bills/:id`
pub async fn get<BI>(
    State(service): State<Arc<BillService<BI>>>,
    Path(id): Path<String>,
) -> Result<ItemResponse<Bill>, ApiError>
where
    BI: BillRepository + Send + Sync + 'static,
{
    let id: BillId = parse_id(&id)?;
    let bill = service.get_bill(id).await?;
    Ok(ItemResponse::Ok(Json(bill)))
}

/// `PUT /bills/:id`: overwrite customer and amount.
pub async fn update<BI>(
    State(service): State<Arc<BillService<BI>>>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<BillFields>,
) -> Result<ItemResponse<Bill>, ApiError>
where
    BI: BillRepository + Send + Sync + 'static,
{
    let id: BillId = lookup_id(&id, Bill::KIND)?;
    let updated = service.update_bill(id, fields).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /bills/:id`
pub async fn delete<BI>(
    State(service): State<Arc<BillService<BI>>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    BI: BillRepository + Send + Sync + 'static,
{
    let id: BillId = parse_id(&id)?;
    service.delete_bill(id).await?;
    Ok(DeleteResponse::Deleted("Bill deleted successfully"))
}
