//! JSON REST handlers for customers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use bistro_app::ports::CustomerRepository;
use bistro_app::services::customer_service::CustomerService;
use bistro_domain::customer::{Customer, CustomerFields};
use bistro_domain::id::CustomerId;

use super::{CreateResponse, DeleteResponse, ItemResponse, ListResponse, lookup_id, parse_id};
use crate::error::ApiError;
use crate::extract::JsonBody;

/// `GET /customers`
pub async fn list<CU>(
    State(service): State<Arc<CustomerService<CU>>>,
) -> Result<ListResponse<Customer>, ApiError>
where
    CU: CustomerRepository + Send + Sync + 'static,
{
    let customers = service.list_customers().await?;
    Ok(ListResponse::Ok(Json(customers)))
}

/// `POST /customers`
pub async fn create<CU>(
    State(service): State<Arc<CustomerService<CU>>>,
    JsonBody(fields): JsonBody<CustomerFields>,
) -> Result<CreateResponse<Customer>, ApiError>
where
    CU: CustomerRepository + Send + Sync + 'static,
{
    let created = service.create_customer(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /customers/:id`
pub async fn get<CU>(
    State(service): State<Arc<CustomerService<CU>>>,
    Path(id): Path<String>,
) -> Result<ItemResponse<Customer>, ApiError>
where
    CU: CustomerRepository + Send + Sync + 'static,
{
    let id: CustomerId = parse_id(&id)?;
    let customer = service.get_customer(id).await?;
    Ok(ItemResponse::Ok(Json(customer)))
}

/// `PUT /customers/:id`: overwrite name, age, phone and spending.
pub async fn update<CU>(
    State(service): State<Arc<CustomerService<CU>>>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<CustomerFields>,
) -> Result<ItemResponse<Customer>, ApiError>
where
    CU: CustomerRepository + Send + Sync + 'static,
{
    let id: CustomerId = lookup_id(&id, Customer::KIND)?;
    let updated = service.update_customer(id, fields).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /customers/:id`
pub async fn delete<CU>(
    State(service): State<Arc<CustomerService<CU>>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CU: CustomerRepository + Send + Sync + 'static,
{
    let id: CustomerId = parse_id(&id)?;
    service.delete_customer(id).await?;
    Ok(DeleteResponse::Deleted("Customer deleted successfully"))
}
