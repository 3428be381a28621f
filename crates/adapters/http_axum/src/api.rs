//! JSON REST API handlers and route table.
//!
//! Every resource exposes the same five operations:
//!
//! | Method   | Path               | Behaviour                                   |
//! |----------|--------------------|---------------------------------------------|
//! | `GET`    | `/{resource}`      | list all rows, relations preloaded          |
//! | `POST`   | `/{resource}`      | create from the body, `201 Created`         |
//! | `GET`    | `/{resource}/{id}` | fetch one row                               |
//! | `PUT`    | `/{resource}/{id}` | overwrite the writable fields from the body |
//! | `DELETE` | `/{resource}/{id}` | delete, answer with a confirmation message  |

#[allow(clippy::missing_errors_doc)]
pub mod bills;
#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod customers;
#[allow(clippy::missing_errors_doc)]
pub mod dishes;
#[allow(clippy::missing_errors_doc)]
pub mod order_items;

use std::str::FromStr;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;

use bistro_app::ports::{
    BillRepository, CategoryRepository, CustomerRepository, DishRepository, OrderItemRepository,
};
use bistro_domain::error::{BistroError, InvalidParamError, NotFoundError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the resource routes.
pub fn routes<CU, CA, DI, OI, BI>() -> Router<AppState<CU, CA, DI, OI, BI>>
where
    CU: CustomerRepository + Send + Sync + 'static,
    CA: CategoryRepository + Send + Sync + 'static,
    DI: DishRepository + Send + Sync + 'static,
    OI: OrderItemRepository + Send + Sync + 'static,
    BI: BillRepository + Send + Sync + 'static,
{
    Router::new()
        // Customers
        .route(
            "/customers",
            get(customers::list::<CU>).post(customers::create::<CU>),
        )
        .route(
            "/customers/{id}",
            get(customers::get::<CU>)
                .put(customers::update::<CU>)
                .delete(customers::delete::<CU>),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list::<CA>).post(categories::create::<CA>),
        )
        .route(
            "/categories/{id}",
            get(categories::get::<CA>)
                .put(categories::update::<CA>)
                .delete(categories::delete::<CA>),
        )
        // Dishes
        .route("/dishes", get(dishes::list::<DI>).post(dishes::create::<DI>))
        .route(
            "/dishes/{id}",
            get(dishes::get::<DI>)
                .put(dishes::update::<DI>)
                .delete(dishes::delete::<DI>),
        )
        // Order items
        .route(
            "/order_items",
            get(order_items::list::<OI>).post(order_items::create::<OI>),
        )
        .route(
            "/order_items/{id}",
            get(order_items::get::<OI>)
                .put(order_items::update::<OI>)
                .delete(order_items::delete::<OI>),
        )
        // Bills
        .route("/bills", get(bills::list::<BI>).post(bills::create::<BI>))
        .route(
            "/bills/{id}",
            get(bills::get::<BI>)
                .put(bills::update::<BI>)
                .delete(bills::delete::<BI>),
        )
}

/// Parse a path identifier, rejecting anything that is not an integer.
fn parse_id<I: FromStr>(raw: &str) -> Result<I, ApiError> {
    raw.parse()
        .map_err(|_| BistroError::from(InvalidParamError::param("id")).into())
}

/// Resolve a path identifier for an update.
///
/// A non-integer id cannot name any row, so it is reported the same way as
/// an absent one.
fn lookup_id<I: FromStr>(raw: &str, entity: &'static str) -> Result<I, ApiError> {
    raw.parse().map_err(|_| {
        BistroError::from(NotFoundError {
            entity,
            id: raw.to_string(),
        })
        .into()
    })
}

/// Response of a list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Response of the get and update endpoints.
pub enum ItemResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for ItemResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Response of a create endpoint.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Confirmation body of a delete endpoint.
#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

/// Response of a delete endpoint.
pub enum DeleteResponse {
    Deleted(&'static str),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(message) => Json(MessageBody { message }).into_response(),
        }
    }
}
