//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use bistro_app::ports::{
    BillRepository, CategoryRepository, CustomerRepository, DishRepository, OrderItemRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the resource routes at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<CU, CA, DI, OI, BI>(state: AppState<CU, CA, DI, OI, BI>) -> Router
where
    CU: CustomerRepository + Send + Sync + 'static,
    CA: CategoryRepository + Send + Sync + 'static,
    DI: DishRepository + Send + Sync + 'static,
    OI: OrderItemRepository + Send + Sync + 'static,
    BI: BillRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bistro_app::services::bill_service::BillService;
    use bistro_app::services::category_service::CategoryService;
    use bistro_app::services::customer_service::CustomerService;
    use bistro_app::services::dish_service::DishService;
    use bistro_app::services::order_item_service::OrderItemService;
    use bistro_domain::bill::{Bill, BillFields};
    use bistro_domain::category::{Category, CategoryFields};
    use bistro_domain::customer::{Customer, CustomerFields};
    use bistro_domain::dish::{Dish, DishFields};
    use bistro_domain::error::BistroError;
    use bistro_domain::id::{BillId, CategoryId, CustomerId, DishId, OrderItemId};
    use bistro_domain::order_item::{OrderItem, OrderItemFields};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubCustomerRepo;
    struct StubCategoryRepo;
    struct StubDishRepo;
    struct StubOrderItemRepo;
    struct StubBillRepo;

    impl CustomerRepository for StubCustomerRepo {
        async fn create(&self, fields: CustomerFields) -> Result<Customer, BistroError> {
            Ok(Customer::new(CustomerId::new(1), fields))
        }
        async fn get_by_id(&self, _id: CustomerId) -> Result<Option<Customer>, BistroError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Customer>, BistroError> {
            Ok(vec![])
        }
        async fn update(&self, customer: Customer) -> Result<Customer, BistroError> {
            Ok(customer)
        }
        async fn delete(&self, _id: CustomerId) -> Result<(), BistroError> {
            Ok(())
        }
    }

    impl CategoryRepository for StubCategoryRepo {
        async fn create(&self, fields: CategoryFields) -> Result<Category, BistroError> {
            Ok(Category::new(CategoryId::new(1), fields))
        }
        async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, BistroError> {
            Ok(Some(Category::new(
                id,
                CategoryFields {
                    name: "Starters".to_string(),
                },
            )))
        }
        async fn get_all(&self) -> Result<Vec<Category>, BistroError> {
            Ok(vec![])
        }
        async fn update(&self, category: Category) -> Result<Category, BistroError> {
            Ok(category)
        }
        async fn delete(&self, _id: CategoryId) -> Result<(), BistroError> {
            Ok(())
        }
    }

    impl DishRepository for StubDishRepo {
        async fn create(&self, fields: DishFields) -> Result<Dish, BistroError> {
            Ok(Dish::new(DishId::new(1), fields))
        }
        async fn get_by_id(&self, _id: DishId) -> Result<Option<Dish>, BistroError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Dish>, BistroError> {
            Err(BistroError::Storage("disk on fire".into()))
        }
        async fn update(&self, dish: Dish) -> Result<Dish, BistroError> {
            Ok(dish)
        }
        async fn delete(&self, _id: DishId) -> Result<(), BistroError> {
            Ok(())
        }
    }

    impl OrderItemRepository for StubOrderItemRepo {
        async fn create(&self, fields: OrderItemFields) -> Result<OrderItem, BistroError> {
            Ok(OrderItem::new(OrderItemId::new(1), fields))
        }
        async fn get_by_id(&self, _id: OrderItemId) -> Result<Option<OrderItem>, BistroError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<OrderItem>, BistroError> {
            Ok(vec![])
        }
        async fn update(&self, item: OrderItem) -> Result<OrderItem, BistroError> {
            Ok(item)
        }
        async fn delete(&self, _id: OrderItemId) -> Result<(), BistroError> {
            Ok(())
        }
    }

    impl BillRepository for StubBillRepo {
        async fn create(&self, fields: BillFields) -> Result<Bill, BistroError> {
            Ok(Bill::new(BillId::new(1), fields))
        }
        async fn get_by_id(&self, _id: BillId) -> Result<Option<Bill>, BistroError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Bill>, BistroError> {
            Ok(vec![])
        }
        async fn update(&self, bill: Bill) -> Result<Bill, BistroError> {
            Ok(bill)
        }
        async fn delete(&self, _id: BillId) -> Result<(), BistroError> {
            Ok(())
        }
    }

    fn app() -> Router {
        build(AppState::new(
            CustomerService::new(StubCustomerRepo),
            CategoryService::new(StubCategoryRepo),
            DishService::new(StubDishRepo),
            OrderItemService::new(StubOrderItemRepo),
            BillService::new(StubBillRepo),
        ))
    }

    async fn send(method: &str, uri: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_empty_collection() {
        let (status, body) = send("GET", "/customers", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_create_with_created_status() {
        let (status, body) = send("POST", "/categories", r#"{"name":"Starters"}"#).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, serde_json::json!({"id": 1, "name": "Starters"}));
    }

    #[tokio::test]
    async fn should_reject_malformed_body_with_bad_request() {
        let (status, body) = send("POST", "/customers", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_reject_non_numeric_id_on_delete() {
        let (status, body) = send("DELETE", "/bills/abc", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Incorrect value for parameter: id");
    }

    #[tokio::test]
    async fn should_report_missing_entity_on_delete() {
        let (status, body) = send("DELETE", "/customers/5", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No 'customer' found for Id: '5'");
    }

    #[tokio::test]
    async fn should_report_non_numeric_id_on_update_as_not_found() {
        let (status, body) = send("PUT", "/dishes/abc", r#"{"name":"Soup"}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No 'dish' found for Id: 'abc'");
    }

    #[tokio::test]
    async fn should_decode_body_before_looking_up_id_on_update() {
        let (status, _) = send("PUT", "/dishes/abc", "[").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_confirm_delete_with_message() {
        let (status, body) = send("DELETE", "/categories/3", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"message": "Category deleted successfully"})
        );
    }

    #[tokio::test]
    async fn should_update_existing_entity() {
        let (status, body) = send("PUT", "/categories/3", r#"{"name":"Mains"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"id": 3, "name": "Mains"}));
    }

    #[tokio::test]
    async fn should_hide_storage_error_details() {
        let (status, body) = send("GET", "/dishes", "").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }
}
