//! Shared application state for axum handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use bistro_app::services::bill_service::BillService;
use bistro_app::services::category_service::CategoryService;
use bistro_app::services::customer_service::CustomerService;
use bistro_app::services::dish_service::DishService;
use bistro_app::services::order_item_service::OrderItemService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned. Each handler
/// extracts only the service it needs through [`FromRef`].
pub struct AppState<CU, CA, DI, OI, BI> {
    /// Customer CRUD service.
    pub customer_service: Arc<CustomerService<CU>>,
    /// Category CRUD service.
    pub category_service: Arc<CategoryService<CA>>,
    /// Dish CRUD service.
    pub dish_service: Arc<DishService<DI>>,
    /// Order item CRUD service.
    pub order_item_service: Arc<OrderItemService<OI>>,
    /// Bill CRUD service.
    pub bill_service: Arc<BillService<BI>>,
}

impl<CU, CA, DI, OI, BI> Clone for AppState<CU, CA, DI, OI, BI> {
    fn clone(&self) -> Self {
        Self {
            customer_service: Arc::clone(&self.customer_service),
            category_service: Arc::clone(&self.category_service),
            dish_service: Arc::clone(&self.dish_service),
            order_item_service: Arc::clone(&self.order_item_service),
            bill_service: Arc::clone(&self.bill_service),
        }
    }
}

impl<CU, CA, DI, OI, BI> AppState<CU, CA, DI, OI, BI> {
    /// Create a new application state from service instances.
    pub fn new(
        customer_service: CustomerService<CU>,
        category_service: CategoryService<CA>,
        dish_service: DishService<DI>,
        order_item_service: OrderItemService<OI>,
        bill_service: BillService<BI>,
    ) -> Self {
        Self {
            customer_service: Arc::new(customer_service),
            category_service: Arc::new(category_service),
            dish_service: Arc::new(dish_service),
            order_item_service: Arc::new(order_item_service),
            bill_service: Arc::new(bill_service),
        }
    }
}

impl<CU, CA, DI, OI, BI> FromRef<AppState<CU, CA, DI, OI, BI>> for Arc<CustomerService<CU>> {
    fn from_ref(state: &AppState<CU, CA, DI, OI, BI>) -> Self {
        Arc::clone(&state.customer_service)
    }
}

impl<CU, CA, DI, OI, BI> FromRef<AppState<CU, CA, DI, OI, BI>> for Arc<CategoryService<CA>> {
    fn from_ref(state: &AppState<CU, CA, DI, OI, BI>) -> Self {
        Arc::clone(&state.category_service)
    }
}

impl<CU, CA, DI, OI, BI> FromRef<AppState<CU, CA, DI, OI, BI>> for Arc<DishService<DI>> {
    fn from_ref(state: &AppState<CU, CA, DI, OI, BI>) -> Self {
        Arc::clone(&state.dish_service)
    }
}

impl<CU, CA, DI, OI, BI> FromRef<AppState<CU, CA, DI, OI, BI>> for Arc<OrderItemService<OI>> {
    fn from_ref(state: &AppState<CU, CA, DI, OI, BI>) -> Self {
        Arc::clone(&state.order_item_service)
    }
}

impl<CU, CA, DI, OI, BI> FromRef<AppState<CU, CA, DI, OI, BI>> for Arc<BillService<BI>> {
    fn from_ref(state: &AppState<CU, CA, DI, OI, BI>) -> Self {
        Arc::clone(&state.bill_service)
    }
}
