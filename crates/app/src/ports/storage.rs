//! Storage port: repository traits for persistence.
//!
//! Identifiers are assigned by the store: `create` takes the writable fields
//! and returns the persisted row with its id. Reads of dishes and bills
//! return the related category or customer preloaded.

use std::future::Future;

use bistro_domain::bill::{Bill, BillFields};
use bistro_domain::category::{Category, CategoryFields};
use bistro_domain::customer::{Customer, CustomerFields};
use bistro_domain::dish::{Dish, DishFields};
use bistro_domain::error::BistroError;
use bistro_domain::id::{BillId, CategoryId, CustomerId, DishId, OrderItemId};
use bistro_domain::order_item::{OrderItem, OrderItemFields};

/// Repository for persisting and querying [`Customer`]s.
pub trait CustomerRepository {
    /// Insert a new customer and return it with its assigned id.
    fn create(
        &self,
        fields: CustomerFields,
    ) -> impl Future<Output = Result<Customer, BistroError>> + Send;

    /// Get a customer by its unique identifier.
    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, BistroError>> + Send;

    /// Get all customers.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Customer>, BistroError>> + Send;

    /// Save every attribute of an existing customer.
    fn update(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, BistroError>> + Send;

    /// Delete a customer by its unique identifier.
    fn delete(&self, id: CustomerId) -> impl Future<Output = Result<(), BistroError>> + Send;
}

/// Repository for persisting and querying [`Category`]s.
pub trait CategoryRepository {
    /// Insert a new category and return it with its assigned id.
    fn create(
        &self,
        fields: CategoryFields,
    ) -> impl Future<Output = Result<Category, BistroError>> + Send;

    /// Get a category by its unique identifier.
    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, BistroError>> + Send;

    /// Get all categories.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, BistroError>> + Send;

    /// Save every attribute of an existing category.
    fn update(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, BistroError>> + Send;

    /// Delete a category by its unique identifier.
    ///
    /// Dishes filed under it lose their category.
    fn delete(&self, id: CategoryId) -> impl Future<Output = Result<(), BistroError>> + Send;
}

/// Repository for persisting and querying [`Dish`]es.
pub trait DishRepository {
    /// Insert a new dish and return it with its assigned id and category.
    fn create(&self, fields: DishFields)
    -> impl Future<Output = Result<Dish, BistroError>> + Send;

    /// Get a dish, with its category preloaded.
    fn get_by_id(
        &self,
        id: DishId,
    ) -> impl Future<Output = Result<Option<Dish>, BistroError>> + Send;

    /// Get all dishes, each with its category preloaded.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Dish>, BistroError>> + Send;

    /// Save every attribute of an existing dish and return it reloaded.
    fn update(&self, dish: Dish) -> impl Future<Output = Result<Dish, BistroError>> + Send;

    /// Delete a dish by its unique identifier.
    fn delete(&self, id: DishId) -> impl Future<Output = Result<(), BistroError>> + Send;
}

/// Repository for persisting and querying [`OrderItem`]s.
pub trait OrderItemRepository {
    /// Insert a new order item and return it with its assigned id.
    fn create(
        &self,
        fields: OrderItemFields,
    ) -> impl Future<Output = Result<OrderItem, BistroError>> + Send;

    /// Get an order item by its unique identifier.
    fn get_by_id(
        &self,
        id: OrderItemId,
    ) -> impl Future<Output = Result<Option<OrderItem>, BistroError>> + Send;

    /// Get all order items.
    fn get_all(&self) -> impl Future<Output = Result<Vec<OrderItem>, BistroError>> + Send;

    /// Save every attribute of an existing order item.
    fn update(
        &self,
        item: OrderItem,
    ) -> impl Future<Output = Result<OrderItem, BistroError>> + Send;

    /// Delete an order item by its unique identifier.
    fn delete(&self, id: OrderItemId) -> impl Future<Output = Result<(), BistroError>> + Send;
}

/// Repository for persisting and querying [`Bill`]s.
pub trait BillRepository {
    /// Insert a new bill and return it with its assigned id and customer.
    fn create(&self, fields: BillFields)
    -> impl Future<Output = Result<Bill, BistroError>> + Send;

    /// Get a bill, with its customer preloaded.
    fn get_by_id(
        &self,
        id: BillId,
    ) -> impl Future<Output = Result<Option<Bill>, BistroError>> + Send;

    /// Get all bills, each with its customer preloaded.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Bill>, BistroError>> + Send;

    /// Save every attribute of an existing bill and return it reloaded.
    fn update(&self, bill: Bill) -> impl Future<Output = Result<Bill, BistroError>> + Send;

    /// Delete a bill by its unique identifier.
    fn delete(&self, id: BillId) -> impl Future<Output = Result<(), BistroError>> + Send;
}
