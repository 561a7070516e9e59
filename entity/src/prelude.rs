pub use super::category::Entity as Category;
pub use super::order::Entity as Order;
pub use super::order_product::Entity as OrderProduct;
pub use super::point::Entity as Point;
pub use super::product::Entity as Product;
pub use super::user::Entity as User;
