//! In-memory Order↔Product association.
//!
//! Orders and products live as nodes in an arena and the association is kept as a separate
//! two-way index between node keys, so neither side holds a reference to the other. Inserting a
//! record whose identity is already present resolves to the existing node, which makes node keys
//! compare exactly like the identity contract in [`crate::model::record`]: saved records collapse
//! by identity, unsaved records always get a node of their own.
//!
//! For every order `o` and product `p`: `p ∈ products_of(o) ⟺ o ∈ orders_of(p)`.

use std::collections::{BTreeSet, HashMap};

use crate::model::{order::OrderDto, product::ProductDto};

/// Key of an order node. Only valid for the graph that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey(usize);

/// Key of a product node. Only valid for the graph that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductKey(usize);

/// Orders, products and the links between them, built per read.
#[derive(Debug, Default)]
pub struct OrderProductGraph {
    orders: Vec<OrderDto>,
    products: Vec<ProductDto>,
    order_ids: HashMap<i64, OrderKey>,
    product_ids: HashMap<i64, ProductKey>,
    products_by_order: Vec<BTreeSet<ProductKey>>,
    orders_by_product: Vec<BTreeSet<OrderKey>>,
}

impl OrderProductGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an order node and links every product listed in `order.products`.
    ///
    /// An order whose identity is already in the graph replaces the stored fields of the existing
    /// node and keeps its links.
    pub fn insert_order(&mut self, mut order: OrderDto) -> OrderKey {
        let products = std::mem::take(&mut order.products);

        let key = match order.id.and_then(|id| self.order_ids.get(&id).copied()) {
            Some(key) => {
                self.orders[key.0] = order;
                key
            }
            None => {
                let key = OrderKey(self.orders.len());
                if let Some(id) = order.id {
                    self.order_ids.insert(id, key);
                }
                self.orders.push(order);
                self.products_by_order.push(BTreeSet::new());
                key
            }
        };

        for product in products {
            let product_key = self.insert_product(product);
            self.add_product(key, product_key);
        }

        key
    }

    /// Inserts a product node, resolving to the existing node when the identity is known.
    pub fn insert_product(&mut self, product: ProductDto) -> ProductKey {
        if let Some(key) = product.id.and_then(|id| self.product_ids.get(&id).copied()) {
            self.products[key.0] = product;
            return key;
        }

        let key = ProductKey(self.products.len());
        if let Some(id) = product.id {
            self.product_ids.insert(id, key);
        }
        self.products.push(product);
        self.orders_by_product.push(BTreeSet::new());
        key
    }

    /// Links `product` to `order` on both sides.
    ///
    /// Returns `false` when the pair was already linked; the graph is left unchanged.
    pub fn add_product(&mut self, order: OrderKey, product: ProductKey) -> bool {
        let added = self.products_by_order[order.0].insert(product);
        self.orders_by_product[product.0].insert(order);
        added
    }

    /// Unlinks `product` from `order` on both sides.
    ///
    /// Returns `false` when the pair was not linked; the graph is left unchanged.
    pub fn remove_product(&mut self, order: OrderKey, product: ProductKey) -> bool {
        let removed = self.products_by_order[order.0].remove(&product);
        self.orders_by_product[product.0].remove(&order);
        removed
    }

    /// Whether `product` is linked to `order`
    pub fn contains(&self, order: OrderKey, product: ProductKey) -> bool {
        self.products_by_order[order.0].contains(&product)
    }

    /// Order stored at `key`
    pub fn order(&self, key: OrderKey) -> &OrderDto {
        &self.orders[key.0]
    }

    /// Product stored at `key`
    pub fn product(&self, key: ProductKey) -> &ProductDto {
        &self.products[key.0]
    }

    /// Key of the saved order with identity `id`
    pub fn find_order(&self, id: i64) -> Option<OrderKey> {
        self.order_ids.get(&id).copied()
    }

    /// Key of the saved product with identity `id`
    pub fn find_product(&self, id: i64) -> Option<ProductKey> {
        self.product_ids.get(&id).copied()
    }

    /// Products linked to `order`, in node insertion order.
    pub fn products_of(&self, order: OrderKey) -> impl Iterator<Item = &ProductDto> + '_ {
        self.products_by_order[order.0]
            .iter()
            .map(move |key| &self.products[key.0])
    }

    /// Orders linked to `product`, in node insertion order.
    pub fn orders_of(&self, product: ProductKey) -> impl Iterator<Item = &OrderDto> + '_ {
        self.orders_by_product[product.0]
            .iter()
            .map(move |key| &self.orders[key.0])
    }

    /// Number of order nodes
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of product nodes
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Consumes the graph, returning every order with its `products` populated.
    pub fn into_orders(self) -> Vec<OrderDto> {
        let Self {
            orders,
            products,
            products_by_order,
            ..
        } = self;

        orders
            .into_iter()
            .zip(products_by_order)
            .map(|(mut order, keys)| {
                order.products = keys
                    .into_iter()
                    .map(|key| products[key.0].clone())
                    .collect();
                order
            })
            .collect()
    }
}
