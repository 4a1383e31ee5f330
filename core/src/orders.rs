//! # Order Records
//!
//! Plain record keeping for customer orders. A [`Transaction`] owns its
//! [`Customer`] and its list of [`Product`] lines; the [`Channel`] tells an
//! online order (backed by an order file) from a phone order (taken by a
//! representative).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    state: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Two-letter state code, e.g. "MN".
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: u32,
    item: String,
    price: f64,
    quantity: u32,
}

impl Product {
    pub fn new(id: u32, item: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            item: item.into(),
            price,
            quantity,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn set_item(&mut self, item: impl Into<String>) {
        self.item = item.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}. Price: ${:.2}. Quantity: {} item(s) bought.",
            self.item, self.price, self.quantity
        )
    }
}

/// How an order reached us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    Online { file: String },
    Phone { representative: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    number: String,
    customer: Customer,
    products: Vec<Product>,
    channel: Channel,
}

impl Transaction {
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        state: impl Into<String>,
        channel: Channel,
    ) -> Self {
        Self {
            number: number.into(),
            customer: Customer::new(name, state),
            products: Vec::new(),
            channel,
        }
    }

    pub fn online(
        number: impl Into<String>,
        name: impl Into<String>,
        state: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self::new(number, name, state, Channel::Online { file: file.into() })
    }

    pub fn phone(
        number: impl Into<String>,
        name: impl Into<String>,
        state: impl Into<String>,
        representative: impl Into<String>,
    ) -> Self {
        Self::new(
            number,
            name,
            state,
            Channel::Phone {
                representative: representative.into(),
            },
        )
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = number.into();
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Always succeeds; the return value mirrors the other mutators.
    pub fn add_product(&mut self, id: u32, item: impl Into<String>, price: f64, quantity: u32) -> bool {
        self.products.push(Product::new(id, item, price, quantity));
        true
    }

    /// Removes the first line with `id`. Returns whether one was found.
    pub fn remove_product(&mut self, id: u32) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.products.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Updates price and quantity of the first line with `id`.
    pub fn modify_product(&mut self, id: u32, price: f64, quantity: u32) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.set_price(price);
                product.set_quantity(quantity);
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> f64 {
        self.products.iter().map(Product::subtotal).sum()
    }

    /// Number of product lines, not units.
    pub fn size(&self) -> usize {
        self.products.len()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
