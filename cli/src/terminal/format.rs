use colored::*;
use morse_core::orders::{Channel, Product, Transaction};

use crate::terminal::colors;

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Header details of an order, the channel attribute last.
pub fn transaction_details(order: &Transaction) -> Vec<(&'static str, ColoredString)> {
    let channel: (&'static str, ColoredString) = match order.channel() {
        Channel::Online { file } => ("Order file", file.normal()),
        Channel::Phone { representative } => ("Taken by", representative.normal()),
    };

    vec![
        ("Customer", order.customer().name().normal()),
        ("State", order.customer().state().normal()),
        ("Number", order.number().color(colors::ACCENT)),
        channel,
    ]
}

/// `quantity x price` for a receipt line.
pub fn product_amount(product: &Product) -> String {
    format!("{} x {}", product.quantity(), money(product.price()))
}
