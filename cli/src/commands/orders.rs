use colored::*;

use crate::mprint;
use crate::terminal::{colors, format, print};
use morse_common::config::Config;
use morse_common::{info, warn};
use morse_core::orders::Transaction;

pub fn orders(cfg: &Config) -> anyhow::Result<()> {
    let mut online: Transaction =
        Transaction::online("#113-2524033-6994661", "Nhuy N.", "MN", "Order001");
    online.add_product(1, "Mini Desk Calendar", 1.10, 5);
    online.add_product(12, "Akko Mechanical Keyboard", 70.15, 3);
    online.add_product(13, "Audio-Technica AT2020 Cardioid Condenser Microphone", 79.00, 1);
    online.add_product(14, "Dead By Daylight DLC Pack", 2.49, 6);

    print::section("online order", cfg);
    print_order(&online);
    apply_changes(&mut online, &[13], &[(1, 0.99, 2)]);
    print_receipt(&online);

    mprint!();

    let mut phone: Transaction =
        Transaction::phone("#112-6240870-1920232", "McKyley C.", "IL", "Andy H.");
    phone.add_product(2, "Focusrite Scarlett Solo 3rd Gen USB Audio Interface", 129.00, 1);
    phone.add_product(21, "ELDEN RING", 59.99, 1);
    phone.add_product(22, "TUBBZ Vinyl Rubber Duck Figure", 16.82, 3);
    phone.add_product(23, "Mini Desk Calendar", 0.99, 10);
    phone.add_product(24, "Dymatize ISO100 Hydrolyzed Protein Powder", 33.43, 2);

    print::section("phone order", cfg);
    print_order(&phone);
    apply_changes(&mut phone, &[24], &[(23, 0.99, 1)]);
    print_receipt(&phone);

    print_summary(&[&online, &phone], cfg);
    Ok(())
}

fn apply_changes(order: &mut Transaction, removals: &[u32], updates: &[(u32, f64, u32)]) {
    mprint!();
    info!("{} changed", order.number());

    for &id in removals {
        if !order.remove_product(id) {
            warn!("No product {id} in {}", order.number());
        }
    }

    for &(id, price, quantity) in updates {
        if !order.modify_product(id, price, quantity) {
            warn!("No product {id} in {}", order.number());
        }
    }
}

fn print_order(order: &Transaction) {
    print::fields(&format::transaction_details(order));
    print_receipt(order);
}

fn print_receipt(order: &Transaction) {
    info!("{} items purchased", order.size());

    for (position, product) in order.products().iter().enumerate() {
        let amount: String = format::product_amount(product);
        print::print(&print::receipt_line(position + 1, product.item(), &amount));
    }

    let total: String = format::money(order.total());
    print::fields(&[("Order total", total.color(colors::PRICE).bold())]);
}

fn print_summary(orders: &[&Transaction], cfg: &Config) {
    let total: f64 = orders.iter().map(|order| order.total()).sum();
    let count: ColoredString = format!("{} orders", orders.len()).bold().green();
    let worth: ColoredString = format::money(total).color(colors::PRICE).bold();

    print::closing(&format!("Processed {count} worth {worth}"), cfg);
}
