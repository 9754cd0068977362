//! Orders and their order lines.
//!
//! Every customer places exactly one order. The placing customer is taken
//! from a random permutation of the whole customer id range, built before
//! the first order, so order sequence and customer identity are unrelated.
//! Orders past `new_order_threshold` within their district are still
//! undelivered: no carrier, no delivery date on their lines, and the new
//! order flag set. Following TPC-C, undelivered lines carry a random amount
//! and delivered lines an amount of zero.

use super::finish_all;
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::Stream;
use gtpc_generator::NULL_DATE;

/// Carrier of an undelivered order.
pub const NULL_CARRIER: &str = "0";

const ALL_LOCAL: u32 = 1;
const LINE_QUANTITY: u32 = 5;

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut orders = session.open(Stream::Order)?;
    let mut lines = session.open(Stream::OrderLine)?;
    let mut has_placed = session.open(Stream::CustomerHasPlacedOrder)?;
    let mut contains = session.open(Stream::OrderContainsOrderLine)?;
    let mut line_has_stock = session.open(Stream::OrderLineHasStock)?;

    let scale = session.scale().clone();
    let customers = scale.customer_count(session.warehouses())?;
    // One entry per order, in order id sequence.
    let placed_by = session.fields.permutation(1, customers + 1)?;

    for warehouse in 1..=session.warehouses() {
        for _ in 0..scale.districts_per_warehouse {
            for seq in 1..=scale.customers_per_district {
                let late = seq > scale.new_order_threshold;
                let carrier = session.fields.uniform_int(1, 10);
                let line_count = session.fields.uniform_int(5, 15);
                let entry_date = session.fields.date(2010, 2012);
                let id = session.ids.order.next_id();
                let customer = u64::from(placed_by[(id - 1) as usize]);

                orders.field(id)?;
                orders.field(&entry_date)?;
                if late {
                    orders.field(NULL_CARRIER)?;
                } else {
                    orders.field(carrier)?;
                }
                orders.field(line_count)?;
                orders.field(ALL_LOCAL)?;
                orders.field(u32::from(late))?;
                orders.end_record()?;

                has_placed.edge(customer, id)?;

                for number in 1..=line_count {
                    let item = session.fields.uniform_int(1, scale.items);
                    let stock_id = scale.stock_id(warehouse, item);
                    let district_info = session.fields.alpha_string(24, 24);
                    let delivery_date = session.fields.date(2011, 2012);
                    let (delivery_date, amount) = if late {
                        (NULL_DATE, session.fields.scaled(10, 10_000, 100.0))
                    } else {
                        (delivery_date.as_str(), 0.0)
                    };
                    let line_id = session.ids.order_line.next_id();

                    lines.field(line_id)?;
                    lines.field(number)?;
                    lines.field(delivery_date)?;
                    lines.field(LINE_QUANTITY)?;
                    lines.field(Field::fixed(amount, 2))?;
                    lines.field(&district_info)?;
                    lines.end_record()?;

                    contains.edge(id, line_id)?;
                    line_has_stock.edge(line_id, stock_id)?;
                }
            }
        }
    }

    finish_all([orders, lines, has_placed, contains, line_has_stock])
}
