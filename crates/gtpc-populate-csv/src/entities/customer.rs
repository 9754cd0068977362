//! Customers with their denormalized first payment.

use super::{finish_all, write_address};
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::catalog::nation_by_id;
use gtpc_core::Stream;
use gtpc_generator::last_name;

const MIDDLE: &str = "OE";
const CREDIT_LIMIT: f64 = 50_000.00;
const BALANCE: f64 = -10.00;
const YTD_PAYMENT: f64 = 10.00;
const PAYMENT_COUNT: u32 = 1;
const DELIVERY_COUNT: u32 = 0;
const HISTORY_AMOUNT: f64 = 10.00;

/// Customers of a district numbered up to this get sequential last names.
const SEQUENTIAL_LAST_NAMES: u32 = 1000;

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut customers = session.open(Stream::Customer)?;
    let mut serves = session.open(Stream::DistrictServesCustomer)?;
    let mut located_in = session.open(Stream::CustomerIsLocatedInNation)?;

    let scale = session.scale().clone();

    for warehouse in 1..=session.warehouses() {
        for district in 1..=scale.districts_per_warehouse {
            let district_id = scale.district_id(warehouse, district);

            for seq in 1..=scale.customers_per_district {
                let first = session.fields.alpha_string(8, 16);
                let last = if seq <= SEQUENTIAL_LAST_NAMES {
                    last_name(seq - 1)
                } else {
                    last_name(session.fields.skewed_int(255, 0, 999))
                };
                let address = session.fields.address();
                let phone = session.fields.digit_string(16, 16);
                let credit = if session.fields.uniform_int(0, 1) == 0 {
                    "GC"
                } else {
                    "BC"
                };
                let discount = session.fields.scaled(0, 50, 100.0);
                let since = session.fields.date(1993, 2012);
                let data = session.fields.alpha_string(300, 500);
                let history_date = session.fields.date(2012, 2012);
                let history_data = session.fields.alpha_string(12, 24);
                let nation_id = u64::from(address.state_key());
                debug_assert!(nation_by_id(nation_id).is_some());
                let id = session.ids.customer.next_id();

                customers.field(id)?;
                customers.field(&first)?;
                customers.field(MIDDLE)?;
                customers.field(&last)?;
                write_address(&mut customers, &address)?;
                customers.field(&phone)?;
                customers.field(&since)?;
                customers.field(credit)?;
                customers.field(Field::fixed(CREDIT_LIMIT, 2))?;
                customers.field(Field::fixed(discount, 4))?;
                customers.field(Field::fixed(BALANCE, 2))?;
                customers.field(Field::fixed(YTD_PAYMENT, 2))?;
                customers.field(PAYMENT_COUNT)?;
                customers.field(DELIVERY_COUNT)?;
                customers.field(&data)?;
                customers.field(&history_date)?;
                customers.field(Field::fixed(HISTORY_AMOUNT, 2))?;
                customers.field(&history_data)?;
                customers.end_record()?;

                serves.edge(district_id, id)?;
                located_in.edge(id, nation_id)?;
            }
        }
    }

    finish_all([customers, serves, located_in])
}
