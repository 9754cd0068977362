use super::{finish_all, write_address};
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::Stream;

const YTD: f64 = 3_000_000.00;

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut warehouses = session.open(Stream::Warehouse)?;

    for _ in 0..session.warehouses() {
        let name = session.fields.alpha_string(6, 10);
        let address = session.fields.address();
        let tax = session.fields.scaled(10, 20, 100.0);
        let id = session.ids.warehouse.next_id();

        warehouses.field(id)?;
        warehouses.field(&name)?;
        write_address(&mut warehouses, &address)?;
        warehouses.field(Field::fixed(tax, 4))?;
        warehouses.field(Field::fixed(YTD, 2))?;
        warehouses.end_record()?;
    }

    finish_all([warehouses])
}
