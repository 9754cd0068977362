use super::{finish_all, write_address};
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::Stream;

const YTD: f64 = 30_000.00;

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut districts = session.open(Stream::District)?;
    let mut covers = session.open(Stream::WarehouseCoversDistrict)?;

    let per_warehouse = session.scale().districts_per_warehouse;
    // Every customer of a district has placed one order already.
    let next_order_id = u64::from(session.scale().customers_per_district) + 1;

    for warehouse in 1..=u64::from(session.warehouses()) {
        for _ in 0..per_warehouse {
            let name = session.fields.alpha_string(6, 10);
            let address = session.fields.address();
            let tax = session.fields.scaled(10, 20, 100.0);
            let id = session.ids.district.next_id();

            districts.field(id)?;
            districts.field(&name)?;
            write_address(&mut districts, &address)?;
            districts.field(Field::fixed(tax, 4))?;
            districts.field(Field::fixed(YTD, 2))?;
            districts.field(next_order_id)?;
            districts.end_record()?;

            covers.edge(warehouse, id)?;
        }
    }

    finish_all([districts, covers])
}
