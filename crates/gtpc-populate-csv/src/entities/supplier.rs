use super::finish_all;
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::{Stream, NATIONS};

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut suppliers = session.open(Stream::Supplier)?;
    let mut located_in = session.open(Stream::SupplierIsLocatedInNation)?;

    for _ in 0..session.scale().suppliers {
        let name = session.fields.alpha_string(14, 24);
        let address = session.fields.alpha_string(20, 40);
        let comment = session.fields.alpha_string(50, 101);
        let phone = session.fields.digit_string(16, 16);
        let account_balance = session.fields.scaled(1000, 10_000, 1.0);
        let nation = session.fields.pick(&NATIONS);
        let id = session.ids.supplier.next_id();

        suppliers.field(id)?;
        suppliers.field(&name)?;
        suppliers.field(&address)?;
        suppliers.field(&phone)?;
        suppliers.field(Field::fixed(account_balance, 2))?;
        suppliers.field(&comment)?;
        suppliers.end_record()?;

        located_in.edge(id, nation.id)?;
    }

    finish_all([suppliers, located_in])
}
