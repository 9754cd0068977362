//! One generation routine per entity.
//!
//! Each routine opens every stream it owns, writes headers, iterates the
//! entity's cardinality and emits entity rows together with their
//! relationship rows. Streams are persisted only after the last row, so a
//! failing routine leaves nothing behind.

pub(crate) mod customer;
pub(crate) mod district;
pub(crate) mod item;
pub(crate) mod nation;
pub(crate) mod order;
pub(crate) mod region;
pub(crate) mod stock;
pub(crate) mod supplier;
pub(crate) mod warehouse;

use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::CsvSink;
use gtpc_core::Entity;
use gtpc_generator::Address;

/// Run the routine for `entity`.
pub(crate) fn generate(
    entity: Entity,
    session: &mut Session,
) -> Result<Vec<StreamMetrics>, PopulateError> {
    match entity {
        Entity::Warehouse => warehouse::generate(session),
        Entity::District => district::generate(session),
        Entity::Customer => customer::generate(session),
        Entity::Item => item::generate(session),
        Entity::Supplier => supplier::generate(session),
        Entity::Stock => stock::generate(session),
        Entity::Order => order::generate(session),
        Entity::Region => region::generate(session),
        Entity::Nation => nation::generate(session),
    }
}

/// Write the five address columns.
pub(crate) fn write_address(sink: &mut CsvSink, address: &Address) -> Result<(), PopulateError> {
    sink.field(&address.street_1)?;
    sink.field(&address.street_2)?;
    sink.field(&address.city)?;
    sink.field(&address.state)?;
    sink.field(&address.zip)
}

/// Finish every sink in order.
pub(crate) fn finish_all<const N: usize>(
    sinks: [CsvSink; N],
) -> Result<Vec<StreamMetrics>, PopulateError> {
    sinks.into_iter().map(CsvSink::finish).collect()
}
