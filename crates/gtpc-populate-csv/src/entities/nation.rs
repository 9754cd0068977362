use super::finish_all;
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::catalog::region_by_id;
use gtpc_core::{Stream, NATIONS};

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut nations = session.open(Stream::Nation)?;
    let mut part_of = session.open(Stream::NationIsPartOfRegion)?;

    for nation in &NATIONS {
        let comment = session.fields.text(80, 152);
        nations.record([
            Field::from(nation.id),
            Field::Text(nation.name),
            Field::Text(&comment),
        ])?;

        debug_assert!(region_by_id(nation.region_id).is_some());
        part_of.edge(nation.id, nation.region_id)?;
    }

    finish_all([nations, part_of])
}
