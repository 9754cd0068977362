use super::finish_all;
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::{Stream, REGIONS};

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut regions = session.open(Stream::Region)?;

    for region in &REGIONS {
        let comment = session.fields.text(80, 152);
        regions.record([
            Field::from(region.id),
            Field::Text(region.name),
            Field::Text(&comment),
        ])?;
    }

    finish_all([regions])
}
