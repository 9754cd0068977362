use super::finish_all;
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::Session;
use crate::sink::Field;
use gtpc_core::Stream;
use tracing::debug;

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut items = session.open(Stream::Item)?;

    let count = session.scale().items;
    let marked = session.scale().original_count();
    let marks = session.fields.original_marks(count, marked)?;
    debug!("Marked {} of {} items as original", marks.count(), count);

    for item in 1..=count {
        let name = session.fields.alpha_string(14, 24);
        let price = session.fields.scaled(100, 10_000, 100.0);
        let mut data = session.fields.alpha_string(26, 50);
        let image_id = session.fields.uniform_int(0, 10_000);
        if marks.is_marked(item) {
            session.fields.embed_original(&mut data)?;
        }
        let id = session.ids.item.next_id();

        items.field(id)?;
        items.field(image_id)?;
        items.field(&name)?;
        items.field(Field::fixed(price, 2))?;
        items.field(&data)?;
        items.end_record()?;
    }

    finish_all([items])
}
