use super::finish_all;
use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use crate::session::{Session, SupplierIdMapping};
use gtpc_core::Stream;
use tracing::warn;

const DISTRICT_INFO_COLUMNS: usize = 10;

pub(crate) fn generate(session: &mut Session) -> Result<Vec<StreamMetrics>, PopulateError> {
    let mut stock = session.open(Stream::Stock)?;
    let mut warehouse_has = session.open(Stream::WarehouseHasStock)?;
    let mut item_has = session.open(Stream::ItemHasStock)?;
    let mut has_supplier = session.open(Stream::StockHasSupplier)?;

    let items = session.scale().items;
    let suppliers = session.scale().suppliers;
    let marked = session.scale().original_count();
    let mapping = session.config.supplier_ids;
    let mut zero_supplier_seen = false;

    for warehouse in 1..=session.warehouses() {
        // Sampled afresh for every warehouse.
        let marks = session.fields.original_marks(items, marked)?;

        for item in 1..=items {
            let quantity = session.fields.uniform_int(10, 100);
            let district_info: [String; DISTRICT_INFO_COLUMNS] =
                std::array::from_fn(|_| session.fields.alpha_string(24, 24));
            let mut data = session.fields.alpha_string(26, 50);
            let supplier_id = mapping.supplier_id(item, warehouse, suppliers);
            if marks.is_marked(item) {
                session.fields.embed_original(&mut data)?;
            }
            let id = session.ids.stock.next_id();

            if supplier_id == 0 && !zero_supplier_seen {
                zero_supplier_seen = true;
                debug_assert_eq!(mapping, SupplierIdMapping::Modulo);
                warn!(
                    "Stock {} references supplier 0, which is not a supplier id; \
                     use --supplier-ids one-based to map it onto supplier {}",
                    id, suppliers
                );
            }

            stock.field(id)?;
            stock.field(quantity)?;
            for info in &district_info {
                stock.field(info)?;
            }
            // ytd, order_cnt, remote_cnt
            stock.field(0u32)?;
            stock.field(0u32)?;
            stock.field(0u32)?;
            stock.field(&data)?;
            stock.end_record()?;

            warehouse_has.edge(u64::from(warehouse), id)?;
            item_has.edge(u64::from(item), id)?;
            has_supplier.edge(id, supplier_id)?;
        }
    }

    finish_all([stock, warehouse_has, item_has, has_supplier])
}
