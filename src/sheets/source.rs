// src/sheets/source.rs
//
// The injected boundary to the external collaborators. The core never
// reaches for global auth or storage state; callers hand these capabilities
// in and the helpers below compose decode -> parse and serialize -> write.

use crate::domain::record::{RecordSource, VehicleRecord};
use crate::errors::StockError;
use crate::sheets::grid::SheetGrid;
use crate::sheets::{ksa, parser, serializer};
use serde_json::Value;

/// Supplies the current access token from the external identity provider.
/// Implementations own refresh and session persistence; the token is opaque
/// here.
pub trait TokenProvider {
    fn access_token(&self) -> Result<String, StockError>;
}

/// The remote spreadsheet API seen from in-process: a row-oriented store
/// addressed by named range, speaking JSON value grids.
pub trait SheetStore {
    fn read_range(&self, range: &str) -> Result<Value, StockError>;
    fn write_range(&self, range: &str, rows: &[Vec<String>]) -> Result<(), StockError>;
    fn append_rows(&self, range: &str, rows: &[Vec<String>]) -> Result<(), StockError>;
}

/// Fetches one tab and parses it with the parser that matches its shape.
pub fn load_records(
    store: &dyn SheetStore,
    source: RecordSource,
) -> Result<Vec<VehicleRecord>, StockError> {
    let payload = store.read_range(source.range())?;
    let grid = SheetGrid::from_value(&payload)?;

    let records = match source {
        // KSA rows are positional; there is no header row to split off.
        RecordSource::Ksa => ksa::parse_ksa_rows(&grid.rows),
        RecordSource::Stock | RecordSource::Incoming => match grid.split_header() {
            Some((header, data)) => parser::parse_rows(source, header, data),
            None => Vec::new(),
        },
    };
    Ok(records)
}

/// Serializes records and writes them back to the tab's range. Nothing to
/// write (empty grid) short-circuits without touching the store.
pub fn write_back(
    store: &dyn SheetStore,
    source: RecordSource,
    records: &[VehicleRecord],
) -> Result<(), StockError> {
    let rows = serializer::to_rows(records);
    if rows.is_empty() {
        return Ok(());
    }
    store.write_range(source.range(), &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    struct FixedToken;

    impl TokenProvider for FixedToken {
        fn access_token(&self) -> Result<String, StockError> {
            Ok("test-token".to_string())
        }
    }

    /// In-memory store recording every write.
    struct MockStore {
        payload: Value,
        writes: RefCell<Vec<(String, Vec<Vec<String>>)>>,
    }

    impl MockStore {
        fn new(payload: Value) -> Self {
            MockStore {
                payload,
                writes: RefCell::new(Vec::new()),
            }
        }
    }

    impl SheetStore for MockStore {
        fn read_range(&self, _range: &str) -> Result<Value, StockError> {
            Ok(self.payload.clone())
        }

        fn write_range(&self, range: &str, rows: &[Vec<String>]) -> Result<(), StockError> {
            self.writes
                .borrow_mut()
                .push((range.to_string(), rows.to_vec()));
            Ok(())
        }

        fn append_rows(&self, range: &str, rows: &[Vec<String>]) -> Result<(), StockError> {
            self.write_range(range, rows)
        }
    }

    #[test]
    fn test_token_provider_is_opaque() {
        let provider = FixedToken;
        assert_eq!(provider.access_token().unwrap(), "test-token");
    }

    #[test]
    fn test_load_records_picks_parser_by_source() {
        let store = MockStore::new(json!([
            ["SN", "Status", "Name"],
            ["1", "Available", "Camry"],
        ]));
        let recs = load_records(&store, RecordSource::Stock).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "stock:1");
    }

    #[test]
    fn test_load_records_rejects_null_payload() {
        let store = MockStore::new(json!(null));
        let err = load_records(&store, RecordSource::Stock).unwrap_err();
        assert!(matches!(err, StockError::InvalidInput(_)));
    }

    #[test]
    fn test_write_back_short_circuits_on_empty() {
        let store = MockStore::new(json!([]));
        write_back(&store, RecordSource::Stock, &[]).unwrap();
        assert!(store.writes.borrow().is_empty());
    }

    #[test]
    fn test_write_back_addresses_the_source_range() {
        let store = MockStore::new(json!([]));
        let rec = VehicleRecord {
            serial_number: 1,
            status: "Available".to_string(),
            ..VehicleRecord::default()
        };
        write_back(&store, RecordSource::Incoming, &[rec]).unwrap();

        let writes = store.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "Incoming!A1:W");
        assert_eq!(writes[0].1.len(), 2); // header + one record
    }
}
