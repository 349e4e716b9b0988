use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::fmt::Debug;

use crate::{
    table::{Column, RowAction},
    utils::{format_age, parse_timestamp, AccessorMode, FieldValue, SortValue},
};

pub type FieldAccessorFn<'a, R> = Box<dyn Fn(&R, &str) -> Option<SortValue> + 'a>;

/// One resource kind's contribution to the console: a typed row schema, a
/// builder from raw sample records, field accessors for the sort/filter
/// pipeline, and the column set the table renders.
///
/// The table engine never reaches into rows by string key; everything goes
/// through `field_accessor` and the columns' render functions.
pub trait Resource: Send + Sync {
    type Record: Clone + Send + Sync;
    type Row: Debug + Clone + Send + Sync + serde::Serialize;

    fn title(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn columns(&self) -> Vec<Column<Self::Row>>;

    /// The field the search box filters on.
    fn search_key(&self) -> &'static str {
        "name"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search..."
    }

    fn page_size(&self) -> usize {
        20
    }

    fn empty_message(&self) -> &'static str {
        "No resources found."
    }

    fn row_actions(&self) -> Vec<RowAction<Self::Row>> {
        Vec::new()
    }

    /// The data-source seam: where rows would come from a cluster, this
    /// console supplies inline sample records. Refresh re-reads this.
    fn sample_records(&self) -> Vec<Self::Record>;

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row;

    /// Stable identity used to key row selection: `namespace/name`, or the
    /// bare name for cluster-scoped kinds.
    fn row_id(&self, row: &Self::Row) -> String;

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row>;

    /// Materializes an age cell from a raw RFC 3339 timestamp: formatted for
    /// display, epoch seconds as the sort key.
    fn age_field(&self, raw: &str, now: DateTime<Utc>) -> FieldValue {
        match parse_timestamp(raw) {
            Some(ts) => FieldValue::numeric(format_age(ts, now), ts.timestamp()),
            None => FieldValue::text("—"),
        }
    }

    /// Builds all rows from the sample records.
    fn load(&self, now: DateTime<Utc>) -> Vec<Self::Row> {
        let records = self.sample_records();
        let rows: Vec<Self::Row> = records
            .par_iter()
            .map(|record| self.build_row(record, now))
            .collect();
        tracing::debug!(kind = self.title(), count = rows.len(), "built rows");
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableCell;
    use chrono::TimeZone;

    #[derive(Clone)]
    struct Rec {
        name: &'static str,
        created: &'static str,
    }

    #[derive(Debug, Clone, serde::Serialize)]
    struct Row {
        name: String,
        age: FieldValue,
    }

    struct Minimal;

    impl Resource for Minimal {
        type Record = Rec;
        type Row = Row;

        fn title(&self) -> &'static str {
            "Minimal"
        }

        fn description(&self) -> &'static str {
            ""
        }

        fn columns(&self) -> Vec<Column<Self::Row>> {
            vec![
                Column::new("name", "Name").sortable(),
                Column::new("age", "Age")
                    .sortable()
                    .render(|row: &Row| TableCell::muted(&row.age.value)),
            ]
        }

        fn sample_records(&self) -> Vec<Self::Record> {
            vec![
                Rec { name: "b", created: "2025-02-14T10:00:00Z" },
                Rec { name: "a", created: "" },
            ]
        }

        fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
            Row {
                name: record.name.to_string(),
                age: self.age_field(record.created, now),
            }
        }

        fn row_id(&self, row: &Self::Row) -> String {
            row.name.clone()
        }

        fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
            Box::new(move |row, field| match field {
                "name" => Some(SortValue::Text(row.name.clone())),
                "age" => match mode {
                    AccessorMode::Sort => row.age.sort_by.map(SortValue::Number),
                    AccessorMode::Filter | AccessorMode::Display => {
                        Some(SortValue::Text(row.age.value.clone()))
                    }
                },
                _ => None,
            })
        }
    }

    #[test]
    fn test_load_preserves_record_order() {
        let now = Utc.with_ymd_and_hms(2025, 2, 16, 10, 0, 0).unwrap();
        let rows = Minimal.load(now);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "b");
        assert_eq!(rows[1].name, "a");
    }

    #[test]
    fn test_age_field_formats_and_sorts() {
        let now = Utc.with_ymd_and_hms(2025, 2, 16, 10, 0, 0).unwrap();
        let rows = Minimal.load(now);
        assert_eq!(rows[0].age.value, "2d");
        assert!(rows[0].age.sort_by.is_some());
        // Malformed timestamp falls back to a placeholder with no sort key.
        assert_eq!(rows[1].age.value, "—");
        assert_eq!(rows[1].age.sort_by, None);
    }
}
