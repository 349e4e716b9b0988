use chrono::{DateTime, Utc};

use crate::{
    resources::{status_cell, FieldAccessorFn, Resource},
    table::{CellTone, Column, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct PvcRecord {
    pub name: &'static str,
    pub namespace: &'static str,
    pub status: &'static str,
    pub volume: &'static str,
    pub capacity: &'static str,
    pub access_modes: &'static str,
    pub storage_class: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct PvcRow {
    pub namespace: String,
    pub name: String,
    pub status: String,
    pub volume: String,
    pub capacity: FieldValue,
    pub access_modes: String,
    pub storage_class: String,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct PersistentVolumeClaimResource;

impl Resource for PersistentVolumeClaimResource {
    type Record = PvcRecord;
    type Row = PvcRow;

    fn title(&self) -> &'static str {
        "Persistent Volume Claims"
    }

    fn description(&self) -> &'static str {
        "Manage persistent volume claims across namespaces"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search PVCs..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|p: &PvcRow| TableCell::new(&p.name, CellTone::Strong)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|p: &PvcRow| TableCell::muted(&p.namespace)),
            Column::new("status", "Status")
                .sortable()
                .render(|p: &PvcRow| status_cell(&p.status)),
            Column::new("volume", "Volume")
                .render(|p: &PvcRow| TableCell::muted_or_dash(&p.volume)),
            Column::new("capacity", "Capacity").sortable(),
            Column::new("accessmodes", "Access Modes"),
            Column::new("storageclass", "Storage Class")
                .render(|p: &PvcRow| TableCell::muted(&p.storage_class)),
            Column::new("age", "Age")
                .sortable()
                .render(|p: &PvcRow| TableCell::muted(&p.age.value)),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        PvcRow {
            namespace: record.namespace.to_string(),
            name: record.name.to_string(),
            status: record.status.to_string(),
            volume: record.volume.to_string(),
            capacity: FieldValue {
                value: record.capacity.to_string(),
                sort_by: capacity_gib(record.capacity),
            },
            access_modes: record.access_modes.to_string(),
            storage_class: record.storage_class.to_string(),
            age: self.age_field(record.created, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        format!("{}/{}", row.namespace, row.name)
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |p, field| match field {
            "namespace" => Some(SortValue::Text(p.namespace.clone())),
            "name" => Some(SortValue::Text(p.name.clone())),
            "status" => Some(SortValue::Text(p.status.clone())),
            "volume" => Some(SortValue::Text(p.volume.clone())),
            "accessmodes" => Some(SortValue::Text(p.access_modes.clone())),
            "storageclass" => Some(SortValue::Text(p.storage_class.clone())),
            "capacity" => match mode {
                AccessorMode::Sort => p.capacity.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(p.capacity.value.clone())),
            },
            "age" => match mode {
                AccessorMode::Sort => p.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(p.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            PvcRecord {
                name: "postgres-data-0",
                namespace: "production",
                status: "Bound",
                volume: "pvc-abc12345",
                capacity: "100Gi",
                access_modes: "RWO",
                storage_class: "gp3",
                created: "2025-01-20T06:00:00Z",
            },
            PvcRecord {
                name: "postgres-data-1",
                namespace: "production",
                status: "Bound",
                volume: "pvc-def67890",
                capacity: "100Gi",
                access_modes: "RWO",
                storage_class: "gp3",
                created: "2025-01-20T06:00:00Z",
            },
            PvcRecord {
                name: "redis-data-0",
                namespace: "production",
                status: "Bound",
                volume: "pvc-ghi11111",
                capacity: "20Gi",
                access_modes: "RWO",
                storage_class: "gp3",
                created: "2025-01-20T06:00:00Z",
            },
            PvcRecord {
                name: "prometheus-data",
                namespace: "monitoring",
                status: "Bound",
                volume: "pvc-jkl22222",
                capacity: "200Gi",
                access_modes: "RWO",
                storage_class: "gp3",
                created: "2025-02-01T00:00:00Z",
            },
            PvcRecord {
                name: "grafana-data",
                namespace: "monitoring",
                status: "Bound",
                volume: "pvc-mno33333",
                capacity: "10Gi",
                access_modes: "RWO",
                storage_class: "gp3",
                created: "2025-02-01T00:00:00Z",
            },
            PvcRecord {
                name: "logs-data",
                namespace: "monitoring",
                status: "Bound",
                volume: "pvc-pqr44444",
                capacity: "500Gi",
                access_modes: "RWO",
                storage_class: "gp3-throughput",
                created: "2025-01-15T00:00:00Z",
            },
            PvcRecord {
                name: "app-uploads",
                namespace: "production",
                status: "Bound",
                volume: "pvc-stu55555",
                capacity: "50Gi",
                access_modes: "RWX",
                storage_class: "efs",
                created: "2025-02-05T00:00:00Z",
            },
            PvcRecord {
                name: "test-data",
                namespace: "staging",
                status: "Pending",
                volume: "",
                capacity: "10Gi",
                access_modes: "RWO",
                storage_class: "gp3",
                created: "2025-02-14T12:00:00Z",
            },
        ]
    }
}

/// Parses a `100Gi`-style capacity into GiB for numeric sorting.
fn capacity_gib(capacity: &str) -> Option<i64> {
    capacity.strip_suffix("Gi").and_then(|n| n.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_gib() {
        assert_eq!(capacity_gib("100Gi"), Some(100));
        assert_eq!(capacity_gib("10Gi"), Some(10));
        assert_eq!(capacity_gib("1Ti"), None);
        assert_eq!(capacity_gib(""), None);
    }
}
