use chrono::{DateTime, Utc};

use crate::{
    resources::{FieldAccessorFn, Resource},
    table::{CellTone, Column, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct ConfigMapRecord {
    pub name: &'static str,
    pub namespace: &'static str,
    pub data: u32,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ConfigMapRow {
    pub namespace: String,
    pub name: String,
    pub data: FieldValue,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigMapResource;

impl Resource for ConfigMapResource {
    type Record = ConfigMapRecord;
    type Row = ConfigMapRow;

    fn title(&self) -> &'static str {
        "Config Maps"
    }

    fn description(&self) -> &'static str {
        "View and manage ConfigMap resources"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search config maps..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|cm: &ConfigMapRow| TableCell::new(&cm.name, CellTone::Strong)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|cm: &ConfigMapRow| TableCell::muted(&cm.namespace)),
            Column::new("data", "Data").sortable(),
            Column::new("age", "Age")
                .sortable()
                .render(|cm: &ConfigMapRow| TableCell::muted(&cm.age.value)),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        ConfigMapRow {
            namespace: record.namespace.to_string(),
            name: record.name.to_string(),
            data: FieldValue::numeric(record.data.to_string(), record.data as i64),
            age: self.age_field(record.created, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        format!("{}/{}", row.namespace, row.name)
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |cm, field| match field {
            "namespace" => Some(SortValue::Text(cm.namespace.clone())),
            "name" => Some(SortValue::Text(cm.name.clone())),
            "data" => match mode {
                AccessorMode::Sort | AccessorMode::Filter => cm.data.sort_by.map(SortValue::Number),
                AccessorMode::Display => Some(SortValue::Text(cm.data.value.clone())),
            },
            "age" => match mode {
                AccessorMode::Sort => cm.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(cm.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            ConfigMapRecord {
                name: "app-config",
                namespace: "production",
                data: 5,
                created: "2025-02-10T10:00:00Z",
            },
            ConfigMapRecord {
                name: "nginx-config",
                namespace: "production",
                data: 2,
                created: "2025-02-10T10:00:00Z",
            },
            ConfigMapRecord {
                name: "app-config",
                namespace: "staging",
                data: 5,
                created: "2025-02-12T09:00:00Z",
            },
            ConfigMapRecord {
                name: "feature-flags",
                namespace: "production",
                data: 12,
                created: "2025-02-08T14:00:00Z",
            },
            ConfigMapRecord {
                name: "feature-flags",
                namespace: "staging",
                data: 12,
                created: "2025-02-08T14:00:00Z",
            },
            ConfigMapRecord {
                name: "coredns",
                namespace: "kube-system",
                data: 1,
                created: "2025-01-10T00:00:00Z",
            },
            ConfigMapRecord {
                name: "kube-proxy",
                namespace: "kube-system",
                data: 2,
                created: "2025-01-10T00:00:00Z",
            },
            ConfigMapRecord {
                name: "kubeadm-config",
                namespace: "kube-system",
                data: 2,
                created: "2025-01-10T00:00:00Z",
            },
            ConfigMapRecord {
                name: "grafana-dashboards",
                namespace: "monitoring",
                data: 8,
                created: "2025-02-01T00:00:00Z",
            },
            ConfigMapRecord {
                name: "prometheus-rules",
                namespace: "monitoring",
                data: 15,
                created: "2025-02-01T00:00:00Z",
            },
            ConfigMapRecord {
                name: "alertmanager-config",
                namespace: "monitoring",
                data: 3,
                created: "2025-02-01T00:00:00Z",
            },
            ConfigMapRecord {
                name: "db-init-scripts",
                namespace: "production",
                data: 4,
                created: "2025-01-20T06:00:00Z",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duplicate_names_have_distinct_ids() {
        let now = Utc.with_ymd_and_hms(2025, 2, 16, 0, 0, 0).unwrap();
        let rows = ConfigMapResource.load(now);

        let ids: Vec<String> = rows
            .iter()
            .filter(|r| r.name == "app-config")
            .map(|r| ConfigMapResource.row_id(r))
            .collect();
        // Same name in two namespaces must stay distinguishable for
        // selection.
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }
}
