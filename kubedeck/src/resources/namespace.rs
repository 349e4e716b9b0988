use chrono::{DateTime, Utc};

use crate::{
    resources::{status_cell, FieldAccessorFn, Resource},
    table::{CellTone, Column, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct NamespaceRecord {
    pub name: &'static str,
    pub status: &'static str,
    pub labels: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NamespaceRow {
    pub name: String,
    pub status: String,
    pub labels: String,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct NamespaceResource;

impl Resource for NamespaceResource {
    type Record = NamespaceRecord;
    type Row = NamespaceRow;

    fn title(&self) -> &'static str {
        "Namespaces"
    }

    fn description(&self) -> &'static str {
        "View and manage cluster namespaces"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search namespaces..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|ns: &NamespaceRow| TableCell::new(&ns.name, CellTone::Strong)),
            Column::new("status", "Status")
                .sortable()
                .render(|ns: &NamespaceRow| status_cell(&ns.status)),
            Column::new("labels", "Labels")
                .render(|ns: &NamespaceRow| TableCell::muted(&ns.labels)),
            Column::new("age", "Age")
                .sortable()
                .render(|ns: &NamespaceRow| TableCell::muted(&ns.age.value)),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        NamespaceRow {
            name: record.name.to_string(),
            status: record.status.to_string(),
            labels: record.labels.to_string(),
            age: self.age_field(record.created, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        row.name.clone()
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |ns, field| match field {
            "name" => Some(SortValue::Text(ns.name.clone())),
            "status" => Some(SortValue::Text(ns.status.clone())),
            "labels" => Some(SortValue::Text(ns.labels.clone())),
            "age" => match mode {
                AccessorMode::Sort => ns.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(ns.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            NamespaceRecord {
                name: "default",
                status: "Active",
                labels: "kubernetes.io/metadata.name=default",
                created: "2025-01-10T00:00:00Z",
            },
            NamespaceRecord {
                name: "kube-system",
                status: "Active",
                labels: "kubernetes.io/metadata.name=kube-system",
                created: "2025-01-10T00:00:00Z",
            },
            NamespaceRecord {
                name: "kube-public",
                status: "Active",
                labels: "kubernetes.io/metadata.name=kube-public",
                created: "2025-01-10T00:00:00Z",
            },
            NamespaceRecord {
                name: "kube-node-lease",
                status: "Active",
                labels: "kubernetes.io/metadata.name=kube-node-lease",
                created: "2025-01-10T00:00:00Z",
            },
            NamespaceRecord {
                name: "production",
                status: "Active",
                labels: "env=production, team=platform",
                created: "2025-01-12T00:00:00Z",
            },
            NamespaceRecord {
                name: "staging",
                status: "Active",
                labels: "env=staging, team=platform",
                created: "2025-01-12T00:00:00Z",
            },
            NamespaceRecord {
                name: "development",
                status: "Active",
                labels: "env=development, team=platform",
                created: "2025-01-12T00:00:00Z",
            },
            NamespaceRecord {
                name: "monitoring",
                status: "Active",
                labels: "app=monitoring, team=sre",
                created: "2025-01-15T00:00:00Z",
            },
            NamespaceRecord {
                name: "ingress-nginx",
                status: "Active",
                labels: "app.kubernetes.io/name=ingress-nginx",
                created: "2025-01-15T00:00:00Z",
            },
            NamespaceRecord {
                name: "cert-manager",
                status: "Active",
                labels: "app.kubernetes.io/name=cert-manager",
                created: "2025-01-15T00:00:00Z",
            },
        ]
    }
}
