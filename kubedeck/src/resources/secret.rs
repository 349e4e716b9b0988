use chrono::{DateTime, Utc};

use crate::{
    resources::{FieldAccessorFn, Resource},
    table::{CellTone, Column, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct SecretRecord {
    pub name: &'static str,
    pub namespace: &'static str,
    pub secret_type: &'static str,
    pub data: u32,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SecretRow {
    pub namespace: String,
    pub name: String,
    pub secret_type: String,
    pub data: FieldValue,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct SecretResource;

impl Resource for SecretResource {
    type Record = SecretRecord;
    type Row = SecretRow;

    fn title(&self) -> &'static str {
        "Secrets"
    }

    fn description(&self) -> &'static str {
        "View and manage Secret resources"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search secrets..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|s: &SecretRow| TableCell::new(&s.name, CellTone::Strong)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|s: &SecretRow| TableCell::muted(&s.namespace)),
            Column::new("type", "Type")
                .sortable()
                .render(|s: &SecretRow| TableCell::muted(&s.secret_type)),
            Column::new("data", "Data").sortable(),
            Column::new("age", "Age")
                .sortable()
                .render(|s: &SecretRow| TableCell::muted(&s.age.value)),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        SecretRow {
            namespace: record.namespace.to_string(),
            name: record.name.to_string(),
            secret_type: record.secret_type.to_string(),
            data: FieldValue::numeric(record.data.to_string(), record.data as i64),
            age: self.age_field(record.created, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        format!("{}/{}", row.namespace, row.name)
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |s, field| match field {
            "namespace" => Some(SortValue::Text(s.namespace.clone())),
            "name" => Some(SortValue::Text(s.name.clone())),
            "type" => Some(SortValue::Text(s.secret_type.clone())),
            "data" => match mode {
                AccessorMode::Sort | AccessorMode::Filter => s.data.sort_by.map(SortValue::Number),
                AccessorMode::Display => Some(SortValue::Text(s.data.value.clone())),
            },
            "age" => match mode {
                AccessorMode::Sort => s.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(s.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            SecretRecord {
                name: "default-token-abc12",
                namespace: "default",
                secret_type: "kubernetes.io/service-account-token",
                data: 3,
                created: "2025-01-10T00:00:00Z",
            },
            SecretRecord {
                name: "tls-production",
                namespace: "production",
                secret_type: "kubernetes.io/tls",
                data: 2,
                created: "2025-01-20T00:00:00Z",
            },
            SecretRecord {
                name: "db-credentials",
                namespace: "production",
                secret_type: "Opaque",
                data: 4,
                created: "2025-01-20T06:00:00Z",
            },
            SecretRecord {
                name: "redis-credentials",
                namespace: "production",
                secret_type: "Opaque",
                data: 2,
                created: "2025-01-20T06:00:00Z",
            },
            SecretRecord {
                name: "api-keys",
                namespace: "production",
                secret_type: "Opaque",
                data: 6,
                created: "2025-02-01T00:00:00Z",
            },
            SecretRecord {
                name: "docker-registry",
                namespace: "production",
                secret_type: "kubernetes.io/dockerconfigjson",
                data: 1,
                created: "2025-01-12T00:00:00Z",
            },
            SecretRecord {
                name: "tls-staging",
                namespace: "staging",
                secret_type: "kubernetes.io/tls",
                data: 2,
                created: "2025-01-20T00:00:00Z",
            },
            SecretRecord {
                name: "db-credentials",
                namespace: "staging",
                secret_type: "Opaque",
                data: 4,
                created: "2025-01-20T06:00:00Z",
            },
            SecretRecord {
                name: "grafana-admin",
                namespace: "monitoring",
                secret_type: "Opaque",
                data: 2,
                created: "2025-02-01T00:00:00Z",
            },
            SecretRecord {
                name: "prometheus-etcd-certs",
                namespace: "monitoring",
                secret_type: "Opaque",
                data: 3,
                created: "2025-02-01T00:00:00Z",
            },
        ]
    }
}
