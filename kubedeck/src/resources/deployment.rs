use chrono::{DateTime, Utc};

use crate::{
    resources::{status_cell, FieldAccessorFn, Resource},
    table::{CellTone, Column, RowAction, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct DeploymentRecord {
    pub name: &'static str,
    pub namespace: &'static str,
    pub ready: &'static str,
    pub up_to_date: u32,
    pub available: u32,
    pub status: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DeploymentRow {
    pub namespace: String,
    pub name: String,
    pub ready: FieldValue,
    pub up_to_date: FieldValue,
    pub available: FieldValue,
    pub status: String,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct DeploymentResource;

impl Resource for DeploymentResource {
    type Record = DeploymentRecord;
    type Row = DeploymentRow;

    fn title(&self) -> &'static str {
        "Deployments"
    }

    fn description(&self) -> &'static str {
        "Manage deployment resources across namespaces"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search deployments..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|d: &DeploymentRow| TableCell::new(&d.name, CellTone::Strong)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|d: &DeploymentRow| TableCell::muted(&d.namespace)),
            Column::new("ready", "Ready").sortable(),
            Column::new("uptodate", "Up-to-date").sortable(),
            Column::new("available", "Available").sortable(),
            Column::new("status", "Status")
                .sortable()
                .render(|d: &DeploymentRow| status_cell(&d.status)),
            Column::new("age", "Age")
                .sortable()
                .render(|d: &DeploymentRow| TableCell::muted(&d.age.value)),
        ]
    }

    fn row_actions(&self) -> Vec<RowAction<Self::Row>> {
        vec![
            RowAction::new("Restart Rollout", |d: &DeploymentRow| {
                tracing::info!(deployment = %d.name, namespace = %d.namespace, "rollout restart requested");
            }),
            RowAction::new("Scale", |d: &DeploymentRow| {
                tracing::info!(deployment = %d.name, namespace = %d.namespace, "scale requested");
            }),
            RowAction::destructive("Delete", |d: &DeploymentRow| {
                tracing::info!(deployment = %d.name, namespace = %d.namespace, "delete requested");
            }),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        let ready_count: i64 = record
            .ready
            .split('/')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);

        DeploymentRow {
            namespace: record.namespace.to_string(),
            name: record.name.to_string(),
            ready: FieldValue::numeric(record.ready, ready_count),
            up_to_date: FieldValue::numeric(record.up_to_date.to_string(), record.up_to_date as i64),
            available: FieldValue::numeric(record.available.to_string(), record.available as i64),
            status: record.status.to_string(),
            age: self.age_field(record.created, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        format!("{}/{}", row.namespace, row.name)
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |d, field| match field {
            "namespace" => Some(SortValue::Text(d.namespace.clone())),
            "name" => Some(SortValue::Text(d.name.clone())),
            "status" => Some(SortValue::Text(d.status.clone())),
            "ready" => match mode {
                AccessorMode::Sort => d.ready.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(d.ready.value.clone())),
            },
            "uptodate" => match mode {
                AccessorMode::Sort | AccessorMode::Filter => {
                    d.up_to_date.sort_by.map(SortValue::Number)
                }
                AccessorMode::Display => Some(SortValue::Text(d.up_to_date.value.clone())),
            },
            "available" => match mode {
                AccessorMode::Sort | AccessorMode::Filter => {
                    d.available.sort_by.map(SortValue::Number)
                }
                AccessorMode::Display => Some(SortValue::Text(d.available.value.clone())),
            },
            "age" => match mode {
                AccessorMode::Sort => d.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(d.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            DeploymentRecord {
                name: "nginx-deployment",
                namespace: "production",
                ready: "3/3",
                up_to_date: 3,
                available: 3,
                status: "Available",
                created: "2025-02-10T10:00:00Z",
            },
            DeploymentRecord {
                name: "api-server",
                namespace: "production",
                ready: "2/2",
                up_to_date: 2,
                available: 2,
                status: "Available",
                created: "2025-02-08T08:00:00Z",
            },
            DeploymentRecord {
                name: "worker-processor",
                namespace: "production",
                ready: "1/1",
                up_to_date: 1,
                available: 1,
                status: "Available",
                created: "2025-02-05T14:00:00Z",
            },
            DeploymentRecord {
                name: "frontend-app",
                namespace: "staging",
                ready: "1/2",
                up_to_date: 2,
                available: 1,
                status: "Pending",
                created: "2025-02-14T09:00:00Z",
            },
            DeploymentRecord {
                name: "batch-processor",
                namespace: "development",
                ready: "1/1",
                up_to_date: 1,
                available: 1,
                status: "Available",
                created: "2025-02-12T11:00:00Z",
            },
            DeploymentRecord {
                name: "auth-service",
                namespace: "production",
                ready: "2/2",
                up_to_date: 2,
                available: 2,
                status: "Available",
                created: "2025-01-28T06:00:00Z",
            },
            DeploymentRecord {
                name: "notification-service",
                namespace: "production",
                ready: "1/1",
                up_to_date: 1,
                available: 1,
                status: "Available",
                created: "2025-02-01T12:00:00Z",
            },
            DeploymentRecord {
                name: "gateway",
                namespace: "production",
                ready: "3/3",
                up_to_date: 3,
                available: 3,
                status: "Available",
                created: "2025-01-20T00:00:00Z",
            },
            DeploymentRecord {
                name: "cronjob-runner",
                namespace: "staging",
                ready: "0/1",
                up_to_date: 1,
                available: 0,
                status: "Failed",
                created: "2025-02-13T15:00:00Z",
            },
            DeploymentRecord {
                name: "metrics-collector",
                namespace: "monitoring",
                ready: "1/1",
                up_to_date: 1,
                available: 1,
                status: "Available",
                created: "2025-02-01T00:00:00Z",
            },
            DeploymentRecord {
                name: "log-aggregator",
                namespace: "monitoring",
                ready: "2/2",
                up_to_date: 2,
                available: 2,
                status: "Available",
                created: "2025-01-25T00:00:00Z",
            },
            DeploymentRecord {
                name: "dashboard",
                namespace: "monitoring",
                ready: "1/1",
                up_to_date: 1,
                available: 1,
                status: "Available",
                created: "2025-02-03T10:00:00Z",
            },
        ]
    }
}
