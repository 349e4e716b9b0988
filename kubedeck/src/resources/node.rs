use chrono::{DateTime, Utc};

use crate::{
    resources::{status_cell, FieldAccessorFn, Resource},
    table::{CellTone, Column, RowAction, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct NodeRecord {
    pub name: &'static str,
    pub status: &'static str,
    pub roles: &'static str,
    pub version: &'static str,
    pub cpu: &'static str,
    pub memory: &'static str,
    pub pods: u32,
    pub os: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NodeRow {
    pub name: String,
    pub status: String,
    pub roles: String,
    pub version: String,
    pub cpu: String,
    pub memory: String,
    pub pods: FieldValue,
    pub os: String,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct NodeResource;

impl Resource for NodeResource {
    type Record = NodeRecord;
    type Row = NodeRow;

    fn title(&self) -> &'static str {
        "Nodes"
    }

    fn description(&self) -> &'static str {
        "View cluster node status and resource allocation"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search nodes..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|n: &NodeRow| TableCell::new(&n.name, CellTone::Strong)),
            Column::new("status", "Status")
                .sortable()
                .render(|n: &NodeRow| status_cell(&n.status)),
            Column::new("roles", "Roles")
                .sortable()
                .render(|n: &NodeRow| {
                    let tone = if n.roles == "control-plane" {
                        CellTone::Strong
                    } else {
                        CellTone::Default
                    };
                    TableCell::new(&n.roles, tone)
                }),
            Column::new("version", "Version")
                .render(|n: &NodeRow| TableCell::muted(&n.version)),
            Column::new("cpu", "CPU"),
            Column::new("memory", "Memory"),
            Column::new("pods", "Pods").sortable(),
            // The OS rarely matters day to day; reachable via the column
            // selector.
            Column::new("os", "OS").default_hidden(),
            Column::new("age", "Age")
                .sortable()
                .render(|n: &NodeRow| TableCell::muted(&n.age.value)),
        ]
    }

    fn row_actions(&self) -> Vec<RowAction<Self::Row>> {
        vec![
            RowAction::new("Describe", |n: &NodeRow| {
                tracing::info!(node = %n.name, "describe requested");
            }),
            RowAction::new("Cordon", |n: &NodeRow| {
                tracing::info!(node = %n.name, "cordon requested");
            }),
            RowAction::destructive("Drain", |n: &NodeRow| {
                tracing::info!(node = %n.name, "drain requested");
            }),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        NodeRow {
            name: record.name.to_string(),
            status: record.status.to_string(),
            roles: record.roles.to_string(),
            version: record.version.to_string(),
            cpu: record.cpu.to_string(),
            memory: record.memory.to_string(),
            pods: FieldValue::numeric(record.pods.to_string(), record.pods as i64),
            os: record.os.to_string(),
            age: self.age_field(record.created, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        row.name.clone()
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |n, field| match field {
            "name" => Some(SortValue::Text(n.name.clone())),
            "status" => Some(SortValue::Text(n.status.clone())),
            "roles" => Some(SortValue::Text(n.roles.clone())),
            "version" => Some(SortValue::Text(n.version.clone())),
            "cpu" => Some(SortValue::Text(n.cpu.clone())),
            "memory" => Some(SortValue::Text(n.memory.clone())),
            "os" => Some(SortValue::Text(n.os.clone())),
            "pods" => match mode {
                AccessorMode::Sort | AccessorMode::Filter => n.pods.sort_by.map(SortValue::Number),
                AccessorMode::Display => Some(SortValue::Text(n.pods.value.clone())),
            },
            "age" => match mode {
                AccessorMode::Sort => n.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(n.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            NodeRecord {
                name: "control-plane-01",
                status: "Ready",
                roles: "control-plane",
                version: "v1.29.2",
                cpu: "4/8 cores",
                memory: "12/16 GiB",
                pods: 14,
                os: "Ubuntu 22.04",
                created: "2025-01-10T00:00:00Z",
            },
            NodeRecord {
                name: "control-plane-02",
                status: "Ready",
                roles: "control-plane",
                version: "v1.29.2",
                cpu: "3/8 cores",
                memory: "10/16 GiB",
                pods: 12,
                os: "Ubuntu 22.04",
                created: "2025-01-10T00:00:00Z",
            },
            NodeRecord {
                name: "control-plane-03",
                status: "Ready",
                roles: "control-plane",
                version: "v1.29.2",
                cpu: "3/8 cores",
                memory: "11/16 GiB",
                pods: 13,
                os: "Ubuntu 22.04",
                created: "2025-01-10T00:00:00Z",
            },
            NodeRecord {
                name: "worker-01",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "6/8 cores",
                memory: "28/32 GiB",
                pods: 22,
                os: "Ubuntu 22.04",
                created: "2025-01-10T00:00:00Z",
            },
            NodeRecord {
                name: "worker-02",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "5/8 cores",
                memory: "24/32 GiB",
                pods: 18,
                os: "Ubuntu 22.04",
                created: "2025-01-10T00:00:00Z",
            },
            NodeRecord {
                name: "worker-03",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "7/8 cores",
                memory: "30/32 GiB",
                pods: 25,
                os: "Ubuntu 22.04",
                created: "2025-01-10T00:00:00Z",
            },
            NodeRecord {
                name: "worker-04",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "4/8 cores",
                memory: "20/32 GiB",
                pods: 15,
                os: "Ubuntu 22.04",
                created: "2025-01-15T00:00:00Z",
            },
            NodeRecord {
                name: "worker-05",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "6/8 cores",
                memory: "26/32 GiB",
                pods: 20,
                os: "Ubuntu 22.04",
                created: "2025-01-15T00:00:00Z",
            },
            NodeRecord {
                name: "worker-06",
                status: "Warning",
                roles: "worker",
                version: "v1.29.2",
                cpu: "7/8 cores",
                memory: "31/32 GiB",
                pods: 28,
                os: "Ubuntu 22.04",
                created: "2025-01-20T00:00:00Z",
            },
            NodeRecord {
                name: "worker-07",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "3/8 cores",
                memory: "18/32 GiB",
                pods: 12,
                os: "Ubuntu 22.04",
                created: "2025-01-20T00:00:00Z",
            },
            NodeRecord {
                name: "worker-08",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "5/8 cores",
                memory: "22/32 GiB",
                pods: 16,
                os: "Ubuntu 22.04",
                created: "2025-02-01T00:00:00Z",
            },
            NodeRecord {
                name: "worker-09",
                status: "Ready",
                roles: "worker",
                version: "v1.29.2",
                cpu: "4/8 cores",
                memory: "19/32 GiB",
                pods: 14,
                os: "Ubuntu 22.04",
                created: "2025-02-01T00:00:00Z",
            },
        ]
    }
}
