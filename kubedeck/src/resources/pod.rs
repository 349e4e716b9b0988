use chrono::{DateTime, Utc};

use crate::{
    resources::{status_cell, FieldAccessorFn, Resource},
    table::{CellTone, Column, RowAction, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct PodRecord {
    pub name: &'static str,
    pub namespace: &'static str,
    pub status: &'static str,
    pub ready: &'static str,
    pub restarts: u32,
    pub node: &'static str,
    pub ip: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct PodRow {
    pub namespace: String,
    pub name: String,
    pub status: String,
    pub ready: FieldValue,
    pub restarts: FieldValue,
    pub ip: FieldValue,
    pub node: String,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct PodResource;

impl Resource for PodResource {
    type Record = PodRecord;
    type Row = PodRow;

    fn title(&self) -> &'static str {
        "Pods"
    }

    fn description(&self) -> &'static str {
        "View and manage pods across all namespaces"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search pods..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|pod: &PodRow| TableCell::new(&pod.name, CellTone::Strong)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|pod: &PodRow| TableCell::muted(&pod.namespace)),
            Column::new("status", "Status")
                .sortable()
                .render(|pod: &PodRow| status_cell(&pod.status)),
            Column::new("ready", "Ready"),
            Column::new("restarts", "Restarts")
                .sortable()
                .render(|pod: &PodRow| {
                    let tone = if pod.restarts.sort_by.unwrap_or(0) > 10 {
                        CellTone::Error
                    } else {
                        CellTone::Default
                    };
                    TableCell::new(&pod.restarts.value, tone)
                }),
            Column::new("node", "Node")
                .sortable()
                .render(|pod: &PodRow| TableCell::muted_or_dash(&pod.node)),
            Column::new("ip", "IP")
                .render(|pod: &PodRow| TableCell::muted_or_dash(&pod.ip.value)),
            Column::new("age", "Age")
                .sortable()
                .render(|pod: &PodRow| TableCell::muted(&pod.age.value)),
        ]
    }

    fn row_actions(&self) -> Vec<RowAction<Self::Row>> {
        vec![
            RowAction::new("Describe", |pod: &PodRow| {
                tracing::info!(pod = %pod.name, namespace = %pod.namespace, "describe requested");
            }),
            RowAction::new("View Logs", |pod: &PodRow| {
                tracing::info!(pod = %pod.name, namespace = %pod.namespace, "log view requested");
            }),
            RowAction::destructive("Delete", |pod: &PodRow| {
                tracing::info!(pod = %pod.name, namespace = %pod.namespace, "delete requested");
            }),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        PodRow {
            namespace: record.namespace.to_string(),
            name: record.name.to_string(),
            status: record.status.to_string(),
            ready: FieldValue::numeric(record.ready, ready_count(record.ready)),
            restarts: FieldValue::numeric(record.restarts.to_string(), record.restarts as i64),
            ip: FieldValue {
                value: record.ip.to_string(),
                sort_by: ip_to_num(record.ip),
            },
            node: record.node.to_string(),
            age: self.age_field(record.created, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        format!("{}/{}", row.namespace, row.name)
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |pod, field| match field {
            "namespace" => Some(SortValue::Text(pod.namespace.clone())),
            "name" => Some(SortValue::Text(pod.name.clone())),
            "status" => Some(SortValue::Text(pod.status.clone())),
            "ready" => match mode {
                AccessorMode::Sort => pod.ready.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(pod.ready.value.clone())),
            },
            "restarts" => match mode {
                AccessorMode::Sort => pod.restarts.sort_by.map(SortValue::Number),
                AccessorMode::Filter => pod.restarts.sort_by.map(SortValue::Number),
                AccessorMode::Display => Some(SortValue::Text(pod.restarts.value.clone())),
            },
            "ip" => match mode {
                AccessorMode::Sort => pod.ip.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(pod.ip.value.clone())),
            },
            "node" => Some(SortValue::Text(pod.node.clone())),
            "age" => match mode {
                AccessorMode::Sort => pod.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(pod.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            PodRecord {
                name: "nginx-deployment-7fb96c846b-4xmpl",
                namespace: "production",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-01",
                ip: "10.244.1.12",
                created: "2025-02-14T10:00:00Z",
            },
            PodRecord {
                name: "nginx-deployment-7fb96c846b-9klmn",
                namespace: "production",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-02",
                ip: "10.244.2.8",
                created: "2025-02-14T10:00:00Z",
            },
            PodRecord {
                name: "api-server-5d8f9c7b6-abc12",
                namespace: "production",
                status: "Running",
                ready: "2/2",
                restarts: 1,
                node: "worker-01",
                ip: "10.244.1.15",
                created: "2025-02-13T08:30:00Z",
            },
            PodRecord {
                name: "api-server-5d8f9c7b6-def34",
                namespace: "production",
                status: "Running",
                ready: "2/2",
                restarts: 0,
                node: "worker-03",
                ip: "10.244.3.22",
                created: "2025-02-13T08:30:00Z",
            },
            PodRecord {
                name: "redis-cache-0",
                namespace: "production",
                status: "CrashLoopBackOff",
                ready: "0/1",
                restarts: 42,
                node: "worker-02",
                ip: "10.244.2.19",
                created: "2025-02-10T14:00:00Z",
            },
            PodRecord {
                name: "postgres-primary-0",
                namespace: "production",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-01",
                ip: "10.244.1.30",
                created: "2025-01-20T06:00:00Z",
            },
            PodRecord {
                name: "postgres-replica-0",
                namespace: "production",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-03",
                ip: "10.244.3.31",
                created: "2025-01-20T06:00:00Z",
            },
            PodRecord {
                name: "worker-processor-abc12",
                namespace: "production",
                status: "Running",
                ready: "1/1",
                restarts: 3,
                node: "worker-02",
                ip: "10.244.2.44",
                created: "2025-02-12T15:00:00Z",
            },
            PodRecord {
                name: "frontend-app-xyz78",
                namespace: "staging",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-01",
                ip: "10.244.1.50",
                created: "2025-02-14T09:00:00Z",
            },
            PodRecord {
                name: "frontend-app-uvw90",
                namespace: "staging",
                status: "Pending",
                ready: "0/1",
                restarts: 0,
                node: "",
                ip: "",
                created: "2025-02-14T12:00:00Z",
            },
            PodRecord {
                name: "batch-job-runner-klm56",
                namespace: "development",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-03",
                ip: "10.244.3.60",
                created: "2025-02-14T11:30:00Z",
            },
            PodRecord {
                name: "monitoring-agent-nop78",
                namespace: "kube-system",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-01",
                ip: "10.244.1.5",
                created: "2025-01-15T00:00:00Z",
            },
            PodRecord {
                name: "monitoring-agent-qrs90",
                namespace: "kube-system",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "worker-02",
                ip: "10.244.2.5",
                created: "2025-01-15T00:00:00Z",
            },
            PodRecord {
                name: "coredns-5d78c9869d-abc12",
                namespace: "kube-system",
                status: "Running",
                ready: "1/1",
                restarts: 0,
                node: "control-plane-01",
                ip: "10.244.0.3",
                created: "2025-01-10T00:00:00Z",
            },
            PodRecord {
                name: "metrics-server-7b9c8d6e5f-xyz",
                namespace: "monitoring",
                status: "Running",
                ready: "1/1",
                restarts: 2,
                node: "worker-01",
                ip: "10.244.1.70",
                created: "2025-02-01T00:00:00Z",
            },
        ]
    }
}

/// Containers ready, for sorting `"2/2"`-style cells by readiness.
fn ready_count(ready: &str) -> i64 {
    ready
        .split('/')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// Packs a dotted-quad address into a number so IPs sort numerically
/// instead of lexically.
fn ip_to_num(ip: &str) -> Option<i64> {
    let octets: Vec<&str> = ip.split('.').collect();
    if octets.len() != 4 {
        return None;
    }
    let mut num: i64 = 0;
    for octet in octets {
        let val: i64 = octet.parse().ok()?;
        num = (num << 8) | val;
    }
    Some(num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ip_to_num() {
        assert_eq!(ip_to_num("0.0.0.1"), Some(1));
        assert_eq!(ip_to_num("10.244.1.12"), Some((10 << 24) | (244 << 16) | (1 << 8) | 12));
        assert_eq!(ip_to_num(""), None);
        assert_eq!(ip_to_num("10.244.1"), None);
    }

    #[test]
    fn test_build_row() {
        let now = Utc.with_ymd_and_hms(2025, 2, 16, 12, 0, 0).unwrap();
        let rows = PodResource.load(now);

        let crashing = rows.iter().find(|r| r.name == "redis-cache-0").unwrap();
        assert_eq!(crashing.status, "CrashLoopBackOff");
        assert_eq!(crashing.restarts.value, "42");
        assert_eq!(crashing.restarts.sort_by, Some(42));
        assert_eq!(crashing.ready.sort_by, Some(0));

        let pending = rows.iter().find(|r| r.name == "frontend-app-uvw90").unwrap();
        assert_eq!(pending.ip.sort_by, None);
        assert_eq!(PodResource.row_id(pending), "staging/frontend-app-uvw90");
    }

    #[test]
    fn test_filter_mode_hides_numeric_fields() {
        let accessor = PodResource.field_accessor(AccessorMode::Filter);
        let now = Utc.with_ymd_and_hms(2025, 2, 16, 12, 0, 0).unwrap();
        let rows = PodResource.load(now);

        // Name filters as text; restarts stays numeric so the search filter
        // passes it through.
        assert!(matches!(
            accessor(&rows[0], "name"),
            Some(SortValue::Text(_))
        ));
        assert!(matches!(
            accessor(&rows[0], "restarts"),
            Some(SortValue::Number(_))
        ));
    }
}
