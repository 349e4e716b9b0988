use chrono::{DateTime, Utc};

use crate::{
    resources::{FieldAccessorFn, Resource},
    table::{CellTone, Column, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct EventRecord {
    pub event_type: &'static str,
    pub reason: &'static str,
    pub object: &'static str,
    pub message: &'static str,
    pub namespace: &'static str,
    pub count: u32,
    pub last_seen: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct EventRow {
    pub event_type: String,
    pub reason: String,
    pub object: String,
    pub message: String,
    pub namespace: String,
    pub count: FieldValue,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct EventResource;

impl Resource for EventResource {
    type Record = EventRecord;
    type Row = EventRow;

    fn title(&self) -> &'static str {
        "Events"
    }

    fn description(&self) -> &'static str {
        "View cluster events across all namespaces"
    }

    fn search_key(&self) -> &'static str {
        "reason"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search events..."
    }

    // Event messages are long; a denser page would push the message column
    // off-screen.
    fn page_size(&self) -> usize {
        15
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("type", "Type")
                .sortable()
                .render(|e: &EventRow| {
                    let tone = if e.event_type == "Warning" {
                        CellTone::Warning
                    } else {
                        CellTone::Strong
                    };
                    TableCell::new(&e.event_type, tone)
                }),
            Column::new("reason", "Reason")
                .sortable()
                .render(|e: &EventRow| TableCell::new(&e.reason, CellTone::Strong)),
            Column::new("object", "Object")
                .sortable()
                .render(|e: &EventRow| TableCell::muted(&e.object)),
            Column::new("message", "Message")
                .render(|e: &EventRow| TableCell::muted(&e.message)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|e: &EventRow| TableCell::muted(&e.namespace)),
            Column::new("count", "Count").sortable(),
            Column::new("age", "Age")
                .sortable()
                .render(|e: &EventRow| TableCell::muted(&e.age.value)),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        EventRow {
            event_type: record.event_type.to_string(),
            reason: record.reason.to_string(),
            object: record.object.to_string(),
            message: record.message.to_string(),
            namespace: record.namespace.to_string(),
            count: FieldValue::numeric(record.count.to_string(), record.count as i64),
            age: self.age_field(record.last_seen, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        // Events carry no name of their own; namespace + object + reason is
        // the closest stable identity the sample data offers.
        format!("{}/{}/{}", row.namespace, row.object, row.reason)
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |e, field| match field {
            "type" => Some(SortValue::Text(e.event_type.clone())),
            "reason" => Some(SortValue::Text(e.reason.clone())),
            "object" => Some(SortValue::Text(e.object.clone())),
            "message" => Some(SortValue::Text(e.message.clone())),
            "namespace" => Some(SortValue::Text(e.namespace.clone())),
            "count" => match mode {
                AccessorMode::Sort | AccessorMode::Filter => e.count.sort_by.map(SortValue::Number),
                AccessorMode::Display => Some(SortValue::Text(e.count.value.clone())),
            },
            "age" => match mode {
                AccessorMode::Sort => e.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(e.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            EventRecord {
                event_type: "Warning",
                reason: "OOMKilling",
                object: "Pod/redis-cache-0",
                message: "Memory limit exceeded, container killed",
                namespace: "production",
                count: 42,
                last_seen: "2025-02-14T12:30:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "Scheduled",
                object: "Pod/frontend-app-uvw90",
                message: "Successfully assigned staging/frontend-app-uvw90 to worker-01",
                namespace: "staging",
                count: 1,
                last_seen: "2025-02-14T12:00:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "ScalingReplicaSet",
                object: "Deployment/api-server",
                message: "Scaled up replica set api-server-5d8f9c7b6 to 2",
                namespace: "production",
                count: 1,
                last_seen: "2025-02-14T11:30:00Z",
            },
            EventRecord {
                event_type: "Warning",
                reason: "NodeNotReady",
                object: "Node/worker-06",
                message: "Node worker-06 status is now: NodeNotReady",
                namespace: "kube-system",
                count: 3,
                last_seen: "2025-02-14T11:00:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "Pulled",
                object: "Pod/batch-job-runner-klm56",
                message: "Container image \"batch-runner:v2.1\" already present",
                namespace: "development",
                count: 1,
                last_seen: "2025-02-14T10:30:00Z",
            },
            EventRecord {
                event_type: "Warning",
                reason: "FailedScheduling",
                object: "Pod/frontend-app-uvw90",
                message: "0/12 nodes are available: insufficient memory",
                namespace: "staging",
                count: 5,
                last_seen: "2025-02-14T10:00:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "Created",
                object: "Pod/metrics-server-7b9c8d6e5f-xyz",
                message: "Created container metrics-server",
                namespace: "monitoring",
                count: 1,
                last_seen: "2025-02-14T09:00:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "Started",
                object: "Pod/metrics-server-7b9c8d6e5f-xyz",
                message: "Started container metrics-server",
                namespace: "monitoring",
                count: 1,
                last_seen: "2025-02-14T09:00:00Z",
            },
            EventRecord {
                event_type: "Warning",
                reason: "BackOff",
                object: "Pod/redis-cache-0",
                message: "Back-off restarting failed container",
                namespace: "production",
                count: 42,
                last_seen: "2025-02-14T08:00:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "SuccessfulCreate",
                object: "Job/backup-daily-1707920400",
                message: "Created pod: backup-daily-1707920400-abc12",
                namespace: "production",
                count: 1,
                last_seen: "2025-02-14T06:00:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "Completed",
                object: "Job/backup-daily-1707920400",
                message: "Job completed",
                namespace: "production",
                count: 1,
                last_seen: "2025-02-14T06:15:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "LeaderElection",
                object: "ConfigMap/kube-scheduler",
                message: "control-plane-01 became leader",
                namespace: "kube-system",
                count: 1,
                last_seen: "2025-02-13T00:00:00Z",
            },
            EventRecord {
                event_type: "Warning",
                reason: "Unhealthy",
                object: "Pod/worker-processor-abc12",
                message: "Liveness probe failed: HTTP probe failed with status 503",
                namespace: "production",
                count: 8,
                last_seen: "2025-02-13T18:00:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "Killing",
                object: "Pod/worker-processor-abc12",
                message: "Stopping container worker",
                namespace: "production",
                count: 3,
                last_seen: "2025-02-13T18:05:00Z",
            },
            EventRecord {
                event_type: "Normal",
                reason: "ConfigMapUpdated",
                object: "ConfigMap/app-config",
                message: "ConfigMap app-config updated in namespace staging",
                namespace: "staging",
                count: 1,
                last_seen: "2025-02-13T15:00:00Z",
            },
        ]
    }
}
