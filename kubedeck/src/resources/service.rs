use chrono::{DateTime, Utc};

use crate::{
    resources::{FieldAccessorFn, Resource},
    table::{CellTone, Column, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct ServiceRecord {
    pub name: &'static str,
    pub namespace: &'static str,
    pub service_type: &'static str,
    pub cluster_ip: &'static str,
    pub external_ip: &'static str,
    pub ports: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ServiceRow {
    pub namespace: String,
    pub name: String,
    pub service_type: String,
    pub cluster_ip: String,
    pub external_ip: String,
    pub ports: String,
    pub age: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceResource;

impl Resource for ServiceResource {
    type Record = ServiceRecord;
    type Row = ServiceRow;

    fn title(&self) -> &'static str {
        "Services"
    }

    fn description(&self) -> &'static str {
        "Manage service resources for network access"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search services..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|s: &ServiceRow| TableCell::new(&s.name, CellTone::Strong)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|s: &ServiceRow| TableCell::muted(&s.namespace)),
            Column::new("type", "Type")
                .sortable()
                .render(|s: &ServiceRow| {
                    // LoadBalancers are the externally exposed ones.
                    let tone = if s.service_type == "LoadBalancer" {
                        CellTone::Success
                    } else {
                        CellTone::Default
                    };
                    TableCell::new(&s.service_type, tone)
                }),
            Column::new("clusterip", "Cluster IP")
                .render(|s: &ServiceRow| TableCell::muted(&s.cluster_ip)),
            Column::new("externalip", "External IP")
                .render(|s: &ServiceRow| TableCell::muted_or_dash(&s.external_ip)),
            Column::new("ports", "Ports")
                .render(|s: &ServiceRow| TableCell::muted(&s.ports)),
            Column::new("age", "Age")
                .sortable()
                .render(|s: &ServiceRow| TableCell::muted(&s.age.value)),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        ServiceRow {
            namespace: record.namespace.to_string(),
            name: record.name.to_string(),
            service_type: record.service_type.to_string(),
            cluster_ip: record.cluster_ip.to_string(),
            external_ip: record.external_ip.to_string(),
            ports: record.ports.to_string(),
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
            "type" => Some(SortValue::Text(s.service_type.clone())),
            "clusterip" => Some(SortValue::Text(s.cluster_ip.clone())),
            "externalip" => Some(SortValue::Text(s.external_ip.clone())),
            "ports" => Some(SortValue::Text(s.ports.clone())),
            "age" => match mode {
                AccessorMode::Sort => s.age.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(s.age.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            ServiceRecord {
                name: "kubernetes",
                namespace: "default",
                service_type: "ClusterIP",
                cluster_ip: "10.96.0.1",
                external_ip: "",
                ports: "443/TCP",
                created: "2025-01-10T00:00:00Z",
            },
            ServiceRecord {
                name: "nginx-service",
                namespace: "production",
                service_type: "LoadBalancer",
                cluster_ip: "10.96.12.45",
                external_ip: "203.0.113.10",
                ports: "80/TCP, 443/TCP",
                created: "2025-02-10T10:00:00Z",
            },
            ServiceRecord {
                name: "api-service",
                namespace: "production",
                service_type: "ClusterIP",
                cluster_ip: "10.96.15.20",
                external_ip: "",
                ports: "8080/TCP",
                created: "2025-02-08T08:00:00Z",
            },
            ServiceRecord {
                name: "postgres-service",
                namespace: "production",
                service_type: "ClusterIP",
                cluster_ip: "10.96.20.10",
                external_ip: "",
                ports: "5432/TCP",
                created: "2025-01-20T06:00:00Z",
            },
            ServiceRecord {
                name: "redis-service",
                namespace: "production",
                service_type: "ClusterIP",
                cluster_ip: "10.96.20.15",
                external_ip: "",
                ports: "6379/TCP",
                created: "2025-01-20T06:00:00Z",
            },
            ServiceRecord {
                name: "frontend-service",
                namespace: "staging",
                service_type: "NodePort",
                cluster_ip: "10.96.30.5",
                external_ip: "",
                ports: "3000:30080/TCP",
                created: "2025-02-14T09:00:00Z",
            },
            ServiceRecord {
                name: "kube-dns",
                namespace: "kube-system",
                service_type: "ClusterIP",
                cluster_ip: "10.96.0.10",
                external_ip: "",
                ports: "53/UDP, 53/TCP, 9153/TCP",
                created: "2025-01-10T00:00:00Z",
            },
            ServiceRecord {
                name: "metrics-server",
                namespace: "kube-system",
                service_type: "ClusterIP",
                cluster_ip: "10.96.0.22",
                external_ip: "",
                ports: "443/TCP",
                created: "2025-01-15T00:00:00Z",
            },
            ServiceRecord {
                name: "prometheus",
                namespace: "monitoring",
                service_type: "ClusterIP",
                cluster_ip: "10.96.40.10",
                external_ip: "",
                ports: "9090/TCP",
                created: "2025-02-01T00:00:00Z",
            },
            ServiceRecord {
                name: "grafana",
                namespace: "monitoring",
                service_type: "LoadBalancer",
                cluster_ip: "10.96.40.20",
                external_ip: "203.0.113.20",
                ports: "3000/TCP",
                created: "2025-02-01T00:00:00Z",
            },
        ]
    }
}
