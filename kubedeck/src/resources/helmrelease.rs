use chrono::{DateTime, Utc};

use crate::{
    resources::{status_cell, FieldAccessorFn, Resource},
    table::{CellTone, Column, TableCell},
    utils::{AccessorMode, FieldValue, SortValue},
};

#[derive(Debug, Clone)]
pub struct HelmReleaseRecord {
    pub name: &'static str,
    pub namespace: &'static str,
    pub revision: u32,
    pub status: &'static str,
    pub chart: &'static str,
    pub app_version: &'static str,
    pub updated: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct HelmReleaseRow {
    pub namespace: String,
    pub name: String,
    pub revision: FieldValue,
    pub status: String,
    pub chart: String,
    pub app_version: String,
    pub updated: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct HelmReleaseResource;

impl Resource for HelmReleaseResource {
    type Record = HelmReleaseRecord;
    type Row = HelmReleaseRow;

    fn title(&self) -> &'static str {
        "Helm Releases"
    }

    fn description(&self) -> &'static str {
        "View and manage Helm releases across the cluster"
    }

    fn search_placeholder(&self) -> &'static str {
        "Search releases..."
    }

    fn columns(&self) -> Vec<Column<Self::Row>> {
        vec![
            Column::new("name", "Name")
                .sortable()
                .render(|r: &HelmReleaseRow| TableCell::new(&r.name, CellTone::Strong)),
            Column::new("namespace", "Namespace")
                .sortable()
                .render(|r: &HelmReleaseRow| TableCell::muted(&r.namespace)),
            Column::new("revision", "Revision").sortable(),
            Column::new("status", "Status")
                .sortable()
                .render(|r: &HelmReleaseRow| status_cell(&r.status)),
            Column::new("chart", "Chart")
                .render(|r: &HelmReleaseRow| TableCell::muted(&r.chart)),
            Column::new("appversion", "App Version"),
            Column::new("updated", "Updated")
                .sortable()
                .render(|r: &HelmReleaseRow| TableCell::muted(&r.updated.value)),
        ]
    }

    fn build_row(&self, record: &Self::Record, now: DateTime<Utc>) -> Self::Row {
        HelmReleaseRow {
            namespace: record.namespace.to_string(),
            name: record.name.to_string(),
            revision: FieldValue::numeric(record.revision.to_string(), record.revision as i64),
            status: record.status.to_string(),
            chart: record.chart.to_string(),
            app_version: record.app_version.to_string(),
            updated: self.age_field(record.updated, now),
        }
    }

    fn row_id(&self, row: &Self::Row) -> String {
        format!("{}/{}", row.namespace, row.name)
    }

    fn field_accessor(&self, mode: AccessorMode) -> FieldAccessorFn<'_, Self::Row> {
        Box::new(move |r, field| match field {
            "namespace" => Some(SortValue::Text(r.namespace.clone())),
            "name" => Some(SortValue::Text(r.name.clone())),
            "status" => Some(SortValue::Text(r.status.clone())),
            "chart" => Some(SortValue::Text(r.chart.clone())),
            "appversion" => Some(SortValue::Text(r.app_version.clone())),
            "revision" => match mode {
                AccessorMode::Sort | AccessorMode::Filter => {
                    r.revision.sort_by.map(SortValue::Number)
                }
                AccessorMode::Display => Some(SortValue::Text(r.revision.value.clone())),
            },
            "updated" => match mode {
                AccessorMode::Sort => r.updated.sort_by.map(SortValue::Number),
                _ => Some(SortValue::Text(r.updated.value.clone())),
            },
            _ => None,
        })
    }

    fn sample_records(&self) -> Vec<Self::Record> {
        vec![
            HelmReleaseRecord {
                name: "nginx-ingress",
                namespace: "ingress-nginx",
                revision: 3,
                status: "Deployed",
                chart: "ingress-nginx-4.9.1",
                app_version: "1.9.6",
                updated: "2025-02-10T10:00:00Z",
            },
            HelmReleaseRecord {
                name: "prometheus-stack",
                namespace: "monitoring",
                revision: 5,
                status: "Deployed",
                chart: "kube-prometheus-stack-56.6.2",
                app_version: "v0.71.2",
                updated: "2025-02-08T08:00:00Z",
            },
            HelmReleaseRecord {
                name: "cert-manager",
                namespace: "cert-manager",
                revision: 2,
                status: "Deployed",
                chart: "cert-manager-v1.14.3",
                app_version: "v1.14.3",
                updated: "2025-02-01T00:00:00Z",
            },
            HelmReleaseRecord {
                name: "redis",
                namespace: "production",
                revision: 1,
                status: "Deployed",
                chart: "redis-18.12.1",
                app_version: "7.2.4",
                updated: "2025-01-20T06:00:00Z",
            },
            HelmReleaseRecord {
                name: "postgresql",
                namespace: "production",
                revision: 4,
                status: "Deployed",
                chart: "postgresql-14.3.1",
                app_version: "16.2.0",
                updated: "2025-01-20T06:00:00Z",
            },
            HelmReleaseRecord {
                name: "grafana",
                namespace: "monitoring",
                revision: 2,
                status: "Deployed",
                chart: "grafana-7.3.3",
                app_version: "10.3.1",
                updated: "2025-02-01T00:00:00Z",
            },
            HelmReleaseRecord {
                name: "external-dns",
                namespace: "kube-system",
                revision: 1,
                status: "Deployed",
                chart: "external-dns-1.14.3",
                app_version: "0.14.0",
                updated: "2025-01-15T00:00:00Z",
            },
            HelmReleaseRecord {
                name: "test-release",
                namespace: "staging",
                revision: 1,
                status: "Failed",
                chart: "my-app-0.1.0",
                app_version: "1.0.0",
                updated: "2025-02-13T15:00:00Z",
            },
        ]
    }
}
