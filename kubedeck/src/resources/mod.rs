pub mod configmap;
pub mod deployment;
pub mod event;
pub mod helmrelease;
pub mod namespace;
pub mod node;
pub mod persistentvolumeclaim;
pub mod pod;
pub mod resource;
pub mod secret;
pub mod service;

pub use resource::{FieldAccessorFn, Resource};

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::errors::{Error, Result};
use crate::table::{CellTone, TableCell};

/// Maps a resource status to its semantic tone. Shared by every status
/// column so the same phase always gets the same color.
pub fn status_tone(status: &str) -> CellTone {
    match status {
        "Running" | "Active" | "Bound" | "Available" | "Ready" | "Succeeded" | "Complete"
        | "Deployed" => CellTone::Success,
        "Pending" | "Warning" | "Suspended" => CellTone::Warning,
        "Failed" | "Error" | "CrashLoopBackOff" => CellTone::Error,
        // Terminating, Unknown and anything unrecognized stay muted.
        _ => CellTone::Muted,
    }
}

pub fn status_cell(status: &str) -> TableCell {
    TableCell::new(status, status_tone(status))
}

/// Every list page the console knows how to render, in sidebar order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceKind {
    Pods,
    Deployments,
    Nodes,
    Namespaces,
    Services,
    ConfigMaps,
    Secrets,
    PersistentVolumeClaims,
    Events,
    HelmReleases,
}

pub const ALL_KINDS: [ResourceKind; 10] = [
    ResourceKind::Pods,
    ResourceKind::Deployments,
    ResourceKind::Nodes,
    ResourceKind::Namespaces,
    ResourceKind::Services,
    ResourceKind::ConfigMaps,
    ResourceKind::Secrets,
    ResourceKind::PersistentVolumeClaims,
    ResourceKind::Events,
    ResourceKind::HelmReleases,
];

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pods => "Pods",
            Self::Deployments => "Deployments",
            Self::Nodes => "Nodes",
            Self::Namespaces => "Namespaces",
            Self::Services => "Services",
            Self::ConfigMaps => "Config Maps",
            Self::Secrets => "Secrets",
            Self::PersistentVolumeClaims => "PVCs",
            Self::Events => "Events",
            Self::HelmReleases => "Helm",
        }
    }

    /// Serializes the kind's processed rows as JSON, for `--dump`.
    pub fn dump_rows(&self, now: DateTime<Utc>) -> Result<String> {
        fn dump<K: Resource>(kind: &K, now: DateTime<Utc>) -> Result<String> {
            Ok(serde_json::to_string_pretty(&kind.load(now))?)
        }

        match self {
            Self::Pods => dump(&pod::PodResource, now),
            Self::Deployments => dump(&deployment::DeploymentResource, now),
            Self::Nodes => dump(&node::NodeResource, now),
            Self::Namespaces => dump(&namespace::NamespaceResource, now),
            Self::Services => dump(&service::ServiceResource, now),
            Self::ConfigMaps => dump(&configmap::ConfigMapResource, now),
            Self::Secrets => dump(&secret::SecretResource, now),
            Self::PersistentVolumeClaims => {
                dump(&persistentvolumeclaim::PersistentVolumeClaimResource, now)
            }
            Self::Events => dump(&event::EventResource, now),
            Self::HelmReleases => dump(&helmrelease::HelmReleaseResource, now),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "pod" | "pods" => Self::Pods,
            "deployment" | "deployments" => Self::Deployments,
            "node" | "nodes" => Self::Nodes,
            "namespace" | "namespaces" => Self::Namespaces,
            "service" | "services" => Self::Services,
            "configmap" | "configmaps" => Self::ConfigMaps,
            "secret" | "secrets" => Self::Secrets,
            "pvc" | "pvcs" | "persistentvolumeclaim" | "persistentvolumeclaims" => {
                Self::PersistentVolumeClaims
            }
            "event" | "events" => Self::Events,
            "helm" | "helmrelease" | "helmreleases" => Self::HelmReleases,
            other => return Err(Error::UnknownKind(other.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("pods".parse::<ResourceKind>().unwrap(), ResourceKind::Pods);
        assert_eq!(
            "PVC".parse::<ResourceKind>().unwrap(),
            ResourceKind::PersistentVolumeClaims
        );
        assert!(matches!(
            "replicaset".parse::<ResourceKind>(),
            Err(Error::UnknownKind(_))
        ));
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone("Running"), CellTone::Success);
        assert_eq!(status_tone("Deployed"), CellTone::Success);
        assert_eq!(status_tone("Pending"), CellTone::Warning);
        assert_eq!(status_tone("CrashLoopBackOff"), CellTone::Error);
        assert_eq!(status_tone("Terminating"), CellTone::Muted);
        assert_eq!(status_tone("SomethingElse"), CellTone::Muted);
    }

    #[test]
    fn test_every_kind_dumps() {
        let now = Utc::now();
        for kind in ALL_KINDS {
            let json = kind.dump_rows(now).unwrap();
            assert!(json.starts_with('['), "{kind:?} should dump a JSON array");
        }
    }
}
