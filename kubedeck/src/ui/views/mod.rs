//! Page views.
//!
//! Each view is a self-contained unit with its own state and rendering
//! logic; the app shell mounts exactly one at a time.

mod resource;

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

pub use resource::ResourcePageView;

use crate::{
    context::TitleContext,
    errors::Result,
    resources::{
        configmap::ConfigMapResource, deployment::DeploymentResource, event::EventResource,
        helmrelease::HelmReleaseResource, namespace::NamespaceResource, node::NodeResource,
        persistentvolumeclaim::PersistentVolumeClaimResource, pod::PodResource,
        secret::SecretResource, service::ServiceResource, ResourceKind,
    },
};

/// A page view: handles events, draws itself, and participates in the
/// title-context lifecycle.
pub trait View {
    /// Handles an input event. Returns `true` if it was consumed and a
    /// redraw is needed.
    fn on_event(&mut self, ev: &Event) -> bool;

    /// Renders the view into the given area.
    fn draw(&mut self, f: &mut Frame, area: Rect);

    /// Called when the view becomes the active page.
    fn on_mount(&mut self, ctx: &mut TitleContext) -> Result<()>;

    /// Called when the view stops being the active page.
    fn on_unmount(&mut self, ctx: &mut TitleContext) -> Result<()>;
}

/// Creates the page view for a resource kind.
pub fn make_view(kind: ResourceKind) -> Box<dyn View> {
    match kind {
        ResourceKind::Pods => Box::new(ResourcePageView::new(PodResource)),
        ResourceKind::Deployments => Box::new(ResourcePageView::new(DeploymentResource)),
        ResourceKind::Nodes => Box::new(ResourcePageView::new(NodeResource)),
        ResourceKind::Namespaces => Box::new(ResourcePageView::new(NamespaceResource)),
        ResourceKind::Services => Box::new(ResourcePageView::new(ServiceResource)),
        ResourceKind::ConfigMaps => Box::new(ResourcePageView::new(ConfigMapResource)),
        ResourceKind::Secrets => Box::new(ResourcePageView::new(SecretResource)),
        ResourceKind::PersistentVolumeClaims => {
            Box::new(ResourcePageView::new(PersistentVolumeClaimResource))
        }
        ResourceKind::Events => Box::new(ResourcePageView::new(EventResource)),
        ResourceKind::HelmReleases => Box::new(ResourcePageView::new(HelmReleaseResource)),
    }
}
