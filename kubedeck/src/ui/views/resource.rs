//! The resource page wrapper.
//!
//! Binds the page's identity (title, description, row count) into the shared
//! title context while mounted and resets those fields on unmount, so the
//! header never shows a previous page's data. The namespace field is left
//! alone — it outlives page transitions.

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

use crate::{
    context::TitleContext, errors::Result, resources::Resource, ui::table::TableView,
    ui::views::View,
};

pub struct ResourcePageView<K: Resource> {
    title: &'static str,
    description: &'static str,
    table: TableView<K>,
}

impl<K: Resource> ResourcePageView<K> {
    pub fn new(resource: K) -> Self {
        let title = resource.title();
        let description = resource.description();
        Self {
            title,
            description,
            table: TableView::new(resource),
        }
    }
}

impl<K: Resource> View for ResourcePageView<K> {
    fn on_event(&mut self, ev: &Event) -> bool {
        self.table.on_event(ev)
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        self.table.draw(f, area);
    }

    fn on_mount(&mut self, ctx: &mut TitleContext) -> Result<()> {
        ctx.set_title(self.title)?;
        ctx.set_description(Some(self.description.to_string()))?;
        ctx.set_count(Some(self.table.row_count()))?;
        Ok(())
    }

    fn on_unmount(&mut self, ctx: &mut TitleContext) -> Result<()> {
        ctx.set_title("")?;
        ctx.set_description(None)?;
        ctx.set_count(None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::pod::PodResource;

    #[test]
    fn test_title_lifecycle() {
        let mut ctx = TitleContext::new();
        ctx.mount();

        let mut page = ResourcePageView::new(PodResource);
        page.on_mount(&mut ctx).unwrap();

        let state = ctx.read().unwrap();
        assert_eq!(state.title, "Pods");
        assert_eq!(state.count, Some(15));
        assert!(state.description.is_some());

        page.on_unmount(&mut ctx).unwrap();
        let state = ctx.read().unwrap();
        assert_eq!(state.title, "");
        assert_eq!(state.count, None);
        assert_eq!(state.description, None);
    }

    #[test]
    fn test_mount_outside_provider_fails() {
        let mut ctx = TitleContext::new();
        let mut page = ResourcePageView::new(PodResource);
        assert!(page.on_mount(&mut ctx).is_err());
    }
}
