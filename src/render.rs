//! Item-renderer contract.
//!
//! The editor describes each item to a renderer and collects feedback
//! (measured sizes, edited props) to apply through its commit funnel.
//! Renderers only see per-item requests, never the history or the store.

use crate::types::{ItemId, ItemProps, Size};

/// Everything a renderer needs to draw one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest<'a> {
    pub id: ItemId,
    pub size: Size,
    pub props: &'a ItemProps,
    pub rotation: Option<f32>,
    pub is_selected: bool,
    pub is_view_mode: bool,
}

/// Changes a renderer asks the editor to make to the item it drew.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererFeedback {
    /// Content measured at a different size than the item's box.
    IntrinsicSize(Size),
    /// Content was edited in place.
    Props(ItemProps),
}

pub trait ItemRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Vec<RendererFeedback>;
}

/// Renderer that draws nothing and reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl ItemRenderer for NullRenderer {
    fn render(&mut self, _request: &RenderRequest<'_>) -> Vec<RendererFeedback> {
        Vec::new()
    }
}
