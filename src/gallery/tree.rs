// SPDX-License-Identifier: MPL-2.0
//! Rendered boxes and the append-only tree holding them.

use crate::domain::gallery::{
    Dimensions, Item, LoadState, PlaceholderAspect, Spacing, TransitionError,
};
use crate::layout::{self, LayoutSummary, Placeable};
use crate::resource::{original_path, placeholder_path};
use crate::viewport::Span;

/// Identifier of a rendered box: the item's position in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub usize);

/// What the box knows about its real image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing decoded yet.
    Pending,
    /// Decoded with these intrinsic dimensions.
    Decoded(Dimensions),
    /// The fetch or decode failed; the box shows a broken image.
    Broken,
}

/// One rendered gallery element.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryBox {
    id: BoxId,
    item: Item,
    src: String,
    original: String,
    state: LoadState,
    resolution: Resolution,
    placeholder_aspect: PlaceholderAspect,
    column: Option<usize>,
    top: f32,
    left: f32,
    width: f32,
}

impl GalleryBox {
    /// Creates a placeholder box for `item`.
    #[must_use]
    pub fn new(item: Item, placeholder_aspect: PlaceholderAspect) -> Self {
        Self {
            id: BoxId(item.position()),
            src: placeholder_path(item.id()),
            original: original_path(item.id()),
            item,
            state: LoadState::Placeholder,
            resolution: Resolution::Pending,
            placeholder_aspect,
            column: None,
            top: 0.0,
            left: 0.0,
            width: 0.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> BoxId {
        self.id
    }

    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Deferred source, requested when the box nears the viewport.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Full-resolution source for the preview.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertical extent inside the gallery content.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.top, self.height())
    }

    /// Placeholder → Loading.
    pub fn begin_loading(&mut self) -> Result<(), TransitionError> {
        self.state = self.state.transition(LoadState::Loading)?;
        Ok(())
    }

    /// Loading → Loaded, recording what was decoded.
    ///
    /// `None` marks the box as broken; it still counts as loaded.
    pub fn finish_loading(
        &mut self,
        dimensions: Option<Dimensions>,
    ) -> Result<(), TransitionError> {
        self.state = self.state.transition(LoadState::Loaded)?;
        self.resolution = match dimensions {
            Some(dimensions) if dimensions.aspect().is_some() => Resolution::Decoded(dimensions),
            _ => Resolution::Broken,
        };
        Ok(())
    }

    fn aspect(&self) -> f32 {
        match self.resolution {
            Resolution::Decoded(dimensions) => dimensions
                .aspect()
                .unwrap_or(self.placeholder_aspect.value()),
            Resolution::Pending | Resolution::Broken => self.placeholder_aspect.value(),
        }
    }
}

impl Placeable for GalleryBox {
    fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    fn height(&self) -> f32 {
        self.width * self.aspect()
    }

    fn place(&mut self, column: usize, top: f32, left: f32) {
        self.column = Some(column);
        self.top = top;
        self.left = left;
    }
}

/// Append-only collection of rendered boxes, in manifest order.
#[derive(Debug, Clone, Default)]
pub struct BoxTree {
    boxes: Vec<GalleryBox>,
}

impl BoxTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one placeholder box per item, preserving order.
    pub fn append<'a, I>(&mut self, items: I, placeholder_aspect: PlaceholderAspect) -> usize
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let before = self.boxes.len();
        self.boxes.extend(
            items
                .into_iter()
                .map(|item| GalleryBox::new(item.clone(), placeholder_aspect)),
        );
        self.boxes.len() - before
    }

    /// Runs a full layout pass over every box.
    pub fn layout(&mut self, container_width: f32, spacing: Spacing) -> LayoutSummary {
        layout::layout(container_width, spacing, &mut self.boxes)
    }

    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&GalleryBox> {
        self.boxes.get(id.0).filter(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut GalleryBox> {
        self.boxes.get_mut(id.0).filter(|b| b.id == id)
    }

    #[must_use]
    pub fn boxes(&self) -> &[GalleryBox] {
        &self.boxes
    }

    /// Boxes still waiting for their real source.
    pub fn placeholders(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.boxes
            .iter()
            .filter(|b| b.state.is_placeholder())
            .map(|b| b.id)
    }

    /// Spans of the boxes still waiting for their real source.
    pub fn placeholder_spans(&self) -> impl Iterator<Item = (BoxId, Span)> + '_ {
        self.boxes
            .iter()
            .filter(|b| b.state.is_placeholder())
            .map(|b| (b.id, b.span()))
    }

    /// Number of boxes in each load state: (placeholder, loading, loaded).
    #[must_use]
    pub fn state_counts(&self) -> (usize, usize, usize) {
        self.boxes
            .iter()
            .fold((0, 0, 0), |(p, l, d), b| match b.state {
                LoadState::Placeholder => (p + 1, l, d),
                LoadState::Loading => (p, l + 1, d),
                LoadState::Loaded => (p, l, d + 1),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
