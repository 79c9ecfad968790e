// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: batching, layout and lazy loading in one place.
//!
//! # Lifecycle
//!
//! 1. [`Gallery::ready`] realizes the first group, lays it out and starts
//!    observing its placeholders.
//! 2. [`Gallery::scroll`] and [`Gallery::refresh_visibility`] deliver
//!    intersections. A box that becomes visible starts loading; if it is the
//!    last box of its group, the next group is realized.
//! 3. [`Gallery::resource_loaded`] settles a box and re-runs layout, since
//!    its height only becomes known once the image is decoded.
//! 4. [`Gallery::resize`] only re-runs layout.

use super::pagination::{Navigation, PaginationLinks};
use super::preview::PreviewOverlay;
use super::tree::{BoxId, BoxTree, GalleryBox};
use crate::batch::BatchLoader;
use crate::domain::gallery::{
    Dimensions, GroupSize, ItemId, PlaceholderAspect, RootMargin, Spacing,
};
use crate::layout::LayoutSummary;
use crate::viewport::{IntersectionDriver, ObserverSupport, ViewportTrigger};

/// Whether the first render has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    /// Waiting for the host to report its first width.
    #[default]
    AwaitingReady,
    /// The first group is realized; resizes re-run layout.
    Ready,
}

/// A deferred source the shell should fetch for a box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub target: BoxId,
    pub path: String,
}

/// Tuning values for a [`Gallery`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GallerySettings {
    pub group_size: GroupSize,
    pub spacing: Spacing,
    pub root_margin: RootMargin,
    pub placeholder_aspect: PlaceholderAspect,
    pub observer: ObserverSupport,
}

/// Batched, lazily loaded masonry gallery.
#[derive(Debug, Clone)]
pub struct Gallery {
    phase: RenderPhase,
    settings: GallerySettings,
    loader: BatchLoader,
    tree: BoxTree,
    trigger: ViewportTrigger<BoxId>,
    driver: IntersectionDriver,
    preview: PreviewOverlay,
    links: PaginationLinks,
    container_width: f32,
    summary: Option<LayoutSummary>,
}

impl Gallery {
    /// Creates a gallery over `ids`; nothing is realized until [`Gallery::ready`].
    #[must_use]
    pub fn new<I>(ids: I, settings: GallerySettings, links: PaginationLinks) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        Self {
            phase: RenderPhase::AwaitingReady,
            loader: BatchLoader::new(ids, settings.group_size),
            tree: BoxTree::new(),
            trigger: ViewportTrigger::new(settings.observer),
            driver: IntersectionDriver::new(settings.root_margin),
            preview: PreviewOverlay::default(),
            links,
            container_width: 0.0,
            summary: None,
            settings,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == RenderPhase::Ready
    }

    #[must_use]
    pub fn settings(&self) -> GallerySettings {
        self.settings
    }

    #[must_use]
    pub fn boxes(&self) -> &[GalleryBox] {
        self.tree.boxes()
    }

    #[must_use]
    pub fn tree(&self) -> &BoxTree {
        &self.tree
    }

    #[must_use]
    pub fn loader(&self) -> &BatchLoader {
        &self.loader
    }

    /// Result of the most recent layout pass.
    #[must_use]
    pub fn summary(&self) -> Option<&LayoutSummary> {
        self.summary.as_ref()
    }

    /// Height of the laid-out content, zero before the first pass.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.summary.as_ref().map_or(0.0, LayoutSummary::content_height)
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewOverlay {
        &self.preview
    }

    #[must_use]
    pub fn links(&self) -> &PaginationLinks {
        &self.links
    }

    /// First render: realizes group 0, lays it out and activates the trigger.
    ///
    /// Returns the sources to fetch right away (eager fallback, or boxes that
    /// already intersect a known viewport). A second call does nothing.
    pub fn ready(&mut self, container_width: f32) -> Vec<ResourceRequest> {
        let mut requests = Vec::new();
        if self.is_ready() {
            return requests;
        }

        self.container_width = container_width;
        self.realize_next(&mut requests);
        self.phase = RenderPhase::Ready;
        tracing::debug!(
            boxes = self.tree.len(),
            groups = self.loader.group_count(),
            "gallery ready"
        );

        self.deliver(&mut requests);
        requests
    }

    /// Viewport width changed: re-runs layout once ready, never loads more.
    ///
    /// Returns whether a layout pass ran.
    pub fn resize(&mut self, container_width: f32) -> bool {
        self.container_width = container_width;
        if !self.is_ready() {
            return false;
        }
        self.relayout();
        true
    }

    /// Records the scroll viewport without delivering intersections.
    ///
    /// Use before [`Gallery::resize`] so visibility is only checked against
    /// the new layout.
    pub fn set_viewport(&mut self, offset: f32, height: f32) {
        self.driver.update(offset, height);
    }

    /// Records a new scroll viewport and delivers intersections.
    pub fn scroll(&mut self, offset: f32, height: f32) -> Vec<ResourceRequest> {
        self.set_viewport(offset, height);
        self.refresh_visibility()
    }

    /// Delivers intersections for the current viewport and layout.
    ///
    /// Call after anything that moves boxes (a load, a resize) so that boxes
    /// pushed into view start loading.
    pub fn refresh_visibility(&mut self) -> Vec<ResourceRequest> {
        let mut requests = Vec::new();
        if self.is_ready() {
            self.deliver(&mut requests);
        }
        requests
    }

    /// Settles a box after its fetch finished and re-runs layout.
    ///
    /// `None` means the fetch or decode failed; the box is shown broken.
    /// Returns whether the result was accepted.
    pub fn resource_loaded(&mut self, target: BoxId, dimensions: Option<Dimensions>) -> bool {
        let Some(item) = self.tree.get_mut(target) else {
            tracing::warn!(?target, "load result for unknown box");
            return false;
        };
        if let Err(err) = item.finish_loading(dimensions) {
            tracing::warn!(?target, %err, "ignoring load result");
            return false;
        }
        if dimensions.is_none() {
            tracing::warn!(?target, src = item.src(), "image failed to load");
        }
        self.relayout();
        true
    }

    /// Opens the fullscreen preview for `target`.
    ///
    /// Returns the full-resolution path to fetch.
    pub fn open_preview(&mut self, target: BoxId) -> Option<String> {
        let original = self.tree.get(target)?.original().to_string();
        self.preview.open(target, &original);
        Some(original)
    }

    /// Closes the preview and drops its source.
    pub fn close_preview(&mut self) {
        self.preview.close();
    }

    /// Marks a page link current and returns the navigation target.
    pub fn follow_link(&mut self, index: usize) -> Option<Navigation> {
        self.links.click(index)
    }

    fn relayout(&mut self) {
        let summary = self
            .tree
            .layout(self.container_width, self.settings.spacing);
        tracing::trace!(
            columns = summary.columns,
            height = summary.content_height(),
            "layout pass"
        );
        self.summary = Some(summary);
    }

    /// Realizes groups until one is realized whose tail does not fire at once.
    ///
    /// With observer support that is always the first group; in the eager
    /// fallback every group chains into the next.
    fn realize_next(&mut self, requests: &mut Vec<ResourceRequest>) {
        loop {
            let Some(group) = self.loader.advance() else {
                tracing::debug!("no groups left to realize");
                return;
            };
            let index = group.index();
            let added = self
                .tree
                .append(group.items(), self.settings.placeholder_aspect);
            tracing::debug!(group = index, boxes = added, "realized group");

            self.relayout();

            let mut fired = Vec::new();
            self.trigger
                .observe_all(self.tree.placeholders(), |id| fired.push(id));

            if !self.reveal_all(fired, requests) {
                return;
            }
        }
    }

    /// Hands the current intersections to the trigger until nothing new fires.
    fn deliver(&mut self, requests: &mut Vec<ResourceRequest>) {
        loop {
            let entries = self.driver.entries(self.tree.placeholder_spans());
            let mut fired = Vec::new();
            self.trigger.deliver(entries, |id| fired.push(id));

            if fired.is_empty() || !self.reveal_all(fired, requests) {
                return;
            }
            self.realize_next(requests);
        }
    }

    /// Starts loading every fired box. Returns whether a group tail fired.
    fn reveal_all(&mut self, fired: Vec<BoxId>, requests: &mut Vec<ResourceRequest>) -> bool {
        let mut reached_tail = false;
        for target in fired {
            reached_tail |= self.reveal(target, requests);
        }
        reached_tail
    }

    fn reveal(&mut self, target: BoxId, requests: &mut Vec<ResourceRequest>) -> bool {
        let Some(item) = self.tree.get_mut(target) else {
            return false;
        };
        if let Err(err) = item.begin_loading() {
            tracing::warn!(?target, %err, "ignoring visibility");
            return false;
        }
        requests.push(ResourceRequest {
            target,
            path: item.src().to_string(),
        });
        self.loader
            .is_group_tail(item.item().group(), item.item().order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::pagination::Pagination;

    fn manifest(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("{i:03}.png")).collect()
    }

    fn settings(group_size: usize, observer: ObserverSupport) -> GallerySettings {
        GallerySettings {
            group_size: GroupSize::new(group_size),
            spacing: Spacing::new(10.0),
            root_margin: RootMargin::new(0.0),
            placeholder_aspect: PlaceholderAspect::new(1.0),
            observer,
        }
    }

    fn gallery(len: usize, group_size: usize) -> Gallery {
        Gallery::new(
            manifest(len),
            settings(group_size, ObserverSupport::Available),
            PaginationLinks::default(),
        )
    }

    fn load_all(gallery: &mut Gallery, requests: &[ResourceRequest]) {
        for request in requests {
            gallery.resource_loaded(request.target, Some(Dimensions::new(100, 100)));
        }
    }

    #[test]
    fn nothing_is_realized_before_ready() {
        let mut g = gallery(10, 100);
        assert_eq!(g.phase(), RenderPhase::AwaitingReady);
        assert!(g.boxes().is_empty());
        assert!(!g.resize(1300.0));
        assert!(g.scroll(0.0, 800.0).is_empty());
        assert!(g.boxes().is_empty());
    }

    #[test]
    fn ready_realizes_first_group_once() {
        let mut g = gallery(250, 100);
        g.ready(1300.0);
        assert!(g.is_ready());
        assert_eq!(g.boxes().len(), 100);
        assert_eq!(g.loader().realized_groups(), 1);

        g.ready(1300.0);
        assert_eq!(g.boxes().len(), 100);
        assert_eq!(g.loader().realized_groups(), 1);
    }

    #[test]
    fn ready_with_known_viewport_loads_visible_boxes() {
        let mut g = gallery(20, 100);
        g.scroll(0.0, 300.0);
        let requests = g.ready(1300.0);

        // Column width 252: only the first row (tops at 0) and the second row
        // (tops at 262) touch 0..300.
        assert_eq!(requests.len(), 10);
        assert!(requests.iter().all(|r| r.path.starts_with("/image/")));
        assert_eq!(g.tree().state_counts(), (10, 10, 0));
    }

    #[test]
    fn viewport_recorded_before_resize_sees_new_layout() {
        let mut g = gallery(250, 100);
        g.scroll(0.0, 252.0);
        g.ready(1300.0);
        assert_eq!(g.tree().state_counts(), (95, 5, 0));

        g.set_viewport(0.0, 752.0);
        assert!(g.resize(800.0));
        assert_eq!(g.tree().state_counts(), (95, 5, 0));

        // Three columns of 260: rows at 0, 270 and 540 reach into 0..752.
        let requests = g.refresh_visibility();
        assert_eq!(requests.len(), 4);
        assert!(g
            .boxes()
            .iter()
            .filter(|b| !b.state().is_placeholder())
            .all(|b| b.top() <= 752.0));
    }

    #[test]
    fn resize_only_relayouts() {
        let mut g = gallery(250, 100);
        g.ready(1300.0);
        assert_eq!(g.summary().map(|s| s.columns), Some(5));

        assert!(g.resize(800.0));
        assert_eq!(g.summary().map(|s| s.columns), Some(3));
        assert_eq!(g.loader().realized_groups(), 1);
        assert_eq!(g.boxes().len(), 100);
    }

    #[test]
    fn visible_group_tail_realizes_next_group() {
        let mut g = gallery(250, 100);
        g.ready(1300.0);

        // Scroll far enough to expose every box of group 0.
        let requests = g.scroll(0.0, 100_000.0);
        assert_eq!(g.loader().realized_groups(), 3);
        assert_eq!(g.boxes().len(), 250);
        assert_eq!(requests.len(), 250);
        assert!(g.loader().is_exhausted());
    }

    #[test]
    fn unseen_tail_blocks_further_groups() {
        let mut g = gallery(250, 100);
        g.ready(1300.0);
        let requests = g.scroll(0.0, 300.0);
        assert!(!requests.is_empty());
        assert_eq!(g.loader().realized_groups(), 1);
    }

    #[test]
    fn each_box_requested_once() {
        let mut g = gallery(30, 100);
        g.ready(1300.0);
        let mut all = g.scroll(0.0, 300.0);
        all.extend(g.scroll(0.0, 0.0));
        all.extend(g.scroll(0.0, 300.0));
        all.extend(g.scroll(0.0, 5000.0));
        all.extend(g.scroll(0.0, 5000.0));

        let mut targets: Vec<BoxId> = all.iter().map(|r| r.target).collect();
        let before = targets.len();
        targets.sort();
        targets.dedup();
        assert_eq!(targets.len(), before);
        assert_eq!(before, 30);
    }

    #[test]
    fn eager_fallback_loads_everything() {
        let mut g = Gallery::new(
            manifest(250),
            settings(100, ObserverSupport::Unavailable),
            PaginationLinks::default(),
        );
        let requests = g.ready(1300.0);
        assert_eq!(requests.len(), 250);
        assert_eq!(g.loader().realized_groups(), 3);
        assert_eq!(g.tree().state_counts(), (0, 250, 0));
    }

    #[test]
    fn load_completion_relayouts_with_real_height() {
        let mut g = gallery(10, 100);
        let requests = {
            g.ready(1300.0);
            g.scroll(0.0, 10_000.0)
        };
        assert_eq!(requests.len(), 10);

        g.resource_loaded(BoxId(0), Some(Dimensions::new(100, 300)));
        let first = &g.boxes()[0];
        assert!(first.state().is_loaded());
        // Box 5 goes under the shortest column, which is no longer column 0.
        assert_ne!(g.boxes()[5].column(), Some(0));

        load_all(&mut g, &requests[1..]);
        assert_eq!(g.tree().state_counts(), (0, 0, 10));
    }

    #[test]
    fn failed_load_still_settles_box() {
        let mut g = gallery(3, 100);
        g.ready(1300.0);
        let requests = g.scroll(0.0, 1000.0);
        g.resource_loaded(requests[0].target, None);
        assert!(g.boxes()[0].state().is_loaded());
    }

    #[test]
    fn duplicate_load_result_is_ignored() {
        let mut g = gallery(3, 100);
        g.ready(1300.0);
        g.scroll(0.0, 1000.0);
        assert!(g.resource_loaded(BoxId(0), Some(Dimensions::new(10, 20))));
        assert!(!g.resource_loaded(BoxId(0), Some(Dimensions::new(10, 5))));
        assert!(!g.resource_loaded(BoxId(42), None));
        assert_eq!(
            g.boxes()[0].resolution(),
            crate::gallery::Resolution::Decoded(Dimensions::new(10, 20))
        );
    }

    #[test]
    fn empty_manifest_is_noop() {
        let mut g = gallery(0, 100);
        assert!(g.ready(1300.0).is_empty());
        assert!(g.is_ready());
        assert!(g.boxes().is_empty());
        assert!(g.scroll(0.0, 800.0).is_empty());
        assert_eq!(g.content_height(), 0.0);
    }

    #[test]
    fn preview_open_and_close() {
        let mut g = gallery(3, 100);
        g.ready(1300.0);
        assert_eq!(g.open_preview(BoxId(1)).as_deref(), Some("/original/001.png"));
        assert!(g.preview().is_open());
        g.close_preview();
        assert!(g.preview().source().is_none());
        assert!(g.open_preview(BoxId(99)).is_none());
    }

    #[test]
    fn follow_link_navigates() {
        let links = Pagination::new(130, 60, 1).links();
        let mut g = Gallery::new(manifest(60), GallerySettings::default(), links);
        let navigation = g.follow_link(2).expect("third page exists");
        assert_eq!(navigation.page, 3);
        assert_eq!(g.links().current().map(|l| l.page), Some(3));
    }
}
