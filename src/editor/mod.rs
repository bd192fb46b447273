//! Scene editor - owns the document and routes input to it.
//!
//! The editor holds the committed scene, its history, the selection, the
//! view and the gesture state, and is the only thing that replaces the
//! committed scene. Every replacement goes through [`SceneEditor::apply_and_record`],
//! which keeps four things in step:
//!
//! - the committed scene equals the history entry at the cursor
//! - the selection only names items in the committed scene
//! - the spatial index matches the committed scene
//! - the store holds the committed scene
//!
//! Pointer handlers live in `crate::input`, keyboard and command handlers
//! in the submodules here.

mod commands;
mod keyboard;

use crate::history::HistoryLog;
use crate::input::{InputState, ViewState};
use crate::perf::ScopedTimer;
use crate::persistence::{LoadedDocument, PersistenceGateway};
use crate::profile_scope;
use crate::registry::ItemRegistry;
use crate::render::{ItemRenderer, RenderRequest, RendererFeedback};
use crate::scene::Scene;
use crate::selection::SelectionManager;
use crate::services::ServiceCell;
use crate::settings::EditorSettings;
use crate::shortcuts::ShortcutMap;
use crate::spatial_index::SpatialIndex;
use crate::types::{Item, ItemId, ItemKind, Point, Size};
use tracing::{debug, info, trace};

pub struct SceneEditor {
    /// Last committed scene; always equal to `history.current()`
    pub(crate) scene: Scene,
    /// Uncommitted scene shown while a drag or resize is open
    pub(crate) draft: Option<Scene>,
    pub(crate) history: HistoryLog,
    pub(crate) selection: SelectionManager,
    pub(crate) view: ViewState,
    pub(crate) input_state: InputState,
    pub(crate) index: SpatialIndex,
    pub(crate) clipboard: Vec<Item>,
    pub(crate) registry: ServiceCell<ItemRegistry>,
    pub(crate) gateway: PersistenceGateway,
    pub(crate) settings: EditorSettings,
    pub(crate) shortcuts: ShortcutMap,
    pub(crate) view_mode: bool,
}

impl std::fmt::Debug for SceneEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneEditor")
            .field("items", &self.scene.len())
            .field("history", &self.history.len())
            .field("selected", &self.selection.len())
            .field("input_state", &self.input_state)
            .field("view_mode", &self.view_mode)
            .finish_non_exhaustive()
    }
}

impl Drop for SceneEditor {
    fn drop(&mut self) {
        if self.flush_save() {
            debug!("flushed deferred save on close");
        }
    }
}

impl Default for SceneEditor {
    fn default() -> Self {
        Self::new(PersistenceGateway::in_memory(), EditorSettings::default())
    }
}

impl SceneEditor {
    /// Open the document stored behind `gateway`.
    pub fn new(mut gateway: PersistenceGateway, settings: EditorSettings) -> Self {
        let LoadedDocument { scene, history } = gateway.load(settings.history_limit);
        gateway.set_debounce_ms(settings.save_debounce_ms);
        let index = SpatialIndex::from_scene(&scene);
        let shortcuts = ShortcutMap::new(settings.nudge_step, settings.nudge_step_large);
        info!("editor opened with {} items", scene.len());

        Self {
            scene,
            draft: None,
            history,
            selection: SelectionManager::new(),
            view: ViewState::default(),
            input_state: InputState::Idle,
            index,
            clipboard: Vec::new(),
            registry: ServiceCell::new(ItemRegistry::new),
            gateway,
            settings,
            shortcuts,
            view_mode: false,
        }
    }

    // ==================== Queries ====================

    /// Scene to display: the open gesture's draft if any, else the committed scene.
    pub fn scene(&self) -> &Scene {
        self.draft.as_ref().unwrap_or(&self.scene)
    }

    pub fn committed_scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Selected ids in paint order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.selection.ordered_ids(&self.scene)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ItemRegistry {
        self.registry.get()
    }

    pub fn clipboard(&self) -> &[Item] {
        &self.clipboard
    }

    pub fn is_view_mode(&self) -> bool {
        self.view_mode
    }

    pub fn can_undo(&self) -> bool {
        !self.view_mode && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.view_mode && self.history.can_redo()
    }

    // ==================== View ====================

    /// Place the canvas container: its top-left in pointer coordinates and its size.
    pub fn set_viewport(&mut self, origin: Point, size: Size) {
        if !origin.is_finite() || !size.width.is_finite() || !size.height.is_finite() {
            debug!("ignoring non-finite viewport");
            return;
        }
        self.view.origin = origin;
        self.view.viewport = size;
    }

    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        self.view.set_zoom(zoom)
    }

    pub fn set_pan(&mut self, pan: Point) {
        if !pan.is_finite() {
            debug!("ignoring non-finite pan");
            return;
        }
        self.view.pan = pan;
    }

    /// Entering view mode abandons any open gesture.
    pub fn set_view_mode(&mut self, view_mode: bool) {
        if view_mode && !self.view_mode {
            self.cancel_gesture();
        }
        self.view_mode = view_mode;
        debug!("view mode {}", if view_mode { "on" } else { "off" });
    }

    // ==================== Commit funnel ====================

    /// Replace the committed scene with `next` and record it.
    ///
    /// Returns false when nothing was committed: in view mode, or when
    /// `next` equals the committed scene.
    pub(crate) fn apply_and_record(&mut self, next: Scene, reason: &'static str) -> bool {
        let _timer = ScopedTimer::frame("apply_and_record");

        if self.view_mode {
            debug!("{} ignored in view mode", reason);
            return false;
        }
        if !self.history.record(next.clone()) {
            trace!("{}: no change", reason);
            return false;
        }
        self.scene = next;
        self.sync_after_scene_change();
        // An open gesture keeps going on top of the new committed scene.
        if self.draft.is_some() {
            self.draft = self.input_state.draft_over(&self.scene);
        }
        debug!(
            reason,
            items = self.scene.len(),
            history = self.history.len(),
            "committed"
        );
        true
    }

    fn sync_after_scene_change(&mut self) {
        self.selection.reconcile(&self.scene);
        self.index.rebuild(&self.scene);
        self.gateway.save(&self.scene, &self.history);
    }

    // ==================== Saving ====================

    /// Write a debounced save whose window has passed. Hosts call this from
    /// their idle or timer tick. Returns true if it wrote.
    pub fn poll_save(&mut self) -> bool {
        self.gateway.poll(&self.scene, &self.history)
    }

    /// Write any deferred save now. Returns true if it wrote.
    pub fn flush_save(&mut self) -> bool {
        self.gateway.flush(&self.scene, &self.history)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.gateway.is_dirty()
    }

    // ==================== History ====================

    pub fn undo(&mut self) -> bool {
        self.step_history(true)
    }

    pub fn redo(&mut self) -> bool {
        self.step_history(false)
    }

    fn step_history(&mut self, back: bool) -> bool {
        if self.view_mode {
            return false;
        }
        self.cancel_gesture();
        let restored = if back {
            self.history.undo().cloned()
        } else {
            self.history.redo().cloned()
        };
        let Some(scene) = restored else {
            trace!("nothing to {}", if back { "undo" } else { "redo" });
            return false;
        };
        self.scene = scene;
        self.sync_after_scene_change();
        debug!(
            "{} to history entry {}",
            if back { "undo" } else { "redo" },
            self.history.cursor()
        );
        true
    }

    // ==================== Selection ====================

    pub fn select(&mut self, id: ItemId, additive: bool) {
        if self.scene.contains(id) {
            self.selection.click(id, additive);
        }
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.scene);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ==================== Rendering ====================

    /// Describe every displayed item to `renderer` in paint order and
    /// collect its feedback.
    pub fn render_with(&self, renderer: &mut dyn ItemRenderer) -> Vec<(ItemId, RendererFeedback)> {
        profile_scope!("render_items");

        let mut feedback = Vec::new();
        for item in self.scene().items() {
            let request = RenderRequest {
                id: item.id,
                size: item.size,
                props: &item.props,
                rotation: item.rotation,
                is_selected: self.selection.contains(item.id),
                is_view_mode: self.view_mode,
            };
            feedback.extend(renderer.render(&request).into_iter().map(|f| (item.id, f)));
        }
        feedback
    }

    /// Render, then apply whatever the renderer reported.
    pub fn render_and_apply(&mut self, renderer: &mut dyn ItemRenderer) -> usize {
        let feedback = self.render_with(renderer);
        feedback
            .into_iter()
            .filter(|(id, f)| self.apply_renderer_feedback(*id, f.clone()))
            .count()
    }

    // ==================== Items ====================

    /// Append an item of `kind` with its default size and props.
    pub fn add_item(&mut self, kind: ItemKind, position: Point) -> Option<ItemId> {
        if self.view_mode {
            return None;
        }
        self.cancel_gesture();
        let (next, id) = self.scene.add_item(self.registry.get(), kind, position);
        self.apply_and_record(next, "add item").then_some(id)
    }
}
