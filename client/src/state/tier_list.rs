//! Page-scoped state for the open tier list.
//!
//! The ranking itself lives in the `RwSignal<GridCore>` provided next to
//! this; `TierListState` holds what surrounds it: where the characters came
//! from, whether they are loaded, and which transient panels are open.

#[cfg(test)]
#[path = "tier_list_test.rs"]
mod tier_list_test;

use grid::catalog::Universe;
use grid::character::CharacterId;
use grid::consts::CUSTOM_UNIVERSE;
use grid::engine::Action;
use grid::layout::LayoutContext;

/// Character loading progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    /// Characters came from the live source.
    Ready,
    /// The live source failed or does not exist; the offline dataset is shown.
    Fallback,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TierListState {
    pub context: LayoutContext,
    pub status: LoadStatus,
    /// Character shown in the detail modal.
    pub detail_id: Option<CharacterId>,
    /// Last reported contents of the unknown area.
    pub unknown: Vec<CharacterId>,
    /// Share link was just copied; cleared by a timer.
    pub share_copied: bool,
}

impl TierListState {
    #[must_use]
    pub fn new(context: LayoutContext) -> Self {
        Self { context, ..Self::default() }
    }

    pub fn universe(&self) -> Option<Universe> {
        Universe::from_id(&self.context.universe)
    }

    pub fn is_custom(&self) -> bool {
        self.context.universe == CUSTOM_UNIVERSE
    }

    /// Page heading, also used as the exported image's title.
    pub fn title(&self) -> String {
        match self.universe() {
            Some(universe) => format!("{} Tier List", universe.name()),
            None if self.is_custom() => "Custom Tier List".to_owned(),
            None => String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn finish_load(&mut self, fallback: bool) {
        self.status = if fallback { LoadStatus::Fallback } else { LoadStatus::Ready };
    }

    /// Start a reload for a new context, keeping open panels closed.
    pub fn begin_load(&mut self, context: LayoutContext) {
        self.context = context;
        self.status = LoadStatus::Loading;
        self.detail_id = None;
    }

    /// React to a grid action. Returns `true` when this state changed.
    pub fn apply_action(&mut self, action: &Action) -> bool {
        match action {
            Action::OpenDetail(id) => {
                self.detail_id = Some(id.clone());
                true
            }
            Action::DragStarted(_) if self.detail_id.is_some() => {
                self.detail_id = None;
                true
            }
            _ => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
    }

    /// Store a new unknown-area report.
    pub fn record_unknown(&mut self, ids: Vec<CharacterId>) {
        if !ids.is_empty() {
            log::info!("tier list: {} character(s) in the unknown area", ids.len());
        }
        self.unknown = ids;
    }

    /// Human-readable labels of the active filters.
    pub fn filter_labels(&self) -> Vec<String> {
        let Some(universe) = self.universe() else {
            return self.context.filters.clone();
        };
        self.context.filters.iter().map(|f| universe.filter_label(f)).collect()
    }
}
