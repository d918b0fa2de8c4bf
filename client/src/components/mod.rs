//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the tier list and its side panels. They read the
//! page's `RwSignal<GridCore>` and `RwSignal<TierListState>` from context;
//! only `tier_list_grid` turns DOM input into grid calls, the containers just
//! render and mark their droppable regions.

pub mod app_header;
pub mod character_card;
pub mod character_modal;
pub mod character_pool;
pub mod custom_character_form;
pub mod export_panel;
pub mod tier_list_grid;
pub mod tier_row;
pub mod unknown_panel;
