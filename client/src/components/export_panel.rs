//! Export actions: JSON download, share link, image.
//!
//! All three read the current layout from the grid and the page context from
//! `TierListState`; none of them mutates the ranking.

#[cfg(test)]
#[path = "export_panel_test.rs"]
mod export_panel_test;

use leptos::prelude::*;

use grid::engine::GridCore;
use grid::error::LayoutError;
use grid::layout::LayoutContext;

use crate::state::tier_list::TierListState;
use crate::util::tier_image;

/// How long the share button reads "Copied!".
#[cfg(feature = "csr")]
const SHARE_COPIED_MS: u64 = 2000;

fn share_button_label(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Copy share link" }
}

/// Pretty JSON of the current layout in `context`.
fn export_json(core: &GridCore, context: &LayoutContext) -> Result<String, LayoutError> {
    core.export(context).to_json_pretty()
}

/// Share URL for the current layout, relative to `base`.
fn share_link(core: &GridCore, context: &LayoutContext, base: &str) -> Result<String, LayoutError> {
    core.export(context).share_url(base)
}

#[component]
pub fn ExportPanel() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridCore>>();
    let page = expect_context::<RwSignal<TierListState>>();
    let notice = RwSignal::new(None::<&'static str>);

    let on_export_json = move |_| {
        let context = page.with_untracked(|p| p.context.clone());
        let json = match grid.with_untracked(|g| export_json(g, &context)) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("export: json failed: {e}");
                notice.set(Some("Could not export the tier list."));
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            if let Err(e) = crate::util::dom::download_text(grid::consts::EXPORT_JSON_FILE, "application/json", &json) {
                log::warn!("export: download failed: {e}");
                notice.set(Some("Download failed."));
                return;
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = json;
        }
        notice.set(None);
    };

    let on_share = move |_| {
        let context = page.with_untracked(|p| p.context.clone());
        #[cfg(feature = "csr")]
        {
            let base = crate::util::dom::page_base_url();
            let url = match grid.with_untracked(|g| share_link(g, &context, &base)) {
                Ok(url) => url,
                Err(e) => {
                    log::warn!("export: share link failed: {e}");
                    notice.set(Some("Could not build a share link."));
                    return;
                }
            };
            leptos::task::spawn_local(async move {
                match crate::util::dom::copy_text(&url).await {
                    Ok(()) => {
                        notice.set(None);
                        page.update(|p| p.share_copied = true);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(SHARE_COPIED_MS)).await;
                        page.update(|p| p.share_copied = false);
                    }
                    Err(e) => {
                        log::warn!("export: clipboard failed: {e}");
                        notice.set(Some("Could not copy the link."));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = context;
        }
    };

    let on_export_image = move |_| {
        let title = page.with_untracked(TierListState::title);
        let plan = grid.with_untracked(|g| tier_image::plan(g, &title));
        #[cfg(feature = "csr")]
        {
            let saved = tier_image::render_png(&plan)
                .map_err(|e| format!("{e:?}"))
                .and_then(|url| crate::util::dom::download_url(grid::consts::EXPORT_IMAGE_FILE, &url));
            if let Err(e) = saved {
                log::warn!("export: image failed: {e}");
                notice.set(Some("Could not export the image."));
                return;
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = plan;
        }
        notice.set(None);
    };

    view! {
        <section class="export-panel">
            <h2 class="export-panel__title">"Export"</h2>
            <div class="export-panel__actions">
                <button class="btn" on:click=on_export_json>"Download JSON"</button>
                <button
                    class="btn"
                    class:btn--success=move || page.with(|p| p.share_copied)
                    on:click=on_share
                >
                    {move || share_button_label(page.with(|p| p.share_copied))}
                </button>
                <button class="btn" on:click=on_export_image>"Export image"</button>
            </div>
            {move || notice.get().map(|text| view! { <p class="export-panel__notice">{text}</p> })}
        </section>
    }
}
