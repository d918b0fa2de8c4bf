//! PNG export of the ranked tiers.
//!
//! [`plan`] lays the tiers out as plain rects and strings from a `GridCore`;
//! [`render_png`] is the only place that touches
//! `web_sys::CanvasRenderingContext2d`. It paints the plan onto an offscreen
//! canvas and returns a `data:image/png` URL for download. Character
//! artwork is not drawn (remote images would taint the canvas), so each
//! character is exported as a named tile.

#[cfg(test)]
#[path = "tier_image_test.rs"]
mod tier_image_test;

use grid::container::ContainerId;
use grid::engine::GridCore;
use grid::geometry::Rect;
use grid::tier::contrast_text_color;

/// Output width in CSS pixels.
pub const IMAGE_WIDTH: f64 = 960.0;
const PADDING: f64 = 16.0;
const TITLE_HEIGHT: f64 = 40.0;
const LABEL_WIDTH: f64 = 112.0;
const TILE_WIDTH: f64 = 104.0;
const TILE_HEIGHT: f64 = 40.0;
const GAP: f64 = 6.0;
/// Longest name drawn in full; longer names are cut with an ellipsis.
const MAX_NAME_CHARS: usize = 13;

#[cfg(feature = "csr")]
const BACKGROUND: &str = "#ffffff";
#[cfg(feature = "csr")]
const ROW_BACKGROUND: &str = "#f3f4f6";
#[cfg(feature = "csr")]
const TILE_BORDER: &str = "#d1d5db";
#[cfg(feature = "csr")]
const TEXT: &str = "#1f2937";

#[derive(Clone, Debug, PartialEq)]
pub struct TilePlan {
    pub rect: Rect,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan {
    pub label: String,
    pub color: String,
    pub text_color: &'static str,
    pub label_rect: Rect,
    pub row_rect: Rect,
    pub tiles: Vec<TilePlan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImagePlan {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub rows: Vec<RowPlan>,
}

/// Tiles that fit on one line of a row.
fn tiles_per_line() -> usize {
    let room = IMAGE_WIDTH - 2.0 * PADDING - LABEL_WIDTH - GAP;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = ((room + GAP) / (TILE_WIDTH + GAP)).floor() as usize;
    n.max(1)
}

/// `name` cut to fit a tile.
pub fn fit_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_CHARS {
        return name.to_owned();
    }
    let cut: String = name.chars().take(MAX_NAME_CHARS - 1).collect();
    format!("{}…", cut.trim_end())
}

/// Lay out every tier of `core`, top to bottom, under `title`.
#[allow(clippy::cast_precision_loss)]
pub fn plan(core: &GridCore, title: &str) -> ImagePlan {
    let per_line = tiles_per_line();
    let row_width = IMAGE_WIDTH - 2.0 * PADDING;
    let mut y = PADDING + TITLE_HEIGHT;
    let mut rows = Vec::with_capacity(core.tiers().len());

    for tier in core.tiers() {
        let characters = core.resolve(&ContainerId::tier(tier.id.as_str()));
        let lines = characters.len().div_ceil(per_line).max(1);
        let height = lines as f64 * (TILE_HEIGHT + GAP) + GAP;
        let tiles_x = PADDING + LABEL_WIDTH + GAP;
        let tiles = characters
            .iter()
            .enumerate()
            .map(|(i, character)| {
                let (line, col) = (i / per_line, i % per_line);
                TilePlan {
                    rect: Rect::new(
                        tiles_x + col as f64 * (TILE_WIDTH + GAP),
                        y + GAP + line as f64 * (TILE_HEIGHT + GAP),
                        TILE_WIDTH,
                        TILE_HEIGHT,
                    ),
                    name: fit_name(&character.name),
                }
            })
            .collect();
        rows.push(RowPlan {
            label: tier.label.clone(),
            color: tier.color.clone(),
            text_color: contrast_text_color(&tier.color),
            label_rect: Rect::new(PADDING, y, LABEL_WIDTH, height),
            row_rect: Rect::new(PADDING, y, row_width, height),
            tiles,
        });
        y += height + GAP;
    }

    ImagePlan { title: title.to_owned(), width: IMAGE_WIDTH, height: y - GAP + PADDING, rows }
}

/// Paint `plan` onto an offscreen canvas and return it as a PNG data URL.
///
/// # Errors
///
/// Returns `Err` if the canvas cannot be created or any `Canvas2D` call fails.
#[cfg(feature = "csr")]
pub fn render_png(plan: &ImagePlan) -> Result<String, wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document.create_element("canvas")?.dyn_into::<web_sys::HtmlCanvasElement>()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(plan.width.ceil() as u32);
        canvas.set_height(plan.height.ceil() as u32);
    }
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, plan.width, plan.height);

    ctx.set_fill_style_str(TEXT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_font("bold 22px sans-serif");
    ctx.fill_text(&plan.title, PADDING, PADDING + TITLE_HEIGHT * 0.4)?;

    for row in &plan.rows {
        ctx.set_fill_style_str(ROW_BACKGROUND);
        fill(&ctx, row.row_rect);
        ctx.set_fill_style_str(&row.color);
        fill(&ctx, row.label_rect);

        ctx.set_text_align("center");
        ctx.set_fill_style_str(row.text_color);
        ctx.set_font("bold 20px sans-serif");
        let center = row.label_rect.center();
        ctx.fill_text(&row.label, center.x, center.y)?;

        ctx.set_font("13px sans-serif");
        for tile in &row.tiles {
            ctx.set_fill_style_str(BACKGROUND);
            fill(&ctx, tile.rect);
            ctx.set_stroke_style_str(TILE_BORDER);
            ctx.stroke_rect(tile.rect.x, tile.rect.y, tile.rect.width, tile.rect.height);
            ctx.set_fill_style_str(TEXT);
            let center = tile.rect.center();
            ctx.fill_text(&tile.name, center.x, center.y)?;
        }
    }

    canvas.to_data_url_with_type("image/png")
}

#[cfg(feature = "csr")]
fn fill(ctx: &web_sys::CanvasRenderingContext2d, rect: Rect) {
    ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
}
