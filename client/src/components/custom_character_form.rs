//! Add a character that is not in the loaded dataset.
//!
//! The image comes from an uploaded file (read as a data URL) or a pasted
//! URL. New characters land at the end of the pool.

#[cfg(test)]
#[path = "custom_character_form_test.rs"]
mod custom_character_form_test;

use leptos::prelude::*;

use grid::character::Character;
use grid::engine::GridCore;

use crate::components::tier_list_grid::report_unknown;
use crate::state::tier_list::TierListState;

/// Trimmed `(name, image)` or the reason the form cannot be submitted.
fn validate(name: &str, image: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let image = image.trim();
    if name.is_empty() {
        return Err("Give the character a name.");
    }
    if image.is_empty() {
        return Err("Choose an image or paste an image URL.");
    }
    let is_url = image.starts_with("https://") || image.starts_with("http://") || image.starts_with("data:image/");
    if !is_url {
        return Err("The image must be an uploaded file or an http(s) URL.");
    }
    Ok((name.to_owned(), image.to_owned()))
}

#[component]
pub fn CustomCharacterForm() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridCore>>();
    let page = expect_context::<RwSignal<TierListState>>();
    let name = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    // One read in flight at a time; dropping the handle aborts it.
    #[cfg(feature = "csr")]
    let pending_read = StoredValue::new_local(None::<gloo_file::callbacks::FileReader>);

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let file = gloo_file::File::from(file);
            let reader = gloo_file::callbacks::read_as_data_url(&file, move |result| match result {
                Ok(url) => image.set(url),
                Err(e) => {
                    log::warn!("custom character: could not read file: {e}");
                    error.set(Some("Could not read that file."));
                }
            });
            pending_read.set_value(Some(reader));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate(&name.get_untracked(), &image.get_untracked()) {
            Ok((name_value, image_value)) => {
                let character = Character::custom(name_value, image_value);
                log::info!("custom character: adding {}", character.id);
                grid.update(|g| {
                    g.add_custom_character(character);
                });
                report_unknown(grid, page);
                name.set(String::new());
                image.set(String::new());
                error.set(None);
            }
            Err(reason) => error.set(Some(reason)),
        }
    };

    view! {
        <form class="custom-character-form" on:submit=on_submit>
            <h2 class="custom-character-form__title">"Add a character"</h2>
            <input
                class="custom-character-form__name"
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="custom-character-form__url"
                type="url"
                placeholder="Image URL"
                prop:value=move || if image.get().starts_with("data:") { String::new() } else { image.get() }
                on:input=move |ev| image.set(event_target_value(&ev))
            />
            <input class="custom-character-form__file" type="file" accept="image/*" on:change=on_file/>
            <Show when=move || !image.get().is_empty()>
                <img class="custom-character-form__preview" src=move || image.get() alt="Preview"/>
            </Show>
            {move || error.get().map(|text| view! { <p class="custom-character-form__error">{text}</p> })}
            <button class="btn btn--primary" type="submit">"Add"</button>
        </form>
    }
}
