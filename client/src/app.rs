//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{custom::CustomTierListPage, home::HomePage, tier_list::TierListPage};
use crate::state::config::AppConfig;
use crate::util::{dark_mode, theme};

/// Root application component.
///
/// Provides the shared configuration context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);
    let config = RwSignal::new(AppConfig::default().with_dark_mode(dark));
    provide_context(config);

    // Universe palette follows whichever page set it.
    Effect::new(move || {
        let palette = config.get().palette();
        theme::apply(palette.as_ref());
    });

    view! {
        <Title text="TierSaga"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("custom") view=CustomTierListPage/>
                <Route path=(StaticSegment("tier-list"), ParamSegment("universe")) view=TierListPage/>
            </Routes>
        </Router>
    }
}
