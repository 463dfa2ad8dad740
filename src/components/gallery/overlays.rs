//! Full-screen overlays: loading blocker, upload progress, media viewer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{MediaKind, last_segment};

stylance::import_crate_style!(css, "src/components/gallery/overlays.module.css");

/// Blocks interaction while a listing or mutation is in flight.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let loading = Memo::new(move |_| ctx.state.with(|s| s.loading && !s.uploading));

    view! {
        <Show when=move || loading.get()>
            <div class=css::overlay>
                <div class=css::spinner></div>
                <span class=css::label>"Loading..."</span>
            </div>
        </Show>
    }
}

#[component]
pub fn UploadOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let uploading = Memo::new(move |_| ctx.state.with(|s| s.uploading));
    let progress = Memo::new(move |_| ctx.state.with(|s| s.progress));

    view! {
        <Show when=move || uploading.get()>
            <div class=css::overlay>
                <span class=css::label>{move || format!("Uploading... {}%", progress.get())}</span>
                <div class=css::track>
                    <div class=css::bar style=move || format!("width: {}%;", progress.get())></div>
                </div>
            </div>
        </Show>
    }
}

/// Shows the opened item at full size. Clicking anywhere closes it.
#[component]
pub fn FullscreenViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let viewer = Memo::new(move |_| ctx.state.with(|s| s.viewer.clone()));

    let content = move || {
        viewer.get().map(|url| match MediaKind::from_name(&url) {
            MediaKind::Image => view! { <img class=css::full src=url /> }.into_any(),
            MediaKind::Video => view! {
                <video
                    class=css::full
                    src=url
                    controls=true
                    autoplay=true
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                />
            }
            .into_any(),
            MediaKind::Unknown => view! {
                <div class=css::unknown>
                    <Icon icon=ic::FILE />
                    <span>{last_segment(&url).to_string()}</span>
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <Show when=move || viewer.with(Option::is_some)>
            <div class=css::viewer on:click=move |_| ctx.act(|g| g.close_viewer())>
                <button class=css::close title="Close">
                    <Icon icon=ic::CLOSE />
                </button>
                {content}
            </div>
        </Show>
    }
}
