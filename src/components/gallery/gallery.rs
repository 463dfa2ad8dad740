//! Main gallery view.
//!
//! Lays out the header and the responsive tile grid, then stacks the action
//! dial, dialog, overlays and notices on top.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::config::{APP_NAME, breakpoints};
use crate::core::LoadPhase;
use crate::utils::dom::column_count;

use super::{
    ActionDial, CreateFolderDialog, FolderTile, FullscreenViewer, LoadingOverlay, MediaTile,
    Notices, ParentTile, UploadOverlay,
};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn GalleryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.state;

    let sm = use_media_query(breakpoints::SM);
    let md = use_media_query(breakpoints::MD);
    let lg = use_media_query(breakpoints::LG);
    let columns = Signal::derive(move || column_count(sm.get(), md.get(), lg.get()));

    let path = Memo::new(move |_| state.with(|s| s.path.clone()));
    let folders = Memo::new(move |_| state.with(|s| s.folders.clone()));
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let is_root = Signal::derive(move || path.with(|p| p.is_root()));
    let is_empty = Signal::derive(move || {
        state.with(|s| {
            s.phase() == LoadPhase::Loaded && s.folders.is_empty() && s.items.is_empty()
        })
    });

    let (dialog_open, set_dialog_open) = signal(false);

    view! {
        <div class=css::gallery>
            <header class=css::header>
                <span class=css::title>
                    {move || path.with(|p| p.name().unwrap_or(APP_NAME).to_string())}
                </span>
                <span class=css::path>{move || path.get().to_string()}</span>
            </header>

            <main
                class=css::grid
                style=move || format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns.get())
            >
                <Show when=move || !is_root.get()>
                    <ParentTile />
                </Show>
                <For
                    each=move || folders.get()
                    key=|folder| folder.name.clone()
                    children=move |folder| view! { <FolderTile folder=folder /> }
                />
                <For
                    each=move || items.get()
                    key=|item| item.id().to_string()
                    children=move |item| view! { <MediaTile item=item /> }
                />
            </main>

            <Show when=move || is_empty.get()>
                <p class=css::empty>"This folder is empty"</p>
            </Show>

            <ActionDial on_create_folder=Callback::new(move |_: ()| set_dialog_open.set(true)) />
            <CreateFolderDialog open=dialog_open set_open=set_dialog_open />
            <LoadingOverlay />
            <UploadOverlay />
            <FullscreenViewer />
            <Notices />
        </div>
    }
}
