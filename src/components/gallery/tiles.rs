//! Grid tiles: parent link, folders and media items.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Folder, MediaItem, MediaKind};

stylance::import_crate_style!(css, "src/components/gallery/tiles.module.css");

/// Tile leading to the parent folder. Only rendered below the root.
#[component]
pub fn ParentTile() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=css::tile
            title="Parent folder"
            on:click=move |_| ctx.spawn(|gallery| async move { gallery.navigate_up().await })
        >
            <span class=css::folderIcon><Icon icon=ic::PARENT_FOLDER /></span>
            <span class=css::label>".."</span>
        </button>
    }
}

#[component]
pub fn FolderTile(folder: Folder) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let delete_mode = Memo::new(move |_| ctx.state.with(|s| s.folder_delete_mode));

    let name = folder.name.clone();
    let title = folder.name.clone();
    let class_name = move || {
        if delete_mode.get() {
            format!("{} {}", css::tile, css::danger)
        } else {
            css::tile.to_string()
        }
    };

    let on_click = move |_| {
        let name = name.clone();
        ctx.spawn(|gallery| async move { gallery.navigate_into(&name).await });
    };

    view! {
        <button class=class_name title=title on:click=on_click>
            <span class=css::folderIcon>
                {move || {
                    let icon = if delete_mode.get() { ic::DELETE_FOLDER } else { ic::FOLDER };
                    view! { <Icon icon=icon /> }
                }}
            </span>
            <span class=css::label>{folder.name}</span>
            {folder.created_date.map(|date| view! { <span class=css::meta>{date}</span> })}
        </button>
    }
}

#[component]
pub fn MediaTile(item: MediaItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = item.id().to_string();
    let select_mode = Memo::new(move |_| ctx.state.with(|s| s.select_mode));
    let is_selected = {
        let id = id.clone();
        Memo::new(move |_| ctx.state.with(|s| s.selection.contains(&id)))
    };

    let class_name = move || {
        if select_mode.get() && is_selected.get() {
            format!("{} {} {}", css::tile, css::media, css::selected)
        } else {
            format!("{} {}", css::tile, css::media)
        }
    };

    // Select mode toggles membership; otherwise the tile opens full screen.
    let on_click = move |_| {
        if select_mode.get_untracked() {
            ctx.act(|gallery| gallery.toggle_select(&id));
        } else {
            ctx.act(|gallery| gallery.open_viewer(&id));
        }
    };

    let preview = match item.kind {
        MediaKind::Image => view! {
            <img class=css::thumb src=item.source_url.clone() alt=item.name.clone() loading="lazy" />
        }
        .into_any(),
        MediaKind::Video => view! {
            <div class=css::videoWrap>
                <video class=css::thumb src=item.source_url.clone() preload="metadata" muted=true />
                <span class=css::badge><Icon icon=ic::VIDEO /></span>
            </div>
        }
        .into_any(),
        MediaKind::Unknown => view! {
            <span class=css::fileIcon><Icon icon=ic::FILE /></span>
        }
        .into_any(),
    };

    view! {
        <button class=class_name title=item.name.clone() on:click=on_click>
            {preview}
            <span class=css::caption>{item.name.clone()}</span>
            <Show when=move || select_mode.get()>
                <span class=css::check>
                    {move || {
                        let icon = if is_selected.get() { ic::CHECKED } else { ic::UNCHECKED };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
            </Show>
        </button>
    }
}
