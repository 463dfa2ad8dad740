//! Floating action dial.
//!
//! The set of actions depends on the mode: select mode offers bulk actions on
//! the selection, normal mode offers folder and upload actions.

use icondata::Icon as IconData;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom::take_selected_files;

stylance::import_crate_style!(css, "src/components/gallery/actions.module.css");

#[component]
pub fn ActionDial(#[prop(into)] on_create_folder: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.state;

    let (open, set_open) = signal(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let select_mode = Memo::new(move |_| state.with(|s| s.select_mode));
    let delete_mode = Memo::new(move |_| state.with(|s| s.folder_delete_mode));
    let selected = Memo::new(move |_| state.with(|s| s.selection.len()));

    let on_files = move |ev: leptos::ev::Event| {
        let files = take_selected_files(&ev);
        if files.is_empty() {
            return;
        }
        ctx.spawn(|gallery| async move {
            let _ = gallery.upload(files).await;
        });
    };

    let select_actions = move || {
        view! {
            <DialAction
                icon=ic::SELECT_ALL
                label="Select all"
                on_click=move || ctx.act(|g| g.select_all())
            />
            <DialAction
                icon=ic::UNCHECKED
                label="Unselect all"
                on_click=move || ctx.act(|g| g.clear_selection())
            />
            <DialAction
                icon=ic::DOWNLOAD
                label="Download"
                on_click=move || {
                    ctx.spawn(|g| async move {
                        let report = g.download_selection().await;
                        log!("saved {} item(s), {} failed", report.saved, report.failed.len());
                    })
                }
            />
            <DialAction
                icon=ic::DELETE
                label="Delete"
                on_click=move || {
                    ctx.spawn(|g| async move {
                        let _ = g.delete_selection().await;
                    })
                }
            />
            <DialAction
                icon=ic::CLOSE
                label="Exit select mode"
                on_click=move || ctx.act(|g| g.exit_select_mode())
            />
        }
    };

    let browse_actions = move || {
        view! {
            <DialAction
                icon=ic::SELECT_MODE
                label="Select"
                on_click=move || ctx.act(|g| g.toggle_select_mode())
            />
            <DialAction
                icon=ic::CREATE_FOLDER
                label="New folder"
                on_click=move || on_create_folder.run(())
            />
            <DialAction
                icon=ic::DELETE_FOLDER
                label=Signal::derive(move || {
                    if delete_mode.get() { "Stop deleting folders" } else { "Delete folders" }
                })
                active=delete_mode
                on_click=move || ctx.act(|g| g.toggle_folder_delete_mode())
            />
            <DialAction
                icon=ic::UPLOAD
                label="Upload"
                on_click=move || {
                    if let Some(input) = file_input.get_untracked() {
                        input.click();
                    }
                }
            />
        }
    };

    view! {
        <div class=css::dial>
            <Show when=move || select_mode.get()>
                <span class=css::count>{move || format!("{} selected", selected.get())}</span>
            </Show>
            <Show when=move || open.get()>
                <div class=css::actions>
                    {move || {
                        if select_mode.get() {
                            select_actions().into_any()
                        } else {
                            browse_actions().into_any()
                        }
                    }}
                </div>
            </Show>
            <button
                class=css::toggle
                title="Actions"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || {
                    let icon = if open.get() { ic::CLOSE } else { ic::PLUS };
                    view! { <Icon icon=icon /> }
                }}
            </button>
            <input
                node_ref=file_input
                class=css::hidden
                type="file"
                multiple=true
                accept="image/*,video/*"
                on:change=on_files
            />
        </div>
    }
}

#[component]
fn DialAction(
    icon: IconData,
    #[prop(into)] label: Signal<&'static str>,
    #[prop(into, optional)] active: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let class_name = move || {
        if active.get() {
            format!("{} {}", css::action, css::active)
        } else {
            css::action.to_string()
        }
    };

    view! {
        <button class=class_name title=move || label.get() on:click=move |_| on_click()>
            <Icon icon=icon />
            <span class=css::actionLabel>{move || label.get()}</span>
        </button>
    }
}
