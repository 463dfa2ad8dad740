//! Create-folder dialog.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::core::validate_segment;

stylance::import_crate_style!(css, "src/components/gallery/dialog.module.css");

/// Prompts for a folder name and creates it in the current path.
///
/// Confirmation stays disabled while the name would be rejected, so only
/// valid names ever reach the backend.
#[component]
pub fn CreateFolderDialog(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (name, set_name) = signal(String::new());
    let problem = Memo::new(move |_| {
        name.with(|n| {
            if n.is_empty() {
                None
            } else {
                validate_segment(n).err().map(|e| e.to_string())
            }
        })
    });
    let can_submit = Signal::derive(move || name.with(|n| validate_segment(n).is_ok()));

    let close = move || {
        set_open.set(false);
        set_name.set(String::new());
    };

    let submit = move || {
        if !can_submit.get_untracked() {
            return;
        }
        let folder = name.get_untracked();
        close();
        ctx.spawn(|gallery| async move {
            let _ = gallery.create_folder(&folder).await;
        });
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_name.set(input.value());
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "Escape" => close(),
        _ => {}
    };

    view! {
        <Show when=move || open.get()>
            <div class=css::backdrop on:click=move |_| close()>
                <div
                    class=css::dialog
                    role="dialog"
                    aria-label="Create folder"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <h2 class=css::heading>"New folder"</h2>
                    <input
                        class=css::input
                        type="text"
                        placeholder="Folder name"
                        autocomplete="off"
                        spellcheck="false"
                        autofocus=true
                        prop:value=name
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                    <p class=css::problem>{move || problem.get().unwrap_or_default()}</p>
                    <div class=css::buttons>
                        <button class=css::secondary on:click=move |_| close()>"Cancel"</button>
                        <button
                            class=css::primary
                            disabled=move || !can_submit.get()
                            on:click=move |_| submit()
                        >
                            "Create"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
