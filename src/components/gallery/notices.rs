//! Success and error notices.
//!
//! Each notice hides itself after [`NOTICE_TIMEOUT_MS`] unless a newer
//! notice of the same tone replaced it in the meantime. Notices are keyed by
//! their sequence number, so repeating the same text restarts the timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NOTICE_TIMEOUT_MS;

stylance::import_crate_style!(css, "src/components/gallery/notices.module.css");

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
}

#[component]
pub fn Notices() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let error = Memo::new(move |_| {
        ctx.state
            .with(|s| s.error_message.clone().map(|text| (s.error_seq, text)))
    });
    let success = Memo::new(move |_| {
        ctx.state
            .with(|s| s.success_message.clone().map(|text| (s.success_seq, text)))
    });

    view! {
        <div class=css::stack>
            <Notice notice=error tone=Tone::Error />
            <Notice notice=success tone=Tone::Success />
        </div>
    }
}

#[component]
fn Notice(notice: Memo<Option<(u64, String)>>, tone: Tone) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let dismiss = move || match tone {
        Tone::Error => ctx.act(|g| g.dismiss_error()),
        Tone::Success => ctx.act(|g| g.dismiss_success()),
    };

    let expire = move |seq: u64| match tone {
        Tone::Error => ctx.act(|g| g.expire_error(seq)),
        Tone::Success => ctx.act(|g| g.expire_success(seq)),
    };

    Effect::new(move |_| {
        let Some((seq, _)) = notice.get() else { return };
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            expire(seq);
        });
    });

    let class_name = match tone {
        Tone::Error => format!("{} {}", css::notice, css::error),
        Tone::Success => format!("{} {}", css::notice, css::success),
    };

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class=class_name.clone() role="status">
                <span class=css::text>{move || notice.get().map(|(_, text)| text).unwrap_or_default()}</span>
                <button class=css::dismiss title="Dismiss" on:click=move |_| dismiss()>
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </Show>
    }
}
