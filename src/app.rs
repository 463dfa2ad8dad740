//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::future::Future;
use std::rc::Rc;

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::GalleryView;
use crate::config::{APP_NAME, AppConfig};
use crate::core::{GalleryController, RemoteDirectory, ViewState};

/// Controller type used by the running app.
pub type Gallery = GalleryController<RemoteDirectory, RwSignal<ViewState>>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy`: the view state is a signal and the controller
/// (which holds non-`Send` handles) lives in a local [`StoredValue`].
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Everything the gallery renders.
    pub state: RwSignal<ViewState>,

    gallery: StoredValue<Gallery, LocalStorage>,
}

impl AppContext {
    /// Creates the context from a configuration built once at startup.
    pub fn new(config: AppConfig) -> Self {
        log!(
            "{} using api {} and static files {}",
            APP_NAME,
            config.api_base(),
            config.static_base()
        );
        let state = RwSignal::new(ViewState::new());
        let api = Rc::new(RemoteDirectory::new(Rc::new(config)));
        let gallery = GalleryController::new(api, state);
        Self {
            state,
            gallery: StoredValue::new_local(gallery),
        }
    }

    /// Run a synchronous controller intent.
    pub fn act(&self, f: impl FnOnce(&Gallery)) {
        self.gallery.with_value(f);
    }

    /// Run an asynchronous controller action on the browser executor.
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Gallery) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let gallery = self.gallery.get_value();
        spawn_local(action(gallery));
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the initial listing of the root folder
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::from_env());
    provide_context(ctx);

    ctx.spawn(|gallery| async move { gallery.mount().await });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #121212;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4a90e2;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <GalleryView />
        </ErrorBoundary>
    }
}
