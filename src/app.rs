//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! one-shot loading of the package feed.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{DialogState, PackageDialog, ResultsTable};
use crate::config::{DATA_PATH, DEFAULT_COLUMNS, RESULTS_BLOCK_SELECTOR};
use crate::core::error::FetchError;
use crate::core::{DataSource, HttpRowSource, TableState};
use crate::models::Dataset;
use crate::utils::dom;

/// Global application context provided to all components.
///
/// All fields are signals, so the context is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Canonical rows of this page load, empty until loaded.
    pub dataset: RwSignal<Dataset>,
    /// Set once the load finished, successfully or not.
    pub ready: RwSignal<bool>,
    /// Why the load failed, if it did.
    pub load_error: RwSignal<Option<FetchError>>,
    /// Columns, filter and sort of the results table.
    pub table: RwSignal<TableState>,
    /// Package details dialog.
    pub dialog: DialogState,
}

impl AppContext {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            dataset: RwSignal::new(Dataset::empty()),
            ready: RwSignal::new(false),
            load_error: RwSignal::new(None),
            table: RwSignal::new(TableState::new(columns)),
            dialog: DialogState::new(),
        }
    }

    /// Fetch the package feed once and publish the outcome.
    pub fn load(&self) {
        let ctx = *self;
        spawn_local(async move {
            let outcome = DataSource::new(HttpRowSource::new(DATA_PATH)).load().await;
            log::info!("{} packages available", outcome.dataset.len());
            let _ = ctx.dataset.try_set(outcome.dataset);
            let _ = ctx.load_error.try_set(outcome.error);
            let _ = ctx.ready.try_set(true);
        });
    }
}

/// Columns authored on the page, or the built-in defaults.
fn initial_columns() -> Vec<String> {
    let authored = dom::authored_columns(RESULTS_BLOCK_SELECTOR);
    if authored.is_empty() {
        DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        authored
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(initial_columns());
    provide_context(ctx);
    ctx.load();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem;
                ">
                    <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                    <p style="margin-bottom: 2rem;">
                        "The package list could not be shown. Please try reloading the page."
                    </p>
                    <details style="text-align: left;">
                        <summary style="cursor: pointer;">"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <ResultsTable />
            <PackageDialog />
            <LoadErrorNotice />
        </ErrorBoundary>
    }
}

/// Short notice under the table when the feed could not be loaded.
#[component]
fn LoadErrorNotice() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || {
        ctx.load_error.get().map(|err| {
            view! {
                <p class="spectrum-Body spectrum-Body--sizeS sd-LoadError" role="status">
                    {format!("Packages could not be loaded: {}", err)}
                </p>
            }
        })
    }
}
