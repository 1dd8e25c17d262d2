//! Package details dialog.
//!
//! Shows one canonical record with Details / EULA / Release Notes tabs, a
//! EULA acceptance gate in front of the download link, and a share button
//! that copies a deep link to the package.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::tooltip::Flash;
use crate::app::AppContext;
use crate::config::{ICON_BASE_PATH, tooltips};
use crate::models::{DialogTab, DownloadGate, Row};
use crate::utils::format::format_package_size;
use crate::utils::{ClassList, dom, eula_plain_url, fetch_text, sanitize_html, share_url};

/// Reactive state of the details dialog.
#[derive(Clone, Copy)]
pub struct DialogState {
    /// Record being shown.
    pub package: RwSignal<Option<Row>>,
    pub is_open: RwSignal<bool>,
    pub tab: RwSignal<DialogTab>,
    /// Sanitized EULA HTML, empty until loaded.
    pub eula: RwSignal<String>,
    pub eula_accepted: RwSignal<bool>,
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            package: RwSignal::new(None),
            is_open: RwSignal::new(false),
            tab: RwSignal::new(DialogTab::default()),
            eula: RwSignal::new(String::new()),
            eula_accepted: RwSignal::new(false),
        }
    }

    /// Show `row`, starting its EULA download, and open on the Details tab.
    pub fn show_package(&self, row: Row) {
        self.load_eula(&row);
        self.package.set(Some(row));
        self.eula_accepted.set(false);
        self.open();
    }

    pub fn open(&self) {
        self.tab.set(DialogTab::Details);
        self.is_open.set(true);
        dom::set_body_scroll_locked(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
        dom::set_body_scroll_locked(false);
    }

    fn load_eula(&self, row: &Row) {
        self.eula.set(String::new());

        let Some(link) = row.eula_link() else {
            return;
        };
        let Some(url) = dom::location_href().and_then(|href| eula_plain_url(link, &href)) else {
            log::warn!("unusable EULA link for {}: {}", row.package_name, link);
            return;
        };

        let eula = self.eula;
        let package = self.package;
        let name = row.package_name.clone();
        spawn_local(async move {
            match fetch_text(&url).await {
                Ok(html) => {
                    // Drop the response if another package was opened meanwhile.
                    let current = package
                        .try_with_untracked(|p| p.as_ref().is_some_and(|p| p.package_name == name))
                        .unwrap_or(false);
                    if current {
                        let _ = eula.try_set(sanitize_html(&html));
                    }
                }
                Err(err) => log::warn!("EULA for {} unavailable: {}", name, err),
            }
        });
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal wrapper: underlay, Escape handling and the dialog frame.
#[component]
pub fn PackageDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let dialog = ctx.dialog;

    let escape = window_event_listener(leptos::ev::keyup, move |ev| {
        if ev.key() == "Escape" {
            dialog.close();
        }
    });
    on_cleanup(move || escape.remove());

    let open_class = move |base: &'static str| {
        ClassList::new()
            .add(base)
            .toggle("is-open", dialog.is_open.get())
            .to_string()
    };

    view! {
        <div
            class=move || open_class("spectrum-Underlay")
            id="spectrum-Underlay"
            on:click=move |_| dialog.close()
        ></div>
        <div class=move || open_class("spectrum-Modal-wrapper")>
            <div class=move || open_class("spectrum-Modal") data-testid="modal">
                <section
                    class="spectrum-Dialog spectrum-Dialog--large"
                    role="alertdialog"
                    tabindex="-1"
                    aria-modal="true"
                >
                    {move || {
                        dialog
                            .package
                            .get()
                            .map(|row| view! { <DialogContents row=row /> })
                    }}
                </section>
            </div>
        </div>
    }
}

/// Heading, tabs, panels and footer for one package.
#[component]
fn DialogContents(row: Row) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let dialog = ctx.dialog;

    let tab_class = move |tab: DialogTab| {
        ClassList::new()
            .add("spectrum-Tabs-item")
            .toggle("is-selected", dialog.tab.get() == tab)
            .to_string()
    };
    let panel_class = move |base: &'static str, tab: DialogTab| {
        ClassList::new()
            .add("spectrum-TabView-body")
            .add(base)
            .toggle("hidden", dialog.tab.get() != tab)
            .to_string()
    };

    let tabs = DialogTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <div
                    class=move || tab_class(tab)
                    aria-controls="dialog-tab-panels"
                    role="tab"
                    aria-selected=move || (dialog.tab.get() == tab).to_string()
                    tabindex=move || if dialog.tab.get() == tab { "0" } else { "-1" }
                    data-tab=tab.data_tab()
                    on:click=move |_| dialog.tab.set(tab)
                >
                    <span class="spectrum-Tabs-itemLabel">{tab.label()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let icon_src = format!("{}{}", ICON_BASE_PATH, row.icon);
    let size = format_package_size(&row.size);

    view! {
        <div class="spectrum-Dialog-grid">
            <h1 class="spectrum-Dialog-heading spectrum-Dialog-heading--noHeader">
                {row.package_name.clone()}
            </h1>
            <hr class="spectrum-Divider spectrum-Divider--sizeM spectrum-Divider--horizontal spectrum-Dialog-divider" />
            <section class="spectrum-Dialog-content">
                <div
                    class="spectrum-Tabs spectrum-Tabs--sizeM spectrum-Tabs--horizontal spectrum-Tabs--compact spectrum-Tabs--quiet"
                    aria-orientation="horizontal"
                    role="tablist"
                >
                    {tabs}
                </div>
                <div class="tabs-content" role="tabpanel" id="dialog-tab-panels">
                    <div
                        class=move || panel_class("spectrum-Details", DialogTab::Details)
                        role="tabpanel"
                        data-tab="details"
                    >
                        <div class="spectrum-DetailsInfo">
                            <dt>"Description"</dt>
                            <dd>{row.description.clone()}</dd>
                            <dt>"Package type"</dt>
                            <dd>{row.display("softwareType")}</dd>
                            <dt>"File type"</dt>
                            <dd>{row.display("fileType")}</dd>
                            <dt>"Provider"</dt>
                            <dd>{row.display("provider")}</dd>
                            <dt>"Size"</dt>
                            <dd>{size}</dd>
                            <dt>"Operating system"</dt>
                            <dd>{row.display("operatingSystem")}</dd>
                            <dt>"SHA-1 Hash"</dt>
                            <dd>{row.sha1_hash.clone()}</dd>
                        </div>
                        <div class="spectrum-DetailsPicture">
                            <div class="spectrum-DetailsPicture--image">
                                <img
                                    class="spectrum-Asset-image"
                                    alt=row.package_name.clone()
                                    src=icon_src
                                />
                            </div>
                        </div>
                    </div>
                    <div
                        class=move || panel_class("spectrum-EulaTerms", DialogTab::Eula)
                        role="tabpanel"
                        data-tab="eula"
                    >
                        <div
                            class="spectrum-Body spectrum-Body--sizeS textfieldlike"
                            inner_html=move || dialog.eula.get()
                        ></div>
                    </div>
                    <div
                        class=move || panel_class("spectrum-ReleaseNotes", DialogTab::ReleaseNotes)
                        role="tabpanel"
                        data-tab="releasenotes"
                    >
                        <div class="spectrum-Body spectrum-Body--sizeS textfieldlike">
                            {row.release_notes.clone()}
                        </div>
                    </div>
                </div>
            </section>
            <DialogFooter package_name=row.package_name.clone() public_link=row.public_link.clone() />
        </div>
    }
}

/// EULA acceptance, cancel, share and download actions.
#[component]
fn DialogFooter(package_name: String, public_link: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let dialog = ctx.dialog;
    let eula_warning = Flash::new();
    let share_copied = Flash::new();

    let on_download = move |ev: MouseEvent| {
        if DownloadGate::check(dialog.eula_accepted.get_untracked()) == DownloadGate::Warn {
            ev.prevent_default();
            eula_warning.show(tooltips::EULA_WARNING_MS);
        }
    };

    let on_share = move |_: MouseEvent| {
        let Some(href) = dom::location_href() else {
            return;
        };
        if dom::copy_to_clipboard(&share_url(&href, &package_name)) {
            share_copied.show(tooltips::SHARE_COPIED_MS);
        } else {
            log::warn!("clipboard copy refused");
        }
    };

    let tooltip_class = move |base: &'static str, flash: Flash| {
        ClassList::new()
            .add("spectrum-Tooltip")
            .add(base)
            .toggle("is-open", flash.visible.get())
            .to_string()
    };

    view! {
        <div class="spectrum-ButtonGroup spectrum-Dialog-buttonGroup spectrum-Dialog-buttonGroup--noFooter sd-PackageFooterSection">
            <div class="sd-PackageFooter">
                <div class="spectrum-AcceptEULA">
                    <label class="spectrum-Checkbox spectrum-Checkbox--sizeM spectrum-Checkbox--emphasized">
                        <input
                            type="checkbox"
                            class="spectrum-Checkbox-input"
                            id="checkbox-AcceptEULA"
                            prop:checked=move || dialog.eula_accepted.get()
                            on:change=move |ev| dialog.eula_accepted.set(event_target_checked(&ev))
                        />
                        <span class="spectrum-Checkbox-box"></span>
                        <span class="spectrum-Checkbox-label">"Accept\u{a0}"</span>
                    </label>
                    <a
                        href="#"
                        class="spectrum-Link spectrum-Link--sizeM"
                        data-tab="eula"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            dialog.tab.set(DialogTab::Eula);
                        }
                    >
                        "EULA Terms"
                    </a>
                    <span class=move || {
                        tooltip_class(
                            "spectrum-Tooltip--right spectrum-Tooltip--negative spectrum-Tooltip--eulaWarning",
                            eula_warning,
                        )
                    }>
                        <span class="spectrum-Tooltip-label">"You need to accept the EULA terms"</span>
                        <span class="spectrum-Tooltip-tip"></span>
                    </span>
                </div>

                <div class="sd-PackageFooter-Actions">
                    <button
                        class="spectrum-Button spectrum-Button--outline spectrum-Button--primary spectrum-Button--sizeM spectrum-BackButton"
                        on:click=move |_| dialog.close()
                    >
                        <span class="spectrum-Button-label">"Cancel"</span>
                    </button>
                    <div class="spectrum-Button--share">
                        <span class=move || {
                            tooltip_class("spectrum-Tooltip--top spectrum-Tooltip--share", share_copied)
                        }>
                            <span class="spectrum-Tooltip-label">"Copied URL"</span>
                            <span class="spectrum-Tooltip-tip"></span>
                        </span>
                        <button
                            class="spectrum-Button spectrum-Button--outline spectrum-Button--primary spectrum-Button--sizeM spectrum-ShareButton"
                            on:click=on_share
                        >
                            <span class="spectrum-Button-label">"Share"</span>
                        </button>
                    </div>
                    <div class="spectrum-DownloadPackage">
                        <a
                            class="spectrum-Button spectrum-Button--fill spectrum-Button--accent spectrum-Button--sizeM spectrum-DownloadButton"
                            href=public_link
                            target="_blank"
                            on:click=on_download
                        >
                            <span class="spectrum-Button-label">"Download"</span>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
