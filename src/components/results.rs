//! Sortable, filterable results table.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Event};

use crate::app::AppContext;
use crate::config::{FILTERS_CHANGED_EVENT, FILTERS_SELECTOR, ICON_BASE_PATH};
use crate::core::PlatformCollator;
use crate::models::{FilterSpec, Row, SortOrder};
use crate::utils::dom::{self, EventSubscription};
use crate::utils::{ClassList, string_to_key};

const SORT_ARROW_PATH: &str = "M9.94952,4.99652a.87815.87815,0,0,0-.02966-.15259.854.854,0,0,0-.03522-.17315L9.882,4.66217A.86384.86384,0,0,0,9.7464,4.459a.819.819,0,0,0-.04718-.07226l-.00488-.005-.00086-.00079L6.62354,1.26172A.87459.87459,0,1,0,5.37646,2.48828L6.98682,4.125H.9248a.875.875,0,0,0,0,1.75h6.062L5.37646,7.51172A.87459.87459,0,1,0,6.62354,8.73828l3.06994-3.1192.00086-.00079.00488-.005A.819.819,0,0,0,9.7464,5.541.86384.86384,0,0,0,9.882,5.33783l.00262-.00861a.854.854,0,0,0,.03522-.17315.87815.87815,0,0,0,.02966-.15259L9.9502,5Z";

/// Subscribe the table to filter changes broadcast by the filters element.
///
/// The listener is removed when the calling component is torn down.
fn use_filter_events(ctx: AppContext) {
    let Some(target) = dom::query_selector(FILTERS_SELECTOR) else {
        log::debug!("no {} element, filters stay inactive", FILTERS_SELECTOR);
        return;
    };

    let table = ctx.table;
    let on_change = move |ev: Event| {
        let Some(detail) = ev.dyn_ref::<CustomEvent>().map(CustomEvent::detail) else {
            return;
        };
        match serde_wasm_bindgen::from_value::<FilterSpec>(detail) {
            Ok(filter) => table.update(|t| t.set_filter(filter)),
            Err(err) => log::warn!("ignoring malformed filter event: {}", err),
        }
    };
    let subscription = EventSubscription::listen(target.into(), FILTERS_CHANGED_EVENT, on_change);

    if subscription.is_none() {
        log::warn!("could not listen for {}", FILTERS_CHANGED_EVENT);
    }
    let subscription = StoredValue::new_local(subscription);
    on_cleanup(move || subscription.dispose());
}

#[component]
pub fn ResultsTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    use_filter_events(ctx);

    let rows = Signal::derive(move || {
        let collator = PlatformCollator::default();
        ctx.dataset.with(|dataset| {
            ctx.table.with(|table| {
                table
                    .view(dataset, &collator)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    let headers = move || {
        ctx.table.with(|table| {
            table
                .columns()
                .iter()
                .map(|label| {
                    view! { <HeaderCell label=label.clone() order=table.header_order(label) /> }
                })
                .collect_view()
        })
    };

    view! {
        <div>
            <table class="spectrum-Table spectrum-Table--sizeM">
                <thead class="spectrum-Table-head">
                    <tr>{headers}</tr>
                </thead>
                <tbody class="spectrum-Table-body">
                    <Show
                        when=move || ctx.ready.get()
                        fallback=|| view! {
                            <tr class="spectrum-Table-row">
                                <td class="spectrum-Table-cell">"Loading packages..."</td>
                            </tr>
                        }
                    >
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| view! { <ResultRow row=row /> })
                                .collect_view()
                        }}
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn HeaderCell(label: String, order: Option<SortOrder>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let key = string_to_key(&label);

    let class = ClassList::new()
        .add("spectrum-Table-headCell is-sortable")
        .add(&key)
        .toggle("is-sorted-desc", order == Some(SortOrder::Desc))
        .toggle("is-sorted-asc", order == Some(SortOrder::Asc))
        .to_string();
    let aria_sort = order.map(SortOrder::aria).unwrap_or("none");
    let on_click = {
        let label = label.clone();
        move |_: MouseEvent| ctx.table.update(|t| t.set_sort(&label))
    };

    view! {
        <th class=class aria-sort=aria_sort data-col=key on:click=on_click>
            {label}
            <svg
                viewBox="0 0 10 10"
                class="spectrum-Icon spectrum-UIIcon-ArrowDown100 spectrum-Table-sortedIcon"
                focusable="false"
                aria-hidden="true"
            >
                <g>
                    <rect width="10" height="10" fill="red" opacity="0"></rect>
                    <path d=SORT_ARROW_PATH></path>
                </g>
            </svg>
        </th>
    }
}

#[component]
fn ResultRow(row: Row) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let package_name = row.package_name.clone();
    let on_click = {
        let package_name = package_name.clone();
        move |_: MouseEvent| {
            let selected = ctx.dataset.with_untracked(|dataset| {
                ctx.table
                    .with_untracked(|table| table.select_row(dataset, &package_name).cloned())
            });
            match selected {
                Some(row) => ctx.dialog.show_package(row),
                None => log::warn!("clicked unknown package {}", package_name),
            }
        }
    };

    let cells = ctx.table.with_untracked(|table| {
        table
            .columns()
            .iter()
            .map(|label| render_cell(&row, &string_to_key(label)))
            .collect::<Vec<_>>()
    });

    view! {
        <tr class="spectrum-Table-row" data-package-name=package_name on:click=on_click>
            {cells}
        </tr>
    }
}

/// One table cell; the package name cell carries the thumbnail.
fn render_cell(row: &Row, key: &str) -> AnyView {
    if key == "packageName" {
        let icon_src = format!("{}{}", ICON_BASE_PATH, row.icon);
        view! {
            <td class="spectrum-Table-cell table-cell-first">
                <img
                    class="spectrum-Asset-image spectrum-Asset-image--list"
                    src=icon_src
                    alt=row.package_name.clone()
                />
                <span class="package-name">{row.package_name.clone()}</span>
            </td>
        }
        .into_any()
    } else {
        view! { <td class="spectrum-Table-cell">{row.display(key)}</td> }.into_any()
    }
}
