use crate::widget::{Widget, notice_text};
use basket::cart::{CartError, TableView};
use dioxus::prelude::*;
use tracing::warn;

mod footer;
mod form;
mod notice;
mod table;

use footer::TotalsFooter;
use form::ProductEntry;
use notice::Notice;
use table::CartRow;

/// Root component: cart table, totals footer, product form and the blocking notice.
#[component]
pub fn App() -> Element {
    let widget = use_context::<Widget>();
    let view = use_signal(|| widget.view());
    let notice = use_signal(|| None::<String>);

    let rows = view.read().rows.clone();

    let on_reset = move |_: MouseEvent| {
        apply(widget.reset(), view, notice);
    };

    rsx! {
        main {
            h1 { "Cart" }
            table {
                thead {
                    tr {
                        th { "Reference" }
                        th { "Product" }
                        th { class: "num", "Unit price" }
                        th { class: "num", "Quantity" }
                        th { class: "num", "Price" }
                        th {}
                    }
                }
                tbody {
                    for row in rows {
                        CartRow { key: "{row.reference}-{row.revision}", row: row.clone(), view, notice }
                    }
                }
                TotalsFooter { view, notice }
            }
            ProductEntry { view, notice }
            button { class: "reset", r#type: "button", onclick: on_reset, "Reset cart" }
            Notice { notice }
        }
    }
}

/// Shows the new view, or the error in the notice.
fn apply(
    result: Result<TableView, CartError>,
    mut view: Signal<TableView>,
    mut notice: Signal<Option<String>>,
) -> bool {
    match result {
        Ok(next) => {
            view.set(next);
            true
        }
        Err(e) => {
            warn!(error = %e, "Action rejected");
            notice.set(Some(notice_text(&e)));
            false
        }
    }
}
