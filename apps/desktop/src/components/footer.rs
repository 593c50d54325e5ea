use super::apply;
use crate::widget::Widget;
use basket::cart::TableView;
use basket::domain::{DeliveryMode, format_amount};
use dioxus::prelude::*;
use strum::IntoEnumIterator;

#[component]
pub(super) fn TotalsFooter(view: Signal<TableView>, notice: Signal<Option<String>>) -> Element {
    let widget = use_context::<Widget>();
    let footer = view.read().footer;
    let totals = footer.totals;
    let subtotal = format_amount(totals.subtotal);
    let vat = format_amount(totals.vat);
    let delivery_fee = format_amount(totals.delivery_fee);
    let grand_total = format_amount(totals.grand_total);

    rsx! {
        tfoot {
            tr {
                td { colspan: "4", "Subtotal" }
                td { class: "num", "{subtotal}" }
                td {}
            }
            tr {
                td { colspan: "4", "VAT" }
                td { class: "num", "{vat}" }
                td {}
            }
            tr {
                td { colspan: "4",
                    "Delivery "
                    select {
                        value: "{footer.mode}",
                        onchange: move |evt: FormEvent| {
                            apply(widget.select_delivery(&evt.value()), view, notice);
                        },
                        for mode in DeliveryMode::iter() {
                            option { value: mode.to_string(), selected: mode == footer.mode, {mode.label()} }
                        }
                    }
                }
                td { class: "num", "{delivery_fee}" }
                td {}
            }
            tr {
                td { colspan: "4", "Total" }
                td { class: "num", "{grand_total}" }
                td {}
            }
        }
    }
}
