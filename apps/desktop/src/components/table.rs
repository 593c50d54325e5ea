use super::apply;
use crate::widget::Widget;
use basket::cart::{RowAction, RowView, TableView};
use basket::domain::Quantity;
use dioxus::prelude::*;

#[component]
pub(super) fn CartRow(
    row: RowView,
    view: Signal<TableView>,
    notice: Signal<Option<String>>,
) -> Element {
    let widget = use_context::<Widget>();

    let on_quantity = {
        let widget = widget.clone();
        let reference = row.reference.clone();
        move |evt: FormEvent| {
            let action = RowAction::SetQuantity { reference: reference.clone(), input: evt.value() };
            apply(widget.dispatch(action), view, notice);
        }
    };

    let on_delete = {
        let reference = row.reference.clone();
        move |_: MouseEvent| {
            apply(widget.dispatch(RowAction::Delete { reference: reference.clone() }), view, notice);
        }
    };

    let unit_price = row.unit_price_text();
    let line_price = row.line_price_text();
    let (min, max) = (Quantity::MIN, Quantity::MAX);

    rsx! {
        tr {
            td { "{row.reference}" }
            td { "{row.name}" }
            td { class: "num", "{unit_price}" }
            td { class: "num",
                input {
                    class: "qty",
                    r#type: "number",
                    min: "{min}",
                    max: "{max}",
                    value: "{row.quantity}",
                    onchange: on_quantity,
                }
            }
            td { class: "num", "{line_price}" }
            td {
                button { title: "Remove {row.name}", onclick: on_delete, "Delete" }
            }
        }
    }
}
