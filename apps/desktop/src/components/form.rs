use super::apply;
use crate::widget::Widget;
use basket::cart::{ProductForm, TableView};
use dioxus::prelude::*;

/// "Add product" form. Fields are kept on a failed submit so they can be corrected.
#[component]
pub(super) fn ProductEntry(view: Signal<TableView>, notice: Signal<Option<String>>) -> Element {
    let widget = use_context::<Widget>();
    let mut form = use_signal(ProductForm::default);

    let submit = move |_: MouseEvent| {
        if apply(widget.add_product(&form.read()), view, notice) {
            form.write().clear();
        }
    };

    rsx! {
        form { class: "product", onsubmit: |evt: FormEvent| evt.prevent_default(),
            input {
                placeholder: "Reference",
                value: "{form.read().reference}",
                oninput: move |evt: FormEvent| form.write().reference = evt.value(),
            }
            input {
                placeholder: "Name",
                value: "{form.read().name}",
                oninput: move |evt: FormEvent| form.write().name = evt.value(),
            }
            input {
                placeholder: "Unit price",
                inputmode: "decimal",
                value: "{form.read().unit_price}",
                oninput: move |evt: FormEvent| form.write().unit_price = evt.value(),
            }
            input {
                placeholder: "Quantity",
                inputmode: "numeric",
                value: "{form.read().quantity}",
                oninput: move |evt: FormEvent| form.write().quantity = evt.value(),
            }
            button { r#type: "button", onclick: submit, "Add product" }
        }
    }
}
