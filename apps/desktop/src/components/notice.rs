use dioxus::prelude::*;

/// Blocking message box; the rest of the widget is covered until it is dismissed.
#[component]
pub(super) fn Notice(notice: Signal<Option<String>>) -> Element {
    let mut notice = notice;
    let Some(message) = notice() else {
        return rsx! {};
    };

    rsx! {
        div { class: "notice-backdrop",
            div { class: "notice", role: "alertdialog",
                p { "{message}" }
                button { onclick: move |_| notice.set(None), "OK" }
            }
        }
    }
}
