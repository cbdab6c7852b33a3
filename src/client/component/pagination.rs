use dioxus::prelude::*;

/// Previous/next controls over a cursor-paginated collection.
///
/// `cursor` holds the cursor of the page on screen; `history` stacks the
/// cursors of the pages before it so that "previous" can walk back.
#[component]
pub fn CursorPagination(
    mut cursor: Signal<Option<String>>,
    mut history: Signal<Vec<Option<String>>>,
    next_cursor: Option<String>,
    has_more: bool,
) -> Element {
    let page_number = history.read().len() + 1;
    let can_go_back = !history.read().is_empty();
    let can_go_forward = has_more && next_cursor.is_some();

    rsx!(
        div {
            class: "flex justify-end items-center mt-4 gap-4",
            span {
                class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                "Página {page_number}"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: !can_go_back,
                    onclick: move |_| {
                        if let Some(previous) = history.write().pop() {
                            cursor.set(previous);
                        }
                    },
                    "«"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: !can_go_forward,
                    onclick: move |_| {
                        if let Some(next) = next_cursor.clone() {
                            history.write().push(cursor());
                            cursor.set(Some(next));
                        }
                    },
                    "»"
                }
            }
        }
    )
}
