//! One generic list table for every resource page. Columns are plain
//! label + cell-renderer pairs, so each page only supplies its per-resource
//! configuration instead of hand-rolled markup.

use dioxus::prelude::*;

/// A single column: header label and a cell renderer.
#[derive(Clone, PartialEq)]
pub struct Column<T: Clone + PartialEq + 'static> {
    pub label: &'static str,
    pub value: fn(&T) -> String,
}

#[component]
pub fn ResourceTable<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    items: Vec<T>,
    /// Stable key per row, usually the record id.
    row_key: fn(&T) -> String,
    empty_message: &'static str,
    #[props(default = true)] show_edit: bool,
    on_edit: EventHandler<T>,
    on_delete: EventHandler<T>,
) -> Element {
    if items.is_empty() {
        return rsx! {
            p { class: "table-empty", "{empty_message}" }
        };
    }

    rsx! {
        table {
            class: "resource-table",
            thead {
                tr {
                    for column in columns.iter() {
                        th { key: "{column.label}", "{column.label}" }
                    }
                    th { class: "actions-column" }
                }
            }
            tbody {
                for item in items.iter() {
                    tr {
                        key: "{row_key(item)}",
                        for column in columns.iter() {
                            td { key: "{column.label}", "{(column.value)(item)}" }
                        }
                        td {
                            class: "actions-column",
                            if show_edit {
                                button {
                                    class: "table-action",
                                    onclick: {
                                        let item = item.clone();
                                        move |_| on_edit.call(item.clone())
                                    },
                                    "Edit"
                                }
                            }
                            button {
                                class: "table-action table-action--danger",
                                onclick: {
                                    let item = item.clone();
                                    move |_| on_delete.call(item.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
