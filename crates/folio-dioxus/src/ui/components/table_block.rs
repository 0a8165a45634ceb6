use dioxus::prelude::*;
use folio_engine::render::GridNode;

/// Cell grid; only the first row can be a header row
#[component]
pub fn TableBlock(node: GridNode) -> Element {
    rsx! {
        div {
            class: "overflow-x-auto my-6",
            table {
                class: "w-full border-collapse",
                tbody {
                    for (row_index, row) in node.rows.iter().enumerate() {
                        tr {
                            key: "{row_index}",
                            for cell in row.cells.iter() {
                                if row.header {
                                    th { class: "border px-3 py-2", "{cell}" }
                                } else {
                                    td { class: "border px-3 py-2", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
