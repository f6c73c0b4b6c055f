//! Multi-row input that always keeps an empty row at the end for new entries.

#[cfg(all(test, feature = "ssr"))]
#[path = "row_matrix_input_test.rs"]
mod row_matrix_input_test;

use leptos::prelude::*;

use crate::state::fields::FieldConfig;
use crate::state::input::RowMatrixInputState;
use crate::state::matrix::{ValuesInput, ValuesMatrix};
use crate::state::view::{FieldView, is_removable};

/// Renders a labels row followed by one row of text inputs per matrix row.
///
/// Typing in the last row appends a fresh row (unless the column disables
/// duplication); every row but the last gets a remove button. `on_synced`
/// receives the matrix after each edit once the DOM has been updated.
#[component]
pub fn RowMatrixInput(
    #[prop(optional)] fields_config: Vec<FieldConfig>,
    #[prop(optional, into)] values: ValuesInput,
    #[prop(optional)] on_synced: Option<Callback<ValuesMatrix>>,
) -> impl IntoView {
    let state = RwSignal::new_local(RowMatrixInputState::new(fields_config, values));
    let header = state.with_untracked(RowMatrixInputState::labels);

    // Effects run after the DOM update, which is when a write counts as synced.
    Effect::new(move |_| {
        state.track();
        let mut rendered = false;
        state.update_untracked(|s| rendered = s.mark_rendered());
        if rendered {
            if let Some(on_synced) = on_synced {
                on_synced.run(state.with_untracked(|s| s.values().clone()));
            }
        }
    });

    let row_view = move |row: usize| {
        // `value` seeds server-rendered HTML; `prop:value` follows later edits.
        let model = state.with_untracked(|s| s.row_view(row));

        view! {
            <div class="multi-input__row">
                <div class="multi-input__fields">
                    {model
                        .fields
                        .into_iter()
                        .map(|FieldView { field_index: field, name, placeholder, value: initial }| {
                            view! {
                                <input
                                    class="multi-input__field"
                                    type="text"
                                    name=name
                                    placeholder=placeholder
                                    value=initial
                                    prop:value=move || {
                                        state.with(|s| s.values().get(row, field).unwrap_or_default().to_owned())
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.on_field_input(row, field, value));
                                    }
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || state.with(|s| is_removable(row, s.row_count()))>
                    <button
                        class="btn multi-input__remove"
                        type="button"
                        title="Remove row"
                        on:click=move |_| state.update(|s| s.on_remove_row(row))
                    >
                        "×"
                    </button>
                </Show>
            </div>
        }
    };

    view! {
        <div class="multi-input">
            <div class="multi-input-labels">
                {header
                    .into_iter()
                    .map(|label| view! { <label class="multi-input__label">{label}</label> })
                    .collect_view()}
            </div>
            <For
                each=move || 0..state.with(RowMatrixInputState::row_count)
                key=|row| *row
                children=row_view
            />
        </div>
    }
}
