//! Demo application hosting two multi-row inputs.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::row_matrix_input::RowMatrixInput;
use crate::state::fields::FieldConfig;
use crate::state::matrix::ValuesMatrix;

/// Columns for the demo contact list.
fn contact_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::named("address").with_label("Address").with_placeholder("Street and number"),
        FieldConfig::named("age").with_label("Age").with_placeholder("Years"),
        FieldConfig::named("note").with_label("Note").without_duplication(),
    ]
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let synced = RwSignal::new(ValuesMatrix::default());
    let on_synced = Callback::new(move |matrix: ValuesMatrix| synced.set(matrix));
    let synced_json = move || {
        synced.with(|matrix| serde_json::to_string_pretty(matrix).unwrap_or_default())
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/row-matrix-input.css"/>
        <Title text="Row Matrix Input"/>

        <main class="demo">
            <h1>"Contacts"</h1>
            <RowMatrixInput fields_config=contact_fields() on_synced=on_synced/>
            <h2>"Last synced values"</h2>
            <pre class="demo__values">{synced_json}</pre>

            <h1>"Tags"</h1>
            <RowMatrixInput values=vec!["rust".to_owned(), "leptos".to_owned()]/>
        </main>
    }
}
