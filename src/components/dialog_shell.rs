//! Modal dialog chrome: backdrop, box, and title.

use leptos::prelude::*;

/// Shared modal shell. Clicking the backdrop closes the dialog;
/// clicks inside the box stay inside.
#[component]
pub fn DialogShell(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
