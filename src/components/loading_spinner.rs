use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading" role="progressbar">
            <div class="spinner"></div>
            <span>"Chargement..."</span>
        </div>
    }
}
