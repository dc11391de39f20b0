use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="gallery-loading" aria-busy="true">
            <svg viewBox="0 0 32 32" class="gallery-loading__spinner" aria-hidden="true">
                // Track and the moving arc
                <circle cx="16" cy="16" r="12" fill="none" stroke="#CBACF9" stroke-width="4" stroke-opacity="0.25"/>
                <path d="M16 4 A12 12 0 0 1 28 16" fill="none" stroke="#CBACF9" stroke-width="4" stroke-linecap="round"/>
            </svg>
            <p class="gallery-loading__text">"Loading projects..."</p>
        </div>
    }
}
