use leptos::prelude::*;

#[component]
pub fn ErrorMessage(message: &'static str) -> impl IntoView {
    view! {
        <div class="gallery-error" role="alert">
            <p>{message}</p>
        </div>
    }
}
