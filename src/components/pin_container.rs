use leptos::prelude::*;

/// Card frame that links to `href` and shows `title` on a pin label above it.
#[component]
pub fn PinContainer(title: String, href: String, children: Children) -> impl IntoView {
    view! {
        <a class="pin" href=href target="_blank" rel="noopener noreferrer">
            <div class="pin__label">
                <span class="pin__title">{title}</span>
            </div>
            <div class="pin__card">{children()}</div>
        </a>
    }
}
