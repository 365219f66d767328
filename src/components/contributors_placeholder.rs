use leptos::prelude::*;

#[component]
pub fn ContributorsPlaceholder() -> impl IntoView {
    view! {
        <div class="contributors-placeholder">
            <svg viewBox="0 0 240 80" class="placeholder-art" aria-hidden="true">
                // Three avatar silhouettes
                <circle cx="40" cy="30" r="18" fill="currentColor" fill-opacity="0.15"/>
                <circle cx="120" cy="30" r="18" fill="currentColor" fill-opacity="0.15"/>
                <circle cx="200" cy="30" r="18" fill="currentColor" fill-opacity="0.15"/>
                <rect x="20" y="58" width="40" height="6" rx="3" fill="currentColor" fill-opacity="0.1"/>
                <rect x="100" y="58" width="40" height="6" rx="3" fill="currentColor" fill-opacity="0.1"/>
                <rect x="180" y="58" width="40" height="6" rx="3" fill="currentColor" fill-opacity="0.1"/>
            </svg>
            <p class="placeholder-text">"Loading contributors..."</p>
        </div>
    }
}
