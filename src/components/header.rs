use leptos::prelude::*;

use super::{AccentPicker, ThemeToggle};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__title">"Project Contributors"</h1>
            <ThemeToggle />
        </header>
        <div class="header__meta">
            <p class="header__tagline">
                "Celebrating the team behind this project. Each contributor has played a part in bringing it to life."
            </p>
            <AccentPicker />
        </div>
    }
}
