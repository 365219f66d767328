use leptos::prelude::*;

use super::ContributorCard;
use crate::model::Contributor;

#[component]
pub fn ContributorGrid(contributors: Vec<Contributor>) -> impl IntoView {
    view! {
        <ul class="contributor-grid">
            {contributors
                .into_iter()
                .map(|c| view! { <ContributorCard contributor=c /> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ContributorGridEmpty() -> impl IntoView {
    view! {
        <p class="contributor-empty">"No contributors yet"</p>
    }
}
