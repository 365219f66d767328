use leptos::prelude::*;

use crate::api::get_repositories;
use crate::hover::{preview, HoverGate};
use crate::model::{Contributor, RepositorySummary};

#[component]
pub fn ContributorCard(contributor: Contributor) -> impl IntoView {
    let (repos, set_repos) = signal(Vec::<RepositorySummary>::new());
    let gate = StoredValue::new(HoverGate::default());

    let profile_url = contributor.profile_url();
    let handle = contributor.github_username.clone();

    let on_enter = move |_| {
        let Some(token) = gate.try_update_value(HoverGate::enter) else {
            return;
        };
        let handle = handle.clone();

        leptos::task::spawn_local(async move {
            let fetched = get_repositories(handle).await.unwrap_or_else(|e| {
                leptos::logging::error!("failed to fetch repositories: {e}");
                Vec::new()
            });

            // Only the hover that issued the request may show its result
            if gate.try_with_value(|g| g.accepts(token)).unwrap_or(false) {
                set_repos.try_set(fetched);
            }
        });
    };

    let on_leave = move |_| {
        gate.update_value(HoverGate::leave);
        set_repos.set(Vec::new());
    };

    let repo_list = move || {
        repos.with(|list| {
            let (shown, more) = preview(list);
            (!shown.is_empty()).then(|| {
                view! {
                    <div class="contributor-repos">
                        <h4>"Repositories"</h4>
                        <div class="contributor-repos__list">
                            {shown
                                .iter()
                                .map(|repo| {
                                    view! {
                                        <a href=repo.html_url.clone() target="_blank" rel="noopener noreferrer">
                                            {repo.name.clone()}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            {(more > 0).then(|| view! {
                                <span class="contributor-repos__more">"+" {more} " more"</span>
                            })}
                        </div>
                    </div>
                }
            })
        })
    };

    view! {
        <li class="contributor-card">
            <a
                class="contributor-card__github"
                href=profile_url
                target="_blank"
                rel="noopener noreferrer"
                title="GitHub profile"
            >
                <img src="/icons/github.svg" alt="GitHub" />
            </a>
            <img
                class="contributor-card__avatar"
                src=contributor.avatar_url
                alt=contributor.name.clone()
                on:mouseenter=on_enter
                on:mouseleave=on_leave
            />
            <h3 class="contributor-card__name">{contributor.name}</h3>
            <p class="contributor-card__role">{contributor.role}</p>
            <span class="contributor-card__badge">
                {contributor.contributions} " contributions"
            </span>
            {repo_list}
        </li>
    }
}
