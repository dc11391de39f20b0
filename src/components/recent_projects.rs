use leptos::prelude::*;
use std::fmt::Display;

use super::{ErrorMessage, LoadingSpinner, ProjectCard};
use crate::api::get_recent_projects;
use crate::models::Project;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recent projects.";

/// What the gallery shows, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryState {
    Loading,
    Failed,
    Empty,
    Populated(Vec<Project>),
}

impl GalleryState {
    /// `None` means the fetch has not settled yet.
    pub fn from_fetch<E: Display>(result: Option<Result<Vec<Project>, E>>) -> Self {
        match result {
            None => Self::Loading,
            Some(Err(e)) => {
                leptos::logging::error!("error fetching recent projects: {e}");
                Self::Failed
            }
            Some(Ok(projects)) if projects.is_empty() => Self::Empty,
            Some(Ok(projects)) => Self::Populated(projects),
        }
    }
}

/// Fetches the projects once on mount and renders the gallery.
///
/// The resource belongs to this component's owner, so a response that
/// lands after unmount is dropped with it.
#[component]
pub fn RecentProjects() -> impl IntoView {
    let projects = Resource::new(|| (), |()| get_recent_projects());

    view! {
        <Suspense fallback=|| view! { <ProjectGallery state=GalleryState::Loading /> }>
            {move || view! { <ProjectGallery state=GalleryState::from_fetch(projects.get()) /> }}
        </Suspense>
    }
}

#[component]
pub fn ProjectGallery(state: GalleryState) -> impl IntoView {
    match state {
        GalleryState::Loading => view! { <LoadingSpinner /> }.into_any(),
        GalleryState::Failed => view! { <ErrorMessage message=FETCH_FAILED_MESSAGE /> }.into_any(),
        GalleryState::Empty => view! { <ProjectsEmpty /> }.into_any(),
        GalleryState::Populated(projects) => view! {
            <section class="recent-projects">
                <h2 class="heading">
                    "A small selection of "
                    <span class="heading__accent">"recent projects"</span>
                </h2>
                <ul class="recent-projects__list">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        }
        .into_any(),
    }
}

#[component]
pub fn ProjectsEmpty() -> impl IntoView {
    view! {
        <div class="gallery-empty">
            <p>"No recent projects to display."</p>
        </div>
    }
}
