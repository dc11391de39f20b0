mod error_message;
mod loading_spinner;
mod pin_container;
mod project_card;
mod recent_projects;

pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use pin_container::PinContainer;
pub use project_card::{icon_offset, ProjectCard};
pub use recent_projects::{
    GalleryState, ProjectGallery, ProjectsEmpty, RecentProjects, FETCH_FAILED_MESSAGE,
};
