use leptos::prelude::*;

use super::PinContainer;
use crate::models::Project;

const PLACEHOLDER_SRC: &str = "/bg.png";

/// Leftward shift in pixels for the icon at `index`, so each badge tucks
/// a little further under its neighbour.
pub fn icon_offset(index: usize) -> usize {
    5 * index + 2
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        link,
        icons,
        cover,
        ..
    } = project;

    view! {
        <li class="project-pin">
            <PinContainer title=link.clone() href=link>
                <div class="project-pin__media">
                    <div class="project-pin__backdrop" style="background-color: #13162D">
                        <img src=PLACEHOLDER_SRC alt="bgimg" />
                    </div>
                    {cover.map(|image| view! {
                        <img class="project-pin__cover" src=image.url alt="cover" />
                    })}
                </div>

                <h3 class="project-pin__title">{title}</h3>
                <p class="project-pin__description">{description.unwrap_or_default()}</p>

                <div class="project-pin__footer">
                    <div class="project-pin__icons">
                        {icons
                            .into_iter()
                            .enumerate()
                            .map(|(index, icon)| {
                                let style = format!("transform: translateX(-{}px)", icon_offset(index));
                                view! {
                                    <div class="icon-badge" style=style>
                                        <img src=icon alt="icon" />
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="project-pin__cta">
                        <p>"Check Live Site"</p>
                        <LocationArrow />
                    </div>
                </div>
            </PinContainer>
        </li>
    }
}

#[component]
fn LocationArrow() -> impl IntoView {
    view! {
        <svg class="project-pin__arrow" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 448 512" fill="#CBACF9" aria-hidden="true">
            <path d="M429.6 92.1c4.9-11.9 2.1-25.6-7-34.7s-22.8-11.9-34.7-7l-352 144c-14.2 5.8-22.2 20.8-19.3 35.8s16.1 25.8 31.4 25.8H224v160c0 15.3 10.8 28.4 25.8 31.4s30-5.1 35.8-19.3l144-352z"/>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectImage;

    fn demo() -> Project {
        Project {
            id: 1,
            title: "Demo".to_string(),
            description: Some("A demo project".to_string()),
            img: Some(String::new()),
            link: "https://example.com".to_string(),
            icons: vec!["/icon1.svg".to_string()],
            cover: Some(ProjectImage {
                url: "/cover1.png".to_string(),
                project_id: 1,
            }),
            created_at: None,
        }
    }

    fn render(project: Project) -> String {
        Owner::new().with(|| view! { <ProjectCard project=project /> }.to_html())
    }

    #[test]
    fn offsets_grow_linearly() {
        let offsets: Vec<usize> = (0..4).map(icon_offset).collect();
        assert_eq!(offsets, vec![2, 7, 12, 17]);
    }

    #[test]
    fn renders_demo_project() {
        let html = render(demo());

        assert!(html.contains("Demo"));
        assert!(html.contains("A demo project"));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"src="/cover1.png""#));
        assert!(html.contains(r#"src="/icon1.svg""#));
        assert_eq!(html.matches(r#"class="icon-badge""#).count(), 1);
        assert!(html.contains("Check Live Site"));
    }

    #[test]
    fn link_doubles_as_pin_label() {
        let html = render(demo());
        assert_eq!(html.matches("https://example.com").count(), 2);
    }

    #[test]
    fn stacks_icons_with_offsets() {
        let mut project = demo();
        project.icons = vec!["/a.svg".to_string(), "/b.svg".to_string(), "/c.svg".to_string()];

        let html = render(project);

        assert_eq!(html.matches(r#"class="icon-badge""#).count(), 3);
        assert!(html.contains("translateX(-2px)"));
        assert!(html.contains("translateX(-7px)"));
        assert!(html.contains("translateX(-12px)"));
    }

    #[test]
    fn renders_without_icons() {
        let mut project = demo();
        project.icons.clear();

        let html = render(project);
        assert!(!html.contains("icon-badge"));
        assert!(html.contains("Check Live Site"));
    }

    #[test]
    fn falls_back_to_placeholder_without_cover() {
        let mut project = demo();
        project.cover = None;

        let html = render(project);
        assert!(html.contains(r#"src="/bg.png""#));
        assert!(!html.contains("project-pin__cover"));
    }

    #[test]
    fn renders_missing_description_as_empty() {
        let mut project = demo();
        project.description = None;

        let html = render(project);
        assert!(html.contains("project-pin__description"));
        assert!(!html.contains("A demo project"));
    }
}
