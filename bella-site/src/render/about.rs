//! About page

use maud::{Markup, html};

use super::layout::{Page, button_link, document};
use crate::content::Catalog;

pub fn render(catalog: &Catalog) -> Markup {
    let about = catalog.about();
    let careers_href = format!("mailto:{}", about.careers_email);

    let body = html! {
        section.page-header {
            h1 { "About Us" }
            p {
                "Discover the passion, people, and principles that make "
                (catalog.restaurant().name)
                " a cherished part of our community."
            }
        }
        section.story {
            h2 { (about.story.title) }
            p { (about.story.content) }
            h3 { (about.mission.title) }
            p { (about.mission.content) }
        }
        section.values {
            h2 { "Our Values" }
            @for value in &about.values {
                div.value {
                    h3 { (value.title) }
                    p { (value.description) }
                }
            }
        }
        section.team {
            h2 { "Meet Our Team" }
            @for member in &about.team {
                div.team-member {
                    img src=(member.image) alt=(member.name);
                    h3 { (member.name) }
                    p.role { (member.role) }
                    p.bio { (member.bio) }
                }
            }
        }
        section.cta {
            h2 { "Join Our Journey" }
            p { "We're always looking for passionate individuals to join our team. If you share our values and love for great food, we'd love to hear from you." }
            (button_link(&careers_href, "View Career Opportunities", "secondary"))
        }
    };
    document(Page::About, catalog.restaurant(), body)
}
