//! Shared page chrome: head, navigation and footer

use chrono::Datelike;
use maud::{DOCTYPE, Markup, html};
use shared::models::Restaurant;

/// Top-level pages, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Menu,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Self::Home, Self::Menu, Self::About, Self::Contact];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Document title
    pub fn title(&self, restaurant: &Restaurant) -> String {
        match self {
            Self::Home => format!("{} - {}", restaurant.name, restaurant.tagline),
            Self::Menu => format!("Menu - {}", restaurant.name),
            Self::About => format!("About Us - {}", restaurant.name),
            Self::Contact => format!("Contact Us - {}", restaurant.name),
        }
    }
}

/// Wrap a page body in the site layout
pub fn document(page: Page, restaurant: &Restaurant, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(restaurant.description);
                title { (page.title(restaurant)) }
            }
            body {
                (navigation(page, restaurant))
                main { (body) }
                (footer(restaurant))
            }
        }
    }
}

/// `<a class="button button-{variant}">`
pub(crate) fn button_link(href: &str, text: &str, variant: &str) -> Markup {
    html! {
        a href=(href) class=(format!("button button-{variant}")) { (text) }
    }
}

fn navigation(current: Page, restaurant: &Restaurant) -> Markup {
    html! {
        nav.navigation {
            a href="/" class="brand" { (restaurant.name) }
            ul {
                @for page in Page::ALL {
                    li {
                        @if page == current {
                            a href=(page.path()) aria-current="page" { (page.label()) }
                        } @else {
                            a href=(page.path()) { (page.label()) }
                        }
                    }
                }
            }
        }
    }
}

fn footer(restaurant: &Restaurant) -> Markup {
    let year = chrono::Local::now().year();
    html! {
        footer {
            p { "© " (year) " " (restaurant.name) ". All rights reserved." }
        }
    }
}
