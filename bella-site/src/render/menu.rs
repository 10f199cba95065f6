//! Menu page

use maud::{Markup, html};
use shared::models::{ContactInfo, MenuCategory, MenuItem, Restaurant};

use super::capitalize;
use super::layout::{Page, button_link, document};
use crate::content::Catalog;

pub fn render(catalog: &Catalog) -> Markup {
    let body = html! {
        section.page-header {
            h1 { "Our Menu" }
            p { "Discover our carefully curated selection of dishes, each prepared with the finest ingredients and a passion for culinary excellence." }
        }
        section.menu-categories {
            @for category in catalog.categories() {
                (render_category(category))
            }
        }
        (call_to_order(catalog.contact(), catalog.restaurant()))
    };
    document(Page::Menu, catalog.restaurant(), body)
}

fn render_category(category: &MenuCategory) -> Markup {
    html! {
        div class="menu-category" id=(category.id) {
            h2 { (category.name) }
            p { (category.description) }
            div.menu-items {
                @for item in &category.items {
                    (dish_card(item, true))
                }
            }
        }
    }
}

/// One dish: image, popular badge, name, price, description, dietary tags
///
/// The menu page capitalizes tags; the home page prints them as written.
pub(crate) fn dish_card(item: &MenuItem, capitalize_tags: bool) -> Markup {
    html! {
        article class="dish" id=(item.id) {
            img src=(item.image) alt=(item.name);
            @if item.popular {
                span class="badge badge-popular" { "Popular" }
            }
            h3.dish-name { (item.name) }
            span.dish-price { (item.display_price()) }
            p.dish-description { (item.description) }
            @if !item.dietary.is_empty() {
                div.dietary {
                    @for tag in &item.dietary {
                        span class="badge badge-dietary" {
                            @if capitalize_tags { (capitalize(tag)) } @else { (tag) }
                        }
                    }
                }
            }
        }
    }
}

fn call_to_order(contact: &ContactInfo, restaurant: &Restaurant) -> Markup {
    html! {
        section.cta {
            h2 { "Ready to Experience These Flavors?" }
            p { "Visit us today or make a reservation to secure your table" }
            a href=(contact.phone_href()) class="button button-primary" title={ "Call " (restaurant.name) } {
                "Call to Order"
            }
            (button_link("/contact", "Make a Reservation", "outline"))
        }
    }
}
