//! Home page

use maud::{Markup, html};
use shared::models::Restaurant;

use super::layout::{Page, button_link, document};
use super::menu::dish_card;
use crate::content::Catalog;

/// (title, text) of the "why choose us" strip
const REASONS: [(&str, &str); 3] = [
    (
        "Premium Quality",
        "We source only the finest, freshest ingredients from local suppliers to ensure every dish meets our high standards.",
    ),
    (
        "Fast Service",
        "Our efficient kitchen and attentive staff ensure you receive your meal quickly without compromising on quality.",
    ),
    (
        "Great Location",
        "Located in the heart of San Francisco, we're easily accessible and surrounded by the city's vibrant energy.",
    ),
];

pub fn render(catalog: &Catalog) -> Markup {
    let restaurant = catalog.restaurant();
    let body = html! {
        (hero(restaurant))
        (featured(catalog))
        (reasons(restaurant))
        section.cta {
            h2 { "Ready for an Unforgettable Experience?" }
            p { "Join us for a meal that will create lasting memories. Book your table today!" }
            (button_link("/contact", "Make a Reservation", "secondary"))
            (button_link("/about", "Learn Our Story", "outline"))
        }
    };
    document(Page::Home, restaurant, body)
}

fn hero(restaurant: &Restaurant) -> Markup {
    html! {
        section.hero {
            h1 { (restaurant.name) }
            p.tagline { (restaurant.tagline) }
            p.description { (restaurant.description) }
            (button_link("/menu", "View Our Menu", "primary"))
            (button_link("/contact", "Make a Reservation", "outline"))
        }
    }
}

fn featured(catalog: &Catalog) -> Markup {
    html! {
        section.featured {
            h2 { "Featured Dishes" }
            p { "Discover our most beloved creations, crafted with passion and the finest ingredients" }
            div.dishes {
                @for item in catalog.featured_items() {
                    (dish_card(item, false))
                }
            }
            (button_link("/menu", "View Full Menu", "outline"))
        }
    }
}

fn reasons(restaurant: &Restaurant) -> Markup {
    let short_name = restaurant
        .name
        .strip_suffix(" Cafe")
        .unwrap_or(&restaurant.name);

    html! {
        section.reasons {
            h2 { "Why Choose " (short_name) "?" }
            p { "We're committed to providing an exceptional dining experience" }
            @for (title, text) in REASONS {
                div.reason {
                    h3 { (title) }
                    p { (text) }
                }
            }
        }
    }
}
