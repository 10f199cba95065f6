//! Contact page: contact details and the reservation form

use chrono::NaiveDate;
use maud::{Markup, html};
use shared::models::{
    ContactInfo, ReservationField, ReservationRequest, SubmissionStatus, guest_options,
    time_slots,
};

use super::capitalize;
use super::layout::{Page, document};
use crate::content::Catalog;
use crate::reservation::ReservationForm;

/// Render the contact page for one form state
///
/// `notice` is shown above the form when a submit was refused before it
/// started (a required field left blank). `today` is the earliest bookable date.
pub fn render(
    catalog: &Catalog,
    form: &ReservationForm,
    notice: Option<&str>,
    today: NaiveDate,
) -> Markup {
    let body = html! {
        section.page-header {
            h1 { "Contact Us" }
            p { "We'd love to hear from you. Get in touch to make a reservation, ask questions, or just say hello." }
        }
        section.contact {
            (details(catalog.contact()))
            (reservation(form, notice, today))
        }
    };
    document(Page::Contact, catalog.restaurant(), body)
}

fn details(contact: &ContactInfo) -> Markup {
    html! {
        div.contact-details {
            h2 { "Get in Touch" }
            div.contact-item {
                h3 { "Phone" }
                a href=(contact.phone_href()) { (contact.phone) }
            }
            div.contact-item {
                h3 { "Email" }
                a href=(contact.email_href()) { (contact.email) }
            }
            div.contact-item {
                h3 { "Address" }
                address {
                    (contact.address.street)
                    br;
                    (contact.address.locality())
                }
            }
            div.hours {
                h3 { "Opening Hours" }
                dl {
                    @for (day, hours) in contact.hours.iter() {
                        dt { (capitalize(day)) }
                        dd { (hours) }
                    }
                }
            }
            @if !contact.social.is_empty() {
                div.social {
                    h3 { "Follow Us" }
                    @for (network, url) in contact.social.iter() {
                        a href=(url) target="_blank" rel="noopener noreferrer" { (capitalize(network)) }
                    }
                }
            }
        }
    }
}

/// Disables the submit control and shows the busy label while the POST is in flight
fn submit_guard() -> String {
    format!(
        "var b=this.querySelector('button[type=submit]');if(b.disabled){{return false;}}b.disabled=true;b.textContent='{}';",
        SubmissionStatus::Submitting.submit_label()
    )
}

fn reservation(form: &ReservationForm, notice: Option<&str>, today: NaiveDate) -> Markup {
    let status = form.status();
    let fields = form.fields();
    let min_date = today.format("%Y-%m-%d").to_string();

    html! {
        div.reservation {
            h2 { "Make a Reservation" }
            p { "Book your table and we'll ensure everything is ready for your visit" }

            @if let Some(banner) = status.banner() {
                @if status == SubmissionStatus::Success {
                    div class="banner banner-success" role="status" { (banner) }
                } @else {
                    div class="banner banner-error" role="alert" { (banner) }
                }
            }
            @if let Some(notice) = notice {
                div class="notice" role="alert" { (notice) }
            }

            form method="post" action="/contact" class="reservation-form" onsubmit=(submit_guard()) {
                (input(fields, ReservationField::Name, "Full Name", "text", None))
                (input(fields, ReservationField::Email, "Email", "email", None))
                (input(fields, ReservationField::Phone, "Phone Number", "tel", None))
                (input(fields, ReservationField::Date, "Date", "date", Some(min_date.as_str())))
                (time_select(fields))
                (guests_select(fields))
                div.field {
                    (label(ReservationField::Message, "Special Requests"))
                    textarea id="message" name="message" rows="4"
                        placeholder="Any dietary restrictions, special occasions, or requests..." {
                        (fields.message)
                    }
                }
                button type="submit" class="button button-primary" disabled[status.is_busy()] {
                    (status.submit_label())
                }
            }
        }
    }
}

/// Label text, with a `*` marker on required fields
fn label(field: ReservationField, text: &str) -> Markup {
    let marked = field.is_required() || field == ReservationField::Guests;
    html! {
        label for=(field.as_str()) {
            (text)
            @if marked { " *" }
        }
    }
}

fn input(
    fields: &ReservationRequest,
    field: ReservationField,
    text: &str,
    kind: &str,
    min: Option<&str>,
) -> Markup {
    let name = field.as_str();
    html! {
        div.field {
            (label(field, text))
            input type=(kind) id=(name) name=(name) value=(fields.get(field))
                required[field.is_required()] min=[min];
        }
    }
}

fn time_select(fields: &ReservationRequest) -> Markup {
    html! {
        div.field {
            (label(ReservationField::Time, "Time"))
            select id="time" name="time" required {
                (option("", "Select time", fields.time.is_empty()))
                @for slot in time_slots() {
                    (option(&slot.value, &slot.label, slot.value == fields.time))
                }
            }
        }
    }
}

fn guests_select(fields: &ReservationRequest) -> Markup {
    html! {
        div.field {
            (label(ReservationField::Guests, "Guests"))
            select id="guests" name="guests" required {
                @for guest in guest_options() {
                    @let value = guest.value.to_string();
                    (option(&value, &guest.label, fields.guests.trim() == value))
                }
            }
        }
    }
}

fn option(value: &str, label: &str, selected: bool) -> Markup {
    html! {
        option value=(value) selected[selected] { (label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AppError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    }

    fn filled() -> ReservationForm {
        let mut form = ReservationForm::new();
        form.edit(ReservationField::Name, "Jo <Admin>");
        form.edit(ReservationField::Email, "jo@x.com");
        form.edit(ReservationField::Date, "2025-05-01");
        form.edit(ReservationField::Time, "18:00");
        form
    }

    fn page(form: &ReservationForm, notice: Option<&str>) -> String {
        let catalog = Catalog::bundled().unwrap();
        render(&catalog, form, notice, today()).into_string()
    }

    #[test]
    fn test_contact_details() {
        let html = page(&ReservationForm::new(), None);

        assert!(html.contains("<a href=\"tel:(415) 555-0123\">(415) 555-0123</a>"));
        assert!(html.contains("<a href=\"mailto:hello@bellavistacafe.com\">"));
        assert!(html.contains("123 Main Street<br>San Francisco, CA 94102"));
        assert!(html.contains("<dt>Monday</dt><dd>7:00 AM - 9:00 PM</dd>"));
        let monday = html.find("<dt>Monday</dt>").unwrap();
        let sunday = html.find("<dt>Sunday</dt>").unwrap();
        assert!(monday < sunday);
        assert!(html.contains("href=\"https://instagram.com/bellavistacafe\""));
        assert!(html.contains(">Instagram</a>"));
    }

    #[test]
    fn test_fresh_form_controls() {
        let html = page(&ReservationForm::new(), None);

        assert!(!html.contains("class=\"banner"));
        assert!(html.contains("<label for=\"name\">Full Name *</label>"));
        assert!(html.contains("<label for=\"guests\">Guests *</label>"));
        assert!(html.contains("<label for=\"phone\">Phone Number</label>"));
        assert!(html.contains("name=\"date\" value=\"\" required min=\"2025-04-20\">"));
        assert!(html.contains("name=\"phone\" value=\"\">"));
        assert!(html.contains("<option value=\"\" selected>Select time</option>"));
        assert!(html.contains("<option value=\"13:00\">1:00 PM</option>"));
        assert!(html.contains("<option value=\"1\">1 Guest</option>"));
        assert!(html.contains("<option value=\"2\" selected>2 Guests</option>"));
        assert_eq!(html.matches("<option value=").count(), 1 + 14 + 8);
        assert!(html.contains(
            "<button type=\"submit\" class=\"button button-primary\">Submit Reservation</button>"
        ));
    }

    #[test]
    fn test_form_disables_submit_while_posting() {
        let html = page(&ReservationForm::new(), None);
        let form_tag = html
            .split("<form ")
            .nth(1)
            .and_then(|rest| rest.split('>').next())
            .unwrap();
        assert!(form_tag.contains("onsubmit=\""));
        assert!(form_tag.contains("b.disabled=true"));
        assert!(form_tag.contains("Submitting..."));
    }

    #[test]
    fn test_submitting_disables_button() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let html = page(&form, None);

        assert!(html.contains("disabled>Submitting...</button>"));
        assert!(html.contains("<option value=\"18:00\" selected>6:00 PM</option>"));
    }

    #[test]
    fn test_banners() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.resolve(Ok(()));
        let html = page(&form, None);
        assert!(html.contains("class=\"banner banner-success\""));
        assert!(html.contains("Thank you! Your reservation request has been submitted."));
        assert!(html.contains("name=\"name\" value=\"\""));

        let mut form = filled();
        form.begin_submit().unwrap();
        form.resolve(Err(AppError::submission_failed()));
        let html = page(&form, None);
        assert!(html.contains("class=\"banner banner-error\""));
        assert!(html.contains("Please try again or call us directly."));
        assert!(html.contains("value=\"Jo &lt;Admin&gt;\""));
    }

    #[test]
    fn test_notice() {
        let html = page(&ReservationForm::new(), Some("Please fill in: name"));
        assert!(html.contains("<div class=\"notice\" role=\"alert\">Please fill in: name</div>"));
    }
}
