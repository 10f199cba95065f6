//! Server-side HTML pages
//!
//! Pages are `maud` templates wrapped in the shared [`layout`]. Interpolated
//! text and attribute values are escaped by `maud`.

pub mod about;
pub mod contact;
pub mod home;
pub mod layout;
pub mod menu;

use chrono::NaiveDate;

pub use layout::Page;

/// Earliest bookable date (UTC calendar day)
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Upper-case the first character
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("vegan"), "Vegan");
        assert_eq!(capitalize("Gluten-Free"), "Gluten-Free");
        assert_eq!(capitalize("monday"), "Monday");
        assert_eq!(capitalize(""), "");
    }
}
