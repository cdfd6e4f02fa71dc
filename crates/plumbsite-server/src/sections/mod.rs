//! Presentational page sections.
//!
//! Each section renders markup from a [`RenderContext`] and nothing else;
//! none of them mutate the business data.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod map;
pub mod reviews;
pub mod services;

use chrono::{Datelike, Local, Weekday};
use plumbsite_core::{BusinessData, SiteContext};

/// Wall-clock inputs to rendering, captured once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub today: Weekday,
    pub year: i32,
}

impl Clock {
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            today: now.weekday(),
            year: now.year(),
        }
    }
}

/// Everything a section may read.
pub struct RenderContext<'a> {
    pub data: &'a BusinessData,
    pub site: &'a SiteContext,
    /// Route path of the page being rendered, e.g. `"/residential"`.
    pub current_path: &'a str,
    pub clock: Clock,
    pub maps_api_key: Option<&'a str>,
}

/// A phone number with its `tel:` link.
pub struct PhoneLink {
    pub label: String,
    pub href: String,
}

impl PhoneLink {
    #[must_use]
    pub fn from_phone(phone: &str) -> Self {
        let dialable: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        Self {
            label: phone.to_owned(),
            href: format!("tel:{dialable}"),
        }
    }
}

/// A navigation entry.
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl RenderContext<'_> {
    fn phone_link(&self) -> Option<PhoneLink> {
        self.data
            .basic_info
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PhoneLink::from_phone)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use plumbsite_core::{sample_business_data, BusinessData, SiteContext};

    use super::{Clock, RenderContext};

    pub fn clock() -> Clock {
        Clock {
            today: chrono::Weekday::Mon,
            year: 2025,
        }
    }

    pub fn context<'a>(data: &'a BusinessData, site: &'a SiteContext) -> RenderContext<'a> {
        RenderContext {
            data,
            site,
            current_path: "/",
            clock: clock(),
            maps_api_key: None,
        }
    }

    pub fn sample() -> BusinessData {
        sample_business_data()
    }
}
