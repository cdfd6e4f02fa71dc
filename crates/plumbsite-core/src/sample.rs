use crate::business::{BasicInfo, BusinessData, Review, WorkingHours};

const WEEKDAY_HOURS: &str = "8:00 AM - 5:00 PM";

/// The fixed business rendered whenever no real document is available:
/// no `site_id` in development, a 404 for the document, or a development
/// fallback after a fetch or validation failure.
#[must_use]
pub fn sample_business_data() -> BusinessData {
    let working_hours: WorkingHours = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .into_iter()
        .map(|day| (day.to_string(), WEEKDAY_HOURS.to_string()))
        .collect();

    BusinessData {
        basic_info: BasicInfo {
            name: "Arkansas Professional Plumbing".to_string(),
            phone: Some("(501) 555-0123".to_string()),
            city: Some("Little Rock".to_string()),
            address: None,
            state: Some("AR".to_string()),
            zip_code: None,
            rating: Some(4.8),
            latitude: Some(34.7465),
            longitude: Some(-92.2896),
            working_hours: Some(working_hours),
            description: None,
            years_in_business: None,
        },
        five_star_reviews: Some(vec![
            Review {
                text: "Excellent service! Fixed our emergency leak quickly and professionally."
                    .to_string(),
                reviewer_name: "John D.".to_string(),
                date: "2024-02-15".to_string(),
                rating: None,
            },
            Review {
                text: "Very professional and knowledgeable team. Would highly recommend!"
                    .to_string(),
                reviewer_name: "Sarah M.".to_string(),
                date: "2024-02-10".to_string(),
                rating: None,
            },
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_a_name_and_usable_coordinates() {
        let data = sample_business_data();
        assert!(!data.basic_info.name.trim().is_empty());
        assert!(data.basic_info.coordinates().is_some());
        assert_eq!(data.reviews().len(), 2);
    }

    #[test]
    fn sample_hours_cover_weekdays_only() {
        let data = sample_business_data();
        let hours = data.basic_info.hours().expect("hours");
        assert_eq!(hours.len(), 5);
        assert_eq!(hours.get("Monday"), Some(WEEKDAY_HOURS));
        assert_eq!(hours.get("Saturday"), None);
    }
}
