use askama::Template;
use chrono::NaiveDate;
use plumbsite_core::Review;

use super::RenderContext;

/// Reviews at or above this count are shown one at a time with controls.
const CAROUSEL_THRESHOLD: usize = 3;
/// Reviews at or above this count get a "Read All Reviews" button.
const READ_ALL_THRESHOLD: usize = 5;

/// Position within the review carousel.
///
/// Carried between requests in the `review` query parameter; moving past
/// either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewCarousel {
    index: usize,
    len: usize,
}

impl ReviewCarousel {
    /// Out-of-range requests wrap into range.
    #[must_use]
    pub fn new(len: usize, requested: Option<usize>) -> Self {
        let index = match (len, requested) {
            (0, _) | (_, None) => 0,
            (len, Some(i)) => i % len,
        };
        Self { index, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: self.index.checked_sub(1).unwrap_or(self.len - 1),
            ..self
        }
    }
}

struct ReviewView<'a> {
    text: &'a str,
    reviewer_name: &'a str,
    date_label: String,
}

struct CarouselControls {
    previous_href: String,
    next_href: String,
    position: String,
}

#[derive(Template)]
#[template(path = "sections/reviews.html")]
struct ReviewsTemplate<'a> {
    visible: Vec<ReviewView<'a>>,
    controls: Option<CarouselControls>,
    show_read_all: bool,
}

/// Renders nothing when the business has no reviews.
pub fn render(ctx: &RenderContext<'_>, requested_index: Option<usize>) -> askama::Result<String> {
    let reviews = ctx.data.reviews();
    if reviews.is_empty() {
        return Ok(String::new());
    }

    let carousel = ReviewCarousel::new(reviews.len(), requested_index);
    let use_carousel = reviews.len() >= CAROUSEL_THRESHOLD;

    let shown = if use_carousel { 1 } else { 2 };
    let visible = reviews
        .iter()
        .skip(carousel.index())
        .take(shown)
        .map(review_view)
        .collect();

    let controls = use_carousel.then(|| {
        let link = |c: ReviewCarousel| {
            let index = c.index().to_string();
            ctx.site.link_with(ctx.current_path, &[("review", index.as_str())])
        };
        CarouselControls {
            previous_href: format!("{}#reviews", link(carousel.previous())),
            next_href: format!("{}#reviews", link(carousel.next())),
            position: format!("{} / {}", carousel.index() + 1, reviews.len()),
        }
    });

    ReviewsTemplate {
        visible,
        controls,
        show_read_all: reviews.len() >= READ_ALL_THRESHOLD,
    }
    .render()
}

fn review_view(review: &Review) -> ReviewView<'_> {
    ReviewView {
        text: &review.text,
        reviewer_name: &review.reviewer_name,
        date_label: date_label(&review.date),
    }
}

/// `"2024-02-15"` (optionally followed by a time) reads as `"February 2024"`;
/// anything else is shown as given.
fn date_label(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_or_else(|_| raw.to_owned(), |d| d.format("%B %Y").to_string())
}
