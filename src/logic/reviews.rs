//! Product reviews: the demo review set, summary statistics, and the
//! star/topic filter with pagination.

use std::collections::BTreeSet;

use crate::logic::paginate::{REVIEWS_PER_PAGE, page_count, page_slice};

/// What a review is mainly about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReviewTopic {
    /// Build and material quality.
    ProductQuality,
    /// Seller responsiveness.
    SellerServices,
    /// Value for money.
    ProductPrice,
    /// Delivery experience.
    Shipment,
    /// Whether the item matched its listing.
    MatchWithDescription,
}

impl ReviewTopic {
    /// All topics in selector order.
    pub const ALL: [Self; 5] = [
        Self::ProductQuality,
        Self::SellerServices,
        Self::ProductPrice,
        Self::Shipment,
        Self::MatchWithDescription,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductQuality => "Product Quality",
            Self::SellerServices => "Seller Services",
            Self::ProductPrice => "Product Price",
            Self::Shipment => "Shipment",
            Self::MatchWithDescription => "Match with Description",
        }
    }

    /// What: Parse a topic from its label or a short alias.
    ///
    /// Inputs: `s` (case-insensitive; spaces, `-` and `_` are ignored)
    ///
    /// Output: Matching topic, or `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "productquality" | "quality" => Some(Self::ProductQuality),
            "sellerservices" | "seller" | "service" => Some(Self::SellerServices),
            "productprice" | "price" => Some(Self::ProductPrice),
            "shipment" | "shipping" => Some(Self::Shipment),
            "matchwithdescription" | "description" | "match" => Some(Self::MatchWithDescription),
            _ => None,
        }
    }
}

/// A single customer review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Review identifier.
    pub id: u32,
    /// Reviewer display name.
    pub author: &'static str,
    /// Whole-star rating, 1..=5.
    pub rating: u8,
    /// Date as displayed.
    pub date: &'static str,
    /// Headline.
    pub title: &'static str,
    /// Body text.
    pub content: &'static str,
    /// Main topic.
    pub topic: ReviewTopic,
    /// "Helpful" votes.
    pub helpful: u32,
    /// Verified purchase.
    pub verified: bool,
    /// Avatar image URI.
    pub avatar: &'static str,
}

/// Shorthand for building the static review table.
#[allow(clippy::too_many_arguments)]
const fn review(
    id: u32,
    author: &'static str,
    rating: u8,
    date: &'static str,
    title: &'static str,
    content: &'static str,
    topic: ReviewTopic,
    helpful: u32,
    verified: bool,
    avatar: &'static str,
) -> Review {
    Review {
        id,
        author,
        rating,
        date,
        title,
        content,
        topic,
        helpful,
        verified,
        avatar,
    }
}

/// Demo reviews shown for every product.
pub static REVIEWS: [Review; 15] = [
    review(
        1,
        "Darrell Steward",
        5,
        "July 2, 2020 03:29 PM",
        "Excellent quality and fast delivery!",
        "This is amazing product I have. The quality is outstanding and it arrived much faster than expected. Highly recommend!",
        ReviewTopic::ProductQuality,
        128,
        true,
        "https://randomuser.me/api/portraits/men/32.jpg",
    ),
    review(
        2,
        "Darlene Robertson",
        5,
        "July 2, 2020 01:04 PM",
        "Perfect for my needs",
        "This is amazing product I have. Exactly what I was looking for. The design is modern and functional.",
        ReviewTopic::MatchWithDescription,
        82,
        true,
        "https://randomuser.me/api/portraits/women/44.jpg",
    ),
    review(
        3,
        "Kathryn Murphy",
        4,
        "June 26, 2020 10:03 PM",
        "Good value for money",
        "This is amazing product I have. The product meets my expectations. Good quality for the price point.",
        ReviewTopic::ProductPrice,
        9,
        false,
        "https://randomuser.me/api/portraits/women/68.jpg",
    ),
    review(
        4,
        "Ronald Richards",
        5,
        "July 7, 2020 10:14 AM",
        "Best purchase this year!",
        "This is amazing product I have. Absolutely love this product! The design is beautiful and it works perfectly.",
        ReviewTopic::ProductQuality,
        124,
        true,
        "https://randomuser.me/api/portraits/men/65.jpg",
    ),
    review(
        5,
        "Sarah Johnson",
        5,
        "2024-01-15",
        "Outstanding service and quality!",
        "I'm really impressed with this product. The quality is outstanding and the seller service was excellent. Highly recommend!",
        ReviewTopic::SellerServices,
        156,
        true,
        "https://randomuser.me/api/portraits/women/32.jpg",
    ),
    review(
        6,
        "Mike Chen",
        4,
        "2024-01-10",
        "Great shipping experience",
        "The product meets my expectations. Good quality and the shipment was very fast and well-packaged.",
        ReviewTopic::Shipment,
        67,
        true,
        "https://randomuser.me/api/portraits/men/44.jpg",
    ),
    review(
        7,
        "Emily Rodriguez",
        5,
        "2024-01-08",
        "Perfect match with description",
        "Exactly what I was looking for. The product matches the description perfectly. Very satisfied with my purchase.",
        ReviewTopic::MatchWithDescription,
        89,
        false,
        "https://randomuser.me/api/portraits/women/76.jpg",
    ),
    review(
        8,
        "David Kim",
        3,
        "2024-01-05",
        "Decent but could be better",
        "The product works fine but I expected more features for the price. It's okay but not outstanding.",
        ReviewTopic::ProductPrice,
        23,
        true,
        "https://randomuser.me/api/portraits/men/88.jpg",
    ),
    review(
        9,
        "Lisa Thompson",
        5,
        "2024-01-03",
        "Amazing product quality!",
        "This exceeded all my expectations. The quality is premium and the customer service was excellent.",
        ReviewTopic::ProductQuality,
        234,
        true,
        "https://randomuser.me/api/portraits/women/90.jpg",
    ),
    review(
        10,
        "James Wilson",
        4,
        "2023-12-28",
        "Solid purchase with good service",
        "Good product overall. The build quality is solid and the seller service was very helpful.",
        ReviewTopic::SellerServices,
        78,
        false,
        "https://randomuser.me/api/portraits/men/12.jpg",
    ),
    review(
        11,
        "Maria Garcia",
        2,
        "2023-12-25",
        "Disappointed with shipment",
        "The product arrived damaged and the shipping was delayed. Customer service was helpful though.",
        ReviewTopic::Shipment,
        45,
        true,
        "https://randomuser.me/api/portraits/women/23.jpg",
    ),
    review(
        12,
        "Robert Brown",
        5,
        "2023-12-20",
        "Best purchase this year!",
        "Absolutely love this product! The design is beautiful and it works perfectly. Worth every penny.",
        ReviewTopic::ProductQuality,
        189,
        true,
        "https://randomuser.me/api/portraits/men/34.jpg",
    ),
    review(
        13,
        "Jennifer Lee",
        4,
        "2023-12-18",
        "Great value for money",
        "For the price, this is a great deal. Good quality and functionality. Would recommend to friends.",
        ReviewTopic::ProductPrice,
        92,
        false,
        "https://randomuser.me/api/portraits/women/45.jpg",
    ),
    review(
        14,
        "Thomas Anderson",
        3,
        "2023-12-15",
        "Average product quality",
        "It's okay, nothing special. Does the job but there are better options out there for similar price.",
        ReviewTopic::ProductQuality,
        34,
        true,
        "https://randomuser.me/api/portraits/men/56.jpg",
    ),
    review(
        15,
        "Amanda White",
        5,
        "2023-12-12",
        "Exceeded expectations!",
        "I was skeptical at first but this product is amazing! The quality is top-notch and it's very durable.",
        ReviewTopic::ProductQuality,
        167,
        true,
        "https://randomuser.me/api/portraits/women/67.jpg",
    ),
];

/// Summary block shown above the review list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    /// Number of reviews.
    pub total: usize,
    /// Mean star rating; `0.0` for no reviews.
    pub average: f64,
    /// `(stars, count)` for stars 5 down to 1.
    pub distribution: [(u8, usize); 5],
}

/// What: Summarize a review set.
///
/// Inputs:
/// - `reviews`: Reviews to summarize
///
/// Output: Totals, average and per-star distribution.
#[must_use]
pub fn review_stats(reviews: &[Review]) -> ReviewStats {
    let total = reviews.len();
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let average = if total == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            f64::from(sum) / total as f64
        }
    };
    let count_of = |stars: u8| reviews.iter().filter(|r| r.rating == stars).count();
    ReviewStats {
        total,
        average,
        distribution: [5, 4, 3, 2, 1].map(|s| (s, count_of(s))),
    }
}

/// Star/topic selection plus page cursor for the review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFilter {
    /// Selected star ratings; empty = any.
    pub ratings: BTreeSet<u8>,
    /// Selected topics; empty = any.
    pub topics: BTreeSet<ReviewTopic>,
    /// 1-based page.
    pub page: usize,
}

impl Default for ReviewFilter {
    fn default() -> Self {
        Self {
            ratings: BTreeSet::new(),
            topics: BTreeSet::new(),
            page: 1,
        }
    }
}

impl ReviewFilter {
    /// Toggle a star rating in or out of the selection; resets to page 1.
    pub fn toggle_rating(&mut self, stars: u8) {
        if !self.ratings.remove(&stars) {
            self.ratings.insert(stars);
        }
        self.page = 1;
    }

    /// Toggle a topic in or out of the selection; resets to page 1.
    pub fn toggle_topic(&mut self, topic: ReviewTopic) {
        if !self.topics.remove(&topic) {
            self.topics.insert(topic);
        }
        self.page = 1;
    }

    /// Drop every selection and return to page 1.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `r` passes both selections.
    #[must_use]
    pub fn matches(&self, r: &Review) -> bool {
        (self.ratings.is_empty() || self.ratings.contains(&r.rating))
            && (self.topics.is_empty() || self.topics.contains(&r.topic))
    }
}

/// One page of filtered reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPage<'a> {
    /// Reviews on this page.
    pub items: Vec<&'a Review>,
    /// Reviews passing the filter.
    pub filtered_count: usize,
    /// Pages available.
    pub page_count: usize,
}

/// What: Filter and paginate reviews.
///
/// Inputs:
/// - `reviews`: Full review set
/// - `filter`: Selection and page
///
/// Output:
/// - [`ReviewPage`] of up to [`REVIEWS_PER_PAGE`] reviews in original order.
#[must_use]
pub fn review_page<'a>(reviews: &'a [Review], filter: &ReviewFilter) -> ReviewPage<'a> {
    let matched: Vec<&Review> = reviews.iter().filter(|r| filter.matches(r)).collect();
    ReviewPage {
        items: page_slice(&matched, filter.page, REVIEWS_PER_PAGE).to_vec(),
        filtered_count: matched.len(),
        page_count: page_count(matched.len(), REVIEWS_PER_PAGE),
    }
}
