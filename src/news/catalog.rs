//! Feed catalog: the supported categories and countries, and the mapping
//! from a (category, country) pair to the provider's RSS endpoint.

use serde::Serialize;
use url::Url;

/// Provider base used in production
pub const GOOGLE_NEWS_RSS: &str = "https://news.google.com/rss";

/// Name stamped on articles whose title carries no source suffix
pub const PROVIDER_NAME: &str = "Google News";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    World,
    Nation,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::General,
        Category::World,
        Category::Nation,
        Category::Business,
        Category::Technology,
        Category::Entertainment,
        Category::Sports,
        Category::Science,
        Category::Health,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::World => "world",
            Category::Nation => "nation",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Science => "science",
            Category::Health => "health",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::World => "World",
            Category::Nation => "National",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
            Category::Science => "Science",
            Category::Health => "Health",
        }
    }

    /// Path appended to the provider base; empty for the front page.
    pub fn path_segment(self) -> &'static str {
        match self {
            Category::General => "",
            Category::World => "/headlines/section/topic/WORLD",
            Category::Nation => "/headlines/section/topic/NATION",
            Category::Business => "/headlines/section/topic/BUSINESS",
            Category::Technology => "/headlines/section/topic/TECHNOLOGY",
            Category::Entertainment => "/headlines/section/topic/ENTERTAINMENT",
            Category::Sports => "/headlines/section/topic/SPORTS",
            Category::Science => "/headlines/section/topic/SCIENCE",
            Category::Health => "/headlines/section/topic/HEALTH",
        }
    }

    /// Unknown ids resolve to `General`.
    pub fn resolve(id: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .unwrap_or(Category::General)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    UnitedStates,
    UnitedKingdom,
    Australia,
    Canada,
    India,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Australia,
        Country::Canada,
        Country::India,
    ];

    /// Identifier accepted in requests
    pub fn id(self) -> &'static str {
        match self {
            Country::UnitedStates => "US",
            Country::UnitedKingdom => "UK",
            Country::Australia => "AU",
            Country::Canada => "CA",
            Country::India => "IN",
        }
    }

    /// Region code the provider expects in `hl`, `gl` and `ceid`
    pub fn region_code(self) -> &'static str {
        match self {
            Country::UnitedKingdom => "GB",
            other => other.id(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Australia => "Australia",
            Country::Canada => "Canada",
            Country::India => "India",
        }
    }

    /// Unknown ids resolve to `UnitedStates`.
    pub fn resolve(id: &str) -> Country {
        Country::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .unwrap_or(Country::UnitedStates)
    }
}

fn locale_query(country: Country) -> String {
    let code = country.region_code();
    format!("hl=en-{code}&gl={code}&ceid={code}:en")
}

/// Feed URL for a category and country under `base`. Total: unknown values
/// fall back to the front page and the US edition.
pub fn feed_url(base: &str, category: &str, country: &str) -> String {
    let category = Category::resolve(category);
    let country = Country::resolve(country);
    format!(
        "{}{}?{}",
        base.trim_end_matches('/'),
        category.path_segment(),
        locale_query(country)
    )
}

/// Search feed URL for a free-text query, US edition.
pub fn search_url(base: &str, query: &str) -> Result<Url, url::ParseError> {
    let code = Country::UnitedStates.region_code();
    let locale = format!("en-{code}");
    let ceid = format!("{code}:en");
    Url::parse_with_params(
        &format!("{}/search", base.trim_end_matches('/')),
        &[
            ("q", query),
            ("hl", locale.as_str()),
            ("gl", code),
            ("ceid", ceid.as_str()),
        ],
    )
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

pub fn categories() -> Vec<CatalogEntry> {
    Category::ALL
        .into_iter()
        .map(|c| CatalogEntry {
            id: c.id(),
            name: c.display_name(),
        })
        .collect()
}

pub fn countries() -> Vec<CatalogEntry> {
    Country::ALL
        .into_iter()
        .map(|c| CatalogEntry {
            id: c.id(),
            name: c.display_name(),
        })
        .collect()
}
