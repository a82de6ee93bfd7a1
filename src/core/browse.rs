use crate::db::pool::DbPool;
use crate::db::queries::load_listings;
use crate::errors::AppResult;
use crate::models::listing::Listing;
use crate::models::listing_status::ListingStatus;
use crate::models::session::Session;

/// Case-insensitive substring match on the category. An empty query
/// matches everything.
pub fn matches_category(category: &str, query: &str) -> bool {
    category.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the listings whose category matches `query`, in their original
/// order.
pub fn filter_by_category<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| matches_category(&l.category, query))
        .collect()
}

/// Which listings to load before the category filter runs.
#[derive(Debug, Clone, Default)]
pub struct BrowseFilter<'a> {
    pub search: Option<&'a str>,
    pub owner: Option<&'a Session>,
    pub status: Option<ListingStatus>,
}

pub struct BrowseLogic;

impl BrowseLogic {
    pub fn list(pool: &DbPool, filter: &BrowseFilter) -> AppResult<Vec<Listing>> {
        let owner = filter.owner.map(|s| s.user.as_str());
        let all = load_listings(&pool.conn, owner, filter.status)?;

        Ok(match filter.search {
            Some(q) => filter_by_category(&all, q).into_iter().cloned().collect(),
            None => all,
        })
    }
}
