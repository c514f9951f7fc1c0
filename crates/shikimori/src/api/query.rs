//! Query parameters for the `/animes` listing endpoint.

/// Upper bound the API accepts for `limit`
pub const MAX_LIMIT: u32 = 50;

/// Default page size for listings
pub const DEFAULT_LIMIT: u32 = 20;

/// Default page size for title searches
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Default sort order
pub const DEFAULT_ORDER: &str = "popularity";

/// Filters and paging for an anime listing.
///
/// `limit`, `page` and `order` are always sent. Every other option is sent
/// only when it is `Some`, so zero and empty values stay expressible
/// (`score(0)` really asks for `score=0`).
///
/// `order` is not validated; the server understands `id`, `ranked`, `kind`,
/// `popularity`, `name`, `aired_on`, `episodes`, `status` and `random`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub page: u32,
    pub order: String,
    /// tv, movie, ova, ona, special, music
    pub kind: Option<String>,
    /// anons, ongoing, released
    pub status: Option<String>,
    /// e.g. `2024_fall`, `summer_2023`
    pub season: Option<String>,
    /// Minimum score
    pub score: Option<u32>,
    /// Genre ids, comma separated
    pub genre: Option<String>,
    /// Title search
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
            order: DEFAULT_ORDER.to_string(),
            kind: None,
            status: None,
            season: None,
            score: None,
            genre: None,
            search: None,
        }
    }
}

impl ListQuery {
    /// Query used by title search: `search` and `limit` set, everything else default
    pub fn search(query: impl Into<String>, limit: u32) -> Self {
        Self::default().limit(limit).search_text(query)
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the raw `genre` filter
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Filter by several genre ids at once
    pub fn genres(self, ids: &[u64]) -> Self {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.genre(joined)
    }

    pub fn search_text(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// `limit` as sent on the wire
    pub fn effective_limit(&self) -> u32 {
        self.limit.min(MAX_LIMIT)
    }

    /// Query pairs in the order they are sent
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.effective_limit().to_string()),
            ("page", self.page.to_string()),
            ("order", self.order.clone()),
        ];

        let optional = [
            ("kind", self.kind.clone()),
            ("status", self.status.clone()),
            ("season", self.season.clone()),
            ("score", self.score.map(|s| s.to_string())),
            ("genre", self.genre.clone()),
            ("search", self.search.clone()),
        ];
        params.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        );

        params
    }
}
