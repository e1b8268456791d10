//! HTTP client for the listings data service.
//!
//! Two API roots live under the configured base URL: the data API (`/obj`)
//! serves record queries, the workflow API (`/wf`) runs favorite mutations.
//! Listing queries filter server-side to records the user has favorited that
//! are both active and approved.

use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::errors::ListingsDataError;
use crate::models::{
    FavoritedListings, ListingSort, PageInfo, RawListingQueryResponse, RawUserResponse,
};

/// Sort key the data service exposes for listing queries.
const SORT_FIELD_PRICE: &str = "lister_price_display";

/// Client for the listings data service.
pub struct ListingsApiClient {
    client: Client,
    config: ClientConfig,
}

impl ListingsApiClient {
    /// Creates a client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, config }
    }

    /// Creates a client configured from environment variables.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Fetches one page of the user's favorited listings.
    ///
    /// `page` is 1-based; the service itself paginates with a record cursor,
    /// which is derived here.
    pub async fn fetch_favorited_listings(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
        sort: ListingSort,
    ) -> Result<FavoritedListings, ListingsDataError> {
        let endpoint = format!("{}/listing", self.config.data_url());
        let constraints = favorites_constraints(user_id).to_string();
        let cursor = cursor_for_page(page, per_page);

        debug!(
            "GET {} user={} page={} per_page={} sort={:?}",
            endpoint, user_id, page, per_page, sort
        );

        let request = self.with_auth(self.client.get(&endpoint)).query(&[
            ("constraints", constraints.as_str()),
            ("sort_field", SORT_FIELD_PRICE),
            ("descending", bool_param(sort.descending())),
            ("cursor", cursor.to_string().as_str()),
            ("limit", per_page.to_string().as_str()),
        ]);

        let response = self.send(request, &endpoint).await?;
        let decoded: RawListingQueryResponse = response
            .json()
            .await
            .map_err(|e| ListingsDataError::Decode(e.to_string()))?;

        let listings: Vec<_> = decoded
            .response
            .results
            .iter()
            .map(|raw| raw.to_record())
            .collect();
        let total = decoded
            .response
            .count
            .unwrap_or(listings.len() as u64);

        debug!(
            "fetched {} favorited listings (total {}) for user {}",
            listings.len(),
            total,
            user_id
        );

        Ok(FavoritedListings {
            listings,
            pagination: PageInfo::compute(total, page, per_page),
        })
    }

    /// Removes a listing from the user's favorites.
    pub async fn remove_favorite(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> Result<(), ListingsDataError> {
        self.post_workflow(
            "remove-from-favorites",
            json!({ "userId": user_id, "listingId": listing_id }),
        )
        .await
    }

    /// Adds a listing to the user's favorites.
    pub async fn add_favorite(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> Result<(), ListingsDataError> {
        self.post_workflow(
            "add-to-favorites",
            json!({ "userId": user_id, "listingId": listing_id }),
        )
        .await
    }

    /// Subscribes the user to new-listing email notifications.
    pub async fn subscribe_new_listings(
        &self,
        user_id: &str,
        email: &str,
    ) -> Result<(), ListingsDataError> {
        self.post_workflow(
            "subscribe-new-listings",
            json!({ "email": email, "userId": user_id }),
        )
        .await
    }

    /// Fetches the ids of all listings the user has favorited.
    pub async fn fetch_favorited_ids(
        &self,
        user_id: &str,
    ) -> Result<Vec<String>, ListingsDataError> {
        let endpoint = format!("{}/user/{}", self.config.data_url(), user_id);
        debug!("GET {}", endpoint);

        let request = self.with_auth(self.client.get(&endpoint));
        let response = self.send(request, &endpoint).await?;
        let decoded: RawUserResponse = response
            .json()
            .await
            .map_err(|e| ListingsDataError::Decode(e.to_string()))?;

        Ok(decoded.response.favorited_listing_ids())
    }

    async fn post_workflow(&self, name: &str, body: Value) -> Result<(), ListingsDataError> {
        let endpoint = format!("{}/{}", self.config.workflow_url(), name);
        debug!("POST {}", endpoint);

        let request = self.with_auth(self.client.post(&endpoint)).json(&body);
        self.send(request, &endpoint).await?;
        Ok(())
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends the request and fails non-success statuses into the error
    /// taxonomy, keeping the response body for the log record.
    async fn send(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<Response, ListingsDataError> {
        let response = request
            .send()
            .await
            .map_err(|e| ListingsDataError::from_reqwest(e, endpoint))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        warn!("{} answered {}: {}", endpoint, status, message);
        Err(ListingsDataError::from_status(
            status.as_u16(),
            endpoint,
            message,
        ))
    }
}

/// Server-side filter for the favorited-listings query: listings the user
/// has favorited that are still active and approved.
fn favorites_constraints(user_id: &str) -> Value {
    json!([
        {
            "key": "favorited_by",
            "constraint_type": "contains",
            "value": user_id,
        },
        {
            "key": "Active",
            "constraint_type": "equals",
            "value": true,
        },
        {
            "key": "Approved",
            "constraint_type": "equals",
            "value": true,
        },
    ])
}

/// The data service paginates with a record cursor, not page numbers.
fn cursor_for_page(page: u32, per_page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(per_page)
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
