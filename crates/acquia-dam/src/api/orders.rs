//! Orders API.

use super::segment;
use crate::client::ApiClient;
use crate::credential::ApiVersion;
use crate::error::Result;
use crate::request::{ApiRequest, QueryParams};
use crate::types::{
    CleanAssetsResult, ConversionList, CreateOrderParams, CreateOrderResult, Order,
    OrderProfileList, OrderRef, Uuids, ZipStatus,
};

/// Orders API client.
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Check which assets can be ordered. Assets that cannot are listed in
    /// the result with a reason.
    pub async fn clean_assets<I, S>(&self, assets: I) -> Result<CleanAssetsResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = ApiRequest::post(ApiVersion::V1, "order/items/removals")
            .with_json(&Uuids::new(assets))?;
        self.client.send_request(request).await
    }

    /// Place an order.
    pub async fn create(&self, params: &CreateOrderParams) -> Result<CreateOrderResult> {
        let request = ApiRequest::post(ApiVersion::V1, "order").with_json(params)?;
        self.client.send_request(request).await
    }

    /// Start building a zip archive of an order.
    pub async fn create_zip_archive(&self, uuid: &str) -> Result<()> {
        let path = format!("order/uuid/{}/zip", segment(uuid)?);
        self.client
            .execute(ApiRequest::post(ApiVersion::V1, path))
            .await
    }

    /// Get an order by UUID or sequence number.
    ///
    /// `start` is the index of the first ordered item to return.
    pub async fn get(&self, order: &OrderRef, start: Option<u32>) -> Result<Order> {
        let path = match order {
            OrderRef::Id(id) => format!("order/uuid/{}", segment(id)?),
            OrderRef::SeqNum(seq) => format!("order/seqNum/{}", segment(seq)?),
        };
        let mut request = ApiRequest::get(ApiVersion::V1, path);
        if let Some(start) = start {
            let mut query = QueryParams::new();
            query.push("start", start.to_string());
            request.query = Some(query);
        }
        self.client.send_request(request).await
    }

    /// Progress of a zip archive.
    pub async fn zip_status(&self, uuid: &str) -> Result<ZipStatus> {
        let path = format!("order/uuid/{}/zip", segment(uuid)?);
        self.client
            .send_request(ApiRequest::get(ApiVersion::V1, path))
            .await
    }

    /// List conversions available for assets under an order profile.
    pub async fn list_conversions<I, S>(&self, profile_id: &str, assets: I) -> Result<ConversionList>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = format!("conversion/order/profile/uuid/{}", segment(profile_id)?);
        let request = ApiRequest::post(ApiVersion::V1, path).with_json(&Uuids::new(assets))?;
        self.client.send_request(request).await
    }

    /// List order profiles with internet delivery.
    pub async fn list_profiles(&self) -> Result<OrderProfileList> {
        self.client
            .send_request(ApiRequest::get(ApiVersion::V1, "order/profile/internet"))
            .await
    }
}
