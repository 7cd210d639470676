//! Order, payment and CDK endpoints.

mod types;

pub use types::*;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::cash;
use crate::types::Page;

impl MeFrpClient {
    /// List the user's orders.
    ///
    /// `status` is omitted from the query when empty.
    pub async fn get_orders(&self, page: Page, status: &str) -> Result<OrderList, MeFrpError> {
        let query = OrdersQuery {
            page: page.page,
            page_size: page.page_size,
            status,
        };
        self.get_with_query(cash::ORDERS, &query).await?.into_data()
    }

    /// Start a new payment for an existing order.
    pub async fn repay_order(
        &self,
        order_id: &str,
        pay_method: &str,
        force: bool,
    ) -> Result<SubmitOrderResponse, MeFrpError> {
        let request = RepayRequest {
            order_id,
            pay_method,
            force,
        };
        self.post(cash::REPAY, &request).await?.into_data()
    }

    /// Submit a new order.
    pub async fn submit_order(
        &self,
        request: &SubmitOrderRequest,
    ) -> Result<SubmitOrderResponse, MeFrpError> {
        self.post(cash::SUBMIT, request).await?.into_data()
    }

    /// Query the state of an order.
    pub async fn query_order(&self, order_id: &str) -> Result<QueryOrderResponse, MeFrpError> {
        self.post(cash::QUERY, &OrderIdRequest { order_id })
            .await?
            .into_data()
    }

    /// Fulfil an order once paid.
    pub async fn proceed(&self, order_id: &str) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(cash::PROCEED, &OrderIdRequest { order_id })
            .await?
            .into_unit()
    }

    /// Redeem a CDK.
    pub async fn redeem_cdk(
        &self,
        code: &str,
        captcha_token: &str,
    ) -> Result<RedeemCdkResponse, MeFrpError> {
        let request = RedeemCdkRequest { code, captcha_token };
        self.post(cash::CDK_REDEEM, &request).await?.into_data()
    }

    /// List the user's CDK redemptions.
    pub async fn get_my_cdk_usage(&self, page: Page) -> Result<CdkUsageLogList, MeFrpError> {
        self.get_with_query(cash::CDK_USAGE, &page).await?.into_data()
    }
}
