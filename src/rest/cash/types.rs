//! Types for order, payment and CDK endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

use crate::types::serde_helpers::unix_seconds;

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Waiting for payment.
    Unpaid,
    /// Paid and fulfilled.
    Paid,
    /// Closed without payment.
    Closed,
    /// A status this client does not know about.
    Unknown(i32),
}

impl From<i32> for OrderStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => OrderStatus::Unpaid,
            1 => OrderStatus::Paid,
            2 => OrderStatus::Closed,
            other => OrderStatus::Unknown(other),
        }
    }
}

/// A purchase order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub order_id: String,
    /// Buyer.
    pub user_id: i64,
    /// Product type.
    #[serde(rename = "type")]
    pub order_type: String,
    /// Quantity purchased.
    pub amount: i64,
    /// Duration in months, for subscriptions.
    pub months: i32,
    /// Price paid.
    #[serde(with = "rust_decimal::serde::float")]
    pub money: Decimal,
    /// Raw payment status, see [`Order::order_status`].
    pub status: i32,
    /// Payment channel.
    pub pay_type: String,
    /// Payment page URL.
    #[serde(rename = "payURL")]
    pub pay_url: String,
    /// Channel specific payment payload.
    pub pay_info: String,
    /// Payment form HTML.
    #[serde(rename = "payHTML")]
    pub pay_html: String,
    /// Payment QR code contents.
    #[serde(rename = "payQRCode")]
    pub pay_qr_code: String,
    /// Channel trade number.
    pub trade_no: String,
    /// Applied coupon.
    pub coupon_code: String,
    /// Ad slot type, for ad credit orders.
    pub ad_slot_type: String,
    /// Creation time (unix seconds).
    pub create_time: i64,
    /// Last update time (unix seconds).
    pub update_time: i64,
}

impl Order {
    /// Decoded payment status.
    pub fn order_status(&self) -> OrderStatus {
        OrderStatus::from(self.status)
    }

    /// Creation time.
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.create_time)
    }
}

/// One page of the user's orders.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderList {
    /// Orders on this page.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub orders: Vec<Order>,
    /// Total number of orders.
    pub total: i64,
}

/// Query of [`MeFrpClient::get_orders`](crate::rest::MeFrpClient::get_orders).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrdersQuery<'a> {
    pub page: i32,
    pub page_size: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub status: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepayRequest<'a> {
    pub order_id: &'a str,
    pub pay_method: &'a str,
    pub force: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderIdRequest<'a> {
    pub order_id: &'a str,
}

/// A new order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    /// Product type, e.g. `traffic` or `vip`.
    #[serde(rename = "type")]
    pub order_type: String,
    /// Quantity.
    pub amount: i64,
    /// Duration in months, for subscriptions.
    pub months: i32,
    /// Payment channel.
    pub pay_method: String,
    /// Coupon to apply.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub coupon_code: String,
    /// Ad slot type, for ad credit orders.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub ad_slot_type: String,
}

impl SubmitOrderRequest {
    /// Order `amount` units of `order_type`, paid through `pay_method`.
    pub fn new(order_type: impl Into<String>, amount: i64, pay_method: impl Into<String>) -> Self {
        Self {
            order_type: order_type.into(),
            amount,
            pay_method: pay_method.into(),
            ..Self::default()
        }
    }

    /// Set the subscription duration.
    pub fn months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    /// Apply a coupon.
    pub fn coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = code.into();
        self
    }
}

/// Payment instructions for a submitted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitOrderResponse {
    /// Order ID.
    pub order_id: String,
    /// Amount due.
    #[serde(with = "rust_decimal::serde::float")]
    pub money: Decimal,
    /// Payment channel.
    pub pay_type: String,
    /// Payment page URL.
    #[serde(rename = "payURL")]
    pub pay_url: String,
    /// Channel specific payment payload.
    pub pay_info: String,
    /// Payment form HTML.
    #[serde(rename = "payHTML")]
    pub pay_html: String,
    /// Payment QR code contents.
    #[serde(rename = "payQRCode")]
    pub pay_qr_code: String,
}

/// Current state of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOrderResponse {
    /// Order ID.
    pub order_id: String,
    /// Raw payment status.
    pub status: i32,
    /// Price.
    #[serde(with = "rust_decimal::serde::float")]
    pub money: Decimal,
    /// Channel trade number.
    pub trade_no: String,
}

impl QueryOrderResponse {
    /// Decoded payment status.
    pub fn order_status(&self) -> OrderStatus {
        OrderStatus::from(self.status)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RedeemCdkRequest<'a> {
    pub code: &'a str,
    pub captcha_token: &'a str,
}

/// What a redeemed CDK granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RedeemCdkResponse {
    /// Reward type.
    #[serde(rename = "type")]
    pub reward_type: String,
    /// Reward quantity.
    pub amount: i64,
    /// Human readable summary.
    pub message: String,
}

/// One CDK redemption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CdkUsageLog {
    /// Log ID.
    pub id: i64,
    /// Redeemed code.
    pub code: String,
    /// Redeeming user.
    pub username: String,
    /// Reward type.
    #[serde(rename = "type")]
    pub reward_type: String,
    /// Reward quantity.
    pub amount: i64,
    /// Redemption time (unix seconds).
    pub used_time: i64,
}

impl CdkUsageLog {
    /// Redemption time.
    pub fn used_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.used_time)
    }
}

/// One page of CDK redemptions.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CdkUsageLogList {
    /// Entries on this page.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub logs: Vec<CdkUsageLog>,
    /// Total number of entries.
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_deserialize() {
        let json = r#"{
            "orderId": "ME20240101000001",
            "userId": 42,
            "type": "traffic",
            "amount": 100,
            "money": 12.5,
            "status": 1,
            "payURL": "https://pay.example.com/x",
            "payQRCode": "weixin://wxpay/x",
            "createTime": 1704067200
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_type, "traffic");
        assert_eq!(order.money, Decimal::from_str("12.5").unwrap());
        assert_eq!(order.order_status(), OrderStatus::Paid);
        assert_eq!(order.pay_url, "https://pay.example.com/x");
        assert_eq!(order.pay_qr_code, "weixin://wxpay/x");
        assert_eq!(order.created_at().unwrap().year(), 2024);
    }

    #[test]
    fn test_order_list_null_orders() {
        let list: OrderList = serde_json::from_str(r#"{"orders":null,"total":0}"#).unwrap();
        assert!(list.orders.is_empty());
    }

    #[test]
    fn test_orders_query_status_omitted_when_empty() {
        let query = OrdersQuery {
            page: 1,
            page_size: 20,
            status: "",
        };
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "page=1&pageSize=20");
    }

    #[test]
    fn test_submit_order_request_builder() {
        let req = SubmitOrderRequest::new("vip", 1, "alipay").months(3);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "vip");
        assert_eq!(json["months"], 3);
        assert_eq!(json["payMethod"], "alipay");
        assert!(json.get("couponCode").is_none());
    }
}
