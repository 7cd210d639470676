use rust_decimal_macros::dec;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mefrp_api_client::MeFrpClient;
use mefrp_api_client::rest::public::CheckUpdateRequest;
use mefrp_api_client::types::ServiceState;

fn build_client(server: &MockServer) -> MeFrpClient {
    MeFrpClient::builder().base_url(server.uri()).build()
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "code": 200,
        "data": data,
        "message": ""
    }))
}

#[tokio::test]
async fn test_get_statistics() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/statistics"))
        .respond_with(ok(serde_json::json!({
            "users": 120_000,
            "nodes": 48,
            "proxies": 310_000,
            "traffic": 9_007_199_254_740_993_i64
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let stats = client.get_statistics().await.unwrap();
    assert_eq!(stats.nodes, 48);
    assert_eq!(stats.traffic, 9_007_199_254_740_993);
}

#[tokio::test]
async fn test_get_store_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/store/products"))
        .respond_with(ok(serde_json::json!([
            {
                "type": "traffic",
                "name": "Traffic",
                "price": 1,
                "unit": "GB",
                "enabled": true,
                "currentPrice": 1
            },
            {
                "type": "vip",
                "name": "VIP",
                "price": 10.0,
                "unit": "month",
                "enabled": true,
                "discountEnabled": true,
                "discountPrice": 8.8,
                "currentPrice": 8.8,
                "isDiscountActive": true,
                "discountRemainingSeconds": 3600
            }
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let items = client.get_store_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].current_price, dec!(1));
    assert_eq!(items[1].discount_price, dec!(8.8));
    assert!(items[1].is_discount_active);
}

#[tokio::test]
async fn test_get_holiday_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/holiday"))
        .and(query_param("year", "2025"))
        .respond_with(ok(serde_json::json!(["2025-01-01", "2025-10-01"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let days = client.get_holiday_data(2025).await.unwrap();
    assert_eq!(days, vec!["2025-01-01", "2025-10-01"]);
}

#[tokio::test]
async fn test_check_update() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/public/checkUpdate"))
        .and(body_json(serde_json::json!({
            "productId": "mefrpc",
            "currentVersion": "0.57.0",
            "system": "linux",
            "arch": "amd64"
        })))
        .respond_with(ok(serde_json::json!({
            "hasUpdate": true,
            "latestVersion": "0.58.1",
            "downloadUrl": "/mefrpc/0.58.1/linux_amd64.tar.gz",
            "forceUpdate": false
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CheckUpdateRequest::new("mefrpc", "0.57.0", "linux", "amd64");
    let update = client.check_update(&request).await.unwrap();
    assert!(update.has_update);
    assert_eq!(update.latest_version, "0.58.1");
}

#[tokio::test]
async fn test_downloads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/downloadSources"))
        .respond_with(ok(serde_json::json!([
            {"id": 1, "path": "https://mirror.example.com", "name": "Main"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/products"))
        .respond_with(ok(serde_json::json!([{
            "productId": "mefrpc",
            "system": "windows",
            "arch": "amd64",
            "name": "ME Frp client",
            "path": "mefrpc/windows_amd64.zip",
            "version": "0.58.1",
            "isPublic": true
        }])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let sources = client.get_download_sources().await.unwrap();
    let products = client.get_products().await.unwrap();
    assert_eq!(
        products[0].download_url(&sources[0]),
        "https://mirror.example.com/mefrpc/windows_amd64.zip"
    );
}

#[tokio::test]
async fn test_system_status_and_notices() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/system/status"))
        .respond_with(ok(serde_json::json!({"status": 2, "remark": "upgrading"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/popupNotice"))
        .respond_with(ok(serde_json::json!("Please verify your identity")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/notice"))
        .respond_with(ok(serde_json::json!(null)))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let status = client.get_system_status().await.unwrap();
    assert_eq!(status.state(), ServiceState::Offline);
    assert_eq!(status.remark, "upgrading");

    assert_eq!(
        client.get_popup_notice().await.unwrap(),
        "Please verify your identity"
    );
    assert_eq!(client.get_notice().await.unwrap(), "");
}
