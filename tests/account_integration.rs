use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mefrp_api_client::MeFrpClient;
use mefrp_api_client::rest::auth::{
    ChangePasswordRequest, EmailCodeRequest, GenerateMagicLinkRequest, IForgotRequest,
    RegisterRequest,
};
use mefrp_api_client::rest::user::{OperationLogFilter, RealnameLegacyRequest};
use mefrp_api_client::types::AccountStatus;

fn build_client(server: &MockServer) -> MeFrpClient {
    MeFrpClient::builder()
        .base_url(server.uri())
        .token("test-token")
        .build()
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "code": 200,
        "data": data,
        "message": ""
    }))
}

fn ok_empty() -> ResponseTemplate {
    ok(serde_json::Value::Null)
}

#[tokio::test]
async fn test_register_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/public/register/emailCode"))
        .and(body_json(serde_json::json!({
            "email": "alice@example.com",
            "captchaToken": "cap"
        })))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/public/register"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "emailCode": "123456",
            "password": "hunter2"
        })))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .get_register_email_code("alice@example.com", "cap")
        .await
        .unwrap();
    client
        .register(&RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            email_code: "123456".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_password_recovery_and_change() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/public/mlogin/link"))
        .and(body_json(serde_json::json!({
            "user": "alice",
            "callback": "https://example.com/cb",
            "captchaToken": "cap"
        })))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/public/iforgot/emailCode"))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/public/iforgot"))
        .and(body_json(serde_json::json!({
            "email": "alice@example.com",
            "password": "new-pass",
            "emailCode": "654321"
        })))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/passwordReset"))
        .and(body_json(serde_json::json!({
            "oldPassword": "new-pass",
            "newPassword": "newer-pass"
        })))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .generate_magic_link(&GenerateMagicLinkRequest {
            user: "alice".into(),
            callback: "https://example.com/cb".into(),
            captcha_token: "cap".into(),
        })
        .await
        .unwrap();
    client
        .request_iforgot_email_code(&EmailCodeRequest::new("alice@example.com", "cap"))
        .await
        .unwrap();
    client
        .iforgot(&IForgotRequest {
            email: "alice@example.com".into(),
            password: "new-pass".into(),
            email_code: "654321".into(),
        })
        .await
        .unwrap();
    client
        .change_password(&ChangePasswordRequest {
            old_password: "new-pass".into(),
            new_password: "newer-pass".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_user_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/info"))
        .respond_with(ok(serde_json::json!({
            "userId": 42,
            "username": "alice",
            "email": "alice@example.com",
            "group": "vip",
            "friendlyGroup": "VIP",
            "isRealname": true,
            "maxProxies": 20,
            "usedProxies": 3,
            "regTime": 1_700_000_000,
            "status": 0,
            "todaySigned": false,
            "traffic": 53_687_091_200_i64,
            "vipExpireTime": 1_900_000_000
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_user_info().await.unwrap();
    assert_eq!(info.user_id, 42);
    assert_eq!(info.friendly_group, "VIP");
    assert_eq!(info.traffic, 53_687_091_200);
    assert_eq!(info.account_status(), AccountStatus::Normal);
    assert!(info.vip_expires_at().is_some());
}

#[tokio::test]
async fn test_get_user_info_with_null_optionals() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/info"))
        .respond_with(ok(serde_json::json!({
            "userId": 1,
            "username": "alice",
            "banReason": null,
            "vipExpireTime": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_user_info().await.unwrap();
    assert_eq!(info.user_id, 1);
    assert_eq!(info.username, "alice");
    assert!(info.ban_reason.is_none());
    assert_eq!(info.vip_expire_time, 0);
}

#[tokio::test]
async fn test_sign_and_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/user/sign"))
        .and(body_json(serde_json::json!({"captchaToken": "cap"})))
        .respond_with(ok(serde_json::json!("signed, +2GB")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/user/frpToken"))
        .respond_with(ok(serde_json::json!({"token": "frp-abc"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/tokenReset"))
        .and(body_json(serde_json::json!({"captchaToken": "cap2"})))
        .respond_with(ok(serde_json::json!({"newToken": "access-xyz"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.sign("cap").await.unwrap();
    assert_eq!(client.get_user_frp_token().await.unwrap(), "frp-abc");
    assert_eq!(client.reset_access_key("cap2").await.unwrap(), "access-xyz");
    // Resetting the access key does not touch the bearer token.
    assert_eq!(client.expose_token(), "test-token");
}

#[tokio::test]
async fn test_get_user_groups_projects_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/groups"))
        .respond_with(ok(serde_json::json!({
            "groups": [
                {"name": "default", "friendlyName": "Free", "maxProxies": 5, "baseTraffic": 10240},
                {"name": "vip", "friendlyName": "VIP", "maxProxies": 20, "inBound": 8192}
            ]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let groups = client.get_user_groups().await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].friendly_name, "VIP");
    assert_eq!(groups[1].in_bound, 8192);
}

#[tokio::test]
async fn test_get_user_logs_omits_empty_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/operationLog/list"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "10"))
        .and(query_param("category", "proxy"))
        .and(query_param_is_missing("status"))
        .and(query_param_is_missing("startTime"))
        .and(query_param_is_missing("endTime"))
        .respond_with(ok(serde_json::json!({
            "data": [{
                "logId": 9,
                "category": "proxy",
                "details": "created proxy web",
                "ipAddress": "203.0.113.5",
                "status": "success",
                "createdAt": "2024-05-01 10:00:00"
            }],
            "total": 1,
            "page": 1,
            "pageSize": 10,
            "totalPages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let filter = OperationLogFilter::page(1, 10).category("proxy");
    let logs = client.get_user_logs(&filter).await.unwrap();
    assert_eq!(logs.total, 1);
    assert_eq!(logs.data[0].ip_address, "203.0.113.5");
}

#[tokio::test]
async fn test_log_stats_and_categories() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/operationLog/stats"))
        .respond_with(ok(serde_json::json!({
            "monthCount": 30, "todayCount": 2, "totalCount": 400, "weekCount": 9
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/operationLog/categories"))
        .respond_with(ok(serde_json::json!([
            {"value": "proxy", "label": "Proxy"},
            {"value": "auth", "label": "Login"}
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let stats = client.get_user_log_stats().await.unwrap();
    assert_eq!(stats.total_count, 400);
    let categories = client.get_operation_log_categories().await.unwrap();
    assert_eq!(categories[1].value, "auth");
}

#[tokio::test]
async fn test_realname() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/info/realname"))
        .respond_with(ok(serde_json::json!({
            "isRealname": false,
            "realnameTimes": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/realname/legacy"))
        .and(body_json(serde_json::json!({
            "realname": "Zhang San",
            "idCard": "110101199003070000"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 400,
            "data": null,
            "message": "verification failed"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_realname_info().await.unwrap();
    assert!(!info.is_realname);
    assert_eq!(info.realname_times, 1);

    let err = client
        .perform_realname_legacy(&RealnameLegacyRequest {
            realname: "Zhang San".into(),
            id_card: "110101199003070000".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.api_error().map(|e| e.code), Some(400));
}

#[tokio::test]
async fn test_traffic_stats() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/user/trafficStats"))
        .and(body_json(serde_json::json!({"datePeriod": 7})))
        .respond_with(ok(serde_json::json!({
            "daily": null,
            "totalTrafficIn": 100,
            "totalTrafficOut": 250
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let stats = client.get_user_traffic_stats(7).await.unwrap();
    assert!(stats.daily.is_empty());
    assert_eq!(stats.total_traffic_out, 250);
}

#[tokio::test]
async fn test_icp_domains() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/icpDomain/list"))
        .respond_with(ok(serde_json::json!([
            {"domain": "example.cn", "icp": "ICP-12345678", "unitName": "Example Ltd"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/icpDomain/add"))
        .and(body_json(serde_json::json!({"domain": "example.cn"})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/icpDomain/delete"))
        .and(body_json(serde_json::json!({"domain": "example.cn"})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.add_icp_domain("example.cn").await.unwrap();
    let domains = client.get_user_icp_domains().await.unwrap();
    assert_eq!(domains[0].icp, "ICP-12345678");
    client.delete_icp_domain("example.cn").await.unwrap();
}

#[tokio::test]
async fn test_kick_all_and_purchase_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/user/kickAllProxies"))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/user/purchase-status"))
        .respond_with(ok(serde_json::json!({
            "canPurchase": false,
            "reason": "monthly limit reached",
            "monthlyLimit": 3,
            "monthlyUsed": 3
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.kick_all_proxies().await.unwrap();
    let status = client.get_purchase_status().await.unwrap();
    assert!(!status.can_purchase);
    assert_eq!(status.monthly_used, 3);
}
