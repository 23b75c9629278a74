//! End-to-end tests for the device endpoints over real HTTP.

use reqwest::StatusCode;
use serde_json::{json, Value};

use device_stub::routing::ENDPOINTS;

mod common;

async fn send_json(
    stub: &common::TestStub,
    method: reqwest::Method,
    path: &str,
    body: Value,
) -> (StatusCode, Value) {
    let res = stub
        .client
        .request(method, stub.url(path))
        .json(&body)
        .send()
        .await
        .expect("stub unreachable");
    let status = res.status();
    (status, res.json().await.expect("JSON body"))
}

async fn get_json(stub: &common::TestStub, path: &str) -> (StatusCode, Value) {
    let res = stub.client.get(stub.url(path)).send().await.expect("stub unreachable");
    let status = res.status();
    (status, res.json().await.expect("JSON body"))
}

#[tokio::test]
async fn test_work_shift_toggle() {
    let stub = common::start_stub().await;
    let path = "/devices/cash-register/work-shift";

    let (status, body) = send_json(&stub, reqwest::Method::PUT, path, json!({ "isActive": true })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Смена открыта"));
    assert!(body["shiftId"].as_u64().unwrap() < 10_000);
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));

    let (status, body) = send_json(&stub, reqwest::Method::PUT, path, json!({ "isActive": false })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Смена закрыта"));
    assert!(body["shiftId"].as_u64().unwrap() < 10_000);
}

#[tokio::test]
async fn test_work_shift_requires_flag() {
    let stub = common::start_stub().await;

    let (status, body) = send_json(
        &stub,
        reqwest::Method::PUT,
        "/devices/cash-register/work-shift",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Поле isActive обязательно" }));

    // No body and no content type at all behaves the same.
    let res = stub
        .client
        .put(stub.url("/devices/cash-register/work-shift"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn test_payment() {
    let stub = common::start_stub().await;

    let (status, body) =
        send_json(&stub, reqwest::Method::POST, "/devices/pos/payments", json!({ "amount": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Неверная сумма платежа" })
    );

    let (status, body) =
        send_json(&stub, reqwest::Method::POST, "/devices/pos/payments", json!({ "amount": 250 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], json!(250));
    assert_eq!(body["status"], json!("COMPLETED"));
    assert!(body["slip"].as_str().unwrap().contains("Сумма: 250 руб."));
    assert!(body["transactionNumber"].as_str().unwrap().starts_with("100"));
    assert!(body["authCode"].as_str().unwrap().parse::<u64>().is_ok());
    assert!(body["rrn"].as_str().unwrap().parse::<u64>().is_ok());
}

#[tokio::test]
async fn test_refund() {
    let stub = common::start_stub().await;

    let (status, body) =
        send_json(&stub, reqwest::Method::POST, "/devices/pos/refunds", json!({ "amount": 100 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Номер транзакции обязателен"));

    let (status, body) = send_json(
        &stub,
        reqwest::Method::POST,
        "/devices/pos/refunds",
        json!({ "transactionNumber": "1001234567" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Неверная сумма возврата"));

    let (status, body) = send_json(
        &stub,
        reqwest::Method::POST,
        "/devices/pos/refunds",
        json!({ "amount": 100, "transactionNumber": "1001234567" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["transactionNumber"], json!("1001234567"));
    assert_eq!(body["amount"], json!(100));

    let refund_id = body["refundId"].as_str().unwrap();
    let parts: Vec<&str> = refund_id.split('_').collect();
    assert_eq!(parts.len(), 3, "refundId: {refund_id}");
    assert_eq!(parts[0], "REF");
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()) && !parts[1].is_empty());
    assert!(parts[2].chars().all(|c| c.is_ascii_digit()) && !parts[2].is_empty());
}

#[tokio::test]
async fn test_receipt() {
    let stub = common::start_stub().await;
    let path = "/devices/cash-register/receipts";

    let (status, body) = send_json(
        &stub,
        reqwest::Method::POST,
        path,
        json!({ "items": [], "payment": { "sum": 10 }, "type": "sell" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("Поле items обязательно и должно содержать массив позиций")
    );

    let (status, body) = send_json(
        &stub,
        reqwest::Method::POST,
        path,
        json!({ "items": [{ "name": "Кофе" }], "payment": { "sum": 150 } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Тип операции обязателен (sell, refund, etc.)"));

    let (status, body) = send_json(
        &stub,
        reqwest::Method::POST,
        path,
        json!({ "items": [{ "name": "Кофе" }], "payment": { "sum": 150 }, "type": "sell" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(150));
    assert_eq!(body["receiptType"], json!("sell"));
    assert_eq!(body["fnNumber"], json!("9960440300757395"));
    assert_eq!(body["shiftNumber"], json!(116));
    assert!(body["fiscalDocumentDateTime"]
        .as_str()
        .unwrap()
        .ends_with("+03:00"));
}

#[tokio::test]
async fn test_non_fiscal() {
    let stub = common::start_stub().await;
    let path = "/devices/cash-register/non-fiscals";

    let (status, body) =
        send_json(&stub, reqwest::Method::POST, path, json!({ "text": "hello" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("Тело запроса должно быть массивом элементов для печати")
    );

    let (status, body) =
        send_json(&stub, reqwest::Method::POST, path, json!(["Строка 1", "Строка 2", "Строка 3"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["itemsCount"], json!(3));
    assert_eq!(body["documentType"], json!("non-fiscal"));
    assert_eq!(body["deviceId"], json!("cash-register-mock-001"));
}

#[tokio::test]
async fn test_devices() {
    let stub = common::start_stub().await;
    let (status, body) = get_json(&stub, "/devices").await;

    assert_eq!(status, StatusCode::OK);
    let devices = body.as_array().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["type"], json!("cash-register"));
    assert_eq!(devices[1]["type"], json!("pos-terminal"));
    for device in devices {
        assert_eq!(device["details"]["isWorkShiftActive"], json!(true));
    }
}

#[tokio::test]
async fn test_reports_need_no_body() {
    let stub = common::start_stub().await;

    for (path, device_type, report_type) in [
        ("/devices/pos/reports/z", "POS", "Z"),
        ("/devices/pos/reports/x", "POS", "X"),
        ("/devices/cash-register/reports/x", "CASH_REGISTER", "X"),
    ] {
        let res = stub.client.post(stub.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["deviceType"], json!(device_type));
        assert_eq!(body["reportType"], json!(report_type));
    }

    let (status, body) = get_json(&stub, "/devices/cash-register/shift-totals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["incomes"]["electronically"], json!(4000.68));
}

#[tokio::test]
async fn test_health() {
    let stub = common::start_stub().await;
    let (status, body) = get_json(&stub, "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(!endpoints.is_empty());
    assert!(endpoints.iter().all(Value::is_string));
}

#[tokio::test]
async fn test_unknown_route() {
    let stub = common::start_stub().await;
    let (status, body) = get_json(&stub, "/unknown/path").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Route GET /unknown/path not found"));

    let routes: Vec<&str> = body["availableRoutes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap())
        .collect();
    for expected in [
        "GET /devices",
        "PUT /devices/cash-register/work-shift",
        "POST /devices/cash-register/receipts",
        "POST /devices/pos/payments",
        "POST /devices/pos/refunds",
        "POST /devices/pos/reports/z",
        "POST /devices/cash-register/reports/x",
        "POST /devices/pos/reports/x",
        "GET /devices/cash-register/shift-totals",
    ] {
        assert!(routes.contains(&expected), "missing {expected}");
    }
}

#[tokio::test]
async fn test_wrong_method_is_not_found() {
    let stub = common::start_stub().await;

    let res = stub.client.get(stub.url("/devices/pos/payments")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], json!("Route GET /devices/pos/payments not found"));

    let res = stub.client.delete(stub.url("/devices")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = stub.client.post(stub.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_every_documented_endpoint_is_routed() {
    let stub = common::start_stub().await;

    for endpoint in ENDPOINTS {
        let method = reqwest::Method::from_bytes(endpoint.verb.as_str().as_bytes()).unwrap();
        let res = stub
            .client
            .request(method, stub.url(endpoint.path))
            .send()
            .await
            .unwrap();
        assert_ne!(res.status(), StatusCode::NOT_FOUND, "{endpoint} not routed");
    }
}

#[tokio::test]
async fn test_index_page() {
    let stub = common::start_stub().await;
    let res = stub.client.get(stub.url("/")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let page = res.text().await.unwrap();
    assert!(page.contains("Mock Device Server"));
    assert!(page.contains("<code>POST /devices/pos/refunds</code>"));
}

#[tokio::test]
async fn test_malformed_json() {
    let stub = common::start_stub().await;
    let res = stub
        .client
        .post(stub.url("/devices/pos/payments"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"amount\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Некорректное тело запроса"));
}

#[tokio::test]
async fn test_malformed_json_fails_every_route() {
    let stub = common::start_stub().await;

    for (method, path) in [
        (reqwest::Method::GET, "/devices"),
        (reqwest::Method::GET, "/devices/cash-register/shift-totals"),
        (reqwest::Method::POST, "/devices/pos/reports/z"),
        (reqwest::Method::POST, "/nope"),
    ] {
        let res = stub
            .client
            .request(method.clone(), stub.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body("{\"a\": ")
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{method} {path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Некорректное тело запроса"));
    }
}

#[tokio::test]
async fn test_whole_amounts_render_without_fraction() {
    let stub = common::start_stub().await;

    let raw = stub
        .client
        .get(stub.url("/devices/cash-register/shift-totals"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(raw.contains(r#""cash":200,"#), "{raw}");
    assert!(raw.contains(r#""electronically":1000}"#), "{raw}");

    let res = stub
        .client
        .post(stub.url("/devices/pos/payments"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(r#"{"amount": 250.0}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let raw = res.text().await.unwrap();
    assert!(raw.contains(r#""amount":250,"#), "{raw}");
    let body: Value = serde_json::from_str(&raw).unwrap();
    assert!(body["slip"].as_str().unwrap().contains("Сумма: 250 руб."));
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let mut config = device_stub::StubConfig::default();
    config.limits.max_body_size = 64;
    let stub = common::start_stub_with(config).await;

    let items: Vec<Value> = (0..50).map(|i| json!({ "line": i })).collect();
    let res = stub
        .client
        .post(stub.url("/devices/cash-register/non-fiscals"))
        .json(&items)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_calls_are_independent() {
    let stub = common::start_stub().await;
    let body = json!({ "amount": 42.5 });

    let (_, first) =
        send_json(&stub, reqwest::Method::POST, "/devices/pos/payments", body.clone()).await;
    let (_, second) =
        send_json(&stub, reqwest::Method::POST, "/devices/pos/payments", body).await;

    let keys = |v: &Value| {
        let mut keys: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    };
    assert_eq!(keys(&first), keys(&second));
    assert_eq!(first["amount"], second["amount"]);
    assert_eq!(first["status"], second["status"]);
}
