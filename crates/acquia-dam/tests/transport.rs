//! Integration tests for request building and response handling.

mod common;

use acquia_dam::{
    ApiRequest, ApiVersion, Error, ErrorKind, FileContent, FormBody, JsonValue, ResponseBody,
};
use common::{TestDam, TOKEN};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_missing_token_fails_before_sending() -> anyhow::Result<()> {
    let dam = TestDam::start_without_token().await?;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&dam.server)
        .await;

    let err = dam.client.users().current().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Sdk);
    assert!(err.to_string().contains("Access token is not set"));
    Ok(())
}

#[tokio::test]
async fn test_auth_and_sdk_headers_sent() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header_regex("x-acquia-sdk-client", r"^acquia-dam-rs@\d+\.\d+\.\d+"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": null, "company": "Acme", "country": null,
            "email": "wile@acme.test", "first_name": "Wile", "id": "u1",
            "last_name": "Coyote", "phone": null, "postal_code": null,
            "state_or_province": null, "street_address": null, "title": null,
            "username": "wile", "uuid": "u1"
        })))
        .expect(1)
        .mount(&dam.server)
        .await;

    let user = dam.client.users().current().await?;
    assert_eq!(user.username, "wile");
    Ok(())
}

#[tokio::test]
async fn test_v1_url_uses_collective_key() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v1/acme/fileformats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "formats": [{"description": "JPEG image", "name": "JPEG"}]
        })))
        .expect(1)
        .mount(&dam.server)
        .await;

    let formats = dam.client.assets().list_file_formats().await?;
    assert_eq!(formats.formats[0].name, "JPEG");
    Ok(())
}

#[tokio::test]
async fn test_token_change_moves_v1_host_only() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v1/globex/metadata/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"types": []})))
        .expect(1)
        .mount(&dam.server)
        .await;

    dam.client.set_access_token("globex/oauth-token")?;
    let types = dam.client.metadata().list_types().await?;
    assert!(types.types.is_empty());
    assert!(dam.client.base_url(ApiVersion::V2).ends_with("/v2/"));
    Ok(())
}

#[tokio::test]
async fn test_http_error_carries_json_body() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v2/products/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "bad"})))
        .expect(1)
        .mount(&dam.server)
        .await;

    let err = dam.client.products().get("missing").await.unwrap_err();
    assert!(err.is_not_found());
    match &err {
        Error::Http { status, body } => {
            assert_eq!(*status, 404);
            let body = body.as_ref().and_then(ResponseBody::as_json).unwrap();
            assert_eq!(body.get("message").and_then(JsonValue::as_str), Some("bad"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("type: \"HTTP Error\""));
    assert!(message.contains("statusCode: 404"));
    Ok(())
}

#[tokio::test]
async fn test_http_error_text_and_empty_bodies() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v2/usage/api"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&dam.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&dam.server)
        .await;

    let err = dam.client.usage().api_usage().await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.body().and_then(ResponseBody::as_text), Some("maintenance"));

    let err = dam.client.users().current().await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(err.body().is_none());
    assert!(err.to_string().contains("body: N/A"));
    Ok(())
}

#[tokio::test]
async fn test_unparsable_json_error_body_kept_as_text() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v2/usage/api"))
        .respond_with(
            ResponseTemplate::new(502).set_body_raw("<html>Bad gateway</html>", "application/json"),
        )
        .expect(1)
        .mount(&dam.server)
        .await;

    let err = dam.client.usage().api_usage().await.unwrap_err();
    assert_eq!(err.status_code(), Some(502));
    assert_eq!(
        err.body().and_then(ResponseBody::as_text),
        Some("<html>Bad gateway</html>")
    );
    assert!(!err.to_string().contains("body: N/A"));
    Ok(())
}

#[tokio::test]
async fn test_error_body_dates_coerced() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("DELETE"))
        .and(path("/v2/products/p1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "locked_until": "2024-06-01T12:00:00Z",
            "note": "2024-06-01T12:00:00.000Z"
        })))
        .mount(&dam.server)
        .await;

    let err = dam.client.products().delete("p1").await.unwrap_err();
    let body = err.body().and_then(ResponseBody::as_json).unwrap();
    let locked = body.get("locked_until").and_then(JsonValue::as_date).unwrap();
    assert_eq!(locked.to_rfc3339(), "2024-06-01T12:00:00+00:00");
    assert_eq!(
        body.get("note").and_then(JsonValue::as_str),
        Some("2024-06-01T12:00:00.000Z")
    );
    Ok(())
}

#[tokio::test]
async fn test_response_dates_coerced_in_open_json() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v2/usage/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usage": [{"month": "2024-01-01T00:00:00Z", "count": 12}],
            "label": "not a date"
        })))
        .mount(&dam.server)
        .await;

    let usage = dam.client.usage().api_usage().await?;
    let first = usage.0.get("usage").and_then(|u| u.get_index(0)).unwrap();
    assert!(first.get("month").and_then(JsonValue::as_date).is_some());
    assert_eq!(usage.0.get("label").and_then(JsonValue::as_str), Some("not a date"));
    Ok(())
}

#[tokio::test]
async fn test_json_body_labelled_json() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("PUT"))
        .and(path("/v2/products/p1/rename"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"new_name": "Trail Shoe"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&dam.server)
        .await;

    dam.client.products().rename("p1", "Trail Shoe").await?;
    Ok(())
}

#[tokio::test]
async fn test_form_body_sent_as_multipart() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("POST"))
        .and(path("/v2/uploads/chunks/upload"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tag": "etag-1"})))
        .expect(1)
        .mount(&dam.server)
        .await;

    let result = dam
        .client
        .assets()
        .upload_chunk(acquia_dam::UploadChunkParams {
            chunk_number: 1,
            file: FileContent::new(b"chunk bytes".to_vec(), "part.bin"),
            session_id: "session-1".into(),
        })
        .await?;
    assert_eq!(result.tag, "etag-1");

    let requests = dam.server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"chunk_number\""));
    assert!(body.contains("name=\"session_id\""));
    assert!(body.contains("filename=\"part.bin\""));
    assert!(body.contains("chunk bytes"));
    Ok(())
}

#[tokio::test]
async fn test_send_request_directly() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("POST"))
        .and(path("/v2/uploads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&dam.server)
        .await;

    let form = FormBody::new().text("profile", "default");
    let request = ApiRequest::post(ApiVersion::V2, "uploads").with_form(form);
    let value: serde_json::Value = dam.client.send_request(request).await?;
    assert_eq!(value, json!({"ok": true}));

    let requests = dam.server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!content_type.contains("application/json"));
    Ok(())
}

#[tokio::test]
async fn test_query_string_arrays_joined() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("GET"))
        .and(path("/v2/workflow/projects/p1/deliverables"))
        .and(query_param("expand", "download_link,proof_url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&dam.server)
        .await;

    let deliverables = dam
        .client
        .workflow()
        .list_deliverables(
            "p1",
            &[
                acquia_dam::DeliverableExpand::DownloadLink,
                acquia_dam::DeliverableExpand::ProofUrl,
            ],
        )
        .await?;
    assert!(deliverables.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_empty_and_text_success_bodies() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    Mock::given(method("DELETE"))
        .and(path("/v2/workflow/projects/p1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&dam.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/webhooks/configurations/w1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&dam.server)
        .await;

    dam.client.workflow().delete_project("p1").await?;
    dam.client.webhooks().ping_assets_webhook("w1").await?;

    let text: String = dam
        .client
        .send_request(ApiRequest::get(
            ApiVersion::V2,
            "webhooks/configurations/w1/ping",
        ))
        .await?;
    assert_eq!(text, "pong");
    Ok(())
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() -> anyhow::Result<()> {
    let dam = TestDam::start().await?;

    for i in 0..5 {
        Mock::given(method("GET"))
            .and(path(format!("/v2/attributes/a{}/vocabulary", i)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"vocabulary": [format!("value-{}", i)]})),
            )
            .expect(1)
            .mount(&dam.server)
            .await;
    }

    let futures = (0..5).map(|i| {
        let client = dam.client.clone();
        async move {
            client
                .attributes()
                .list_vocabulary(&format!("a{}", i))
                .await
        }
    });
    let results = futures::future::join_all(futures).await;

    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result?.vocabulary, vec![format!("value-{}", i)]);
    }
    Ok(())
}
