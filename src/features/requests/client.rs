use crate::{
    app_lib::{ApiClient, AppError, Method, Transport, path_id, with_query},
    features::requests::types::{
        BloodRequest, DoneStatus, RequestEnvelope, RequestForm, RequestPage, RequestQuery,
    },
};
use serde_json::json;

/// Every request, unpaginated, for the public board.
pub async fn list_all_requests<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Vec<BloodRequest>, AppError> {
    let page: RequestPage = api.get_json("/request").await?;
    Ok(page.requests)
}

pub async fn list_requests<T: Transport>(
    api: &ApiClient<T>,
    query: &RequestQuery,
) -> Result<RequestPage, AppError> {
    let page = query.page.max(1).to_string();
    let limit = query.limit.max(1).to_string();
    let path = with_query(
        "/request",
        &[
            ("page", page.as_str()),
            ("limit", limit.as_str()),
            ("name", query.name.as_str()),
            ("blood_type", query.blood_type.as_str()),
            ("location", query.location.as_str()),
        ],
    );
    api.get_json(&path).await
}

pub async fn get_request<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
) -> Result<BloodRequest, AppError> {
    let id = path_id(id)?;
    let envelope: RequestEnvelope = api.get_json(&format!("/request/{id}")).await?;
    envelope.into_request()
}

pub async fn add_request<T: Transport>(
    api: &ApiClient<T>,
    form: &RequestForm,
) -> Result<(), AppError> {
    form.validate()?;
    api.send_empty(Method::Post, "/request/add", form).await
}

pub async fn update_request<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    form: &RequestForm,
) -> Result<(), AppError> {
    let id = path_id(id)?;
    form.validate()?;
    api.send_empty(Method::Put, &format!("/request/update/{id}"), form)
        .await
}

pub async fn set_request_status<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    status: DoneStatus,
) -> Result<(), AppError> {
    let id = path_id(id)?;
    api.send_empty(
        Method::Put,
        &format!("/request/status/{id}"),
        &json!({ "done_status": status }),
    )
    .await
}

pub async fn delete_request<T: Transport>(api: &ApiClient<T>, id: &str) -> Result<(), AppError> {
    let id = path_id(id)?;
    api.delete(&format!("/request/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::{
        add_request, delete_request, get_request, list_all_requests, list_requests,
        set_request_status,
    };
    use crate::{
        app_lib::{
            AppError, Method,
            testing::{FakeTransport, client},
        },
        features::requests::types::{DoneStatus, RequestForm, RequestQuery},
    };

    #[tokio::test]
    async fn query_carries_only_non_blank_filters() {
        let transport =
            FakeTransport::new().respond(200, r#"{"requests":[{"_id":"r1"}],"totalRequests":13}"#);
        let api = client(transport.clone(), Some("t"));
        let query = RequestQuery {
            page: 2,
            blood_type: "O-".to_string(),
            location: "Nablus".to_string(),
            ..RequestQuery::default()
        };

        let page = list_requests(&api, &query).await.expect("page");

        assert_eq!(page.total_requests, 13);
        assert_eq!(
            transport.requests()[0].url,
            "https://api.test/api/request?page=2&limit=12&blood_type=O-&location=Nablus"
        );
    }

    #[tokio::test]
    async fn public_board_works_without_token() {
        let transport = FakeTransport::new().respond(200, r#"{"requests":[]}"#);
        let api = client(transport.clone(), None);

        let requests = list_all_requests(&api).await.expect("requests");

        assert!(requests.is_empty());
        assert_eq!(transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn detail_accepts_request_or_data_wrapper() {
        let transport = FakeTransport::new()
            .respond(200, r#"{"request":{"_id":"r1","patient_name":"Ali"}}"#)
            .respond(200, r#"{"data":{"_id":"r2","patient_name":"Huda"}}"#)
            .respond(200, r#"{"message":"ok"}"#);
        let api = client(transport, None);

        assert_eq!(get_request(&api, "r1").await.expect("r1").patient_name, "Ali");
        assert_eq!(get_request(&api, "r2").await.expect("r2").patient_name, "Huda");
        assert!(matches!(get_request(&api, "r3").await, Err(AppError::Parse(_))));
    }

    #[tokio::test]
    async fn status_change_sends_done_status() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));

        set_request_status(&api, "r1", DoneStatus::Complete)
            .await
            .expect("status");

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "https://api.test/api/request/status/r1");
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"done_status":"complete"}"#));
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));

        assert!(add_request(&api, &RequestForm::default()).await.is_err());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn delete_surfaces_api_rejection() {
        let transport = FakeTransport::new().respond(403, r#"{"message":"Not your request"}"#);
        let api = client(transport, Some("t"));

        let err = delete_request(&api, "r1").await.expect_err("forbidden");

        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message(), "Not your request");
    }
}
