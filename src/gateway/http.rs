use async_trait::async_trait;
use gestor_core::{
    EntityKind, GatewayError, ListResponse, OperationResult, SessionContext, StorageGateway,
    StorageRecord,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Header carrying the session's company to the backend.
pub const COMPANY_HEADER: &str = "x-company-id";

/// REST backend: `GET/POST /{module}`, `PUT/DELETE /{module}/{id}`.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::backend)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, kind: EntityKind, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, kind.module(), id),
            None => format!("{}/{}", self.base_url, kind.module()),
        }
    }

    fn authorize(&self, request: RequestBuilder, ctx: &SessionContext) -> RequestBuilder {
        let request = match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        };
        match &ctx.company_id {
            Some(company) => request.header(COMPANY_HEADER, company),
            None => request,
        }
    }

    async fn send(
        &self,
        request: RequestBuilder,
        kind: EntityKind,
        id: Option<&str>,
    ) -> Result<Response, GatewayError> {
        let response = request.send().await.map_err(GatewayError::backend)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(GatewayError::NotFound {
                    kind,
                    id: id.to_string(),
                });
            }
        }
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Rejected(rejection_message(status, &body)))
    }
}

/// Prefers the backend's own `message`/`error` field over the raw body.
fn rejection_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, detail)
    }
}

/// Reads a create/update answer, either an explicit `{success, id, data}`
/// result or the stored row itself.
async fn operation_result(response: Response) -> Result<OperationResult, GatewayError> {
    let bytes = response.bytes().await.map_err(GatewayError::backend)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(OperationResult {
            success: true,
            ..OperationResult::default()
        });
    }
    let body: Value = serde_json::from_slice(&bytes)?;
    if body.get("success").is_some_and(Value::is_boolean) {
        return Ok(serde_json::from_value(body)?);
    }
    let id = match body.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    Ok(OperationResult {
        success: true,
        id,
        data: Some(body),
    })
}

#[async_trait]
impl StorageGateway for HttpGateway {
    async fn list(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
    ) -> Result<ListResponse, GatewayError> {
        let request = self.authorize(self.client.get(self.url(kind, None)), ctx);
        let response = self.send(request, kind, None).await?;
        let body: Value = response.json().await.map_err(GatewayError::backend)?;
        ListResponse::from_json(kind, body)
    }

    async fn create(
        &self,
        ctx: &SessionContext,
        record: StorageRecord,
    ) -> Result<OperationResult, GatewayError> {
        let kind = record.kind();
        let request = self
            .authorize(self.client.post(self.url(kind, None)), ctx)
            .json(&record);
        let response = self.send(request, kind, None).await?;
        operation_result(response).await
    }

    async fn update(
        &self,
        ctx: &SessionContext,
        id: &str,
        record: StorageRecord,
    ) -> Result<OperationResult, GatewayError> {
        let kind = record.kind();
        let request = self
            .authorize(self.client.put(self.url(kind, Some(id))), ctx)
            .json(&record);
        let response = self.send(request, kind, Some(id)).await?;
        operation_result(response).await
    }

    async fn delete(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
        id: &str,
    ) -> Result<(), GatewayError> {
        let request = self.authorize(self.client.delete(self.url(kind, Some(id))), ctx);
        self.send(request, kind, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::{HeaderMap, StatusCode},
        routing::{get, put},
        Json, Router,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Backend {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Backend {
        fn note(&self, headers: &HeaderMap, line: String) {
            let company = headers
                .get(COMPANY_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            self.seen
                .lock()
                .unwrap()
                .push(format!("{} [{}] [{}]", line, company, auth));
        }
    }

    async fn list(
        State(backend): State<Backend>,
        Path(module): Path<String>,
        headers: HeaderMap,
    ) -> Result<Json<Value>, StatusCode> {
        backend.note(&headers, format!("GET {}", module));
        match module.as_str() {
            "armazens" => Ok(Json(json!([{"id": 1, "nome": "Central"}, {"id": 2, "nome": "Viana"}]))),
            "compras" => Ok(Json(json!({"success": true, "data": [{"id": "p-1", "total": "1140"}]}))),
            "clientes" => Ok(Json(json!({"success": false, "message": "sem permissão"}))),
            _ => Err(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    async fn create(
        State(backend): State<Backend>,
        Path(module): Path<String>,
        headers: HeaderMap,
        Json(mut body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        backend.note(&headers, format!("POST {}", module));
        if module == "metricas" {
            return (StatusCode::OK, Json(json!({"success": true, "id": 42})));
        }
        body["id"] = json!(42);
        (StatusCode::CREATED, Json(body))
    }

    async fn update(
        State(backend): State<Backend>,
        Path((module, id)): Path<(String, String)>,
        headers: HeaderMap,
    ) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
        backend.note(&headers, format!("PUT {}/{}", module, id));
        if id == "missing" {
            return Err((StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))));
        }
        Ok(Json(json!({"success": true, "id": id})))
    }

    async fn delete(
        State(backend): State<Backend>,
        Path((module, id)): Path<(String, String)>,
        headers: HeaderMap,
    ) -> StatusCode {
        backend.note(&headers, format!("DELETE {}/{}", module, id));
        StatusCode::NO_CONTENT
    }

    async fn serve(backend: Backend) -> String {
        let app = Router::new()
            .route("/api/{module}", get(list).post(create))
            .route("/api/{module}/{id}", put(update).delete(delete))
            .with_state(backend);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/", addr)
    }

    fn gateway(base_url: &str) -> HttpGateway {
        HttpGateway::new(base_url, Some("k-123".to_string()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_list_bare_and_enveloped() {
        let backend = Backend::default();
        let gateway = gateway(&serve(backend.clone()).await);
        let ctx = SessionContext::new("emp-1");

        let warehouses = gateway
            .list(&ctx, EntityKind::Warehouse)
            .await
            .unwrap()
            .into_records();
        assert_eq!(warehouses.len(), 2);
        assert_eq!(warehouses[1].id(), Some("2"));

        let purchases = gateway
            .list(&ctx, EntityKind::Purchase)
            .await
            .unwrap()
            .into_records();
        assert_eq!(purchases.len(), 1);

        let clients = gateway.list(&ctx, EntityKind::Client).await.unwrap();
        assert!(clients.into_records().is_empty());

        assert_eq!(
            backend.seen.lock().unwrap()[0],
            "GET armazens [emp-1] [Bearer k-123]"
        );
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let gateway = gateway(&serve(Backend::default()).await);
        let err = gateway
            .list(&SessionContext::default(), EntityKind::Metric)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(ref m) if m.starts_with("500")));
    }

    #[tokio::test]
    async fn test_create_reads_stored_row() {
        let gateway = gateway(&serve(Backend::default()).await);
        let record = StorageRecord::from_json(EntityKind::Warehouse, json!({"nome": "Lobito"})).unwrap();

        let result = gateway
            .create(&SessionContext::default(), record)
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.id.as_deref(), Some("42"));
        assert_eq!(result.data.unwrap()["nome"], "Lobito");
    }

    #[tokio::test]
    async fn test_create_envelope_with_numeric_id() {
        let gateway = gateway(&serve(Backend::default()).await);
        let record = StorageRecord::from_json(EntityKind::Metric, json!({"nome": "vendas"})).unwrap();

        let result = gateway
            .create(&SessionContext::default(), record)
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.id.as_deref(), Some("42"));
        assert_eq!(result.data, None);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let backend = Backend::default();
        let gateway = gateway(&serve(backend.clone()).await);
        let ctx = SessionContext::default();
        let record = StorageRecord::from_json(EntityKind::Warehouse, json!({"nome": "Lobito"})).unwrap();

        let result = gateway.update(&ctx, "w-7", record.clone()).await.unwrap();
        assert_eq!(result.id.as_deref(), Some("w-7"));

        let err = gateway.update(&ctx, "missing", record).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound { kind: EntityKind::Warehouse, .. }));

        gateway
            .delete(&ctx, EntityKind::Warehouse, "w-7")
            .await
            .unwrap();

        let seen = backend.seen.lock().unwrap().clone();
        assert_eq!(seen.last().unwrap(), "DELETE armazens/w-7 [-] [Bearer k-123]");
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, r#"{"message":"NIF duplicado"}"#),
            "400 Bad Request: NIF duplicado"
        );
        assert_eq!(
            rejection_message(StatusCode::BAD_GATEWAY, ""),
            "502 Bad Gateway"
        );
    }
}
