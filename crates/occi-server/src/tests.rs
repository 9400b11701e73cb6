use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE, SERVER};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::{get, post};

use http_body_util::BodyExt as _;

use serde_json::{Value, json};

use tower::ServiceExt as _;

use occi::attributes::{AttributeType, NumberKind};
use occi::category::{Category, CategoryId};
use occi::config::RenderConfig;
use occi::entity::{Entity, Model};
use occi::render::{Item, Payload};
use occi::schema::{Attribute, Kind};

use crate::request::OcciRequest;
use crate::responses::codec::OcciResponse;
use crate::state::OcciState;

const INFRASTRUCTURE: &str = "http://schemas.ogf.org/occi/infrastructure#";
const COMPUTE_KIND: &str = "compute; scheme=\"http://schemas.ogf.org/occi/infrastructure#\"; class=\"kind\"";
const USER: &str = "alice";

struct Store {
    compute: Entity,
}

impl Store {
    fn new() -> Self {
        Self {
            compute: Entity::resource("1", Category::new(INFRASTRUCTURE, "compute"))
                .title("vm1")
                .attribute("occi.compute.cores", "2"),
        }
    }

    fn kinds() -> Vec<Kind> {
        vec![
            Kind::new(INFRASTRUCTURE, "compute")
                .title("Compute Resource")
                .location("/compute/")
                .attribute(Attribute::new("occi.compute.cores").type_name("Integer")),
        ]
    }
}

impl Model for Store {
    fn location_of(&self, entity_id: &str) -> Option<String> {
        Some(format!("/compute/{entity_id}"))
    }

    fn kind_of(&self, _entity_id: &str) -> Option<CategoryId> {
        Some(CategoryId::new(INFRASTRUCTURE, "compute"))
    }

    fn attribute_type(&self, _entity: &Entity, name: &str) -> Option<AttributeType> {
        (name == "occi.compute.cores").then_some(AttributeType::Number(NumberKind::Integer))
    }

    fn extension_of(&self, category: &CategoryId) -> Option<String> {
        category
            .as_str()
            .starts_with(INFRASTRUCTURE)
            .then(|| "http://schemas.ogf.org/occi/infrastructure".into())
    }
}

type AppState = OcciState<Store>;

async fn create(State(state): State<AppState>, request: OcciRequest) -> OcciResponse {
    let locations: Vec<String> = request
        .inputs
        .iter()
        .filter_map(|input| input.entity_id.as_deref())
        .map(|id| format!("/compute/{id}"))
        .collect();
    let items = locations
        .iter()
        .map(|location| Item::Location(location))
        .collect();
    state.respond(
        request.response_media,
        &Payload::List(items),
        StatusCode::CREATED,
    )
}

async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: OcciRequest,
) -> OcciResponse {
    let store = state.model();
    if store.compute.id == id {
        state.respond(
            request.response_media,
            &Payload::Entity(&store.compute),
            StatusCode::OK,
        )
    } else {
        state.message(
            request.response_media,
            StatusCode::NOT_FOUND,
            "Unknown resource",
        )
    }
}

async fn interface(State(state): State<AppState>, request: OcciRequest) -> OcciResponse {
    state.interface(request.response_media, &Store::kinds(), &[], None, USER)
}

async fn filtered_interface(
    State(state): State<AppState>,
    Path(filter): Path<String>,
    request: OcciRequest,
) -> OcciResponse {
    state.interface(
        request.response_media,
        &Store::kinds(),
        &[],
        Some(&filter),
        USER,
    )
}

fn app_with(config: RenderConfig) -> Router {
    Router::new()
        .route("/compute/", post(create))
        .route("/compute/{id}", get(read))
        .route("/-/", get(interface))
        .route("/-/{filter}", get(filtered_interface))
        .with_state(OcciState::new(Store::new()).with_config(config))
}

fn app() -> Router {
    app_with(RenderConfig::new().server_header("occi-test"))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

fn json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get_request(uri: &str, accept: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(ACCEPT, accept)
        .body(Body::empty())
        .unwrap()
}

fn values<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a str> {
    headers
        .get_all(name)
        .iter()
        .map(|value| value.to_str().unwrap())
        .collect()
}

fn json_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn create_from_json_collection() {
    let (status, headers, body) = send(
        app(),
        json_request(
            "POST",
            "/compute/",
            r#"{"resources":[
                {"id":"urn:uuid:a","kind":"http://schemas.ogf.org/occi/infrastructure#compute"},
                {"id":"b","kind":"http://schemas.ogf.org/occi/infrastructure#compute"}
            ]}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(values(&headers, CONTENT_TYPE.as_str()), ["application/json"]);
    assert_eq!(values(&headers, SERVER.as_str()), ["occi-test"]);
    assert_eq!(
        json_body(&body),
        json!({ "locations": ["/compute/a", "/compute/b"] })
    );
}

#[tokio::test]
async fn create_from_headers() {
    let request = Request::builder()
        .method("POST")
        .uri("/compute/")
        .header(CONTENT_TYPE, "text/occi")
        .header(ACCEPT, "text/occi")
        .header("Category", COMPUTE_KIND)
        .header("X-OCCI-Attribute", "occi.core.id=\"urn:uuid:c1\"")
        .header("X-OCCI-Attribute", "occi.core.title=\"vm1\"")
        .body(Body::empty())
        .unwrap();

    let (status, headers, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(values(&headers, CONTENT_TYPE.as_str()), ["text/occi"]);
    assert_eq!(values(&headers, "x-occi-location"), ["/compute/c1"]);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn invalid_json_is_rejected() {
    let (status, headers, body) = send(app(), json_request("POST", "/compute/", "{")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(values(&headers, SERVER.as_str()), ["occi-test"]);

    let body = json_body(&body);
    assert_eq!(body["status"], 400);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Category Parse: Invalid json input")
    );
}

#[tokio::test]
async fn rejection_follows_accept() {
    let request = Request::builder()
        .method("POST")
        .uri("/compute/")
        .header(CONTENT_TYPE, "application/occi+json")
        .header(ACCEPT, "text/occi")
        .body(Body::from(
            r#"{"term":"prod","scheme":"http://example.com/tags#","location":"/prod/","attributes":{"a":"b"}}"#,
        ))
        .unwrap();

    let (status, headers, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(values(&headers, CONTENT_TYPE.as_str()), ["text/occi"]);
    assert_eq!(
        body,
        "Attribute Parse: A mixin tag must not declare any attribute"
    );
}

#[tokio::test]
async fn unrenderable_payload() {
    // `{ }` decodes to one request without any identifier.
    let (status, _, body) = send(app(), json_request("POST", "/compute/", "{ }")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(&body),
        json!({
            "message": "Response Parse: Cannot represent this value, the list is empty",
            "status": 500
        })
    );
}

#[tokio::test]
async fn read_json() {
    let (status, headers, body) = send(app(), get_request("/compute/1", "application/json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        values(&headers, "accept"),
        ["text/occi, application/json, application/occi+json"]
    );

    let body = json_body(&body);
    assert_eq!(body["id"], "urn:uuid:1");
    assert_eq!(body["kind"], "http://schemas.ogf.org/occi/infrastructure#compute");
    assert_eq!(body["title"], "vm1");
    assert_eq!(body["location"], "/compute/1");
    assert_eq!(body["attributes"], json!({ "occi.compute.cores": 2 }));
}

#[tokio::test]
async fn read_headers() {
    let (status, headers, body) = send(app(), get_request("/compute/1", "text/occi")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(values(&headers, "category"), [COMPUTE_KIND]);
    assert_eq!(
        values(&headers, "x-occi-attribute"),
        [
            "occi.core.id=\"urn:uuid:1\"",
            "occi.core.title=\"vm1\"",
            "occi.compute.cores=2",
        ]
    );
    assert_eq!(values(&headers, "x-occi-location"), ["/compute/1"]);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn read_missing() {
    let (status, _, body) = send(app(), get_request("/compute/9", "application/json")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(&body),
        json!({ "message": "Unknown resource", "status": 404 })
    );
}

#[tokio::test]
async fn discovery() {
    let (status, _, body) = send(app(), get_request("/-/", "application/json")).await;

    assert_eq!(status, StatusCode::OK);
    let body = json_body(&body);
    let model = &body["model"][0];
    assert_eq!(model["id"], "http://schemas.ogf.org/occi/infrastructure");
    assert_eq!(model["kinds"][0]["term"], "compute");
    assert_eq!(model["kinds"][0]["location"], "/compute/");
    assert_eq!(
        model["kinds"][0]["attributes"]["occi.compute.cores"]["type"],
        "number"
    );

    let (status, _, body) = send(app(), get_request("/-/compute", "application/json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["model"][0]["kinds"][0]["term"], "compute");

    let (status, _, body) = send(app(), get_request("/-/storage", "application/json")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn invalid_header_value() {
    let app = app_with(RenderConfig::new().server_header("occi\r\ntest"));

    let (status, headers, body) = send(app, get_request("/compute/1", "application/json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(headers.get(SERVER).is_none());
    assert_eq!(
        json_body(&body),
        json!({ "message": "Internal error", "status": 500 })
    );
}
