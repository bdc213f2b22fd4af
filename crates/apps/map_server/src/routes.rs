use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use foundation::geo::LatLon;
use foundation::viewport::validate_position;
use http::Method;
use layers::LayerId;
use runtime::{MapStore, Rendered, RenderDescriptor, UpdateCycle, ViewInput};
use scene::picking::FeatureInfo;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    store: Arc<MapStore>,
    style_url: Arc<str>,
}

impl AppState {
    pub fn new(store: MapStore, style_url: impl Into<Arc<str>>) -> Self {
        Self {
            store: Arc::new(store),
            style_url: style_url.into(),
        }
    }

    fn respond(&self, rendered: Rendered) -> MapResponse {
        MapResponse {
            cycle: rendered.cycle,
            style_url: self.style_url.to_string(),
            descriptor: rendered.descriptor,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub cycle: UpdateCycle,
    pub style_url: String,
    pub descriptor: RenderDescriptor,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub layer: LayerId,
    pub active: bool,
    #[serde(flatten)]
    pub map: MapResponse,
}

/// One checkbox on the toggle surface.
#[derive(Debug, PartialEq, Serialize)]
pub struct LayerEntry {
    pub layer: LayerId,
    pub label: &'static str,
    pub active: bool,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/map", get(get_map))
        .route("/map/layers", get(get_layers))
        .route("/map/update", post(post_update))
        .route("/map/layers/:layer/toggle", post(post_toggle))
        .route("/map/pick", post(post_pick))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_map(State(state): State<AppState>) -> Json<MapResponse> {
    Json(state.respond(state.store.current()))
}

async fn get_layers(State(state): State<AppState>) -> Json<Vec<LayerEntry>> {
    let active = state.store.view_state().layers;
    let entries = LayerId::ALL
        .into_iter()
        .map(|layer| LayerEntry {
            layer,
            label: layer.label(),
            active: active.contains(layer),
        })
        .collect();
    Json(entries)
}

async fn post_update(
    State(state): State<AppState>,
    body: Result<Json<ViewInput>, JsonRejection>,
) -> Result<Json<MapResponse>, ApiError> {
    let Json(input) = body?;
    if let Some(event) = &input.viewport {
        event.validate()?;
    }
    Ok(Json(state.respond(state.store.apply(input))))
}

async fn post_toggle(
    State(state): State<AppState>,
    Path(layer): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let layer: LayerId = layer.parse()?;
    let (active, rendered) = state.store.toggle_layer(layer);
    Ok(Json(ToggleResponse {
        layer,
        active,
        map: state.respond(rendered),
    }))
}

async fn post_pick(
    State(state): State<AppState>,
    body: Result<Json<LatLon>, JsonRejection>,
) -> Result<Json<FeatureInfo>, ApiError> {
    let Json(at) = body?;
    validate_position(at)?;
    state
        .store
        .pick(at)
        .map(Json)
        .ok_or(ApiError::NothingPicked)
}

#[cfg(test)]
mod tests {
    use super::{AppState, LayerEntry, get_layers, get_map, post_pick, post_toggle, post_update};
    use crate::error::ApiError;
    use axum::Json;
    use axum::body::Body;
    use axum::extract::{FromRequest, Path, State};
    use axum::http::{Request, StatusCode, header};
    use foundation::geo::LatLon;
    use foundation::viewport::{Viewport, ViewportEvent};
    use layers::{LayerId, LayerSet};
    use pretty_assertions::assert_eq;
    use runtime::{MapStore, ViewInput};

    fn state() -> AppState {
        AppState::new(MapStore::default(), "https://example.test/style.json")
    }

    #[tokio::test]
    async fn get_map_returns_startup_state() {
        let Json(resp) = get_map(State(state())).await;
        assert_eq!(resp.cycle.index, 0);
        assert_eq!(resp.style_url, "https://example.test/style.json");
        assert_eq!(resp.descriptor.viewport(), &Viewport::default());
        assert_eq!(
            resp.descriptor.layers().collect::<Vec<_>>(),
            LayerId::ALL.to_vec()
        );
    }

    #[tokio::test]
    async fn update_applies_layers_and_viewport_together() {
        let state = state();
        let input = ViewInput {
            layers: Some(LayerSet::empty()),
            viewport: Some(ViewportEvent::at(LatLon::new(1.0, 2.0)).with_zoom(5.0)),
        };
        let Json(resp) = post_update(State(state.clone()), Ok(Json(input))).await.unwrap();

        assert_eq!(resp.cycle.index, 1);
        assert!(resp.descriptor.instructions().is_empty());
        assert_eq!(
            resp.descriptor.viewport(),
            &Viewport::looking_at(LatLon::new(1.0, 2.0), 5.0)
        );

        // A later redraw still sees the persisted camera.
        let Json(again) = get_map(State(state)).await;
        assert_eq!(again.descriptor.viewport(), resp.descriptor.viewport());
    }

    #[tokio::test]
    async fn invalid_viewport_leaves_state_untouched() {
        let state = state();
        let input = ViewInput::viewport(ViewportEvent::at(LatLon::new(0.0, 200.0)));
        let err = post_update(State(state.clone()), Ok(Json(input)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidViewport(_)));

        let Json(resp) = get_map(State(state)).await;
        assert_eq!(resp.cycle.index, 0);
        assert_eq!(resp.descriptor.viewport(), &Viewport::default());
    }

    #[tokio::test]
    async fn toggle_flips_one_layer() {
        let state = state();
        let Json(resp) = post_toggle(State(state.clone()), Path("points".to_string()))
            .await
            .unwrap();
        assert_eq!(resp.layer, LayerId::Points);
        assert!(!resp.active);
        assert_eq!(
            resp.map.descriptor.layers().collect::<Vec<_>>(),
            vec![LayerId::Regions]
        );

        let err = post_toggle(State(state), Path("roads".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownLayer(_)));
    }

    #[tokio::test]
    async fn pick_reports_popup_text() {
        let state = state();
        let Json(info) = post_pick(State(state.clone()), Ok(Json(LatLon::new(40.0, 0.0))))
            .await
            .unwrap();
        assert_eq!(info.title, "City A");
        assert_eq!(info.detail, "Type: Capital");

        let err = post_pick(State(state), Ok(Json(LatLon::new(-70.0, -120.0))))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NothingPicked));
    }

    #[tokio::test]
    async fn layers_lists_labels_and_active_flags() {
        let state = state();
        state.store.toggle_layer(LayerId::Regions);

        let Json(entries) = get_layers(State(state)).await;
        assert_eq!(
            entries,
            vec![
                LayerEntry {
                    layer: LayerId::Regions,
                    label: "Regions",
                    active: false,
                },
                LayerEntry {
                    layer: LayerId::Points,
                    label: "Points of Interest",
                    active: true,
                },
            ]
        );
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/map/update")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn unknown_layer_in_update_body_is_a_bad_request() {
        let state = state();
        let body = Json::<ViewInput>::from_request(json_request(r#"{"layers":["roads"]}"#), &()).await;
        let err = post_update(State(state.clone()), body).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidBody(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("roads"), "{err}");

        // Nothing reached the store.
        let Json(resp) = get_map(State(state)).await;
        assert_eq!(resp.cycle.index, 0);
    }

    #[tokio::test]
    async fn malformed_pick_body_is_a_bad_request() {
        let body = Json::<LatLon>::from_request(json_request(r#"{"lat":"north"}"#), &()).await;
        let err = post_pick(State(state()), body).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn toggle_response_flattens_map_fields() {
        let state = state();
        let (active, rendered) = state.store.toggle_layer(LayerId::Regions);
        let resp = super::ToggleResponse {
            layer: LayerId::Regions,
            active,
            map: state.respond(rendered),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["layer"], "regions");
        assert_eq!(json["active"], false);
        assert_eq!(json["cycle"], 1);
        assert_eq!(json["descriptor"]["instructions"][0]["layer"], "points");
    }
}
