//! Property-Based Tests for Request Validation and Default Filling
//!
//! Two contracts hold for every conceivable payload:
//! - a create with a blank (empty or whitespace-only) name is always
//!   rejected with a 400 before storage is reached;
//! - omitted gameplay fields always deserialize to the canonical defaults,
//!   and storage-owned keys (`id`, `createdAt`) in a payload are ignored.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use proptest::prelude::*;
use tokio::runtime::Runtime;
use tower::ServiceExt;

use pongechec_api::{create_api_router, DbClient, DbConfig, SaveConfigurationRequest};
use pongechec_core::defaults;

fn test_runtime() -> Result<Runtime, TestCaseError> {
    Runtime::new().map_err(|e| TestCaseError::fail(format!("Failed to create runtime: {}", e)))
}

fn test_app() -> Result<Router, TestCaseError> {
    let db = DbClient::from_config(&DbConfig::default())
        .map_err(|e| TestCaseError::fail(format!("Failed to create pool: {}", e)))?;
    Ok(create_api_router(db))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_blank_names_are_always_rejected(name in "[ \\t]{0,8}") {
        let rt = test_runtime()?;
        let app = test_app()?;

        let payload = serde_json::json!({ "name": name }).to_string();

        rt.block_on(async move {
            let response = app
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/configurations")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(payload))
                        .unwrap(),
                )
                .await
                .unwrap();

            prop_assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            Ok(())
        })?;
    }
}

proptest! {
    #[test]
    fn prop_omitted_fields_take_defaults(
        ball_speed in proptest::option::of(1..=20i32),
        board_width in proptest::option::of(4..=16i32),
        roi_lives in proptest::option::of(1..=9i32),
        pion_points in proptest::option::of(1..=500i32),
    ) {
        let mut payload = serde_json::json!({ "name": "preset" });
        if let Some(v) = ball_speed {
            payload["ballSpeed"] = v.into();
        }
        if let Some(v) = board_width {
            payload["boardWidth"] = v.into();
        }
        if let Some(v) = roi_lives {
            payload["roiLives"] = v.into();
        }
        if let Some(v) = pion_points {
            payload["pionPoints"] = v.into();
        }

        let req: SaveConfigurationRequest = serde_json::from_value(payload).unwrap();

        prop_assert_eq!(req.ball_speed, ball_speed.unwrap_or(defaults::BALL_SPEED));
        prop_assert_eq!(req.board_width, board_width.unwrap_or(defaults::BOARD_WIDTH));
        prop_assert_eq!(req.roi_lives, roi_lives.unwrap_or(defaults::ROI_LIVES));
        prop_assert_eq!(req.pion_points, pion_points.unwrap_or(defaults::PION_POINTS));
        // Fields never mentioned stay at their defaults
        prop_assert_eq!(req.ball_damage, defaults::BALL_DAMAGE);
        prop_assert_eq!(req.reine_points, defaults::REINE_POINTS);
    }

    #[test]
    fn prop_storage_owned_keys_are_ignored(id in any::<i64>(), year in 2000..=2100i32) {
        let payload = serde_json::json!({
            "name": "echoed-back",
            "id": id,
            "createdAt": format!("{}-06-15T12:00:00Z", year),
        });

        let req: SaveConfigurationRequest = serde_json::from_value(payload).unwrap();

        prop_assert_eq!(req.name.as_str(), "echoed-back");
        prop_assert_eq!(req.ball_speed, defaults::BALL_SPEED);
    }
}
