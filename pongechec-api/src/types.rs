//! API Request Types
//!
//! Request bodies deserialize into the record shape minus the
//! storage-owned fields (`id`, `created_at`). Serde fills omitted gameplay
//! fields from the canonical defaults and drops unknown keys, so a
//! caller-supplied `id` or `createdAt` never reaches storage.

use serde::{Deserialize, Serialize};

use pongechec_core::defaults;

/// Body of POST and PUT `/api/configurations` requests.
///
/// An omitted `name` deserializes to the empty string and is rejected by
/// the resource layer on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SaveConfigurationRequest {
    /// Preset name, required and non-blank on create
    pub name: String,
    pub ball_speed: i32,
    pub ball_damage: i32,
    pub board_width: i32,
    pub starting_player: i32,
    pub roi_lives: i32,
    pub reine_lives: i32,
    pub fou_lives: i32,
    pub tour_lives: i32,
    pub chevalier_lives: i32,
    pub pion_lives: i32,
    pub roi_points: i32,
    pub reine_points: i32,
    pub fou_points: i32,
    pub tour_points: i32,
    pub chevalier_points: i32,
    pub pion_points: i32,
}

impl Default for SaveConfigurationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            ball_speed: defaults::BALL_SPEED,
            ball_damage: defaults::BALL_DAMAGE,
            board_width: defaults::BOARD_WIDTH,
            starting_player: defaults::STARTING_PLAYER,
            roi_lives: defaults::ROI_LIVES,
            reine_lives: defaults::REINE_LIVES,
            fou_lives: defaults::FOU_LIVES,
            tour_lives: defaults::TOUR_LIVES,
            chevalier_lives: defaults::CHEVALIER_LIVES,
            pion_lives: defaults::PION_LIVES,
            roi_points: defaults::ROI_POINTS,
            reine_points: defaults::REINE_POINTS,
            fou_points: defaults::FOU_POINTS,
            tour_points: defaults::TOUR_POINTS,
            chevalier_points: defaults::CHEVALIER_POINTS,
            pion_points: defaults::PION_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only_payload_takes_defaults() {
        let req: SaveConfigurationRequest =
            serde_json::from_str(r#"{"name": "Classic"}"#).unwrap();

        assert_eq!(req.name, "Classic");
        assert_eq!(req.ball_speed, 3);
        assert_eq!(req.ball_damage, 1);
        assert_eq!(req.board_width, 8);
        assert_eq!(req.starting_player, 1);
        assert_eq!(req.roi_lives, 3);
        assert_eq!(req.pion_lives, 1);
        assert_eq!(req.roi_points, 100);
        assert_eq!(req.pion_points, 10);
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let req: SaveConfigurationRequest =
            serde_json::from_str(r#"{"name": "Fast", "ballSpeed": 5, "reineLives": 4}"#).unwrap();

        assert_eq!(req.ball_speed, 5);
        assert_eq!(req.reine_lives, 4);
        // Untouched fields keep their defaults
        assert_eq!(req.ball_damage, 1);
        assert_eq!(req.reine_points, 50);
    }

    #[test]
    fn test_storage_owned_keys_are_ignored() {
        // Clients echo full records back on PUT; id and createdAt must be
        // silently dropped rather than rejected.
        let req: SaveConfigurationRequest = serde_json::from_str(
            r#"{"id": 42, "name": "Echo", "createdAt": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(req.name, "Echo");
    }

    #[test]
    fn test_empty_payload_has_blank_name() {
        let req: SaveConfigurationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
        assert_eq!(req.ball_speed, 3);
    }
}
