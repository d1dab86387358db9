//! Advice derived from the tank itself rather than the readings.

use super::models::TankSnapshot;

pub const SMALL_TANK_ADVICE: &str =
    "Small tanks require more frequent monitoring - test at least twice a week";
pub const HIGH_MAINTENANCE_ADVICE: &str =
    "High-maintenance livestock requires daily monitoring of key parameters";
pub const SKIMMER_ADVICE: &str = "Consider adding a protein skimmer to improve water quality";

const SMALL_TANK_GALLONS: f64 = 20.0;

pub fn tank_recommendations(tank: Option<&TankSnapshot>) -> Vec<String> {
    let Some(tank) = tank else {
        return Vec::new();
    };

    let mut recommendations = Vec::new();

    if tank.size_gallons < SMALL_TANK_GALLONS {
        recommendations.push(SMALL_TANK_ADVICE.to_string());
    }

    let high_maintenance = tank
        .livestock
        .iter()
        .any(|l| l.care_level.is_some_and(|c| c.is_high_maintenance()));
    if high_maintenance {
        recommendations.push(HIGH_MAINTENANCE_ADVICE.to_string());
    }

    let has_skimmer = tank
        .equipment
        .iter()
        .any(|e| e.name.to_lowercase().contains("skimmer"));
    if !has_skimmer {
        recommendations.push(SKIMMER_ADVICE.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::models::{CareLevel, Equipment, Livestock};

    fn tank(size_gallons: f64) -> TankSnapshot {
        TankSnapshot {
            name: None,
            size_gallons,
            livestock: vec![],
            equipment: vec![],
        }
    }

    #[test]
    fn test_no_tank_no_advice() {
        assert!(tank_recommendations(None).is_empty());
    }

    #[test]
    fn test_small_empty_tank() {
        let recs = tank_recommendations(Some(&tank(10.0)));
        assert_eq!(recs, vec![SMALL_TANK_ADVICE.to_string(), SKIMMER_ADVICE.to_string()]);
    }

    #[test]
    fn test_skimmer_match_is_case_insensitive() {
        let mut t = tank(75.0);
        t.equipment.push(Equipment {
            name: "Reef Octopus Protein SKIMMER".to_string(),
        });
        assert!(tank_recommendations(Some(&t)).is_empty());
    }

    #[test]
    fn test_high_maintenance_livestock() {
        let mut t = tank(40.0);
        t.equipment.push(Equipment {
            name: "Skimmer".to_string(),
        });
        t.livestock.push(Livestock {
            name: "Clownfish".to_string(),
            care_level: Some(CareLevel::Beginner),
        });
        assert!(tank_recommendations(Some(&t)).is_empty());

        t.livestock.push(Livestock {
            name: "Acropora".to_string(),
            care_level: Some(CareLevel::Expert),
        });
        assert_eq!(
            tank_recommendations(Some(&t)),
            vec![HIGH_MAINTENANCE_ADVICE.to_string()]
        );
    }

    #[test]
    fn test_unknown_care_level_tag() {
        let t: TankSnapshot = serde_json::from_value(serde_json::json!({
            "size_gallons": 30,
            "livestock": [{ "name": "Mystery", "care_level": "Moderate" }],
            "equipment": [{ "name": "skimmer" }]
        }))
        .unwrap();
        assert_eq!(t.livestock[0].care_level, Some(CareLevel::Unknown));
        assert!(tank_recommendations(Some(&t)).is_empty());
    }
}
