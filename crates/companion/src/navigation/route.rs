//! Step-by-step route generation.
//!
//! The plan is always walk → bus → walk; only the endpoint names and the
//! accessibility flags depend on the request.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::{NavigationError, NavigationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Walk,
    Bus,
    Train,
    Metro,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct RouteStep {
    pub id: String,
    pub instruction: String,
    pub distance: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub line: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityInfo {
    pub wheelchair_accessible: bool,
    pub audio_guidance: bool,
    pub visual_indicators: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub steps: Vec<RouteStep>,
    pub total_duration: String,
    pub total_distance: String,
    pub accessibility: AccessibilityInfo,
}

/// Traveller preferences. Accepted for forward compatibility; the mock
/// planner only reflects them in the accessibility block.
///
/// Every field is lenient: a value of the wrong shape reads as unset instead
/// of failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutePreferences {
    #[serde(deserialize_with = "lenient")]
    #[ts(optional)]
    pub wheelchair_accessible: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    #[ts(optional)]
    pub avoid_stairs: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub preferred_modes: Vec<StepKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct RouteRequest {
    #[ts(optional)]
    pub from: Option<String>,
    #[ts(optional)]
    pub to: Option<String>,
    #[serde(deserialize_with = "lenient")]
    #[ts(optional)]
    pub preferences: Option<RoutePreferences>,
}

/// Take any JSON value and keep it only if it has the expected shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl RouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            preferences: None,
        }
    }
}

fn required(value: &Option<String>) -> NavigationResult<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(NavigationError::MissingEndpoints)
}

/// Build the walk/bus/walk plan between two named places.
pub fn plan_route(request: &RouteRequest) -> NavigationResult<RoutePlan> {
    let from = required(&request.from)?;
    let to = required(&request.to)?;
    let preferences = request.preferences.clone().unwrap_or_default();

    tracing::debug!(from, to, "Planning route");

    let steps = vec![
        RouteStep {
            id: "1".to_string(),
            instruction: format!("Walk from {} to nearest bus stop", from),
            distance: "200m".to_string(),
            duration: "3 min".to_string(),
            kind: StepKind::Walk,
            line: None,
        },
        RouteStep {
            id: "2".to_string(),
            instruction: "Take Bus Route 42 towards Downtown".to_string(),
            distance: "2.5 km".to_string(),
            duration: "8 min".to_string(),
            kind: StepKind::Bus,
            line: Some("Route 42".to_string()),
        },
        RouteStep {
            id: "3".to_string(),
            instruction: format!("Walk to {}", to),
            distance: "300m".to_string(),
            duration: "4 min".to_string(),
            kind: StepKind::Walk,
            line: None,
        },
    ];

    Ok(RoutePlan {
        steps,
        total_duration: "15 min".to_string(),
        total_distance: "3.0 km".to_string(),
        accessibility: AccessibilityInfo {
            wheelchair_accessible: preferences.wheelchair_accessible.unwrap_or(true),
            audio_guidance: true,
            visual_indicators: true,
        },
    })
}

/// One sentence per step, suitable for reading aloud
pub fn spoken_summary(plan: &RoutePlan) -> String {
    let mut parts: Vec<String> = plan
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("Step {}: {}, {}.", i + 1, step.instruction, step.duration))
        .collect();
    parts.push(format!(
        "Total journey time {}, distance {}.",
        plan.total_duration, plan.total_distance
    ));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_uses_endpoint_names() {
        let plan = plan_route(&RouteRequest::new("Central Park", "City Library")).unwrap();
        assert_eq!(plan.steps.len(), 3);
        assert_eq!(
            plan.steps[0].instruction,
            "Walk from Central Park to nearest bus stop"
        );
        assert_eq!(plan.steps[2].instruction, "Walk to City Library");
        assert_eq!(plan.steps[1].line.as_deref(), Some("Route 42"));
        assert_eq!(plan.total_duration, "15 min");
        assert_eq!(plan.total_distance, "3.0 km");
    }

    #[test]
    fn test_blank_endpoints_are_rejected() {
        let cases = [
            RouteRequest::default(),
            RouteRequest::new("", "Library"),
            RouteRequest::new("Park", "   "),
            RouteRequest {
                from: Some("Park".into()),
                ..Default::default()
            },
        ];
        for request in cases {
            assert_eq!(plan_route(&request), Err(NavigationError::MissingEndpoints));
        }
    }

    #[test]
    fn test_wheelchair_preference_is_reflected() {
        let mut request = RouteRequest::new("A", "B");
        request.preferences = Some(RoutePreferences {
            wheelchair_accessible: Some(false),
            ..Default::default()
        });
        let plan = plan_route(&request).unwrap();
        assert!(!plan.accessibility.wheelchair_accessible);
        assert!(plan.accessibility.audio_guidance);
    }

    #[test]
    fn test_malformed_preferences_are_ignored() {
        let request: RouteRequest = serde_json::from_str(
            r#"{"from":"A","to":"B","preferences":{"wheelchairAccessible":"yes","avoidStairs":true,"preferredModes":["bike"]}}"#,
        )
        .unwrap();
        let preferences = request.preferences.clone().unwrap();
        assert_eq!(preferences.wheelchair_accessible, None);
        assert_eq!(preferences.avoid_stairs, Some(true));
        assert!(preferences.preferred_modes.is_empty());
        assert!(plan_route(&request).unwrap().accessibility.wheelchair_accessible);

        let request: RouteRequest =
            serde_json::from_str(r#"{"from":"A","to":"B","preferences":"none"}"#).unwrap();
        assert_eq!(request.preferences, None);
    }

    #[test]
    fn test_valid_preference_survives_unknown_modes() {
        let request: RouteRequest = serde_json::from_str(
            r#"{"from":"A","to":"B","preferences":{"wheelchairAccessible":false,"preferredModes":["bike"]}}"#,
        )
        .unwrap();
        let plan = plan_route(&request).unwrap();
        assert!(!plan.accessibility.wheelchair_accessible);
    }

    #[test]
    fn test_wire_shape() {
        let plan = plan_route(&RouteRequest::new("A", "B")).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["totalDuration"], "15 min");
        assert_eq!(json["accessibility"]["wheelchairAccessible"], true);
        assert_eq!(json["steps"][0]["type"], "walk");
        assert!(json["steps"][0].get("line").is_none());
        assert_eq!(json["steps"][1]["line"], "Route 42");
    }

    #[test]
    fn test_spoken_summary_mentions_every_step() {
        let plan = plan_route(&RouteRequest::new("Home", "Work")).unwrap();
        let summary = spoken_summary(&plan);
        assert!(summary.starts_with("Step 1: Walk from Home to nearest bus stop, 3 min."));
        assert!(summary.contains("Step 3: Walk to Work, 4 min."));
        assert!(summary.ends_with("Total journey time 15 min, distance 3.0 km."));
    }
}
