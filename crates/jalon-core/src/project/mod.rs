//! Static project content consumed by the dashboard and the assistant.
//!
//! The dashboard is read-only: everything it shows (sprint plan, roster,
//! risks, success metrics) is fixed at build time. The types here model
//! that content; [`fixture`] carries the actual data. The assistant
//! serializes the whole fixture as JSON context for its system
//! instruction, so every field is serde-visible with camelCase keys.

mod fixture;

pub use fixture::PROJECT;

use serde::{Deserialize, Serialize};

/// Project header: title, schedule bounds and the pre-computed duration
/// label used as fallback when the dates fail to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub title: String,
    pub subtitle: String,
    /// Localized date string, `"<day> <MonthName> <year>"`.
    pub start_date: String,
    /// Localized date string, `"<day> <MonthName> <year>"`.
    pub end_date: String,
    /// Hand-written duration label, shown when date parsing fails.
    pub duration: String,
}

/// One card of the "État Actuel" summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusItem {
    pub label: String,
    pub desc: String,
}

/// A block of work inside a sprint, spanning a few days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintTask {
    /// Day range label within the sprint, e.g. `"J1-J2"`.
    pub days: String,
    pub title: String,
    pub items: Vec<String>,
}

/// One sprint of the delivery plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: u32,
    pub title: String,
    /// Human-readable date range, e.g. `"08 - 15 Décembre"`.
    pub dates: String,
    pub duration: String,
    pub tasks: Vec<SprintTask>,
}

/// A member of the project team and their assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub initials: String,
    pub tasks: Vec<String>,
}

/// One row of the risk table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub title: String,
    pub risk: String,
    pub mitigation: String,
    pub owner: String,
}

/// One row of the "Objectifs de Succès" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMetric {
    pub label: String,
    pub value: String,
    pub detail: String,
}

/// The complete dashboard content.
///
/// Immutable after construction; the single instance lives in
/// [`PROJECT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFixture {
    pub project: ProjectInfo,
    pub current_state: Vec<StatusItem>,
    pub objectives: Vec<String>,
    pub sprints: Vec<Sprint>,
    pub team: Vec<TeamMember>,
    pub risks: Vec<Risk>,
    pub metrics: Vec<SuccessMetric>,
    pub tech_stack: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_coherent() {
        assert_eq!(PROJECT.project.title, "Math Conquest Assistant");
        assert_eq!(PROJECT.sprints.len(), 3);
        assert_eq!(PROJECT.team.len(), 5);
        assert!(!PROJECT.risks.is_empty());
        assert!(!PROJECT.objectives.is_empty());
    }

    #[test]
    fn test_fixture_dates_parse() {
        use crate::schedule::compute_duration;

        let label = compute_duration(
            &PROJECT.project.start_date,
            &PROJECT.project.end_date,
            &PROJECT.project.duration,
        );
        // The computed label must come from the dates, not the fallback.
        assert_eq!(label, "23 jours (3 semaines)");
    }

    #[test]
    fn test_fixture_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&*PROJECT).expect("fixture serializes");
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"techStack\""));
        assert!(json.contains("\"currentState\""));
    }
}
