//! JSON plan file adapter.

use std::path::{Path, PathBuf};

use crate::infrastructure::ports::{CommunityPlan, PlanError, PlanSource};

/// Reads a `CommunityPlan` from a JSON file on every `load`.
pub struct JsonPlanFile {
    path: PathBuf,
}

impl JsonPlanFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanSource for JsonPlanFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<CommunityPlan, PlanError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| PlanError::Io {
            path: self.path.clone(),
            source,
        })?;
        let plan: CommunityPlan =
            serde_json::from_str(&raw).map_err(|source| PlanError::Json {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            neighborhoods = plan.neighborhoods.len(),
            "Loaded plan file"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homestead_domain::{Area, HouseKind, Room};
    use std::io::Write;

    fn write_plan(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_plan_with_defaults() {
        let file = write_plan(
            r#"{
                "neighborhoods": [
                    {
                        "name": "Elm Street",
                        "houses": [
                            { "rooms": [{ "name": "bedroom", "size": 10 }] },
                            { "kind": "apartment", "available_space": 60, "rooms": [] }
                        ]
                    }
                ]
            }"#,
        );

        let plan = JsonPlanFile::new(file.path()).load().unwrap();

        let houses = &plan.neighborhoods[0].houses;
        assert_eq!(plan.neighborhoods[0].name, "Elm Street");
        assert_eq!(houses[0].kind, HouseKind::House);
        assert_eq!(houses[0].available_space, None);
        assert_eq!(houses[0].rooms, vec![Room::new("bedroom", 10.0)]);
        assert_eq!(houses[1].kind, HouseKind::Apartment);
        assert_eq!(houses[1].available_space, Some(Area::new(60.0)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonPlanFile::new(dir.path().join("absent.json"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, PlanError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let file = write_plan(r#"{ "neighborhoods": [ { "houses": [ { "kind": "castle" } ] } ] }"#);
        let err = JsonPlanFile::new(file.path()).load().unwrap_err();
        assert!(matches!(err, PlanError::Json { .. }));
    }

    #[test]
    fn describe_is_the_path() {
        let source = JsonPlanFile::new("plans/town.json");
        assert_eq!(source.describe(), "plans/town.json");
        assert_eq!(source.path(), Path::new("plans/town.json"));
    }
}
