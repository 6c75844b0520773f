//! Build report types and rendering.

use std::collections::BTreeMap;
use std::fmt::Write;

use homestead_domain::{
    Area, DomainError, House, HouseId, HouseKind, Neighborhood, NeighborhoodId, SizeTally,
};
use serde::Serialize;

/// A planned room that was left out because its house was full.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomRejection {
    pub neighborhood: String,
    pub house_id: HouseId,
    pub house_kind: HouseKind,
    pub room: String,
    pub required: Area,
    pub available: Area,
}

impl RoomRejection {
    /// Returns `None` for errors other than `DomainError::CapacityExceeded`.
    pub fn from_error(neighborhood: &str, house: &House, err: DomainError) -> Option<Self> {
        match err {
            DomainError::CapacityExceeded {
                room,
                required,
                available,
            } => Some(Self {
                neighborhood: neighborhood.to_string(),
                house_id: house.id(),
                house_kind: house.kind(),
                room,
                required,
                available,
            }),
            _ => None,
        }
    }
}

/// Result of a build: the neighborhoods, what was skipped, and the tally.
#[derive(Debug)]
pub struct BuildReport {
    neighborhoods: Vec<Neighborhood>,
    rejections: Vec<RoomRejection>,
    tally: SizeTally,
}

impl BuildReport {
    pub fn new(
        neighborhoods: Vec<Neighborhood>,
        rejections: Vec<RoomRejection>,
        tally: SizeTally,
    ) -> Self {
        Self {
            neighborhoods,
            rejections,
            tally,
        }
    }

    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    pub fn rejections(&self) -> &[RoomRejection] {
        &self.rejections
    }

    pub fn tally_total(&self) -> Area {
        self.tally.total()
    }

    /// Serializable view of the report.
    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            neighborhoods: self
                .neighborhoods
                .iter()
                .map(NeighborhoodSummary::from_neighborhood)
                .collect(),
            rejections: &self.rejections,
            tally_total: self.tally_total(),
        }
    }

    /// Plain text rendering: every house's description, per-neighborhood
    /// totals and type counts, skipped rooms, then the tally.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for neighborhood in &self.neighborhoods {
            let name = if neighborhood.name().is_empty() {
                "(unnamed)"
            } else {
                neighborhood.name()
            };
            let _ = writeln!(
                out,
                "== {} ({} houses, size {}) ==",
                name,
                neighborhood.house_count(),
                neighborhood.size()
            );
            for house in neighborhood.houses() {
                let _ = writeln!(out, "{}", house);
                out.push('\n');
            }

            let counts: Vec<String> = neighborhood
                .house_type_counts()
                .into_iter()
                .map(|(kind, count)| format!("{}={}", kind, count))
                .collect();
            let _ = writeln!(out, "Types: {}", counts.join(", "));
            out.push('\n');
        }

        for rejection in &self.rejections {
            let _ = writeln!(
                out,
                "Skipped: {} needs {}; only {} available ({} in {})",
                rejection.room,
                rejection.required,
                rejection.available,
                rejection.house_kind,
                rejection.neighborhood
            );
        }

        let _ = writeln!(out, "Tally total: {}", self.tally_total());
        out
    }
}

#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub neighborhoods: Vec<NeighborhoodSummary<'a>>,
    pub rejections: &'a [RoomRejection],
    pub tally_total: Area,
}

#[derive(Debug, Serialize)]
pub struct NeighborhoodSummary<'a> {
    pub id: NeighborhoodId,
    pub name: &'a str,
    pub size: Area,
    pub house_type_counts: BTreeMap<&'static str, usize>,
    pub houses: &'a [House],
}

impl<'a> NeighborhoodSummary<'a> {
    fn from_neighborhood(neighborhood: &'a Neighborhood) -> Self {
        Self {
            id: neighborhood.id(),
            name: neighborhood.name(),
            size: neighborhood.size(),
            house_type_counts: neighborhood
                .house_type_counts()
                .into_iter()
                .map(|(kind, count)| (kind.key(), count))
                .collect(),
            houses: neighborhood.houses(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homestead_domain::Room;

    fn report() -> BuildReport {
        let tally = SizeTally::new();
        let mut house = House::with_capacity(20.0);
        let err = house
            .add_rooms([Room::new("bedroom", 12.0), Room::new("kitchen", 9.0)])
            .unwrap_err();
        let rejection = RoomRejection::from_error("Oak Lane", &house, err).unwrap();

        let mut oak = Neighborhood::new(tally.clone()).with_name("Oak Lane");
        oak.add_houses([house, House::of_kind(HouseKind::Apartment)]);
        let unnamed = Neighborhood::new(tally.clone());

        BuildReport::new(vec![oak, unnamed], vec![rejection], tally)
    }

    #[test]
    fn renders_text() {
        let expected = "\
== Oak Lane (2 houses, size 12) ==
House:
bedroom, 12m

Apartment:


Types: House=1, Apartment=1

== (unnamed) (0 houses, size 0) ==
Types: \n\
\n\
Skipped: kitchen needs 9; only 8 available (House in Oak Lane)
Tally total: 12
";
        assert_eq!(report().render_text(), expected);
    }

    #[test]
    fn summary_serializes_to_json() {
        let report = report();
        let json = serde_json::to_value(report.summary()).unwrap();

        assert_eq!(json["tally_total"], 12.0);
        assert_eq!(json["neighborhoods"][0]["name"], "Oak Lane");
        assert_eq!(json["neighborhoods"][0]["size"], 12.0);
        assert_eq!(json["neighborhoods"][0]["house_type_counts"]["apartment"], 1);
        assert_eq!(json["neighborhoods"][0]["houses"][0]["rooms"][0]["name"], "bedroom");
        assert_eq!(json["rejections"][0]["room"], "kitchen");
        assert_eq!(json["rejections"][0]["house_kind"], "house");
    }

    #[test]
    fn from_error_ignores_other_errors() {
        let house = House::new();
        assert!(RoomRejection::from_error("x", &house, DomainError::parse("nope")).is_none());
    }
}
