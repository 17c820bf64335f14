//! Built-in demonstration scenarios
//!
//! A fixed set of worked examples covering each family, single and combined
//! conditions, a height band that does not qualify, and an unrecognised
//! category. Shown by the `scenarios` command.

use crate::rules::Condition::{self, *};
use crate::rules::{ConditionSet, Evaluation, explain};

/// A described example input
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub description: &'static str,
    pub category: &'static str,
    pub conditions: &'static [Condition],
}

impl Scenario {
    pub fn condition_set(&self) -> ConditionSet {
        self.conditions.iter().copied().collect()
    }

    pub fn run(&self) -> Evaluation {
        explain(self.category, &self.condition_set())
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        description: "Universal category, no conditions",
        category: "2U1",
        conditions: &[],
    },
    Scenario {
        description: "Universal category, no conditions",
        category: "2U9",
        conditions: &[],
    },
    Scenario {
        description: "Universal category with other conditions",
        category: "2U5",
        conditions: &[HighwayAdjacent, HeightAbove2m],
    },
    Scenario {
        description: "Adjacent to highway",
        category: "2A1",
        conditions: &[HighwayAdjacent],
    },
    Scenario {
        description: "Faces listed building",
        category: "2A2",
        conditions: &[FacesListedBuilding],
    },
    Scenario {
        description: "Height above 2m",
        category: "2A3",
        conditions: &[HeightAbove2m],
    },
    Scenario {
        description: "Listed building constraint",
        category: "2A4",
        conditions: &[ListedBuildingConstraint],
    },
    Scenario {
        description: "Article 2(3) land",
        category: "2A5",
        conditions: &[Article2_3Land],
    },
    Scenario {
        description: "No conditions met",
        category: "2A6",
        conditions: &[],
    },
    Scenario {
        description: "Highway adjacent and Article 4 direction",
        category: "2A1",
        conditions: &[HighwayAdjacent, Article4Directive],
    },
    Scenario {
        description: "Faces listed building, AONB and PD rights removed",
        category: "2A3",
        conditions: &[FacesListedBuilding, Aonb, PdRightsRemoved],
    },
    Scenario {
        description: "Height up to 1m and no other constraints",
        category: "2A5",
        conditions: &[HeightUpTo1m],
    },
    Scenario {
        description: "Unrecognised category",
        category: "2B1",
        conditions: &[],
    },
];

/// All demonstration scenarios, in presentation order
pub fn scenarios() -> &'static [Scenario] {
    SCENARIOS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Outcome;

    #[test]
    fn test_scenario_outcomes() {
        let outcomes: Vec<Outcome> = scenarios().iter().map(|s| s.run().outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Required,
                Outcome::Required,
                Outcome::Required,
                Outcome::Required,
                Outcome::Required,
                Outcome::Required,
                Outcome::Required,
                Outcome::Required,
                Outcome::NotRequired,
                Outcome::Required,
                Outcome::Required,
                Outcome::NotRequired,
                Outcome::UnknownCategory,
            ]
        );
    }

    #[test]
    fn test_condition_set_from_scenario() {
        let scenario = scenarios()
            .iter()
            .find(|s| s.conditions.len() == 3)
            .unwrap();
        let set = scenario.condition_set();
        assert_eq!(set.active().count(), 3);
        assert!(set.is_aonb);
    }
}
