//! Rule types
//!
//! Core types used by the permission evaluator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Regulatory category code of a site, e.g. `2U1` or `2A3`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CategoryCode(String);

impl CategoryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CategoryCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for CategoryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Family of category codes, identified by a literal prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFamily {
    /// No permitted development allowance; permission always required
    Universal,
    /// Permitted development applies unless a qualifying condition holds
    Conditional,
}

impl CategoryFamily {
    /// The literal prefix that identifies the family
    pub const fn prefix(&self) -> &'static str {
        match self {
            CategoryFamily::Universal => "2U",
            CategoryFamily::Conditional => "2A",
        }
    }

    /// Resolve the family of a raw category code.
    ///
    /// Matching is case-sensitive and anchored at the start of the code.
    pub fn of(code: &str) -> Option<Self> {
        [CategoryFamily::Universal, CategoryFamily::Conditional]
            .into_iter()
            .find(|family| code.starts_with(family.prefix()))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            CategoryFamily::Universal => "universal",
            CategoryFamily::Conditional => "conditional",
        }
    }
}

impl fmt::Display for CategoryFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A site condition that may bear on the permission decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Adjacent to a highway used by vehicular traffic
    #[serde(rename = "is_highway_adjacent")]
    HighwayAdjacent,
    /// Faces onto a property containing a listed building
    #[serde(rename = "faces_listed_building")]
    FacesListedBuilding,
    /// Height up to 1 metre
    #[serde(rename = "height_up_to_1m")]
    HeightUpTo1m,
    /// Height above 1 metre and up to 2 metres
    #[serde(rename = "height_above_1m_to_2m")]
    HeightAbove1mTo2m,
    /// Height above 2 metres
    #[serde(rename = "height_above_2m")]
    HeightAbove2m,
    /// The property itself is a listed building
    #[serde(rename = "is_listed_building_constraint")]
    ListedBuildingConstraint,
    /// Article 2(3) land
    #[serde(rename = "is_article_2_3_land")]
    Article2_3Land,
    /// Article 2(4) land
    #[serde(rename = "is_article_2_4_land")]
    Article2_4Land,
    /// An Article 4 direction removes permitted development rights
    #[serde(rename = "is_article_4_directive")]
    Article4Directive,
    /// Within an Area of Outstanding Natural Beauty
    #[serde(rename = "is_aonb")]
    Aonb,
    /// Works affect a tree covered by a Tree Preservation Order
    #[serde(rename = "affects_tpo")]
    AffectsTpo,
    /// Permitted development rights were removed previously
    #[serde(rename = "pd_rights_removed")]
    PdRightsRemoved,
    /// New-build property with restrictions on boundary treatments
    #[serde(rename = "is_new_build_restriction")]
    NewBuildRestriction,
}

impl Condition {
    /// Every condition, in canonical order
    pub const ALL: [Condition; 13] = [
        Condition::HighwayAdjacent,
        Condition::FacesListedBuilding,
        Condition::HeightUpTo1m,
        Condition::HeightAbove1mTo2m,
        Condition::HeightAbove2m,
        Condition::ListedBuildingConstraint,
        Condition::Article2_3Land,
        Condition::Article2_4Land,
        Condition::Article4Directive,
        Condition::Aonb,
        Condition::AffectsTpo,
        Condition::PdRightsRemoved,
        Condition::NewBuildRestriction,
    ];

    /// Get the condition's flag name as used in requests
    pub const fn as_str(&self) -> &'static str {
        match self {
            Condition::HighwayAdjacent => "is_highway_adjacent",
            Condition::FacesListedBuilding => "faces_listed_building",
            Condition::HeightUpTo1m => "height_up_to_1m",
            Condition::HeightAbove1mTo2m => "height_above_1m_to_2m",
            Condition::HeightAbove2m => "height_above_2m",
            Condition::ListedBuildingConstraint => "is_listed_building_constraint",
            Condition::Article2_3Land => "is_article_2_3_land",
            Condition::Article2_4Land => "is_article_2_4_land",
            Condition::Article4Directive => "is_article_4_directive",
            Condition::Aonb => "is_aonb",
            Condition::AffectsTpo => "affects_tpo",
            Condition::PdRightsRemoved => "pd_rights_removed",
            Condition::NewBuildRestriction => "is_new_build_restriction",
        }
    }

    /// Try to parse a condition from its flag name
    pub fn try_parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Whether this condition, when set, makes a conditional-family site
    /// require permission.
    ///
    /// The two finer height bands do not qualify.
    pub const fn is_qualifying(&self) -> bool {
        !matches!(
            self,
            Condition::HeightUpTo1m | Condition::HeightAbove1mTo2m
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Site condition flags. Every flag defaults to `false`.
///
/// No consistency is enforced between the height bands; any combination is
/// accepted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(default)]
pub struct ConditionSet {
    /// Adjacent to a highway used by vehicular traffic
    pub is_highway_adjacent: bool,
    /// Faces onto a property containing a listed building
    pub faces_listed_building: bool,
    /// Height up to 1 metre
    pub height_up_to_1m: bool,
    /// Height above 1 metre and up to 2 metres
    pub height_above_1m_to_2m: bool,
    /// Height above 2 metres
    pub height_above_2m: bool,
    /// The property itself is a listed building
    pub is_listed_building_constraint: bool,
    /// Article 2(3) land
    pub is_article_2_3_land: bool,
    /// Article 2(4) land
    pub is_article_2_4_land: bool,
    /// An Article 4 direction removes permitted development rights
    pub is_article_4_directive: bool,
    /// Within an Area of Outstanding Natural Beauty
    pub is_aonb: bool,
    /// Works affect a tree covered by a Tree Preservation Order
    pub affects_tpo: bool,
    /// Permitted development rights were removed previously
    pub pd_rights_removed: bool,
    /// New-build property with restrictions on boundary treatments
    pub is_new_build_restriction: bool,
}

impl ConditionSet {
    /// Create an empty set (all conditions false)
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `condition` set
    pub fn with(mut self, condition: Condition) -> Self {
        self.set(condition, true);
        self
    }

    pub fn set(&mut self, condition: Condition, value: bool) {
        *self.flag_mut(condition) = value;
    }

    pub fn get(&self, condition: Condition) -> bool {
        match condition {
            Condition::HighwayAdjacent => self.is_highway_adjacent,
            Condition::FacesListedBuilding => self.faces_listed_building,
            Condition::HeightUpTo1m => self.height_up_to_1m,
            Condition::HeightAbove1mTo2m => self.height_above_1m_to_2m,
            Condition::HeightAbove2m => self.height_above_2m,
            Condition::ListedBuildingConstraint => self.is_listed_building_constraint,
            Condition::Article2_3Land => self.is_article_2_3_land,
            Condition::Article2_4Land => self.is_article_2_4_land,
            Condition::Article4Directive => self.is_article_4_directive,
            Condition::Aonb => self.is_aonb,
            Condition::AffectsTpo => self.affects_tpo,
            Condition::PdRightsRemoved => self.pd_rights_removed,
            Condition::NewBuildRestriction => self.is_new_build_restriction,
        }
    }

    fn flag_mut(&mut self, condition: Condition) -> &mut bool {
        match condition {
            Condition::HighwayAdjacent => &mut self.is_highway_adjacent,
            Condition::FacesListedBuilding => &mut self.faces_listed_building,
            Condition::HeightUpTo1m => &mut self.height_up_to_1m,
            Condition::HeightAbove1mTo2m => &mut self.height_above_1m_to_2m,
            Condition::HeightAbove2m => &mut self.height_above_2m,
            Condition::ListedBuildingConstraint => &mut self.is_listed_building_constraint,
            Condition::Article2_3Land => &mut self.is_article_2_3_land,
            Condition::Article2_4Land => &mut self.is_article_2_4_land,
            Condition::Article4Directive => &mut self.is_article_4_directive,
            Condition::Aonb => &mut self.is_aonb,
            Condition::AffectsTpo => &mut self.affects_tpo,
            Condition::PdRightsRemoved => &mut self.pd_rights_removed,
            Condition::NewBuildRestriction => &mut self.is_new_build_restriction,
        }
    }

    /// Conditions currently set, in canonical order
    pub fn active(&self) -> impl Iterator<Item = Condition> + '_ {
        Condition::ALL.into_iter().filter(|c| self.get(*c))
    }

    /// Whether any qualifying condition is set
    pub fn any_qualifying(&self) -> bool {
        self.active().any(|c| c.is_qualifying())
    }
}

impl FromIterator<Condition> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), ConditionSet::with)
    }
}

/// Result of a permission evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Planning permission is required
    #[serde(rename = "Y")]
    Required,
    /// Planning permission is not required
    #[serde(rename = "N")]
    NotRequired,
    /// The category code is not recognised
    #[serde(rename = "Unknown Category")]
    UnknownCategory,
}

impl Outcome {
    /// The literal used when reporting the outcome
    pub const fn as_str(&self) -> &'static str {
        match self {
            Outcome::Required => "Y",
            Outcome::NotRequired => "N",
            Outcome::UnknownCategory => "Unknown Category",
        }
    }

    pub const fn is_required(&self) -> bool {
        matches!(self, Outcome::Required)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
