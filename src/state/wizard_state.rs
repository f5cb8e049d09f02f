//! Wizard state definitions

use serde::{Deserialize, Serialize};

use super::catalog::{
    DEFAULT_BC_ENTITY, DEFAULT_REQUEST_TYPE, DEFAULT_XPRO_ENTITY, MOVE_REQUEST_TYPE,
};
use super::validation::ValidationError;

/// Jurisdiction the business is formed in
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    BC,
    CA,
    IN,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BC => "BC",
            Self::CA => "CA",
            Self::IN => "IN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BC => "BC",
            Self::CA => "Canada",
            Self::IN => "Foreign",
        }
    }

    pub fn is_domestic(&self) -> bool {
        matches!(self, Self::BC)
    }

    /// Entity type selected when the wizard lands on this location
    pub fn default_entity_type(&self) -> &'static str {
        if self.is_domestic() {
            DEFAULT_BC_ENTITY
        } else {
            DEFAULT_XPRO_ENTITY
        }
    }
}

impl std::str::FromStr for Location {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BC" => Ok(Self::BC),
            "CA" => Ok(Self::CA),
            "IN" => Ok(Self::IN),
            other => anyhow::bail!("Unknown location: {other}"),
        }
    }
}

/// Which part of the search flow is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStage {
    #[default]
    Search,
    Analyzing,
    Results,
}

/// Top-level view, kept in sync with the tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayedComponent {
    #[default]
    NewRequest,
    ExistingRequestSearch,
}

/// An entry in a select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub rank: u32,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>, rank: u32) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            rank,
        }
    }
}

/// Result of the automated name analysis, kept exactly as the API sent it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisJson {
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Any other fields in the response body
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisJson {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.status.is_empty() && self.extra.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Usage statistics from `/stats`
pub type Stats = serde_json::Value;

/// Form state for the new name request wizard
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    // Form inputs
    pub name: String,
    pub entity_type: String,
    pub request_type: String,
    pub location: Location,

    // Promoted from the "help me choose" flows
    pub extended_entity_selection: Option<SelectOption>,
    pub extended_request_type: Option<SelectOption>,

    // Search flow
    pub search_show_stage: SearchStage,
    pub errors: Vec<ValidationError>,
    pub analysis: AnalysisJson,
    pub stats: Option<Stats>,

    // Navigation
    pub tab_number: usize,
    pub displayed_component: DisplayedComponent,

    // Dialogs
    pub help_me_choose_modal_visible: bool,
    pub nr_required_modal_visible: bool,
    pub pick_entity_modal_visible: bool,
    pub pick_request_type_modal_visible: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            name: String::new(),
            entity_type: DEFAULT_BC_ENTITY.to_string(),
            request_type: DEFAULT_REQUEST_TYPE.to_string(),
            location: Location::BC,
            extended_entity_selection: None,
            extended_request_type: None,
            search_show_stage: SearchStage::Search,
            errors: Vec::new(),
            analysis: AnalysisJson::default(),
            stats: None,
            tab_number: 0,
            displayed_component: DisplayedComponent::NewRequest,
            help_me_choose_modal_visible: false,
            nr_required_modal_visible: false,
            pick_entity_modal_visible: false,
            pick_request_type_modal_visible: false,
        }
    }
}

impl WizardState {
    /// Change jurisdiction, resetting the entity type when crossing the BC boundary
    pub fn set_location(&mut self, location: Location) {
        if location == self.location {
            return;
        }
        // CA <-> IN share the extra-provincial list, so the selection stays valid
        if !self.location.is_domestic() && !location.is_domestic() {
            self.location = location;
            return;
        }
        self.extended_entity_selection = None;
        self.entity_type = location.default_entity_type().to_string();
        self.location = location;
        tracing::debug!(
            location = location.as_str(),
            entity_type = %self.entity_type,
            "location changed"
        );
    }

    pub fn set_request_type(&mut self, request_type: &str) {
        self.request_type = request_type.to_string();
        if request_type == MOVE_REQUEST_TYPE && self.location.is_domestic() {
            self.location = Location::CA;
            self.entity_type = DEFAULT_XPRO_ENTITY.to_string();
            self.extended_entity_selection = None;
            tracing::debug!("move request forces extra-provincial location");
        }
    }

    pub fn set_entity_type(&mut self, entity_type: &str) {
        self.entity_type = entity_type.to_string();
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_extended_entity_selection(&mut self, option: Option<SelectOption>) {
        self.extended_entity_selection = option;
    }

    pub fn set_extended_request_type(&mut self, option: Option<SelectOption>) {
        self.extended_request_type = option;
    }

    pub fn set_search_show_stage(&mut self, stage: SearchStage) {
        self.search_show_stage = stage;
    }

    pub fn set_analysis(&mut self, analysis: AnalysisJson) {
        self.analysis = analysis;
    }

    pub fn set_stats(&mut self, stats: Stats) {
        self.stats = Some(stats);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn set_help_me_choose_modal_visible(&mut self, visible: bool) {
        self.help_me_choose_modal_visible = visible;
    }

    pub fn set_nr_required_modal_visible(&mut self, visible: bool) {
        self.nr_required_modal_visible = visible;
    }

    pub fn set_pick_entity_modal_visible(&mut self, visible: bool) {
        self.pick_entity_modal_visible = visible;
    }

    pub fn set_pick_request_type_modal_visible(&mut self, visible: bool) {
        self.pick_request_type_modal_visible = visible;
    }

    /// Switch top-level view; the tab index follows
    pub fn set_displayed_component(&mut self, component: DisplayedComponent) {
        self.displayed_component = component;
        self.tab_number = match component {
            DisplayedComponent::NewRequest => 0,
            DisplayedComponent::ExistingRequestSearch => 1,
        };
    }

    /// Select a tab; indices other than 0 and 1 leave the view unchanged
    pub fn set_tab_number(&mut self, tab: usize) {
        self.tab_number = tab;
        match tab {
            0 => self.displayed_component = DisplayedComponent::NewRequest,
            1 => self.displayed_component = DisplayedComponent::ExistingRequestSearch,
            _ => {}
        }
    }

    /// Drop any analysis result and go back to the search form
    pub fn reset_search(&mut self) {
        self.analysis = AnalysisJson::default();
        self.search_show_stage = SearchStage::Search;
    }
}
