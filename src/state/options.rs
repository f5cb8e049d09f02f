//! Option lists derived from the static tables and current form state

use serde::Serialize;

use super::catalog::{
    self, EntityType, DEFAULT_REQUEST_TYPE, ENTITY_TYPES_BC, ENTITY_TYPES_XPRO,
    MOVE_REQUEST_TYPE, VIEW_ALL,
};
use super::wizard_state::{Location, SelectOption, WizardState};

/// Rank given to the promoted entity option, right after the three shortlisted ones
const EXTENDED_ENTITY_RANK: u32 = 4;

/// Rank given to the promoted request type, right after "new business"
const EXTENDED_REQUEST_RANK: u32 = 2;

/// Entity types belonging to a category, for the pick-entity dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCategory {
    pub text: &'static str,
    pub entities: Vec<&'static EntityType>,
}

/// The full entity collection that applies to a location
pub fn entity_types_for(location: Location) -> &'static [EntityType] {
    if location.is_domestic() {
        &ENTITY_TYPES_BC
    } else {
        &ENTITY_TYPES_XPRO
    }
}

/// Append the promoted entry and the "view all" sentinel, then order by rank
fn finish_options(
    mut options: Vec<SelectOption>,
    extended: Option<&SelectOption>,
    extended_rank: u32,
    view_all_text: &str,
) -> Vec<SelectOption> {
    let mut view_all_rank = extended_rank;
    if let Some(extended) = extended {
        options.push(SelectOption {
            rank: extended_rank,
            ..extended.clone()
        });
        view_all_rank += 1;
    }
    options.push(SelectOption::new(view_all_text, VIEW_ALL, view_all_rank));
    options.sort_by_key(|option| option.rank);
    options
}

/// Shortlisted entity types for the location, plus the promoted entry and "view all"
pub fn entity_type_options(
    location: Location,
    extended: Option<&SelectOption>,
) -> Vec<SelectOption> {
    let shortlist = entity_types_for(location)
        .iter()
        .filter(|t| t.shortlist)
        .map(|t| SelectOption::new(t.text, t.value, t.rank.unwrap_or_default()))
        .collect();
    finish_options(
        shortlist,
        extended,
        EXTENDED_ENTITY_RANK,
        "View All Business Structures",
    )
}

/// "New business", plus the promoted request type and "view all"
pub fn request_type_options(extended: Option<&SelectOption>) -> Vec<SelectOption> {
    let options = catalog::request_type(DEFAULT_REQUEST_TYPE)
        .map(|t| SelectOption::new(t.text, t.value, 1))
        .into_iter()
        .collect();
    finish_options(
        options,
        extended,
        EXTENDED_REQUEST_RANK,
        "View All Request Types",
    )
}

/// Jurisdictions on offer; moving a business into BC cannot start in BC
pub fn location_options(request_type: &str) -> Vec<SelectOption> {
    [Location::BC, Location::CA, Location::IN]
        .into_iter()
        .filter(|l| request_type != MOVE_REQUEST_TYPE || !l.is_domestic())
        .map(|l| SelectOption::new(l.label(), l.as_str(), 0))
        .collect()
}

/// The location's full collection grouped by category, in first-seen order
pub fn pick_entity_table(location: Location) -> Vec<EntityCategory> {
    let mut table: Vec<EntityCategory> = Vec::new();
    for entity in entity_types_for(location) {
        match table.iter_mut().find(|c| c.text == entity.category) {
            Some(category) => category.entities.push(entity),
            None => table.push(EntityCategory {
                text: entity.category,
                entities: vec![entity],
            }),
        }
    }
    table
}

/// Display text for an entity code in either collection
pub fn entity_text_from_value(value: &str) -> Option<&'static str> {
    catalog::entity_type(value).map(|t| t.text)
}

impl WizardState {
    pub fn entity_type_options(&self) -> Vec<SelectOption> {
        entity_type_options(self.location, self.extended_entity_selection.as_ref())
    }

    pub fn request_type_options(&self) -> Vec<SelectOption> {
        request_type_options(self.extended_request_type.as_ref())
    }

    pub fn location_options(&self) -> Vec<SelectOption> {
        location_options(&self.request_type)
    }

    pub fn pick_entity_table(&self) -> Vec<EntityCategory> {
        pick_entity_table(self.location)
    }

    pub fn entity_text(&self) -> Option<&'static str> {
        entity_text_from_value(&self.entity_type)
    }
}
