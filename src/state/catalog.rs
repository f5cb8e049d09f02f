//! Static reference data: business structures and request types

use serde::Serialize;

/// Sentinel option value meaning "show me the full list"
pub const VIEW_ALL: &str = "all";

/// Default entity type for BC (domestic) requests
pub const DEFAULT_BC_ENTITY: &str = "CR";

/// Default entity type for extra-provincial requests
pub const DEFAULT_XPRO_ENTITY: &str = "XCR";

/// Default request type
pub const DEFAULT_REQUEST_TYPE: &str = "NEW";

/// Request type that moves an existing business into BC
pub const MOVE_REQUEST_TYPE: &str = "MVE";

/// Legal business structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityType {
    pub text: &'static str,
    pub value: &'static str,
    pub category: &'static str,
    pub blurb: &'static [&'static str],
    pub shortlist: bool,
    pub rank: Option<u32>,
}

/// Kind of name request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestType {
    pub text: &'static str,
    pub value: &'static str,
    pub blurb: &'static str,
}

const fn entity(
    text: &'static str,
    value: &'static str,
    category: &'static str,
    blurb: &'static [&'static str],
) -> EntityType {
    EntityType {
        text,
        value,
        category,
        blurb,
        shortlist: false,
        rank: None,
    }
}

const fn shortlisted(
    text: &'static str,
    value: &'static str,
    category: &'static str,
    blurb: &'static [&'static str],
    rank: u32,
) -> EntityType {
    EntityType {
        text,
        value,
        category,
        blurb,
        shortlist: true,
        rank: Some(rank),
    }
}

/// Structures available to businesses formed in BC
pub static ENTITY_TYPES_BC: [EntityType; 13] = [
    shortlisted(
        "Sole Proprietorship",
        "FR",
        "Proprietorships",
        &[
            "A company owned and operated by one person who is personally responsible for all debt and liability",
            "Reported on your personal taxes",
            "Does not have name protection in BC",
        ],
        3,
    ),
    entity(
        "Doing Business As",
        "DBA",
        "Proprietorships",
        &[
            "An existing company that would like to be known as another name. Referred to as a \"Doing Business As\" or trade name.",
            "Does not have name protection in BC",
        ],
    ),
    shortlisted(
        "BC Corporation",
        "CR",
        "Corporations",
        &[
            "A company that may have one or more people who own shares with some personal responsibility for debt and liabilities.",
            "Reported separately as Corporate tax",
            "Has name protection in BC",
        ],
        1,
    ),
    entity(
        "Unlimited Liability Co.",
        "UL",
        "Corporations",
        &[
            "Similar to BC Corporations. Often used by American Corporations for tax planning.",
            "Reported separately as Canadian Corporate tax",
            "Has name protection in BC",
        ],
    ),
    shortlisted(
        "General Partnership",
        "GP",
        "Partnerships",
        &[
            "A company owned and operated by two or more people who are personally responsible for all debt and liability.",
            "A partnership agreement is recommended",
            "Reported on your personal income tax",
            "Does not have name protection in BC",
        ],
        2,
    ),
    entity(
        "Limited Partnership",
        "LP",
        "Partnerships",
        &[
            "Frequently used in real estate developments or film industry projects. This type of partnership ends when the project is complete",
            "A partnership agreement is recommended",
            "Does not have name protection in BC",
        ],
    ),
    entity(
        "Limited Liability Partnership",
        "LL",
        "Partnerships",
        &[
            "Frequently used by professionals such as doctors or lawyers to form a practice",
            "A partnership agreement is recommended",
            "Does not have name protection in BC",
        ],
    ),
    entity(
        "Co-operative",
        "CP",
        "Social Enterprises",
        &[
            "Membership-based organization, owned and operated by the people who use its services",
            "Members have no liability",
            "Reported as Corporate tax",
            "Has name protection in BC",
        ],
    ),
    entity(
        "Benefit Co.",
        "BC",
        "Social Enterprises",
        &[
            "Similar to BC Corporations but with commitments to conduct business in a responsible and sustainable way.",
            "Reported as Corporate tax",
            "Has name protection in BC",
        ],
    ),
    entity(
        "Community Contribution Co.",
        "CC",
        "Social Enterprises",
        &[
            "Similar to BC Corporations, Community Contribution Companies are intended to bridge the gap between for-profit and non-profit companies",
            "Reported as Corporate tax",
            "Has name protection in BC",
        ],
    ),
    entity(
        "Society",
        "SO",
        "Social Enterprises",
        &[
            "A non-profit organization.",
            "Has name protection in BC",
            "Must use Societies Online to register name",
        ],
    ),
    entity(
        "Private Act",
        "PA",
        "Other",
        &[
            "A special type of business structure that may often be established through legislation or by economic growth initiatives",
            "Examples include resorts and ski areas",
            "Has name protection in BC",
        ],
    ),
    entity(
        "Financial Institution",
        "FI",
        "Other",
        &["Credit Unions", "Has name protection in BC"],
    ),
];

/// Structures for businesses formed outside BC that will also operate here
pub static ENTITY_TYPES_XPRO: [EntityType; 7] = [
    shortlisted(
        "Corporation",
        "XCR",
        "Corporations",
        &[
            "Corporation established and operating in another province or country. Plans to operate in BC as well.",
            "Has name protection in BC",
        ],
        1,
    ),
    entity(
        "Unlimited Liability Co.",
        "XUL",
        "Corporations",
        &[
            "ULC established and operating in another province or country. Plans to operate in BC as well.",
            "Has name protection in BC",
        ],
    ),
    shortlisted(
        "Limited Liability Co.",
        "RLC",
        "Corporations",
        &[
            "A US Corporation that plans to operate in BC as well.",
            "Does not have name protection in BC",
        ],
        2,
    ),
    entity(
        "Limited Partnership",
        "XLP",
        "Partnerships",
        &[
            "LP established and operating in another province or country. Plans to operate in BC as well.",
            "Does not have name protection in BC",
        ],
    ),
    entity(
        "Limited Liability Partnership",
        "XLL",
        "Partnerships",
        &[
            "LLP established and operating in another province or country. Plans to operate in BC as well.",
            "Does not have name protection in BC",
        ],
    ),
    shortlisted(
        "Co-operative",
        "XCP",
        "Social Enterprises",
        &[
            "Co-operative established and operating in another province or country. Plans to operate in BC.",
            "Has name protection in BC",
        ],
        3,
    ),
    entity(
        "Society",
        "XSO",
        "Social Enterprises",
        &["Societies must use Societies Online to get their name"],
    ),
];

/// Every kind of request the wizard can start
pub static REQUEST_TYPES: [RequestType; 8] = [
    RequestType {
        text: "Start a New Business",
        value: "NEW",
        blurb: "Start a new business in BC. This applies to starting fresh from here or having a business in another province or country that you want to operate in BC as well.",
    },
    RequestType {
        text: "Move your Business to BC",
        value: "MVE",
        blurb: "You have an existing business in another province. You are closing your business there and moving your business to BC.",
    },
    RequestType {
        text: "Change your Name",
        value: "CHG",
        blurb: "You have an existing business that is registered in BC and you want to change your name. You will need your incorporation or firm number or your B/N assigned to you by CRA.",
    },
    RequestType {
        text: "Get a New Tradename",
        value: "DBA",
        blurb: "You have an existing business and want to operate under an additional trade name.",
    },
    RequestType {
        text: "Amalgamate",
        value: "AML",
        blurb: "You are merging with another company and you want a new name.",
    },
    RequestType {
        text: "Convert to Another Structure",
        value: "CNV",
        blurb: "Convert from one business structure to another. Such as converting from a ULC to a BC Corp. You will need to identify your business with your B/N # (assigned by CRA) or your Corp. #/Firm # (assigned by Registries).",
    },
    RequestType {
        text: "Restore a Historical Business",
        value: "REH",
        blurb: "Restore a business that has been dissolved and reuse its historical name.",
    },
    RequestType {
        text: "Restore by starting a New Business",
        value: "REN",
        blurb: "Restore a dissolved business under a new name.",
    },
];

/// Look up a request type by its code
pub fn request_type(value: &str) -> Option<&'static RequestType> {
    REQUEST_TYPES.iter().find(|t| t.value == value)
}

/// Look up an entity type by its code across both collections
pub fn entity_type(value: &str) -> Option<&'static EntityType> {
    ENTITY_TYPES_BC
        .iter()
        .chain(ENTITY_TYPES_XPRO.iter())
        .find(|t| t.value == value)
}
