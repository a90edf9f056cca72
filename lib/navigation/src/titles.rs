//! Display titles used as lookup keys by the navigation helper.
//!
//! Menus and pages should reference these constants rather than retyping
//! the strings; a typo in a title only surfaces as a logged error at runtime.

/// Service titles.
pub mod service {
    pub const CLOUD_PRACTICE: &str = "Cloud Practice";
    pub const DIGITAL_ENGINEERING: &str = "Digital & Product Engineering";
    pub const BIG_DATA: &str = "Big Data";
    pub const APP_MODERNIZATION: &str = "App Modernization";
    pub const SECURITY: &str = "Security";
    pub const DATABASE_MANAGEMENT: &str = "Database Management";
    pub const ERP_TESTING: &str = "ERP & Testing";
}

/// Product titles.
pub mod product {
    pub const AGENT_STUDIO: &str = "Agent Studio";
    pub const ATLAS_API_MANAGER: &str = "Atlas API Manager";
    pub const OTTOHM_VIDEO: &str = "Ottohm Video";
    pub const ITSM_TICKETING: &str = "ITSM Ticketing";
    pub const AI_OPS: &str = "AI Ops Platform";
    pub const SMART_CONTRACTS: &str = "Smart Contracts";
}

/// AI solution titles.
pub mod ai {
    /// The AI solutions landing page; the default target of `navigate_to_ai`.
    pub const AI_SOLUTIONS: &str = "AI Solutions";
    pub const BFSI_AGENTS: &str = "BFSI Agents";
    pub const BRAND_MANAGEMENT: &str = "Brand Management Agents";
}

/// "Who we are" item titles.
pub mod who_we_are {
    pub const OUR_TEAM: &str = "Our Team";
    pub const ABOUT_US: &str = "About Us";
    pub const PARTNERS: &str = "Partners";
    pub const CAREERS: &str = "Careers";
    pub const NEWS: &str = "News & Updates";
}
