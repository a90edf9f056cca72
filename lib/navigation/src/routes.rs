//! Centralized route table.
//!
//! Every page is reachable directly by its URL; no route depends on state
//! left behind by an earlier in-app navigation. Paths are literal strings
//! with no dynamic segments, so no two entries can overlap.

use crate::titles::{ai, product, service, who_we_are};
use std::fmt;

/// A page the site mounts at exactly one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    // Services
    CloudPractice,
    DigitalEngineering,
    BigData,
    AppModernization,
    Security,
    DatabaseManagement,
    ErpTesting,
    // AI solutions
    AiSolutions,
    BfsiAgents,
    BrandManagement,
    // Products
    AgentStudio,
    AtlasApiManager,
    OttohmVideo,
    ItsmTicketing,
    AiOps,
    SmartContracts,
    // Who we are
    OurTeam,
    AboutUs,
    Partners,
    Careers,
    NewsUpdates,
    // Other
    CaseStudies,
}

/// A route table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Literal URL path.
    pub path: &'static str,
    /// Page rendered at that path.
    pub page: Page,
}

const fn route(path: &'static str, page: Page) -> RouteEntry {
    RouteEntry { path, page }
}

/// All routes, in presentation order.
pub const ROUTES: &[RouteEntry] = &[
    route("/", Page::Home),
    route("/services/cloud-practice", Page::CloudPractice),
    route("/services/digital-engineering", Page::DigitalEngineering),
    route("/services/big-data", Page::BigData),
    route("/services/app-modernization", Page::AppModernization),
    route("/services/security", Page::Security),
    route("/services/database-management", Page::DatabaseManagement),
    route("/services/erp-testing", Page::ErpTesting),
    route("/ai-solutions", Page::AiSolutions),
    route("/ai-solutions/bfsi-agents", Page::BfsiAgents),
    route("/ai-solutions/brand-management", Page::BrandManagement),
    route("/products/agent-studio", Page::AgentStudio),
    route("/products/atlas-api-manager", Page::AtlasApiManager),
    route("/products/ottohm-video", Page::OttohmVideo),
    route("/products/itsm-ticketing", Page::ItsmTicketing),
    route("/products/ai-ops", Page::AiOps),
    route("/products/smart-contracts", Page::SmartContracts),
    route("/who-we-are/our-team", Page::OurTeam),
    route("/who-we-are/about-us", Page::AboutUs),
    route("/who-we-are/partners", Page::Partners),
    route("/who-we-are/careers", Page::Careers),
    route("/who-we-are/news-updates", Page::NewsUpdates),
    route("/case-studies", Page::CaseStudies),
];

/// Path of the home page.
pub const HOME_PATH: &str = "/";

/// Path of the case studies page.
pub const CASE_STUDIES_PATH: &str = "/case-studies";

/// Service title to path.
pub const SERVICE_ROUTES: &[(&str, &str)] = &[
    (service::CLOUD_PRACTICE, "/services/cloud-practice"),
    (service::DIGITAL_ENGINEERING, "/services/digital-engineering"),
    (service::BIG_DATA, "/services/big-data"),
    (service::APP_MODERNIZATION, "/services/app-modernization"),
    (service::SECURITY, "/services/security"),
    (service::DATABASE_MANAGEMENT, "/services/database-management"),
    (service::ERP_TESTING, "/services/erp-testing"),
];

/// Product title to path.
pub const PRODUCT_ROUTES: &[(&str, &str)] = &[
    (product::AGENT_STUDIO, "/products/agent-studio"),
    (product::ATLAS_API_MANAGER, "/products/atlas-api-manager"),
    (product::OTTOHM_VIDEO, "/products/ottohm-video"),
    (product::ITSM_TICKETING, "/products/itsm-ticketing"),
    (product::AI_OPS, "/products/ai-ops"),
    (product::SMART_CONTRACTS, "/products/smart-contracts"),
];

/// AI solution title to path.
pub const AI_ROUTES: &[(&str, &str)] = &[
    (ai::AI_SOLUTIONS, "/ai-solutions"),
    (ai::BFSI_AGENTS, "/ai-solutions/bfsi-agents"),
    (ai::BRAND_MANAGEMENT, "/ai-solutions/brand-management"),
];

/// "Who we are" item title to path.
pub const WHO_WE_ARE_ROUTES: &[(&str, &str)] = &[
    (who_we_are::OUR_TEAM, "/who-we-are/our-team"),
    (who_we_are::ABOUT_US, "/who-we-are/about-us"),
    (who_we_are::PARTNERS, "/who-we-are/partners"),
    (who_we_are::CAREERS, "/who-we-are/careers"),
    (who_we_are::NEWS, "/who-we-are/news-updates"),
];

/// A group of pages that share a title mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Services,
    Products,
    AiSolutions,
    WhoWeAre,
}

impl Section {
    /// All sections, in menu order.
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::AiSolutions,
        Section::Products,
        Section::WhoWeAre,
    ];

    /// Returns the title mapping for this section.
    #[must_use]
    pub const fn routes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Services => SERVICE_ROUTES,
            Self::Products => PRODUCT_ROUTES,
            Self::AiSolutions => AI_ROUTES,
            Self::WhoWeAre => WHO_WE_ARE_ROUTES,
        }
    }

    /// Resolves a title to its path. Titles match exactly.
    #[must_use]
    pub fn resolve(self, title: &str) -> Option<&'static str> {
        self.routes()
            .iter()
            .find(|(key, _)| *key == title)
            .map(|(_, path)| *path)
    }

    /// Menu label for the section.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Products => "Products",
            Self::AiSolutions => "AI Solutions",
            Self::WhoWeAre => "Who We Are",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self {
            Self::Services => "service",
            Self::Products => "product",
            Self::AiSolutions => "AI solution",
            Self::WhoWeAre => "who-we-are item",
        };
        f.write_str(noun)
    }
}

impl Page {
    /// Iterates every page in route table order.
    pub fn all() -> impl Iterator<Item = Page> {
        ROUTES.iter().map(|entry| entry.page)
    }

    /// Looks up the page mounted at `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Page> {
        ROUTES
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.page)
    }

    /// The path this page is mounted at.
    #[must_use]
    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|entry| entry.page == self)
            .map_or(HOME_PATH, |entry| entry.path)
    }

    /// Human-readable page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::CloudPractice => service::CLOUD_PRACTICE,
            Self::DigitalEngineering => service::DIGITAL_ENGINEERING,
            Self::BigData => service::BIG_DATA,
            Self::AppModernization => service::APP_MODERNIZATION,
            Self::Security => service::SECURITY,
            Self::DatabaseManagement => service::DATABASE_MANAGEMENT,
            Self::ErpTesting => service::ERP_TESTING,
            Self::AiSolutions => ai::AI_SOLUTIONS,
            Self::BfsiAgents => ai::BFSI_AGENTS,
            Self::BrandManagement => ai::BRAND_MANAGEMENT,
            Self::AgentStudio => product::AGENT_STUDIO,
            Self::AtlasApiManager => product::ATLAS_API_MANAGER,
            Self::OttohmVideo => product::OTTOHM_VIDEO,
            Self::ItsmTicketing => product::ITSM_TICKETING,
            Self::AiOps => product::AI_OPS,
            Self::SmartContracts => product::SMART_CONTRACTS,
            Self::OurTeam => who_we_are::OUR_TEAM,
            Self::AboutUs => who_we_are::ABOUT_US,
            Self::Partners => who_we_are::PARTNERS,
            Self::Careers => who_we_are::CAREERS,
            Self::NewsUpdates => who_we_are::NEWS,
            Self::CaseStudies => "Case Studies",
        }
    }

    /// Section whose mapping reaches this page, if any.
    #[must_use]
    pub const fn section(self) -> Option<Section> {
        match self {
            Self::Home | Self::CaseStudies => None,
            Self::CloudPractice
            | Self::DigitalEngineering
            | Self::BigData
            | Self::AppModernization
            | Self::Security
            | Self::DatabaseManagement
            | Self::ErpTesting => Some(Section::Services),
            Self::AiSolutions | Self::BfsiAgents | Self::BrandManagement => {
                Some(Section::AiSolutions)
            }
            Self::AgentStudio
            | Self::AtlasApiManager
            | Self::OttohmVideo
            | Self::ItsmTicketing
            | Self::AiOps
            | Self::SmartContracts => Some(Section::Products),
            Self::OurTeam | Self::AboutUs | Self::Partners | Self::Careers | Self::NewsUpdates => {
                Some(Section::WhoWeAre)
            }
        }
    }

    /// Whether the page is rendered inside the page layout wrapper.
    ///
    /// The home page carries its own chrome and is mounted bare.
    #[must_use]
    pub const fn uses_layout(self) -> bool {
        !matches!(self, Self::Home)
    }
}
