//! Static kiosk content.
//!
//! All copy, figures, and section data for the brochure, kept in one
//! place so the UI modules stay layout-only. Icon fields hold Phosphor
//! glyphs ready to render inline with text.

use egui_phosphor::regular;

pub const BRAND_NAME: &str = "Climate Finance Blending Facility";

/// Sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Impact,
    Projects,
    News,
    Contact,
}

pub struct NavLink {
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "About",
        section: SectionId::About,
    },
    NavLink {
        label: "Impact",
        section: SectionId::Impact,
    },
    NavLink {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavLink {
        label: "News",
        section: SectionId::News,
    },
    NavLink {
        label: "Contact",
        section: SectionId::Contact,
    },
];

// ============================================================================
// Hero
// ============================================================================

pub const HERO_EYEBROW: &str = "Impact Investment";
/// Headline lines; the middle line renders in the accent gradient color.
pub const HERO_HEADLINE: [&str; 3] = [
    "Local Currency Blended",
    "Climate Finance for Off-Grid",
    "Energy Access in Nigeria.",
];
pub const HERO_LEAD: &str = "Climate Finance Blending Facility will be the first of its kind \
to receive certification under the Electrical Grids and Storage criteria by the Climate \
Bonds Standard.";
pub const HERO_CTA: &str = "Learn More";
pub const HERO_SCROLL_HINT: &str = "Scroll";

// ============================================================================
// About
// ============================================================================

pub const ABOUT_SUB: &str = "Who We Are";
pub const ABOUT_TITLE: &str = "Mobilising blended finance for sustainable energy access.";
pub const ABOUT_BODY: &str = "The Climate Finance Blending Facility (the \"Facility\") is a \
catalytic first loss multi-donor facility seeded with \u{a3}10 million concessional funding \
by the UK Foreign, Commonwealth & Development Office (\"FCDO\") to mobilise additional \
capital for off-grid solutions.";
pub const ABOUT_CTA: &str = "Read more about our mission";
pub const ABOUT_PARTNERS_LABEL: &str = "Strategic Partners & Funders";
pub const ABOUT_PARTNERS: [&str; 4] = ["UK Aid", "InfraCredit", "AIICO", "Linkage"];
pub const ABOUT_CALLOUT_FIGURE: &str = "\u{a3}10m";
pub const ABOUT_CALLOUT_TEXT: &str =
    "Seed funding provided to de-risk and unlock local currency finance.";

// ============================================================================
// Impact
// ============================================================================

pub const IMPACT_SUB: &str = "Our Impact";
pub const IMPACT_TITLE: &str = "How We Drive Impact";

pub const PIPELINE_LABEL: &str = "Project Pipeline";
pub const PIPELINE_VALUE: f64 = 196.6;
pub const PIPELINE_SUFFIX: &str = "m USD";
pub const LOCAL_VALUE_LABEL: &str = "Local Value Equivalent";
pub const LOCAL_VALUE: &str = "90.7b";
pub const LOCAL_VALUE_SUFFIX: &str = "NGN";

/// One animated statistic card in the impact grid.
pub struct ImpactStat {
    pub icon: &'static str,
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const IMPACT_STATS: [ImpactStat; 6] = [
    ImpactStat {
        icon: regular::LIGHTNING,
        value: 244_420.0,
        suffix: "",
        label: "Connections to Energy",
    },
    ImpactStat {
        icon: regular::SUN,
        value: 32.0,
        suffix: " MW",
        label: "Capacity Installed",
    },
    ImpactStat {
        icon: regular::MAP_PIN,
        value: 1_310.0,
        suffix: "",
        label: "Communities Served",
    },
    ImpactStat {
        icon: regular::USER,
        value: 7_846.0,
        suffix: "",
        label: "Jobs Created",
    },
    ImpactStat {
        icon: regular::LEAF,
        value: 611_688.0,
        suffix: " t",
        label: "Tonnes CO2 Reduced",
    },
    ImpactStat {
        icon: regular::TREND_UP,
        value: 45.3,
        suffix: "B",
        label: "Capital Mobilised (NGN)",
    },
];

pub const IMPACT_REPORT_CTA: &str = "Download Impact & Sustainability Report";

pub struct CapacityPanel {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub items: [&'static str; 3],
    /// Dark panels render white-on-green.
    pub dark: bool,
}

pub const CAPACITY_PANELS: [CapacityPanel; 2] = [
    CapacityPanel {
        icon: regular::USERS,
        title: "Institutional Strengthening",
        body: "We work directly with local financial institutions, regulators, and \
developers to build long-term capability in climate finance assessment, risk \
management, and project structuring.",
        items: [
            "Executive Training Programs for Bankers",
            "Regulatory Framework Workshops",
            "Developer Technical Assistance",
        ],
        dark: false,
    },
    CapacityPanel {
        icon: regular::BOOK_OPEN,
        title: "Knowledge Management",
        body: "Sharing best practices, case studies, and market intelligence to \
accelerate the adoption of off-grid renewable energy solutions across the region.",
        items: [
            "Open Access Market Data",
            "Impact Measurement Standards",
            "Annual Industry Reports",
        ],
        dark: true,
    },
];

pub const THEORY_TITLE: &str = "Our Logic Model";
pub const THEORY_BODY: &str = "A systemic approach to mobilizing capital and delivering \
sustainable development impact through blended finance.";

pub struct TheoryStep {
    pub step: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const THEORY_STEPS: [TheoryStep; 4] = [
    TheoryStep {
        step: "INPUTS",
        icon: regular::TARGET,
        title: "Concessional Capital",
        body: "\u{a3}10m first-loss funding from FCDO & Development Partners.",
    },
    TheoryStep {
        step: "ACTIVITIES",
        icon: regular::USERS,
        title: "Blended Finance",
        body: "De-risking projects to crowd-in private domestic investors.",
    },
    TheoryStep {
        step: "OUTPUTS",
        icon: regular::LIGHTBULB,
        title: "Market Activation",
        body: "Clean energy access, jobs created, and carbon reduced.",
    },
    TheoryStep {
        step: "IMPACT",
        icon: regular::GLOBE,
        title: "Green Economy",
        body: "Sustainable low-carbon transition and economic growth.",
    },
];

// ============================================================================
// Projects
// ============================================================================

pub const PROJECTS_SUB: &str = "Project Showcase";
pub const PROJECTS_TITLE: &str = "Leading with innovation in solar projects worldwide";
pub const PROJECTS_CTA: &str = "View All Projects";
pub const PROJECT_BADGE: &str = "SOLAR GRID";

pub struct Project {
    pub title: &'static str,
    pub capital: &'static str,
    pub capacity: &'static str,
    pub closed: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Darway Coast, Nigeria",
        capital: "\u{20a6}800m Private Capital",
        capacity: "526KW Capacity",
        closed: "Sep 2022",
    },
    Project {
        title: "Prado Power Energy",
        capital: "\u{20a6}1.95bn Private Capital",
        capacity: "850kW Capacity",
        closed: "Oct 2024",
    },
    Project {
        title: "Hotspot Network",
        capital: "\u{20a6}955m Private Capital",
        capacity: "324KW Capacity",
        closed: "Jun 2023",
    },
];

// ============================================================================
// Coverage map
// ============================================================================

pub const MAP_STAT: &str = "35";
pub const MAP_STAT_LABEL: &str = "States Covered";
pub const MAP_BODY: &str = "Collectively, off-grid renewable energy projects located in 35 \
states across the six geo-political zones in Nigeria have been approved for co-financing \
by the Facility.";
pub const MAP_CTA: &str = "View All Locations";

// ============================================================================
// Stories and news
// ============================================================================

pub const STORIES_SUB: &str = "Stories";
pub const STORIES_TITLE: &str = "Featured Stories";

pub struct Story {
    pub title: &'static str,
    pub date: &'static str,
}

pub const STORIES: [Story; 3] = [
    Story {
        title: "Success Story: Empowering Rural Communities",
        date: "October 2024",
    },
    Story {
        title: "Success Story: Empowering Rural Communities",
        date: "October 2024",
    },
    Story {
        title: "Success Story: Empowering Rural Communities",
        date: "October 2024",
    },
];

pub const NEWS_SUB: &str = "Media Center";
pub const NEWS_TITLE: &str = "Latest News & Updates";
pub const NEWS_CTA: &str = "View All News";
pub const NEWS_READ: &str = "Read Article";

pub struct NewsItem {
    pub tag: &'static str,
    pub date: &'static str,
    pub title: &'static str,
}

pub const NEWS_ITEMS: [NewsItem; 3] = [
    NewsItem {
        tag: "Press Release",
        date: "24 Oct 2024",
        title: "Climate Finance Blending Facility announces strategic partnership with \
InfraCredit to scale green bonds",
    },
    NewsItem {
        tag: "Transaction",
        date: "15 Sep 2024",
        title: "Reaching 1 Million lives: Facility closes deal for 10MW off-grid solar \
expansion in Kano State",
    },
    NewsItem {
        tag: "Milestone",
        date: "02 Aug 2024",
        title: "FCDO commits additional \u{a3}5M funding to accelerate clean energy access \
across West Africa",
    },
];

// ============================================================================
// Net zero goal and investors
// ============================================================================

pub const GOAL_SUB: &str = "Our Goal";
pub const GOAL_TITLE: &str = "Aiming For Net Zero";
pub const GOAL_BODY: &str = "The Facility will use its impact seeking capital to blend the \
cost of Eligible Green Projects aimed at fulfilling two main environmental objectives: \
climate change mitigation and energy transition to a low-carbon economy.";
pub const GOAL_REPORT_TITLE: &str = "NET ZERO";
pub const GOAL_REPORT_SUB: &str = "Strategy Report 2025";

pub struct GoalCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const GOAL_CARDS: [GoalCard; 2] = [
    GoalCard {
        icon: regular::LIGHTNING,
        title: "Energy Efficiency",
        body: "Energy-efficient appliances and equipments that lead to reduced energy \
consumption.",
    },
    GoalCard {
        icon: regular::CHART_BAR,
        title: "GHG Reduction",
        body: "Renewable Energy Projects that reduce or avoid annual GHG emissions.",
    },
];

pub const INVESTORS_LABEL: &str = "Domestic Institutional Investors";
pub const INVESTORS: [&str; 6] = [
    "AIICO Insurance",
    "Linkage Assurance",
    "LEADWAY",
    "Pension Custodian",
    "United Capital",
    "MERISTEM",
];

// ============================================================================
// Footer
// ============================================================================

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "About us",
        links: &[
            "Our mission",
            "Our Institutional Framework",
            "History",
            "Leadership and governance",
            "Our Impact",
        ],
    },
    FooterColumn {
        heading: "More from the Facility",
        links: &[
            "Centres",
            "Meetings",
            "Stakeholders",
            "Facility stories",
            "Press releases",
            "Picture gallery",
            "Podcasts",
            "Videos",
        ],
    },
    FooterColumn {
        heading: "Engage with us",
        links: &[
            "Sign in",
            "Partner with us",
            "Become a member",
            "Sign up for our press releases",
            "Subscribe to our newsletters",
            "Contact us",
        ],
    },
    FooterColumn {
        heading: "Quick links",
        links: &["Sustainability at the Facility", "Careers"],
    },
];

pub const FOOTER_SOCIALS: [(&str, &str); 3] = [
    ("Twitter / X", regular::TWITTER_LOGO),
    ("LinkedIn", regular::LINKEDIN_LOGO),
    ("YouTube", regular::YOUTUBE_LOGO),
];
pub const FOOTER_LEGAL: &str = "Privacy Policy & Terms of Service";
pub const FOOTER_COPYRIGHT: &str = "\u{a9} 2025 Climate Finance Blending Facility";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_cover_distinct_sections() {
        let mut seen = std::collections::HashSet::new();
        for link in &NAV_LINKS {
            assert!(seen.insert(link.section), "duplicate {:?}", link.section);
            assert!(!link.label.is_empty());
        }
    }

    #[test]
    fn test_impact_stat_targets_are_finite_and_positive() {
        for stat in &IMPACT_STATS {
            assert!(stat.value.is_finite());
            assert!(stat.value > 0.0);
            assert!(!stat.label.is_empty());
        }
        assert!(PIPELINE_VALUE.is_finite());
    }
}
