//! Collaboration hub tables: team, comments, shared reports, exports.

use serde::Serialize;

use super::{Choice, choice};

#[cfg(test)]
#[path = "collaboration_test.rs"]
mod collaboration_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Permission {
    Admin,
    Scientist,
    PolicyMaker,
}

impl Permission {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Scientist => "Scientist",
            Self::PolicyMaker => "Policy Maker",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub institution: &'static str,
    pub permission: Permission,
    pub last_active: &'static str,
    pub initials: &'static str,
}

pub static TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        id: 1,
        name: "Dr. Sarah Chen",
        role: "Marine Biologist",
        institution: "Woods Hole Oceanographic Institution",
        permission: Permission::Admin,
        last_active: "2 hours ago",
        initials: "SC",
    },
    TeamMember {
        id: 2,
        name: "Prof. Miguel Rodriguez",
        role: "Oceanographer",
        institution: "University of Barcelona",
        permission: Permission::Scientist,
        last_active: "1 day ago",
        initials: "MR",
    },
    TeamMember {
        id: 3,
        name: "Dr. Yuki Tanaka",
        role: "Molecular Biologist",
        institution: "Tokyo University of Marine Science",
        permission: Permission::Scientist,
        last_active: "3 hours ago",
        initials: "YT",
    },
    TeamMember {
        id: 4,
        name: "James Patterson",
        role: "Policy Advisor",
        institution: "NOAA Fisheries",
        permission: Permission::PolicyMaker,
        last_active: "5 hours ago",
        initials: "JP",
    },
];

/// Role cards: (role, access badge, capabilities).
pub static ROLE_PERMISSIONS: &[(Permission, &str, &[&str])] = &[
    (
        Permission::Admin,
        "Full Access",
        &[
            "Upload and manage all datasets",
            "Configure analysis parameters",
            "Manage team members",
            "Export all data and reports",
        ],
    ),
    (
        Permission::Scientist,
        "Research Access",
        &[
            "Upload datasets in assigned areas",
            "Run analysis and visualizations",
            "Comment and annotate data",
            "Export research results",
        ],
    ),
    (
        Permission::PolicyMaker,
        "View Access",
        &[
            "View analysis results and reports",
            "Access summary dashboards",
            "Download approved reports",
            "Receive automated alerts",
        ],
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub initials: &'static str,
    pub actor: &'static str,
    pub action: &'static str,
    pub subject: &'static str,
    pub when: &'static str,
}

pub static RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        initials: "SC",
        actor: "Dr. Sarah Chen",
        action: "uploaded new dataset",
        subject: "\"Pacific Temperature Survey 2024\"",
        when: "2 hours ago",
    },
    Activity {
        initials: "YT",
        actor: "Dr. Yuki Tanaka",
        action: "completed eDNA analysis for",
        subject: "Mediterranean samples",
        when: "5 hours ago",
    },
    Activity {
        initials: "MR",
        actor: "Prof. Miguel Rodriguez",
        action: "shared report",
        subject: "\"Biodiversity Trends Analysis\"",
        when: "1 day ago",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: u32,
    pub author: &'static str,
    pub initials: &'static str,
    pub content: &'static str,
    pub timestamp: &'static str,
    pub dataset: &'static str,
    pub replies: u32,
}

pub static RECENT_COMMENTS: &[Comment] = &[
    Comment {
        id: 1,
        author: "Dr. Sarah Chen",
        initials: "SC",
        content: "The temperature correlation analysis shows significant seasonal variations. We should expand the temporal coverage to include the last 5 years.",
        timestamp: "2 hours ago",
        dataset: "Pacific Temperature Survey",
        replies: 2,
    },
    Comment {
        id: 2,
        author: "Prof. Miguel Rodriguez",
        initials: "MR",
        content: "Excellent work on the eDNA analysis! The species detection results align well with our traditional survey methods.",
        timestamp: "1 day ago",
        dataset: "Mediterranean Biodiversity Study",
        replies: 0,
    },
    Comment {
        id: 3,
        author: "Dr. Yuki Tanaka",
        initials: "YT",
        content: "I notice some outliers in the COI sequence data. Should we review the quality filtering parameters?",
        timestamp: "2 days ago",
        dataset: "Molecular Database",
        replies: 1,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ShareScope {
    Public,
    TeamOnly,
    Institution,
}

impl ShareScope {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::TeamOnly => "Team Only",
            Self::Institution => "Institution",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SharedReport {
    pub id: u32,
    pub title: &'static str,
    pub kind: &'static str,
    pub shared: ShareScope,
    pub downloads: u32,
    pub views: u32,
    pub created: &'static str,
    pub author: &'static str,
}

pub static SHARED_REPORTS: &[SharedReport] = &[
    SharedReport {
        id: 1,
        title: "Climate Impact Assessment 2024",
        kind: "Analysis Report",
        shared: ShareScope::Public,
        downloads: 847,
        views: 3420,
        created: "2024-12-10",
        author: "Dr. Sarah Chen",
    },
    SharedReport {
        id: 2,
        title: "Mediterranean Biodiversity Trends",
        kind: "Visualization Dashboard",
        shared: ShareScope::TeamOnly,
        downloads: 156,
        views: 892,
        created: "2024-12-08",
        author: "Prof. Miguel Rodriguez",
    },
    SharedReport {
        id: 3,
        title: "eDNA Species Detection Protocol",
        kind: "Methodology Paper",
        shared: ShareScope::Institution,
        downloads: 234,
        views: 1247,
        created: "2024-12-05",
        author: "Dr. Yuki Tanaka",
    },
];

/// Export formats offered on the exports tab: (format, description).
pub static EXPORT_FORMATS: &[(&str, &str)] = &[
    ("PDF Report", "Comprehensive analysis report with visualizations"),
    ("Excel Dataset", "Raw data in spreadsheet format"),
    ("JSON API", "Structured data for applications"),
    ("Interactive Dashboard", "Shareable web-based dashboard"),
];

pub static API_ENDPOINTS: &[&str] = &[
    "/api/v1/oceanographic/temperature",
    "/api/v1/biodiversity/species",
    "/api/v1/edna/sequences",
    "/api/v1/analysis/correlations",
];

pub const API_KEY_PREVIEW: &str = "mk_live_abc123...";

pub static RATE_LIMITS: &[(&str, &str)] = &[("Requests per hour", "1,000"), ("Data transfer", "10 GB/day")];

/// Generated export files: (file, detail, ready).
pub static RECENT_EXPORTS: &[(&str, &str, bool)] = &[
    ("Climate Impact Report 2024.pdf", "Generated 2 hours ago • 4.2 MB", true),
    ("Biodiversity_Dataset_2024.xlsx", "Generated 1 day ago • 12.8 MB", true),
    ("eDNA_Sequences_Mediterranean.json", "Generating... • Estimated 5 minutes", false),
];

pub static ANNOTATION_TARGETS: &[Choice] = &[
    choice("temp-analysis", "Temperature Correlation Analysis"),
    choice("edna-results", "eDNA Species Detection"),
    choice("biodiversity-map", "Biodiversity Distribution Map"),
    choice("otolith-study", "Otolith Morphology Study"),
];

pub static SHARE_ITEMS: &[Choice] = &[
    choice("dashboard", "Main Dashboard"),
    choice("analysis", "Correlation Analysis"),
    choice("dataset", "Temperature Dataset"),
    choice("report", "Climate Impact Report"),
];

pub static VIEWER_PERMISSIONS: &[Choice] = &[
    choice("view", "View Only"),
    choice("comment", "View & Comment"),
    choice("download", "View & Download"),
    choice("edit", "Full Edit Access"),
];

pub static NOTIFICATION_FREQUENCIES: &[Choice] = &[
    choice("immediate", "Immediate"),
    choice("hourly", "Hourly digest"),
    choice("daily", "Daily digest"),
    choice("weekly", "Weekly digest"),
];

pub static EXPORT_SOURCES: &[Choice] = &[
    choice("temp-data", "Temperature Dataset"),
    choice("biodiversity", "Biodiversity Records"),
    choice("edna-sequences", "eDNA Sequences"),
    choice("analysis-results", "Analysis Results"),
    choice("all-data", "Complete Dataset"),
];
