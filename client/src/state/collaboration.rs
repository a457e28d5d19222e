//! Collaboration view state: comment draft, sharing form, notifications.

use super::TabKind;
use crate::data::collaboration::{ANNOTATION_TARGETS, NOTIFICATION_FREQUENCIES, SHARE_ITEMS, VIEWER_PERMISSIONS};
use crate::data::find_choice;

#[cfg(test)]
#[path = "collaboration_test.rs"]
mod collaboration_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollabTab {
    #[default]
    Team,
    Comments,
    Sharing,
    Exports,
}

impl TabKind for CollabTab {
    const ALL: &'static [Self] = &[Self::Team, Self::Comments, Self::Sharing, Self::Exports];

    fn id(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Comments => "comments",
            Self::Sharing => "sharing",
            Self::Exports => "exports",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Team => "Team Management",
            Self::Comments => "Comments & Annotations",
            Self::Sharing => "Sharing & Permissions",
            Self::Exports => "Export & APIs",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnnotationKind {
    Observation,
    Question,
    Recommendation,
    Issue,
}

impl AnnotationKind {
    pub const ALL: [AnnotationKind; 4] =
        [AnnotationKind::Observation, AnnotationKind::Question, AnnotationKind::Recommendation, AnnotationKind::Issue];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Observation => "Observation",
            Self::Question => "Question",
            Self::Recommendation => "Recommendation",
            Self::Issue => "Issue",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub target: Option<&'static str>,
    pub text: String,
    pub annotation: Option<AnnotationKind>,
}

impl CommentDraft {
    pub fn set_target(&mut self, raw: &str) {
        self.target = find_choice(ANNOTATION_TARGETS, raw).map(|c| c.value);
    }

    /// Clicking the selected kind again clears it.
    pub fn toggle_annotation(&mut self, kind: AnnotationKind) {
        self.annotation = if self.annotation == Some(kind) { None } else { Some(kind) };
    }

    /// "Post Comment" is enabled only for non-blank text.
    #[must_use]
    pub fn can_post(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SharingLevel {
    #[default]
    Private,
    Institution,
    Public,
}

impl SharingLevel {
    pub const ALL: [SharingLevel; 3] = [SharingLevel::Private, SharingLevel::Institution, SharingLevel::Public];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Institution => "institution",
            Self::Public => "public",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Private => "Private - Team only",
            Self::Institution => "Institution - Your organization",
            Self::Public => "Public - Anyone with link",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareSettings {
    pub item: Option<&'static str>,
    pub level: SharingLevel,
    pub permission: Option<&'static str>,
    pub message: String,
}

impl ShareSettings {
    pub fn set_item(&mut self, raw: &str) {
        self.item = find_choice(SHARE_ITEMS, raw).map(|c| c.value);
    }

    pub fn set_permission(&mut self, raw: &str) {
        self.permission = find_choice(VIEWER_PERMISSIONS, raw).map(|c| c.value);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    DatasetUploads,
    AnalysisCompletion,
    CommentsMentions,
    DataQuality,
    WeeklySummaries,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::DatasetUploads,
        NotificationKind::AnalysisCompletion,
        NotificationKind::CommentsMentions,
        NotificationKind::DataQuality,
        NotificationKind::WeeklySummaries,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::DatasetUploads => "New Dataset Uploads",
            Self::AnalysisCompletion => "Analysis Completion",
            Self::CommentsMentions => "Comments & Mentions",
            Self::DataQuality => "Data Quality Alerts",
            Self::WeeklySummaries => "Weekly Summaries",
        }
    }

    #[must_use]
    pub fn detail(self) -> &'static str {
        match self {
            Self::DatasetUploads => "Get notified when team members upload data",
            Self::AnalysisCompletion => "Alerts when automated analysis finishes",
            Self::CommentsMentions => "When someone comments or mentions you",
            Self::DataQuality => "Issues with data validation or quality",
            Self::WeeklySummaries => "Digest of team activity and insights",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationPrefs {
    enabled: [bool; 5],
    pub frequency: &'static str,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self { enabled: [true, true, true, true, false], frequency: "immediate" }
    }
}

impl NotificationPrefs {
    #[must_use]
    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        self.enabled[kind.index()]
    }

    pub fn toggle(&mut self, kind: NotificationKind) -> bool {
        let slot = &mut self.enabled[kind.index()];
        *slot = !*slot;
        *slot
    }

    pub fn set_frequency(&mut self, raw: &str) {
        if let Some(choice) = find_choice(NOTIFICATION_FREQUENCIES, raw) {
            self.frequency = choice.value;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollaborationState {
    pub tab: CollabTab,
    pub draft: CommentDraft,
    pub share: ShareSettings,
    pub notifications: NotificationPrefs,
    pub export_source: Option<&'static str>,
}
