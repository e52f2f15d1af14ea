use crate::config::DASHBOARD_STAGGER_STEP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Ideation,
    CreateContent,
    Schedule,
    Analytics,
}

impl ActionKind {
    pub fn all_variants() -> Vec<Self> {
        vec![
            ActionKind::Ideation,
            ActionKind::CreateContent,
            ActionKind::Schedule,
            ActionKind::Analytics,
        ]
    }

    pub fn class_name(self) -> &'static str {
        match self {
            ActionKind::Ideation => "ideation",
            ActionKind::CreateContent => "create-content",
            ActionKind::Schedule => "schedule",
            ActionKind::Analytics => "analytics",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ActionKind::Ideation => "Content Ideation",
            ActionKind::CreateContent => "Create Content",
            ActionKind::Schedule => "Schedule Posts",
            ActionKind::Analytics => "Analytics",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::Ideation => "💡",
            ActionKind::CreateContent => "✏️",
            ActionKind::Schedule => "🗓️",
            ActionKind::Analytics => "📊",
        }
    }

    pub fn coming_soon_message(self) -> &'static str {
        match self {
            ActionKind::Ideation => "Content ideation is coming soon!",
            ActionKind::CreateContent => "Content creation is coming soon!",
            ActionKind::Schedule => "Post scheduling is coming soon!",
            ActionKind::Analytics => "Analytics dashboard is coming soon!",
        }
    }
}

/// Hands out reveal delays so dashboard sections fade in one after another.
#[derive(Debug, Clone)]
pub struct Stagger {
    next: u32,
    step: u32,
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(DASHBOARD_STAGGER_STEP, DASHBOARD_STAGGER_STEP)
    }
}

impl Stagger {
    pub fn new(start: u32, step: u32) -> Self {
        Self { next: start, step }
    }

    pub fn next_delay(&mut self) -> u32 {
        let delay = self.next;
        self.next = self.next.saturating_add(self.step);
        delay
    }

    /// Delays for `count` consecutive elements.
    pub fn take(&mut self, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.next_delay()).collect()
    }
}
