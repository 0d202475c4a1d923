/// Placeholder buttons at the bottom of the dashboard. Pressing one only
/// shows its message; no task data changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    SubmitWork,
    AskForHelp,
    ViewProfile,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::SubmitWork,
        QuickAction::AskForHelp,
        QuickAction::ViewProfile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::SubmitWork => "📝 Submit Work",
            QuickAction::AskForHelp => "❓ Ask for Help",
            QuickAction::ViewProfile => "📊 View Full Profile",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            QuickAction::SubmitWork => "This would open a submission form for completed tasks",
            QuickAction::AskForHelp => {
                "This would open a help request form or connect to mentors"
            }
            QuickAction::ViewProfile => {
                "This would show detailed member profile and achievement history"
            }
        }
    }

    /// Button for the `1`..`3` shortcut keys.
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' => Some(QuickAction::SubmitWork),
            '2' => Some(QuickAction::AskForHelp),
            '3' => Some(QuickAction::ViewProfile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_map_in_display_order() {
        let mapped: Vec<_> = ['1', '2', '3']
            .into_iter()
            .filter_map(QuickAction::from_shortcut)
            .collect();
        assert_eq!(mapped, QuickAction::ALL);
        assert_eq!(QuickAction::from_shortcut('4'), None);
    }

    #[test]
    fn every_button_has_a_message() {
        for action in QuickAction::ALL {
            assert!(action.message().starts_with("This would"));
        }
    }
}
