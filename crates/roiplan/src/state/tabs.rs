/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Calculator,
    Sensitivity,
    Theory,
    About,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::Calculator,
        TabId::Sensitivity,
        TabId::Theory,
        TabId::About,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Calculator => "ROI Calculator",
            TabId::Sensitivity => "Sensitivity",
            TabId::Theory => "Theory Map",
            TabId::About => "About",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Calculator => 0,
            TabId::Sensitivity => 1,
            TabId::Theory => 2,
            TabId::About => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Calculator),
            1 => Some(TabId::Sensitivity),
            2 => Some(TabId::Theory),
            3 => Some(TabId::About),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
