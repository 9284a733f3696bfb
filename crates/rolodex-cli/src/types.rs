use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// On/off argument for column visibility commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VisibilityState {
    On,
    Off,
}

impl VisibilityState {
    pub fn as_bool(&self) -> bool {
        matches!(self, VisibilityState::On)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for rolodex_types::SortDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => rolodex_types::SortDirection::Asc,
            Direction::Desc => rolodex_types::SortDirection::Desc,
        }
    }
}
