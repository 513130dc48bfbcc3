use serde::Serialize;

/// The three mutually exclusive display modes of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    AllWinners,
    CountryHistory,
    ByYear,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::AllWinners, Self::CountryHistory, Self::ByYear];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllWinners => "all-winners",
            Self::CountryHistory => "country",
            Self::ByYear => "year",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::AllWinners),
            1 => Some(Self::CountryHistory),
            2 => Some(Self::ByYear),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all-winners" | "all" => Some(Self::AllWinners),
            "country" => Some(Self::CountryHistory),
            "year" => Some(Self::ByYear),
            _ => None,
        }
    }

    /// Control caption, as shown in the mode picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllWinners => "View All Winners",
            Self::CountryHistory => "Select A Country",
            Self::ByYear => "Select A Year",
        }
    }
}

/// Finish of a finalist in a single tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Winner,
    RunnerUp,
}

impl Placement {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winner => "winner",
            Self::RunnerUp => "runner-up",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Winner => "Winner",
            Self::RunnerUp => "Runner-up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewMode;

    #[test]
    fn view_mode_indexes_round_trip() {
        for (index, mode) in ViewMode::ALL.iter().enumerate() {
            assert_eq!(ViewMode::from_index(index), Some(*mode));
        }
        assert_eq!(ViewMode::from_index(3), None);
    }

    #[test]
    fn view_mode_parses_slugs() {
        assert_eq!(ViewMode::parse("all-winners"), Some(ViewMode::AllWinners));
        assert_eq!(ViewMode::parse(" Country "), Some(ViewMode::CountryHistory));
        assert_eq!(ViewMode::parse("YEAR"), Some(ViewMode::ByYear));
        assert_eq!(ViewMode::parse("decade"), None);
    }
}
