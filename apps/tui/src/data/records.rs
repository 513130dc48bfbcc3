use thiserror::Error;

/// One World Cup final. Countries are ISO-3 codes as recorded in the
/// source data (GBR for the 1966 champion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    pub year: u16,
    pub winner: &'static str,
    pub runner_up: &'static str,
}

/// Display name and map centroid for a country code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("unknown country code: {0}")]
    UnknownCountry(String),
    #[error("no tournament was held in {0}")]
    UnknownYear(u16),
}

/// Every final from 1930 to 2022. No tournaments in 1942 and 1946.
pub const TOURNAMENTS: [Tournament; 22] = [
    Tournament { year: 1930, winner: "URY", runner_up: "ARG" },
    Tournament { year: 1934, winner: "ITA", runner_up: "CZE" },
    Tournament { year: 1938, winner: "ITA", runner_up: "HUN" },
    Tournament { year: 1950, winner: "URY", runner_up: "BRA" },
    Tournament { year: 1954, winner: "DEU", runner_up: "HUN" },
    Tournament { year: 1958, winner: "BRA", runner_up: "SWE" },
    Tournament { year: 1962, winner: "BRA", runner_up: "CZE" },
    Tournament { year: 1966, winner: "GBR", runner_up: "DEU" },
    Tournament { year: 1970, winner: "BRA", runner_up: "ITA" },
    Tournament { year: 1974, winner: "DEU", runner_up: "NLD" },
    Tournament { year: 1978, winner: "ARG", runner_up: "NLD" },
    Tournament { year: 1982, winner: "ITA", runner_up: "DEU" },
    Tournament { year: 1986, winner: "ARG", runner_up: "DEU" },
    Tournament { year: 1990, winner: "DEU", runner_up: "ARG" },
    Tournament { year: 1994, winner: "BRA", runner_up: "ITA" },
    Tournament { year: 1998, winner: "FRA", runner_up: "BRA" },
    Tournament { year: 2002, winner: "BRA", runner_up: "DEU" },
    Tournament { year: 2006, winner: "ITA", runner_up: "FRA" },
    Tournament { year: 2010, winner: "ESP", runner_up: "NLD" },
    Tournament { year: 2014, winner: "DEU", runner_up: "ARG" },
    Tournament { year: 2018, winner: "FRA", runner_up: "CRO" },
    Tournament { year: 2022, winner: "ARG", runner_up: "FRA" },
];

/// Every country that appears in [`TOURNAMENTS`], sorted by code.
pub const COUNTRIES: [Country; 13] = [
    Country { code: "ARG", name: "Argentina", lon: -64.0, lat: -34.0 },
    Country { code: "BRA", name: "Brazil", lon: -52.9, lat: -10.8 },
    Country { code: "CRO", name: "Croatia", lon: 16.4, lat: 45.1 },
    Country { code: "CZE", name: "Czechia", lon: 15.3, lat: 49.8 },
    Country { code: "DEU", name: "Germany", lon: 10.4, lat: 51.1 },
    Country { code: "ESP", name: "Spain", lon: -3.6, lat: 40.2 },
    Country { code: "FRA", name: "France", lon: 2.2, lat: 46.2 },
    Country { code: "GBR", name: "England", lon: -1.9, lat: 52.9 },
    Country { code: "HUN", name: "Hungary", lon: 19.4, lat: 47.2 },
    Country { code: "ITA", name: "Italy", lon: 12.6, lat: 42.5 },
    Country { code: "NLD", name: "Netherlands", lon: 5.3, lat: 52.1 },
    Country { code: "SWE", name: "Sweden", lon: 16.7, lat: 62.8 },
    Country { code: "URY", name: "Uruguay", lon: -55.8, lat: -32.8 },
];

#[cfg(test)]
mod tests {
    use super::{COUNTRIES, TOURNAMENTS};

    #[test]
    fn tournaments_are_chronological() {
        for pair in TOURNAMENTS.windows(2) {
            assert!(pair[0].year < pair[1].year, "{} repeated", pair[1].year);
        }
        assert_eq!(TOURNAMENTS[0].year, 1930);
        assert_eq!(TOURNAMENTS[TOURNAMENTS.len() - 1].year, 2022);
    }

    #[test]
    fn war_years_are_absent() {
        assert!(!TOURNAMENTS.iter().any(|t| t.year == 1942 || t.year == 1946));
    }

    #[test]
    fn every_finalist_has_a_country_entry() {
        for tournament in &TOURNAMENTS {
            for code in [tournament.winner, tournament.runner_up] {
                assert!(
                    COUNTRIES.iter().any(|c| c.code == code),
                    "missing country entry for {code}"
                );
            }
        }
    }

    #[test]
    fn countries_are_sorted_and_unique() {
        for pair in COUNTRIES.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }
}
