use crate::data::records::{Country, DataError, Tournament, COUNTRIES, TOURNAMENTS};

/// Titles per country, most first. Ties are broken by code so the
/// ordering is stable.
pub fn title_counts() -> Vec<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();

    for tournament in &TOURNAMENTS {
        match counts.iter_mut().find(|(code, _)| *code == tournament.winner) {
            Some((_, count)) => *count += 1,
            None => counts.push((tournament.winner, 1)),
        }
    }

    counts.sort_by(|(code_a, count_a), (code_b, count_b)| {
        count_b.cmp(count_a).then_with(|| code_a.cmp(code_b))
    });
    counts
}

/// The highest title count of any country.
pub fn max_titles() -> usize {
    title_counts().first().map_or(0, |(_, count)| *count)
}

/// Years in which the country lifted the trophy, chronological.
pub fn winning_years(code: &str) -> Vec<u16> {
    TOURNAMENTS
        .iter()
        .filter(|t| t.winner == code)
        .map(|t| t.year)
        .collect()
}

/// Years in which the country lost the final, chronological.
pub fn runner_up_years(code: &str) -> Vec<u16> {
    TOURNAMENTS
        .iter()
        .filter(|t| t.runner_up == code)
        .map(|t| t.year)
        .collect()
}

pub fn final_for_year(year: u16) -> Option<&'static Tournament> {
    TOURNAMENTS.iter().find(|t| t.year == year)
}

/// Sorted unique codes of every country that reached a final - the
/// country picker options.
pub fn country_codes() -> Vec<&'static str> {
    COUNTRIES.iter().map(|c| c.code).collect()
}

/// Tournament years in chronological order - the year picker options.
pub fn years() -> Vec<u16> {
    TOURNAMENTS.iter().map(|t| t.year).collect()
}

pub fn lookup_country(code: &str) -> Result<&'static Country, DataError> {
    COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| DataError::UnknownCountry(code.to_string()))
}

pub fn lookup_year(year: u16) -> Result<&'static Tournament, DataError> {
    final_for_year(year).ok_or(DataError::UnknownYear(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_counts_match_the_record_book() {
        let counts = title_counts();

        assert_eq!(counts[0], ("BRA", 5));
        assert_eq!(counts[1], ("DEU", 4));
        assert_eq!(counts[2], ("ITA", 4));
        assert_eq!(counts[3], ("ARG", 3));
        assert_eq!(counts.len(), 8);

        let total: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, TOURNAMENTS.len());
    }

    #[test]
    fn tied_counts_are_ordered_by_code() {
        let counts = title_counts();
        // DEU and ITA both hold four titles; FRA and URY both hold two.
        assert_eq!(counts[1].0, "DEU");
        assert_eq!(counts[2].0, "ITA");
        let two_title_codes: Vec<_> = counts
            .iter()
            .filter(|(_, count)| *count == 2)
            .map(|(code, _)| *code)
            .collect();
        assert_eq!(two_title_codes, ["FRA", "URY"]);
    }

    #[test]
    fn winning_years_are_chronological() {
        assert_eq!(winning_years("ARG"), [1978, 1986, 2022]);
        assert_eq!(winning_years("URY"), [1930, 1950]);
        assert!(winning_years("NLD").is_empty());
    }

    #[test]
    fn runner_up_years_cover_lost_finals() {
        assert_eq!(runner_up_years("NLD"), [1974, 1978, 2010]);
        assert_eq!(runner_up_years("CRO"), [2018]);
        assert!(runner_up_years("URY").is_empty());
    }

    #[test]
    fn final_for_year_handles_missing_tournaments() {
        let final_1966 = final_for_year(1966).map(|t| (t.winner, t.runner_up));
        assert_eq!(final_1966, Some(("GBR", "DEU")));
        assert_eq!(final_for_year(1942), None);
        assert_eq!(final_for_year(2023), None);
    }

    #[test]
    fn picker_options_cover_the_dataset() {
        assert_eq!(country_codes().len(), 13);
        assert_eq!(years().len(), 22);
        assert_eq!(years()[0], 1930);
    }

    #[test]
    fn lookups_report_unknown_values() {
        assert!(lookup_country("ARG").is_ok());
        assert_eq!(
            lookup_country("XYZ"),
            Err(DataError::UnknownCountry("XYZ".to_string()))
        );
        assert_eq!(lookup_year(1946), Err(DataError::UnknownYear(1946)));
    }
}
