use graphql_dashboard::core::{ContinentRecord, CountryRecord, QueryResult, to_series};
use proptest::prelude::*;

fn continent_strategy() -> impl Strategy<Value = ContinentRecord> {
    (
        "[A-Za-z ]{1,16}",
        prop::collection::vec("[A-Z]{2}", 0..64),
    )
        .prop_map(|(name, codes)| ContinentRecord {
            name,
            countries: codes.into_iter().map(CountryRecord::new).collect(),
        })
}

proptest! {
    #[test]
    fn series_lengths_match_continent_count(
        continents in prop::collection::vec(continent_strategy(), 0..24)
    ) {
        let series = to_series(&QueryResult::from_continents(&continents))
            .expect("generated payload is well-formed");

        prop_assert_eq!(series.labels().len(), continents.len());
        prop_assert_eq!(series.values().len(), continents.len());
    }

    #[test]
    fn series_preserves_order_and_counts(
        continents in prop::collection::vec(continent_strategy(), 0..24)
    ) {
        let series = to_series(&QueryResult::from_continents(&continents))
            .expect("generated payload is well-formed");

        for (i, continent) in continents.iter().enumerate() {
            prop_assert_eq!(&series.labels()[i], &continent.name);
            prop_assert_eq!(series.values()[i], continent.countries.len() as u64);
        }
    }
}
