use cotacao_gateway::models::{HistoryParams, Period, QuoteParams};
use proptest::prelude::*;

// Configure proptest to explicitly use a specific regression file
proptest! {
    #![proptest_config(ProptestConfig {
        // Explicitly set the regression file path
        failure_persistence: Some(Box::new(proptest::test_runner::FileFailurePersistence::Direct(
            "tests/property_tests.proptest-regressions".into()
        ))),
        cases: 100, // Number of test cases to run
        .. ProptestConfig::default()
    })]

    #[test]
    fn test_period_mapping_is_total(raw in ".*") {
        // Property 1: Every input maps to the intraday branch or a
        // daily window of 5 or 30 days; nothing else can come out.
        match Period::parse(&raw) {
            Period::Intraday => prop_assert_eq!(raw, "1D"),
            Period::Daily(limit) => prop_assert!(limit == 5 || limit == 30),
        }
    }

    #[test]
    fn test_unknown_periods_match_one_month(raw in "[A-Za-z0-9]{1,8}") {
        // Property 2: Anything other than the recognized windows
        // behaves exactly like "1M".
        if raw != "1D" && raw != "5D" {
            prop_assert_eq!(Period::parse(&raw), Period::parse("1M"));
        }
    }

    #[test]
    fn test_non_empty_pairs_are_accepted(
        de in "[A-Z]{2,5}",
        para in "[A-Z]{2,5}",
    ) {
        let params = QuoteParams {
            de: Some(de.clone()),
            para: Some(para.clone()),
        };
        let (got_de, got_para) = params.pair().unwrap();

        // The pair passes through untouched
        prop_assert_eq!(got_de, de);
        prop_assert_eq!(got_para, para);
    }

    #[test]
    fn test_missing_or_empty_params_are_rejected(
        de in prop::option::of(".*"),
        para in prop::option::of(".*"),
    ) {
        let blank_de = de.as_deref().map_or(true, str::is_empty);
        let blank_para = para.as_deref().map_or(true, str::is_empty);

        let params = HistoryParams {
            de,
            para,
            periodo: None,
        };

        // Property: validation fails exactly when either side is
        // missing or empty.
        prop_assert_eq!(params.pair().is_err(), blank_de || blank_para);
    }
}
