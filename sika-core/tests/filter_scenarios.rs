use chrono::{NaiveDate, NaiveDateTime};
use sika_core::{
    AdvancedFilters, AmountFacet, Chip, Direction, EngineConfig, FilterController, FilterState,
    PeriodFacet, Status, StatusFacet, Tab, TransactionRecord, chip_label, filter, filter_owned,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn record_a() -> TransactionRecord {
    TransactionRecord::new("A", "Reçu de Marie")
        .with_direction(Direction::Received)
        .with_description("Remboursement restaurant")
        .with_category("Transfert")
        .with_amount_text("+2 500")
        .with_status(Status::Completed)
        .with_timestamp(at("2026-10-16 14:30"))
}

fn record_b() -> TransactionRecord {
    TransactionRecord::new("B", "Envoyé à Jean")
        .with_direction(Direction::Sent)
        .with_description("Contribution tontine #3")
        .with_category("Tontine")
        .with_amount_text("-15 000")
        .with_status(Status::Completed)
        .with_timestamp(at("2026-10-15 09:10"))
}

fn record_c() -> TransactionRecord {
    TransactionRecord::new("C", "Change de devise")
        .with_direction(Direction::Exchange)
        .with_description("XAF vers EUR")
        .with_category("Change")
        .with_amount_text("-50 000")
        .with_status(Status::Pending)
        .with_timestamp(at("2026-09-28 17:45"))
}

fn catalog() -> Vec<TransactionRecord> {
    vec![record_a(), record_b(), record_c()]
}

/// A wider catalog for the property checks
fn wide_catalog() -> Vec<TransactionRecord> {
    let mut c = catalog();
    c.push(
        TransactionRecord::new("D", "Facture ENEO")
            .with_category("Facture")
            .with_amount(-23_500)
            .with_status(Status::Failed)
            .with_timestamp(at("2026-10-02 08:00")),
    );
    c.push(
        TransactionRecord::new("E", "Recharge Orange")
            .with_direction(Direction::Sent)
            .with_category("Rechargement")
            .with_amount(-150_000)
            .with_timestamp(at("2026-10-13 11:00")),
    );
    c.push(
        TransactionRecord::new("F", "Bonus fidélité")
            .with_direction(Direction::Received)
            .with_category("Bonus")
            .with_amount_text("gratuit")
            .with_timestamp(at("2026-08-01 10:00")),
    );
    c
}

fn ids(records: &[&TransactionRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn run(catalog: &[TransactionRecord], state: &FilterState) -> Vec<String> {
    let predicate = EngineConfig::default().compile(state, today());
    ids(&filter(catalog, &predicate))
}

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut it = haystack.iter();
    needle.iter().all(|n| it.any(|h| h == n))
}

#[test]
fn test_past_all_excludes_pending() {
    assert_eq!(run(&catalog(), &FilterState::default()), vec!["A", "B"]);
}

#[test]
fn test_transfert_chip_uses_alias_union() {
    let state = FilterState::default().with_chip(Chip::named("Transfert"));
    assert_eq!(run(&catalog(), &state), vec!["A", "B"]);
}

#[test]
fn test_search_tontine() {
    let state = FilterState::default().with_search("tontine");
    assert_eq!(run(&catalog(), &state), vec!["B"]);
}

#[test]
fn test_upcoming_pending() {
    let state = FilterState::default()
        .with_tab(Tab::Upcoming)
        .with_status(StatusFacet::Pending);
    assert_eq!(run(&catalog(), &state), vec!["C"]);
}

#[test]
fn test_custom_min_across_both_tabs() {
    let base = FilterState::default().with_amount_range(AmountFacet::Custom {
        min: "20000".into(),
        max: String::new(),
    });
    let mut matched = run(&catalog(), &base.with_tab(Tab::Past));
    matched.extend(run(&catalog(), &base.with_tab(Tab::Upcoming)));
    assert_eq!(matched, vec!["C"]);
}

#[test]
fn test_status_only_label_on_selected_chip() {
    let state = FilterState::default()
        .with_chip(Chip::named("Transfert"))
        .with_status(StatusFacet::Pending);
    assert_eq!(chip_label(&Chip::named("Transfert"), &state), "Transfert - En attente");
    assert_eq!(chip_label(&Chip::named("Tontine"), &state), "Tontine");
}

#[test]
fn test_search_suppresses_summary_on_every_chip() {
    // search on "All", advanced facet active: the selected chip shows the
    // query and nothing shows the summary
    let state = FilterState::default()
        .with_search("jean")
        .with_status(StatusFacet::Completed);
    assert_eq!(chip_label(&Chip::All, &state), "Tous + jean");
    assert_eq!(chip_label(&Chip::named("Transfert"), &state), "Transfert");
}

fn sample_states() -> Vec<FilterState> {
    let mut states = Vec::new();
    for tab in [Tab::Past, Tab::Upcoming] {
        for chip in ["All", "Transfert", "Recharge", "Retrait", "Paiement", "Tontine"] {
            for query in ["", "de", "TONTINE"] {
                states.push(
                    FilterState::default()
                        .with_tab(tab)
                        .with_chip(Chip::named(chip))
                        .with_search(query),
                );
            }
        }
    }
    states
}

fn extra_facets() -> Vec<AdvancedFilters> {
    let one = |f: fn(&mut AdvancedFilters)| {
        let mut a = AdvancedFilters::default();
        f(&mut a);
        a
    };
    vec![
        one(|a| a.period = PeriodFacet::Today),
        one(|a| a.period = PeriodFacet::Week),
        one(|a| a.period = PeriodFacet::Month),
        one(|a| a.amount = AmountFacet::Small),
        one(|a| a.amount = AmountFacet::Medium),
        one(|a| a.amount = AmountFacet::Large),
        one(|a| a.status = StatusFacet::Completed),
        one(|a| a.status = StatusFacet::Pending),
        one(|a| a.status = StatusFacet::Failed),
    ]
}

#[test]
fn test_filtering_is_idempotent() {
    let cfg = EngineConfig::default();
    let c = wide_catalog();
    for state in sample_states() {
        let p = cfg.compile(&state, today());
        let once = filter_owned(&c, &p);
        let twice = filter_owned(&once, &p);
        assert_eq!(once, twice, "state {state:?}");
    }
}

#[test]
fn test_adding_a_facet_only_narrows() {
    let c = wide_catalog();
    for state in sample_states() {
        let wide = run(&c, &state);
        for extra in extra_facets() {
            let narrowed = FilterState { advanced: extra.clone(), ..state.clone() };
            let narrow = run(&c, &narrowed);
            assert!(
                is_subsequence(&narrow, &wide),
                "{narrow:?} not within {wide:?} for {narrowed:?}"
            );
        }
    }
}

#[test]
fn test_results_keep_catalog_order() {
    let c = wide_catalog();
    let order: Vec<String> = c.iter().map(|r| r.id.clone()).collect();
    for state in sample_states() {
        assert!(is_subsequence(&run(&c, &state), &order));
    }
}

#[test]
fn test_reset_returns_full_partition() {
    let c = wide_catalog();
    for tab in [Tab::Past, Tab::Upcoming] {
        let mut ctl = FilterController::new();
        ctl.set_tab(tab);
        ctl.set_search("jean");
        ctl.set_chip(Chip::named("Paiement"));
        ctl.set_custom_amount_min("1");
        ctl.set_advanced_status(StatusFacet::Failed);
        let reset = ctl.reset().clone();

        let expected: Vec<String> = c
            .iter()
            .filter(|r| tab.partition().contains(r))
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(run(&c, &reset), expected);
    }
}

#[test]
fn test_search_matches_any_of_three_fields() {
    let c = wide_catalog();
    // "re": title of A ("Reçu"), description of A ("Remboursement"),
    // category of E ("Rechargement"), title of E
    let state = FilterState::default().with_search("RE");
    let matched = run(&c, &state);
    for r in c.iter().filter(|r| r.is_settled()) {
        let hit = ["title", "description", "category"].iter().any(|field| {
            let text = match *field {
                "title" => &r.title,
                "description" => &r.description,
                _ => &r.category,
            };
            text.to_lowercase().contains("re")
        });
        assert_eq!(matched.contains(&r.id), hit, "record {}", r.id);
    }
}

#[test]
fn test_unparsable_amount_counts_as_zero() {
    let state = FilterState::default().with_amount_range(AmountFacet::Small);
    let matched = run(&wide_catalog(), &state);
    assert!(matched.contains(&"F".to_string()));
}

#[test]
fn test_dual_status_conflict_is_empty() {
    let state = FilterState::default()
        .with_tab(Tab::Upcoming)
        .with_status(StatusFacet::Completed);
    assert!(run(&wide_catalog(), &state).is_empty());
}

#[test]
fn test_swapped_custom_period_is_empty() {
    let state = FilterState::default()
        .with_custom_period_start("2026-10-31")
        .with_custom_period_end("2026-10-01");
    assert!(run(&wide_catalog(), &state).is_empty());
}

#[test]
fn test_week_period_uses_iso_week() {
    // 2026-10-16 is a Friday; week is 12..=18 October
    let state = FilterState::default().with_period(PeriodFacet::Week);
    assert_eq!(run(&wide_catalog(), &state), vec!["A", "B", "E"]);
}

#[test]
fn test_search_hits_on_category_alone() {
    let cotisation = TransactionRecord::new("G", "Cotisation mensuelle")
        .with_direction(Direction::Sent)
        .with_description("Groupe des amis du quartier")
        .with_category("Tontine")
        .with_amount(-5_000)
        .with_timestamp(at("2026-10-14 18:00"));
    assert!(!cotisation.title.to_lowercase().contains("tontine"));
    assert!(!cotisation.description.to_lowercase().contains("tontine"));

    let c = vec![record_a(), cotisation, record_c()];
    let state = FilterState::default().with_search("TONTINE");
    assert_eq!(run(&c, &state), vec!["G"]);
}
