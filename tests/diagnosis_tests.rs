//! End-to-end behavior of the diagnosis engine.
//!
//! Covers the public entry points over both purpose-built catalogs and the
//! embedded knowledge base: ranking order, idempotence, determinism, cost
//! bounds, and the no-diagnosis outcomes.

use fault_solver::catalog::store::CategoryAdvice;
use fault_solver::{
    Category, Cause, DiagnosisEngine, DiagnosisResult, KnowledgeCatalog, Severity, Symptom,
    SymptomId, Urgency,
};

fn ids(raw: &[u32]) -> Vec<SymptomId> {
    raw.iter().copied().map(SymptomId::new).collect()
}

/// Catalog with one cause per trigger shape: a single-symptom cause and a
/// two-symptom cause sharing symptom 1
fn scenario_catalog() -> KnowledgeCatalog {
    let mut catalog = KnowledgeCatalog::new();
    catalog.add_symptom(
        Symptom::new(1, "engine knocking", Category::Engine, Severity::Medium)
            .with_keywords(["knock", "ketukan"]),
    );
    catalog.add_symptom(
        Symptom::new(2, "rough idle", Category::Engine, Severity::Low)
            .with_keywords(["rough idle", "idle kasar"]),
    );
    catalog.add_cause(
        Cause::new("low_octane_fuel", "low octane fuel", 60, Urgency::Medium)
            .with_triggers([1])
            .with_solution("Refill with the recommended octane rating")
            .with_cost_range(0, 50_000),
    );
    catalog.add_cause(
        Cause::new("carbon_buildup", "carbon buildup", 50, Urgency::Medium)
            .with_triggers([1, 2])
            .with_solution("Decarbonize the combustion chambers")
            .with_cost_range(150_000, 400_000),
    );
    catalog
}

/// Parse the display form back into numeric bounds, e.g.
/// `"Rp 50.000 - Rp 400.000"` -> `(50000, 400000)`
fn parse_cost_range(formatted: &str) -> (u64, u64) {
    let mut bounds = formatted.split(" - ").map(|part| {
        part.trim_start_matches("Rp ")
            .replace('.', "")
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("unparseable cost bound in '{formatted}'"))
    });
    let low = bounds.next().unwrap();
    let high = bounds.next().unwrap();
    assert!(bounds.next().is_none(), "more than two bounds in '{formatted}'");
    (low, high)
}

#[test]
fn test_single_trigger_keeps_base_probability() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    let result = engine.diagnose(&ids(&[1])).unwrap();
    assert_eq!(result.possible_causes[0].cause, "low octane fuel");
    assert_eq!(result.possible_causes[0].probability, 60);
    assert_eq!(result.overall_urgency, Urgency::Medium);
}

#[test]
fn test_corroborated_cause_gains_bonus() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    let single = engine.diagnose(&ids(&[1])).unwrap();
    let buildup_single = single
        .possible_causes
        .iter()
        .find(|c| c.cause == "carbon buildup")
        .unwrap();
    assert_eq!(buildup_single.probability, 50);

    let both = engine.diagnose(&ids(&[1, 2])).unwrap();
    let buildup_both = both
        .possible_causes
        .iter()
        .find(|c| c.cause == "carbon buildup")
        .unwrap();
    assert_eq!(buildup_both.probability, 55);
}

#[test]
fn test_text_entry_equals_id_entry() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    let by_text = engine.diagnose_text("suara mesin ketukan").unwrap();
    let by_id = engine.diagnose(&ids(&[1])).unwrap();

    assert_eq!(
        serde_json::to_value(&by_text).unwrap(),
        serde_json::to_value(&by_id).unwrap()
    );
}

#[test]
fn test_unmatched_text_returns_none() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    assert!(engine.diagnose_text("completely unrelated gibberish").is_none());
}

#[test]
fn test_empty_inputs_return_none() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    assert!(engine.diagnose(&[]).is_none());
    assert!(engine.diagnose_text("").is_none());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    assert!(engine.diagnose(&ids(&[99, 100])).is_none());

    // Mixed with a known id, the unknown ones change nothing
    let with_unknown = engine.diagnose(&ids(&[1, 99])).unwrap();
    let without = engine.diagnose(&ids(&[1])).unwrap();
    assert_eq!(
        serde_json::to_value(&with_unknown).unwrap(),
        serde_json::to_value(&without).unwrap()
    );
}

#[test]
fn test_input_order_and_duplicates_are_irrelevant() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    let forward = engine.diagnose(&ids(&[1, 2])).unwrap();
    let backward = engine.diagnose(&ids(&[2, 1])).unwrap();
    let duplicated = engine.diagnose(&ids(&[2, 1, 2, 2, 1])).unwrap();

    let forward = serde_json::to_value(&forward).unwrap();
    assert_eq!(forward, serde_json::to_value(&backward).unwrap());
    assert_eq!(forward, serde_json::to_value(&duplicated).unwrap());
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let catalog = KnowledgeCatalog::load_embedded().unwrap();
    let engine = DiagnosisEngine::new(&catalog);

    let first = engine.diagnose_text("overheat and coolant leak").unwrap();
    for _ in 0..5 {
        let again = engine.diagnose_text("overheat and coolant leak").unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&again).unwrap()
        );
    }
}

/// Ranking, urgency, and cost invariants hold for every single-symptom
/// diagnosis over the embedded catalog
#[test]
fn test_result_invariants_over_embedded_catalog() {
    let catalog = KnowledgeCatalog::load_embedded().unwrap();
    let engine = DiagnosisEngine::new(&catalog);

    let mut diagnosed = 0;
    for symptom in &catalog.symptoms {
        let Some(result) = engine.diagnose(&[symptom.id]) else {
            continue;
        };
        diagnosed += 1;
        assert_result_invariants(&result);
    }
    // Every embedded symptom triggers at least one cause
    assert_eq!(diagnosed, catalog.symptom_count());
}

fn assert_result_invariants(result: &DiagnosisResult) {
    assert!(!result.possible_causes.is_empty());

    // Probability descending; equal probabilities ordered by urgency
    for pair in result.possible_causes.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
        if pair[0].probability == pair[1].probability {
            assert!(pair[0].urgency.rank() >= pair[1].urgency.rank());
        }
    }

    // Overall urgency is the max over the causes, never independent
    let max_urgency = result
        .possible_causes
        .iter()
        .map(|c| c.urgency)
        .max()
        .unwrap();
    assert_eq!(result.overall_urgency, max_urgency);

    // Aggregate bounds are ordered and span every per-cause range
    let (low, high) = parse_cost_range(&result.estimated_cost_range);
    assert!(low <= high);
    for cause in &result.possible_causes {
        let (cause_low, cause_high) = parse_cost_range(&cause.estimated_cost);
        assert!(low <= cause_low);
        assert!(high >= cause_high);
    }

    assert!(!result.recommendations.is_empty());
    assert!(!result.problem.is_empty());
}

#[test]
fn test_multi_symptom_story_over_embedded_catalog() {
    let catalog = KnowledgeCatalog::load_embedded().unwrap();
    let engine = DiagnosisEngine::new(&catalog);

    // Overheating + coolant leak + sweet smell: the radiator leak cause
    // has all three triggers and should gain the full corroboration bonus
    let result = engine
        .diagnose_text("panas berlebih, radiator bocor, bau manis")
        .unwrap();
    assert_eq!(result.possible_causes[0].cause, "leaking radiator");
    assert_eq!(result.possible_causes[0].probability, 65);
    assert_eq!(result.overall_urgency, Urgency::High);
    assert_eq!(result.problem, "Cooling system problem");
}

#[test]
fn test_standing_advice_fills_knowledge_gaps() {
    let mut catalog = scenario_catalog();
    // Brakes symptom with no cause behind it
    catalog.add_symptom(
        Symptom::new(3, "squealing brakes", Category::Brakes, Severity::Medium)
            .with_keywords(["squeal", "decit"]),
    );
    catalog.set_advice(vec![CategoryAdvice {
        category: Category::Brakes,
        text: "Have the brake system inspected immediately".to_string(),
    }]);

    let engine = DiagnosisEngine::new(&catalog);
    let result = engine.diagnose(&ids(&[1, 3])).unwrap();

    // The engine cause still leads; the brakes gap surfaces as advice
    assert_eq!(result.possible_causes[0].cause, "low octane fuel");
    assert_eq!(
        result.recommendations.last().unwrap(),
        "Have the brake system inspected immediately"
    );
}

#[test]
fn test_recommendations_are_deduplicated() {
    let mut catalog = KnowledgeCatalog::new();
    catalog.add_symptom(Symptom::new(1, "engine knocking", Category::Engine, Severity::Medium));
    catalog.add_symptom(Symptom::new(2, "rough idle", Category::Engine, Severity::Low));
    // Two causes sharing one remediation text
    catalog.add_cause(
        Cause::new("cause_a", "cause a", 60, Urgency::Low)
            .with_triggers([1])
            .with_solution("Service the fuel system")
            .with_cost_range(0, 100_000),
    );
    catalog.add_cause(
        Cause::new("cause_b", "cause b", 40, Urgency::Low)
            .with_triggers([2])
            .with_solution("Service the fuel system")
            .with_cost_range(0, 200_000),
    );

    let engine = DiagnosisEngine::new(&catalog);
    let result = engine.diagnose(&ids(&[1, 2])).unwrap();

    assert_eq!(result.recommendations, vec!["Service the fuel system".to_string()]);
}

#[test]
fn test_result_serializes_with_ui_field_names() {
    let catalog = scenario_catalog();
    let engine = DiagnosisEngine::new(&catalog);

    let result = engine.diagnose(&ids(&[1])).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("problem").is_some());
    assert!(json.get("possibleCauses").is_some());
    assert!(json.get("recommendations").is_some());
    assert!(json.get("estimatedCostRange").is_some());
    assert_eq!(json["overallUrgency"], "medium");

    let first_cause = &json["possibleCauses"][0];
    assert_eq!(first_cause["cause"], "low octane fuel");
    assert_eq!(first_cause["probability"], 60);
    assert!(first_cause.get("estimatedCost").is_some());
}
