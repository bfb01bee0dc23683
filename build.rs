use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/vehicle_faults.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let symptoms = required_array(catalog, "symptoms");
    let causes = required_array(catalog, "causes");

    let symptom_ids = validate_symptoms(symptoms);
    validate_causes(causes, &symptom_ids);

    println!(
        "cargo:warning=Validated catalog: {} symptoms, {} causes",
        symptoms.len(),
        causes.len()
    );
}

fn required_array<'a>(catalog: &'a serde_json::Value, field: &str) -> &'a [serde_json::Value] {
    catalog
        .get(field)
        .and_then(|v| v.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing '{field}' field\n\
                 The catalog must have a top-level '{field}' array.\n"
            )
        })
}

fn validate_symptoms(symptoms: &[serde_json::Value]) -> HashSet<u64> {
    let mut ids = HashSet::new();

    for (i, symptom) in symptoms.iter().enumerate() {
        let label = symptom
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Symptom at index {i} missing 'label' field\n")
            });

        let id = symptom
            .get("id")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Symptom '{label}' (index {i}) missing numeric 'id' field\n"
                )
            });
        assert!(
            id > 0,
            "\n\nCATALOG BUILD ERROR: Symptom '{label}' has id 0\n\
             Symptom ids must be positive.\n"
        );
        assert!(
            ids.insert(id),
            "\n\nCATALOG BUILD ERROR: Duplicate symptom id {id} ('{label}')\n"
        );

        validate_enum_field(symptom, "severity", &["low", "medium", "high"], label, i);
        assert!(
            symptom.get("category").is_some(),
            "\n\nCATALOG BUILD ERROR: Symptom '{label}' (index {i}) missing 'category' field\n"
        );

        // Keywords are matched against lowercased text, so they must be lowercase
        if let Some(keywords) = symptom.get("keywords").and_then(|v| v.as_array()) {
            for keyword in keywords {
                let keyword = keyword.as_str().unwrap_or_else(|| {
                    panic!(
                        "\n\nCATALOG BUILD ERROR: Symptom '{label}' has a non-string keyword\n"
                    )
                });
                assert!(
                    keyword == keyword.to_lowercase(),
                    "\n\nCATALOG BUILD ERROR: Symptom '{label}' keyword '{keyword}' is not lowercase\n"
                );
            }
        }
    }

    ids
}

fn validate_causes(causes: &[serde_json::Value], symptom_ids: &HashSet<u64>) {
    let mut cause_ids: HashSet<&str> = HashSet::new();

    for (i, cause) in causes.iter().enumerate() {
        let id = cause
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Cause at index {i} missing 'id' field\n")
            });
        assert!(
            cause_ids.insert(id),
            "\n\nCATALOG BUILD ERROR: Duplicate cause id '{id}'\n"
        );
        assert!(
            cause.get("label").is_some(),
            "\n\nCATALOG BUILD ERROR: Cause '{id}' (index {i}) missing 'label' field\n"
        );
        assert!(
            cause.get("solution").is_some(),
            "\n\nCATALOG BUILD ERROR: Cause '{id}' (index {i}) missing 'solution' field\n"
        );

        validate_enum_field(cause, "urgency", &["low", "medium", "high"], id, i);
        validate_triggers(cause, id, symptom_ids);
        validate_probability(cause, id);
        validate_cost_range(cause, id);
    }
}

fn validate_triggers(cause: &serde_json::Value, cause_id: &str, symptom_ids: &HashSet<u64>) {
    let triggers = cause
        .get("triggering_symptoms")
        .and_then(|v| v.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' missing 'triggering_symptoms' array\n"
            )
        });
    assert!(
        !triggers.is_empty(),
        "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' has no triggering symptoms\n\
         A cause that nothing can trigger is unreachable.\n"
    );

    for trigger in triggers {
        let trigger_id = trigger.as_u64().unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' has a non-numeric trigger id\n"
            )
        });
        assert!(
            symptom_ids.contains(&trigger_id),
            "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' references unknown symptom id {trigger_id}\n"
        );
    }
}

fn validate_probability(cause: &serde_json::Value, cause_id: &str) {
    let probability = cause
        .get("base_probability")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' missing numeric 'base_probability'\n"
            )
        });
    assert!(
        probability <= 100,
        "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' has base_probability {probability}\n\
         Probabilities are integer percentages (0-100).\n"
    );
}

fn validate_cost_range(cause: &serde_json::Value, cause_id: &str) {
    let range = cause.get("cost_range").unwrap_or_else(|| {
        panic!("\n\nCATALOG BUILD ERROR: Cause '{cause_id}' missing 'cost_range' field\n")
    });

    let min = range.get("min").and_then(serde_json::Value::as_u64);
    let max = range.get("max").and_then(serde_json::Value::as_u64);
    let (Some(min), Some(max)) = (min, max) else {
        panic!(
            "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' cost_range needs numeric 'min' and 'max'\n"
        );
    };
    assert!(
        min <= max,
        "\n\nCATALOG BUILD ERROR: Cause '{cause_id}' cost_range has min {min} > max {max}\n"
    );
}

fn validate_enum_field(
    record: &serde_json::Value,
    field: &str,
    allowed: &[&str],
    name: &str,
    index: usize,
) {
    let value = record
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Entry '{name}' (index {index}) missing '{field}' field\n"
            )
        });
    assert!(
        allowed.contains(&value),
        "\n\nCATALOG BUILD ERROR: Entry '{name}' has invalid {field} '{value}'\n\
         Allowed values: {allowed:?}\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/vehicle_faults.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
