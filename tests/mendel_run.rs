mod common;
use common::MendelRunnerBuilder;

use std::collections::HashMap;

use float_cmp::assert_approx_eq;
#[cfg(test)] use pretty_assertions::assert_eq;

/// Parse the rendered result table back into
/// individual name -> bucket label -> probability.
/// Bucket labels are "2", "1", "0" for the gene distribution and
/// "True", "False" for the trait distribution.
fn parse_results(text: &str) -> HashMap<String, HashMap<String, f64>> {
    let mut results: HashMap<String, HashMap<String, f64>> = HashMap::new();
    let mut current = String::new();
    for line in text.lines() {
        if !line.starts_with(' ') && line.ends_with(':') {
            current = line.trim_end_matches(':').to_string();
            results.insert(current.clone(), HashMap::new());
        } else if let Some((label, value)) = line.trim().split_once(": ") {
            let value: f64 = value.parse().expect("unparseable probability");
            results.get_mut(&current)
                .expect("probability line before any individual header")
                .insert(label.to_string(), value);
        }
    }
    results
}

fn classic_family() -> MendelRunnerBuilder {
    MendelRunnerBuilder::new()
        .row("Harry,Lily,James,")
        .row("James,,,1")
        .row("Lily,,,0")
}

#[test]
fn classic_family_posteriors() {
    let runner = classic_family().output("family.result").build();
    runner.run().expect("inference run failed");

    let rendered = std::fs::read_to_string(runner.output_path()).expect("missing output file");
    let results = parse_results(&rendered);

    let harry = &results["Harry"];
    assert_approx_eq!(f64, harry["2"], 0.00918312, epsilon = 1e-8);
    assert_approx_eq!(f64, harry["1"], 0.45569827, epsilon = 1e-8);
    assert_approx_eq!(f64, harry["0"], 0.53511861, epsilon = 1e-8);
    assert_approx_eq!(f64, harry["True"],  0.26651125, epsilon = 1e-8);
    assert_approx_eq!(f64, harry["False"], 0.73348875, epsilon = 1e-8);

    let james = &results["James"];
    assert_approx_eq!(f64, james["2"], 0.19756839, epsilon = 1e-8);
    assert_approx_eq!(f64, james["1"], 0.51063830, epsilon = 1e-8);
    assert_approx_eq!(f64, james["0"], 0.29179331, epsilon = 1e-8);
    assert_approx_eq!(f64, james["True"], 1.0, epsilon = 1e-8);

    let lily = &results["Lily"];
    assert_approx_eq!(f64, lily["0"], 0.98273188, epsilon = 1e-8);
    assert_approx_eq!(f64, lily["False"], 1.0, epsilon = 1e-8);
}

#[test]
fn output_format_is_eight_decimals() {
    let runner = classic_family().output("family.result").build();
    runner.run().expect("inference run failed");

    let rendered = std::fs::read_to_string(runner.output_path()).expect("missing output file");
    for individual in ["Harry:", "James:", "Lily:"] {
        assert!(rendered.contains(individual));
    }
    for line in rendered.lines() {
        if let Some((_, value)) = line.trim().split_once(": ") {
            let decimals = value.split_once('.').map(|(_, frac)| frac.len());
            assert_eq!(decimals, Some(8), "unexpected precision in line {line:?}");
        }
    }
}

#[test]
fn every_rendered_distribution_sums_to_one() {
    // Three-generation pedigree, partially observed.
    let runner = MendelRunnerBuilder::new()
        .row("arthur,,,1")
        .row("molly,,,")
        .row("ginny,molly,arthur,")
        .row("harry,,,0")
        .row("albus,ginny,harry,")
        .output("family.result")
        .build();
    runner.run().expect("inference run failed");

    let rendered = std::fs::read_to_string(runner.output_path()).expect("missing output file");
    let results = parse_results(&rendered);
    assert_eq!(results.len(), 5);
    for buckets in results.values() {
        let gene_total  = buckets["2"] + buckets["1"] + buckets["0"];
        let trait_total = buckets["True"] + buckets["False"];
        assert_approx_eq!(f64, gene_total, 1.0, epsilon = 1e-7);
        assert_approx_eq!(f64, trait_total, 1.0, epsilon = 1e-7);
    }
}

#[test]
fn model_overrides_flow_through() {
    // A degenerate prior pins an unobserved founder to zero copies, and the
    // null penetrance makes the trait impossible at zero copies.
    let runner = MendelRunnerBuilder::new()
        .row("A,,,")
        .output("pinned.result")
        .arg("--gene-prior").arg("1.0").arg("0.0").arg("0.0")
        .arg("--penetrance").arg("0.0").arg("0.56").arg("0.65")
        .arg("--mutation-rate").arg("0.0")
        .build();
    runner.run().expect("inference run failed");

    let rendered = std::fs::read_to_string(runner.output_path()).expect("missing output file");
    let results = parse_results(&rendered);
    let a = &results["A"];
    assert_approx_eq!(f64, a["0"], 1.0, epsilon = 1e-9);
    assert_approx_eq!(f64, a["2"], 0.0, epsilon = 1e-9);
    assert_approx_eq!(f64, a["False"], 1.0, epsilon = 1e-9);
}

#[test]
fn refuse_to_overwrite_results() {
    let runner = classic_family().output("family.result").build();
    runner.run().expect("first run failed");
    assert!(runner.run().is_err(), "second run should refuse to overwrite");
}

#[test]
fn overwrite_flag_allows_rerun() {
    let runner = classic_family().output("family.result").overwrite().build();
    runner.run().expect("first run failed");
    runner.run().expect("rerun with --overwrite failed");
}

#[test]
fn reject_dangling_parent_reference() {
    let runner = MendelRunnerBuilder::new()
        .row("Harry,Lily,James,") // James and Lily are never defined.
        .build();
    let got = runner.run();
    assert!(got.is_err());
}

#[test]
fn reject_invalid_trait_value() {
    let runner = MendelRunnerBuilder::new()
        .row("Harry,,,maybe")
        .build();
    let got = runner.run();
    assert!(got.is_err());
}

#[test]
fn reject_unnormalized_prior_override() {
    let runner = classic_family()
        .arg("--gene-prior").arg("0.5").arg("0.5").arg("0.5")
        .build();
    let got = runner.run();
    assert!(got.is_err());
}
