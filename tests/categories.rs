use checktls::models::{read_results, Host};
use checktls::stats::{category_counts, Counts};

fn load(name: &str) -> Vec<Host> {
    let path = format!("{}/tests/testdata/{}", env!("CARGO_MANIFEST_DIR"), name);
    read_results(&path).expect("fixture should parse")
}

fn counts_of(pairs: &[(&str, usize)]) -> Counts {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_category_counts_nil() {
    assert!(category_counts(None).is_empty());
}

#[test]
fn test_category_counts_empty() {
    let cntrs = category_counts(Some(&[]));
    assert_eq!(cntrs, counts_of(&[("Total", 0), ("X", 0), ("Z", 0)]));
}

#[test]
fn test_category_counts_report() {
    let all = load("site.json");
    let good = counts_of(&[
        ("OCSP", 1),
        ("Total", 1),
        ("X", 0),
        ("", 1),
        ("Issues", 1),
        ("HSTS", 1),
        ("Z", 1),
        ("A+", 1),
        ("PFS", 1),
    ]);
    assert_eq!(category_counts(Some(&all)), good);
}

#[test]
fn test_category_counts_report_des() {
    let all = load("reallybad.json");
    let good = counts_of(&[
        ("OCSP", 1),
        ("Total", 1),
        ("X", 0),
        ("Issues", 1),
        ("HSTS", 1),
        ("Z", 0),
        ("A+", 1),
        ("PFS", 1),
        ("Sweet32", 1),
    ]);
    assert_eq!(category_counts(Some(&all)), good);
}

#[test]
fn test_category_counts_report_null() {
    let all = load("null.json");
    let good = counts_of(&[("X", 1), ("Z", 0), ("Total", 0)]);
    assert_eq!(category_counts(Some(&all)), good);
}

#[test]
fn test_category_counts_whole_batch() {
    let mut all = load("site.json");
    all.extend(load("reallybad.json"));
    all.extend(load("null.json"));

    let cntrs = category_counts(Some(&all));
    assert_eq!(cntrs["Total"], 2);
    assert_eq!(cntrs["X"], 1);
    assert_eq!(cntrs["A+"], 2);
    assert_eq!(cntrs["Sweet32"], 1);
    assert_eq!(cntrs, category_counts(Some(&all)));
}
