use pokerhand_cli::run;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["pokerhand"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn eval_reports_wheel_straight_flush() {
    let (code, out, err) = run_args(&["eval", "As", "5s", "4s", "3s", "2s"]);
    assert_eq!(code, 0, "stderr={}", err);
    assert!(out.contains("Category: straight flush"));
    assert!(err.is_empty());
}

#[test]
fn eval_json_is_parseable() {
    let (code, out, _) = run_args(&["eval", "--json", "Ah Jh 9h 3h 2h"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(v["category"], "flush");
    assert_eq!(v["cards"].as_array().map(|a| a.len()), Some(5));
}

#[test]
fn eval_with_four_cards_fails_fast() {
    let (code, out, err) = run_args(&["eval", "As", "Ks", "Qs", "Js"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("exactly 5 cards, got 4"), "stderr={}", err);
}

#[test]
fn eval_with_bad_card_fails() {
    let (code, _, err) = run_args(&["eval", "As", "Ks", "Qs", "Js", "Zz"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid card"), "stderr={}", err);
}

#[test]
fn eval_with_repeated_card_fails() {
    let (code, _, err) = run_args(&["eval", "As", "Ks", "Qs", "Js", "As"]);
    assert_eq!(code, 2);
    assert!(err.contains("more than once"), "stderr={}", err);
}

#[test]
fn compare_flush_beats_identical_high_card() {
    let (code, out, _) = run_args(&[
        "compare",
        "--hand",
        "Ah Jh 9h 3h 2h",
        "--against",
        "As Jd 9c 3c 2d",
    ]);
    assert_eq!(code, 0);
    assert!(out.ends_with("Result: win\n"), "stdout={}", out);
}

#[test]
fn compare_is_symmetric_from_the_command_line() {
    let a = "Ts Td 6d 2s 2h";
    let b = "Qs Qd 5d 5h Tc";
    let (_, ab, _) = run_args(&["compare", "--json", "--hand", a, "--against", b]);
    let (_, ba, _) = run_args(&["compare", "--json", "--hand", b, "--against", a]);
    let ab: serde_json::Value = serde_json::from_str(ab.trim()).unwrap();
    let ba: serde_json::Value = serde_json::from_str(ba.trim()).unwrap();
    assert_eq!(ab["result"], "lose");
    assert_eq!(ba["result"], "win");
}

#[test]
fn deal_is_reproducible_with_seed() {
    let first = run_args(&["deal", "--seed", "42", "--rounds", "4"]);
    let second = run_args(&["deal", "--seed", "42", "--rounds", "4"]);
    assert_eq!(first.0, 0);
    assert_eq!(first, second);
    assert_eq!(first.1.matches("Result: P1 ").count(), 4);
}

#[test]
fn bench_reports_iterations() {
    let (code, out, _) = run_args(&["bench", "--iters", "50"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Benchmark: 50 iters"));
}

#[test]
fn help_goes_to_stdout() {
    let (code, out, err) = run_args(&["--help"]);
    assert_eq!(code, 0);
    for c in ["eval", "compare", "deal", "bench", "cfg"] {
        assert!(out.contains(c), "help should list `{}`", c);
    }
    assert!(err.is_empty());
}

#[test]
fn unknown_command_lists_commands_on_stderr() {
    let (code, out, err) = run_args(&["shuffle"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: pokerhand <command> [options]"));
    assert!(err.contains("  compare"));
}

#[test]
fn eval_requires_cards() {
    let (code, _, _) = run_args(&["eval"]);
    assert_eq!(code, 2);
}
