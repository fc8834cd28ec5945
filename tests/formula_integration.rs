use tagformula::formula::{
    can_append, classify, evaluate, format_result, FormulaStore, TokenKind,
};
use tagformula::suggest::{dedup_by_id, Suggestion, SuggestionValue};

/// Appends each text the way the editor commits it, skipping rejected ones.
fn compose(texts: &[&str]) -> FormulaStore {
    let mut store = FormulaStore::new();
    for text in texts {
        let kind = classify(text);
        if can_append(kind, store.last()) {
            store.add_tag(*text, kind, None);
        }
    }
    store
}

#[test]
fn end_to_end_evaluation() {
    let cases: &[(&[&str], &str)] = &[
        (&["2", "+", "3"], "5"),
        (&["10", "/", "0"], "10"),
        (&["2", "^", "3"], "8"),
        (&[], "0"),
        (&["-4"], "-4"),
        (&["1/2", "+", "1/2"], "1"),
        (&["1", "+", "2", "*", "3"], "9"),
        (&["３", "+", "2"], "2"),
        (&["10", "/", "0/0"], "Invalid"),
    ];

    for (texts, expected) in cases {
        let store = compose(texts);
        assert_eq!(
            format_result(evaluate(store.formula())),
            *expected,
            "formula {:?}",
            texts
        );
    }
}

#[test]
fn rejected_texts_leave_the_formula_alternating() {
    let store = compose(&["+", "2", "3", "*", "/", "4"]);
    let kinds: Vec<TokenKind> = store.formula().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Number, TokenKind::Operand, TokenKind::Number]
    );
    assert_eq!(format_result(evaluate(store.formula())), "8");
}

#[test]
fn fraction_with_zero_denominator_is_invalid() {
    let store = compose(&["1/0"]);
    assert_eq!(format_result(evaluate(store.formula())), "Invalid");
}

#[test]
fn remove_restores_and_clear_empties() {
    let mut store = compose(&["7", "-", "2"]);
    let before = store.formula().to_vec();

    let op = store.add_tag("*", TokenKind::Operand, None);
    store.remove_tag(op);
    assert_eq!(store.formula(), before.as_slice());

    store.clear_formula();
    assert!(store.formula().is_empty());
    assert_eq!(evaluate(store.formula()), 0.0);
}

#[test]
fn dedup_keeps_first_entry_per_id() {
    let list = vec![
        Suggestion::new("x", "first", "c", SuggestionValue::Number(1.0)),
        Suggestion::new("x", "second", "c", SuggestionValue::Number(2.0)),
    ];
    let deduped = dedup_by_id(list);
    assert_eq!(deduped.len(), 1);
    assert_eq!(deduped[0].name, "first");
}
