use serde_json::Value;

use super::{Forms, Record};
use crate::tense::{Mood, Tense};
use crate::verb::{Deck, Verb};

fn record(deck: Deck, target: &str) -> Record {
    let verbs: Vec<Verb> = deck.verbs();

    match verbs.iter().find(|v| v.target == target) {
        Some(verb) => Record::build(verb).unwrap(),
        None => panic!("no `{target}` in {deck}"),
    }
}

fn personal(record: &Record, tense: Tense) -> &[String] {
    match record.get(tense) {
        Some(Forms::Personal(row)) => row,
        forms => panic!("{tense:?}: expected personal forms, got {forms:?}"),
    }
}

fn single(record: &Record, tense: Tense) -> &str {
    match record.get(tense) {
        Some(Forms::Single(form)) => form,
        forms => panic!("{tense:?}: expected a single form, got {forms:?}"),
    }
}

#[test]
fn test_compound_tenses() {
    let scrivere = record(Deck::Second, "scrivere");

    assert_eq!(
        personal(&scrivere, Tense::PresentPerfect)[0],
        "io ho scritto"
    );
    assert_eq!(
        personal(&scrivere, Tense::PluperfectSubjunctive)[3],
        "che noi avessimo scritto"
    );
    assert_eq!(single(&scrivere, Tense::PerfectInfinitive), "avere scritto");
    assert_eq!(single(&scrivere, Tense::PerfectGerund), "avendo scritto");

    let partire = record(Deck::Third, "partire");

    assert_eq!(
        personal(&partire, Tense::PresentPerfect)[0],
        "io sono partito"
    );
    assert_eq!(
        personal(&partire, Tense::PresentPerfect)[3],
        "noi siamo partiti"
    );
    assert_eq!(
        personal(&partire, Tense::FuturePerfect)[5],
        "loro saranno partiti"
    );
    assert_eq!(single(&partire, Tense::PerfectInfinitive), "essere partito");
    assert_eq!(single(&partire, Tense::PerfectGerund), "essendo partito");
}

#[test]
fn test_simple_tenses_have_pronouns() {
    let finire = record(Deck::Third, "finire");

    assert_eq!(
        personal(&finire, Tense::Present),
        [
            "io finisco",
            "tu finisci",
            "lui/lei finisce",
            "noi finiamo",
            "voi finite",
            "loro finiscono",
        ]
    );

    assert_eq!(personal(&finire, Tense::Subjunctive)[0], "che io finisca");
    assert_eq!(
        personal(&finire, Tense::ImperfectSubjunctive)[4],
        "che voi finiste"
    );

    // The imperative has no pronouns.
    assert_eq!(personal(&finire, Tense::Imperative)[1], "finisci");
    assert_eq!(personal(&finire, Tense::Imperative)[0], "—");
}

#[test]
fn test_every_tense_is_present() {
    for deck in Deck::ALL {
        for verb in deck.verbs() {
            let record = Record::build(&verb).unwrap();
            assert_eq!(record.iter().count(), Tense::ALL.len());

            for tense in Tense::ALL {
                let Some(forms) = record.get(tense) else {
                    panic!("{}: missing {tense:?}", verb.target);
                };

                let expected = if tense.mood().is_personal() { 6 } else { 1 };
                assert_eq!(forms.as_slice().len(), expected, "{}: {tense:?}", verb.target);

                for form in forms.as_slice() {
                    assert!(!form.is_empty(), "{}: {tense:?}", verb.target);
                }
            }
        }
    }
}

#[test]
fn test_essere_takes_essere() {
    let essere = record(Deck::Irregular, "essere");

    assert_eq!(personal(&essere, Tense::PresentPerfect)[0], "io sono stato");
    assert_eq!(personal(&essere, Tense::PresentPerfect)[4], "voi siete stati");
    assert_eq!(single(&essere, Tense::PastParticiple), "stato");
}

#[test]
fn test_identifier() {
    assert_eq!(record(Deck::Second, "scrivere").identifier().as_str(), "ecrire.json");
    assert_eq!(record(Deck::Third, "scoprire").identifier().as_str(), "decouvrir.json");

    let trattenere = record(Deck::Irregular, "trattenere");
    assert_eq!(trattenere.identifier().as_str(), "retenir_trattenere.json");
    assert_eq!(trattenere.display(), "retenir (trattenere)");

    assert_eq!(record(Deck::Irregular, "rimanere").identifier().as_str(), "rester_rimanere.json");
    assert_eq!(record(Deck::Irregular, "stare").identifier().as_str(), "rester.json");
}

#[test]
fn test_document() {
    let finire = record(Deck::Third, "finire");
    let value = serde_json::to_value(&finire).unwrap();

    assert_eq!(value["source_lang"], "fr");
    assert_eq!(value["target_lang"], "it");
    assert_eq!(value["source_lemma"], "finir");
    assert_eq!(value["target_lemma"], "finire");
    assert_eq!(value["meta"]["regularity"]["it"], "terza coniugazione (-ire) con -isc-");
    assert_eq!(value["meta"]["auxiliary"]["fr"], "avoir");
    assert_eq!(value["meta"]["auxiliary"]["it"], "avere");
    assert_eq!(value["pronouns"]["it"][2], "lui/lei");
    assert_eq!(value["pronouns"]["fr"][5], "ils/elles");
    assert_eq!(value["Indicativo"]["Presente"][0], "io finisco");
    assert_eq!(value["Congiuntivo"]["Passato"][0], "che io abbia finito");
    assert_eq!(value["Infinito"]["Passato"], Value::from(vec!["avere finito"]));
    assert_eq!(value["Gerundio"]["Presente"], Value::from(vec!["finendo"]));
}

#[test]
fn test_document_order() {
    let andare = record(Deck::Irregular, "andare");
    let json = serde_json::to_string_pretty(&andare).unwrap();

    let mut keys = vec![
        "\"source_lang\"",
        "\"target_lang\"",
        "\"source_lemma\"",
        "\"target_lemma\"",
        "\"meta\"",
        "\"pronouns\"",
    ];

    keys.extend(Mood::ALL.map(|m| m.title()));

    let mut last = 0;

    for key in keys {
        let Some(at) = json[last..].find(key) else {
            panic!("{key} missing or out of order");
        };

        last += at + key.len();
    }

    let indicative = json.find("\"Indicativo\"").unwrap();
    let mut last = indicative;

    for tense in Mood::Indicative.tenses() {
        let key = format!("\"{}\"", tense.title());
        let at = json[last..].find(&key).unwrap();
        last += at + key.len();
    }

    // Indented with two spaces and no escaping of non-ascii.
    assert!(json.starts_with("{\n  \"source_lang\": \"fr\""));
    assert!(json.contains("\"lui/lei andò\""));
}
