use fixed_map::Set;

use super::Conjugator;
use crate::error::ConfigError;
use crate::verb::{Auxiliary, Class, Deck, Slot, Verb};

fn verb(deck: Deck, target: &str) -> Verb {
    match deck.verbs().into_iter().find(|v| v.target == target) {
        Some(verb) => verb,
        None => panic!("no `{target}` in {deck}"),
    }
}

fn slots<const N: usize>(slots: [Slot; N]) -> Set<Slot> {
    let mut set = Set::new();

    for slot in slots {
        set.insert(slot);
    }

    set
}

#[test]
fn test_augmented_present() {
    let finire = verb(Deck::Third, "finire");
    let c = Conjugator::new(&finire).unwrap();

    assert_eq!(
        c.present().unwrap(),
        ["finisco", "finisci", "finisce", "finiamo", "finite", "finiscono"]
    );

    assert_eq!(
        c.subjunctive().unwrap(),
        ["finisca", "finisca", "finisca", "finiamo", "finiate", "finiscano"]
    );

    assert_eq!(
        c.imperative().unwrap(),
        ["—", "finisci", "finisca", "finiamo", "finite", "finiscano"]
    );

    // The imperfect never takes the augment.
    assert_eq!(c.imperfect().unwrap()[0], "finivo");
}

#[test]
fn test_third_without_augment() {
    let partire = verb(Deck::Third, "partire");
    let c = Conjugator::new(&partire).unwrap();

    assert_eq!(
        c.present().unwrap(),
        ["parto", "parti", "parte", "partiamo", "partite", "partono"]
    );

    assert_eq!(
        c.remote_past().unwrap(),
        ["partii", "partisti", "partì", "partimmo", "partiste", "partirono"]
    );

    assert_eq!(c.past_participle().unwrap(), "partito");
    assert_eq!(c.gerund().unwrap(), "partendo");
    assert_eq!(c.present_participle().unwrap(), "partente");
}

#[test]
fn test_second_rule_fallback() {
    let temere = verb(Deck::Second, "temere");
    let c = Conjugator::new(&temere).unwrap();

    assert_eq!(c.stem(), "tem");

    assert_eq!(
        c.remote_past().unwrap(),
        ["temetti", "temesti", "temette", "tememmo", "temeste", "temettero"]
    );

    assert_eq!(c.past_participle().unwrap(), "temuto");
    assert_eq!(
        c.imperfect_subjunctive().unwrap(),
        ["temessi", "temessi", "temesse", "temessimo", "temeste", "temessero"]
    );
}

#[test]
fn test_future_root() {
    let vedere = verb(Deck::Second, "vedere");
    let c = Conjugator::new(&vedere).unwrap();

    assert_eq!(
        c.future(),
        ["vedrò", "vedrai", "vedrà", "vedremo", "vedrete", "vedranno"]
    );

    assert_eq!(c.conditional()[2], "vedrebbe");

    let scrivere = verb(Deck::Second, "scrivere");
    let c = Conjugator::new(&scrivere).unwrap();
    assert_eq!(c.future()[0], "scriverò");

    let finire = verb(Deck::Third, "finire");
    let c = Conjugator::new(&finire).unwrap();
    assert_eq!(c.future()[3], "finiremo");
}

#[test]
fn test_irregular_first_conjugation_fallback() {
    let andare = verb(Deck::Irregular, "andare");
    let c = Conjugator::new(&andare).unwrap();

    assert_eq!(
        c.imperfect().unwrap(),
        ["andavo", "andavi", "andava", "andavamo", "andavate", "andavano"]
    );

    assert_eq!(c.gerund().unwrap(), "andando");
    assert_eq!(c.present_participle().unwrap(), "andante");
    assert_eq!(c.future()[0], "andrò");

    assert_eq!(
        c.subjunctive().unwrap(),
        ["vada", "vada", "vada", "andiamo", "andiate", "vadano"]
    );

    assert_eq!(
        c.imperative().unwrap(),
        ["—", "vai", "vada", "andiamo", "andate", "vadano"]
    );
}

#[test]
fn test_stem_overrides() {
    let fare = verb(Deck::Irregular, "fare");
    let c = Conjugator::new(&fare).unwrap();

    assert_eq!(c.imperfect().unwrap()[0], "facevo");
    assert_eq!(c.gerund().unwrap(), "facendo");
    assert_eq!(c.present_participle().unwrap(), "facente");
    assert_eq!(c.past_participle().unwrap(), "fatto");
    assert_eq!(c.imperfect_subjunctive().unwrap()[0], "facessi");

    let essere = verb(Deck::Irregular, "essere");
    let c = Conjugator::new(&essere).unwrap();

    assert_eq!(c.imperfect().unwrap()[3], "eravamo");
    assert_eq!(
        c.imperfect_subjunctive().unwrap(),
        ["fossi", "fossi", "fosse", "fossimo", "foste", "fossero"]
    );

    let predire = verb(Deck::Irregular, "predire");
    let c = Conjugator::new(&predire).unwrap();
    assert_eq!(c.imperfect().unwrap()[0], "predicevo");
    assert_eq!(c.gerund().unwrap(), "predicendo");
}

#[test]
fn test_imperative_override() {
    let dire = verb(Deck::Irregular, "dire");
    let c = Conjugator::new(&dire).unwrap();

    assert_eq!(
        c.imperative().unwrap(),
        ["—", "di'", "dica", "diciamo", "dite", "dicano"]
    );

    let predire = verb(Deck::Irregular, "predire");
    let c = Conjugator::new(&predire).unwrap();

    assert_eq!(
        c.imperative().unwrap(),
        ["—", "predici", "predica", "prediciamo", "predite", "predicano"]
    );
}

#[test]
fn test_theme_less_verb() {
    let porre = verb(Deck::Irregular, "porre");
    let c = Conjugator::new(&porre).unwrap();

    assert_eq!(c.future()[0], "porrò");
    assert_eq!(c.imperfect().unwrap()[0], "ponevo");
    assert_eq!(c.gerund().unwrap(), "ponendo");
    assert_eq!(
        c.subjunctive().unwrap(),
        ["ponga", "ponga", "ponga", "poniamo", "poniate", "pongano"]
    );

    let tradurre = verb(Deck::Irregular, "tradurre");
    let c = Conjugator::new(&tradurre).unwrap();

    assert_eq!(c.remote_past().unwrap()[0], "tradussi");
    assert_eq!(c.past_participle().unwrap(), "tradotto");
    assert_eq!(c.future()[0], "tradurrò");
}

#[test]
fn test_irregular_requires_present() {
    let verb = Verb::new("amare", "aimer", Class::Irregular, Auxiliary::Avere);
    let c = Conjugator::new(&verb).unwrap();

    assert!(matches!(
        c.present(),
        Err(ConfigError::MissingOverrides { slots, .. }) if slots == self::slots([Slot::Present])
    ));

    // Slots with a fallback rule still resolve.
    assert_eq!(c.imperfect().unwrap()[0], "amavo");
    assert_eq!(c.past_participle().unwrap(), "amato");
}

#[test]
fn test_theme_less_without_overrides() {
    let verb = Verb::new("trarre", "tirer", Class::Irregular, Auxiliary::Avere)
        .present(["traggo", "trai", "trae", "traiamo", "traete", "traggono"])
        .remote_past(["trassi", "traesti", "trasse", "traemmo", "traeste", "trassero"]);

    let c = Conjugator::new(&verb).unwrap();

    assert!(c.past_participle().is_err());
    assert!(c.imperfect().is_err());
    assert!(c.gerund().is_err());
    assert_eq!(c.future_root(), "trarr");
    assert_eq!(c.subjunctive().unwrap()[0], "tragga");
}

#[test]
fn test_misplaced_augment() {
    let verb = Verb::new("vendere", "vendre", Class::Second, Auxiliary::Avere).augmented();

    assert!(matches!(
        Conjugator::new(&verb),
        Err(ConfigError::MisplacedAugment { .. })
    ));
}
