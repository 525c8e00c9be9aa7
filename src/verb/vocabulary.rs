//! The built-in vocabulary, one deck per group of verbs.
//!
//! Overrides are only given where a verb departs from the generic rule of its
//! class, or where its class has no generic rule at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::verb::endings::PLACEHOLDER;
use crate::verb::{Auxiliary, Class, Overrides, Verb};

use Auxiliary::{Avere, Essere};

/// A deck of built-in verbs which is generated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deck {
    /// Second conjugation (-ere) verbs.
    Second,
    /// Third conjugation (-ire) verbs, with and without -isc-.
    Third,
    /// Irregular verbs.
    Irregular,
}

impl Deck {
    pub const ALL: [Deck; 3] = [Deck::Second, Deck::Third, Deck::Irregular];

    /// Name of the deck.
    pub fn name(&self) -> &'static str {
        match self {
            Deck::Second => "second",
            Deck::Third => "third",
            Deck::Irregular => "irregular",
        }
    }

    /// Construct the verbs in the deck.
    pub fn verbs(&self) -> Vec<Verb> {
        match self {
            Deck::Second => second(),
            Deck::Third => third(),
            Deck::Irregular => irregular(),
        }
    }
}

impl fmt::Display for Deck {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for Deck {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for deck in Deck::ALL {
            if deck.name() == s {
                return Ok(deck);
            }
        }

        Err(ConfigError::UnknownDeck(s.to_owned()))
    }
}

#[rustfmt::skip]
fn second() -> Vec<Verb> {
    let v = |target, source, aux| Verb::new(target, source, Class::Second, aux);

    vec![
        v("scrivere", "écrire", Avere)
            .participle("scritto")
            .remote_past(["scrissi", "scrivesti", "scrisse", "scrivemmo", "scriveste", "scrissero"]),
        v("prendere", "prendre", Avere)
            .participle("preso")
            .remote_past(["presi", "prendesti", "prese", "prendemmo", "prendeste", "presero"]),
        v("chiedere", "demander", Avere)
            .participle("chiesto")
            .remote_past(["chiesi", "chiedesti", "chiese", "chiedemmo", "chiedeste", "chiesero"]),
        v("chiudere", "fermer", Avere)
            .participle("chiuso")
            .remote_past(["chiusi", "chiudesti", "chiuse", "chiudemmo", "chiudeste", "chiusero"]),
        v("conoscere", "connaître", Avere)
            .participle("conosciuto")
            .remote_past(["conobbi", "conoscesti", "conobbe", "conoscemmo", "conosceste", "conobbero"]),
        v("correre", "courir", Avere)
            .participle("corso")
            .remote_past(["corsi", "corresti", "corse", "corremmo", "correste", "corsero"]),
        v("decidere", "décider", Avere)
            .participle("deciso")
            .remote_past(["decisi", "decidesti", "decise", "decidemmo", "decideste", "decisero"]),
        v("leggere", "lire", Avere)
            .participle("letto")
            .remote_past(["lessi", "leggesti", "lesse", "leggemmo", "leggeste", "lessero"]),
        v("mettere", "mettre", Avere)
            .participle("messo")
            .remote_past(["misi", "mettesti", "mise", "mettemmo", "metteste", "misero"]),
        v("perdere", "perdre", Avere)
            .participle("perso")
            .remote_past(["persi", "perdesti", "perse", "perdemmo", "perdeste", "persero"]),
        v("piangere", "pleurer", Avere)
            .participle("pianto")
            .remote_past(["piansi", "piangesti", "pianse", "piangemmo", "piangeste", "piansero"]),
        v("ridere", "rire", Avere)
            .participle("riso")
            .remote_past(["risi", "ridesti", "rise", "ridemmo", "rideste", "risero"]),
        v("sorridere", "sourire", Avere)
            .participle("sorriso")
            .remote_past(["sorrisi", "sorridesti", "sorrise", "sorridemmo", "sorrideste", "sorrisero"]),
        v("vedere", "voir", Avere)
            .participle("visto")
            .future_root("vedr")
            .remote_past(["vidi", "vedesti", "vide", "vedemmo", "vedeste", "videro"]),
        v("vendere", "vendre", Avere),
        v("rispondere", "répondre", Avere)
            .participle("risposto")
            .remote_past(["risposi", "rispondesti", "rispose", "rispondemmo", "rispondeste", "risposero"]),
        v("vincere", "gagner", Avere)
            .participle("vinto")
            .remote_past(["vinsi", "vincesti", "vinse", "vincemmo", "vinceste", "vinsero"]),
        v("vivere", "vivre", Avere)
            .participle("vissuto")
            .future_root("vivr")
            .remote_past(["vissi", "vivesti", "visse", "vivemmo", "viveste", "vissero"]),
        v("crescere", "grandir", Essere)
            .participle("cresciuto")
            .remote_past(["crebbi", "crescesti", "crebbe", "crescemmo", "cresceste", "crebbero"]),
        v("spendere", "dépenser", Avere)
            .participle("speso")
            .remote_past(["spesi", "spendesti", "spese", "spendemmo", "spendeste", "spesero"]),
        v("ricevere", "recevoir", Avere),
        v("dividere", "diviser", Avere)
            .participle("diviso")
            .remote_past(["divisi", "dividesti", "divise", "dividemmo", "divideste", "divisero"]),
        v("offendere", "offenser", Avere)
            .participle("offeso")
            .remote_past(["offesi", "offendesti", "offese", "offendemmo", "offendeste", "offesero"]),
        v("temere", "craindre", Avere),
        v("scendere", "descendre", Essere)
            .participle("sceso")
            .remote_past(["scesi", "scendesti", "scese", "scendemmo", "scendeste", "scesero"]),
    ]
}

fn third() -> Vec<Verb> {
    let v = |target, source, aux| Verb::new(target, source, Class::Third, aux);

    vec![
        v("aprire", "ouvrir", Avere).participle("aperto"),
        v("partire", "partir", Essere),
        v("coprire", "couvrir", Avere).participle("coperto"),
        v("offrire", "offrir", Avere).participle("offerto"),
        v("scoprire", "découvrir", Avere).participle("scoperto"),
        v("seguire", "suivre", Avere),
        v("sentire", "entendre", Avere),
        v("servire", "servir", Avere),
        v("finire", "finir", Avere).augmented(),
        v("capire", "comprendre", Avere).augmented(),
        v("pulire", "nettoyer", Avere).augmented(),
        v("preferire", "préférer", Avere).augmented(),
        v("costruire", "construire", Avere).augmented(),
        v("bollire", "bouillir", Avere),
        v("nutrire", "nourrir", Avere),
        v("proibire", "interdire", Avere).augmented(),
        v("spedire", "envoyer", Avere).augmented(),
        v("unire", "unir", Avere).augmented(),
        v("vestire", "habiller", Avere),
        v("tossire", "tousser", Avere).augmented(),
    ]
}

#[rustfmt::skip]
fn irregular() -> Vec<Verb> {
    let v = |target, source, aux| Verb::new(target, source, Class::Irregular, aux);

    let tenere = v("tenere", "tenir", Avere)
        .present(["tengo", "tieni", "tiene", "teniamo", "tenete", "tengono"])
        .remote_past(["tenni", "tenesti", "tenne", "tenemmo", "teneste", "tennero"])
        .future_root("terr")
        .participle("tenuto");

    let cogliere = v("cogliere", "cueillir", Avere)
        .present(["colgo", "cogli", "coglie", "cogliamo", "cogliete", "colgono"])
        .remote_past(["colsi", "cogliesti", "colse", "cogliemmo", "coglieste", "colsero"])
        .participle("colto");

    let durre = v("durre", "", Avere)
        .present(["duco", "duci", "duce", "duciamo", "ducete", "ducono"])
        .remote_past(["dussi", "ducesti", "dusse", "ducemmo", "duceste", "dussero"])
        .participle("dotto")
        .imperfect_stem("duce")
        .gerund_stem("duce");

    let porre = v("porre", "poser", Avere)
        .present(["pongo", "poni", "pone", "poniamo", "ponete", "pongono"])
        .remote_past(["posi", "ponesti", "pose", "ponemmo", "poneste", "posero"])
        .participle("posto")
        .imperfect_stem("pone")
        .gerund_stem("pone");

    let dire = v("dire", "dire", Avere)
        .present(["dico", "dici", "dice", "diciamo", "dite", "dicono"])
        .remote_past(["dissi", "dicesti", "disse", "dicemmo", "diceste", "dissero"])
        .participle("detto")
        .imperfect_stem("dice")
        .gerund_stem("dice");

    vec![
        v("andare", "aller", Essere)
            .present(["vado", "vai", "va", "andiamo", "andate", "vanno"])
            .remote_past(["andai", "andasti", "andò", "andammo", "andaste", "andarono"])
            .future_root("andr")
            .participle("andato"),
        v("fare", "faire", Avere)
            .present(["faccio", "fai", "fa", "facciamo", "fate", "fanno"])
            .remote_past(["feci", "facesti", "fece", "facemmo", "faceste", "fecero"])
            .future_root("far")
            .participle("fatto")
            .imperfect_stem("face")
            .gerund_stem("face"),
        v("dare", "donner", Avere)
            .present(["do", "dai", "dà", "diamo", "date", "danno"])
            .remote_past(["diedi", "desti", "diede", "demmo", "deste", "diedero"])
            .subjunctive(["dia", "dia", "dia", "diamo", "diate", "diano"])
            .future_root("dar")
            .participle("dato")
            .subjunctive_stem("de"),
        v("stare", "rester", Essere)
            .present(["sto", "stai", "sta", "stiamo", "state", "stanno"])
            .remote_past(["stetti", "stesti", "stette", "stemmo", "steste", "stettero"])
            .subjunctive(["stia", "stia", "stia", "stiamo", "stiate", "stiano"])
            .future_root("star")
            .participle("stato")
            .subjunctive_stem("ste"),
        v("bere", "boire", Avere)
            .present(["bevo", "bevi", "beve", "beviamo", "bevete", "bevono"])
            .remote_past(["bevvi", "bevesti", "bevve", "bevemmo", "beveste", "bevvero"])
            .future_root("berr")
            .participle("bevuto")
            .imperfect_stem("beve")
            .gerund_stem("beve"),
        v("sapere", "savoir", Avere)
            .present(["so", "sai", "sa", "sappiamo", "sapete", "sanno"])
            .remote_past(["seppi", "sapesti", "seppe", "sapemmo", "sapeste", "seppero"])
            .subjunctive(["sappia", "sappia", "sappia", "sappiamo", "sappiate", "sappiano"])
            .imperative([PLACEHOLDER, "sappi", "sappia", "sappiamo", "sappiate", "sappiano"])
            .future_root("sapr")
            .participle("saputo"),
        prefixed(&tenere, "", "tenir"),
        prefixed(&tenere, "ot", "obtenir"),
        prefixed(&tenere, "man", "maintenir"),
        prefixed(&tenere, "ri", "retenir"),
        prefixed(&tenere, "sos", "soutenir"),
        prefixed(&tenere, "trat", "retenir trattenere").display("retenir (trattenere)"),
        v("rimanere", "rester rimanere", Essere)
            .display("rester (rimanere)")
            .present(["rimango", "rimani", "rimane", "rimaniamo", "rimanete", "rimangono"])
            .remote_past(["rimasi", "rimanesti", "rimase", "rimanemmo", "rimaneste", "rimasero"])
            .future_root("rimarr")
            .participle("rimasto"),
        v("scegliere", "choisir", Avere)
            .present(["scelgo", "scegli", "sceglie", "scegliamo", "scegliete", "scelgono"])
            .remote_past(["scelsi", "scegliesti", "scelse", "scegliemmo", "sceglieste", "scelsero"])
            .participle("scelto"),
        v("togliere", "enlever", Avere)
            .present(["tolgo", "togli", "toglie", "togliamo", "togliete", "tolgono"])
            .remote_past(["tolsi", "togliesti", "tolse", "togliemmo", "toglieste", "tolsero"])
            .participle("tolto"),
        prefixed(&cogliere, "", "cueillir"),
        prefixed(&cogliere, "rac", "recueillir"),
        v("volere", "vouloir", Avere)
            .present(["voglio", "vuoi", "vuole", "vogliamo", "volete", "vogliono"])
            .remote_past(["volli", "volesti", "volle", "volemmo", "voleste", "vollero"])
            .future_root("vorr")
            .participle("voluto"),
        prefixed(&durre, "con", "conduire"),
        prefixed(&durre, "tra", "traduire"),
        prefixed(&durre, "pro", "produire"),
        prefixed(&durre, "intro", "introduire"),
        prefixed(&porre, "pro", "proposer"),
        prefixed(&porre, "", "poser"),
        prefixed(&porre, "es", "exposer"),
        prefixed(&porre, "op", "opposer"),
        v("uscire", "sortir", Essere)
            .present(["esco", "esci", "esce", "usciamo", "uscite", "escono"])
            .remote_past(["uscii", "uscisti", "uscì", "uscimmo", "usciste", "uscirono"])
            .participle("uscito"),
        prefixed(&dire, "", "dire")
            .imperative([PLACEHOLDER, "di'", "dica", "diciamo", "dite", "dicano"]),
        prefixed(&dire, "pre", "prédire"),
        prefixed(&dire, "dis", "décommander"),
        v("venire", "venir", Essere)
            .present(["vengo", "vieni", "viene", "veniamo", "venite", "vengono"])
            .remote_past(["venni", "venisti", "venne", "venimmo", "veniste", "vennero"])
            .future_root("verr")
            .participle("venuto"),
        v("salire", "monter", Essere)
            .present(["salgo", "sali", "sale", "saliamo", "salite", "salgono"])
            .remote_past(["salii", "salisti", "salì", "salimmo", "saliste", "salirono"])
            .participle("salito"),
        v("apparire", "apparaître", Essere)
            .present(["appaio", "appari", "appare", "appariamo", "apparite", "appaiono"])
            .remote_past(["apparvi", "apparisti", "apparve", "apparimmo", "appariste", "apparvero"])
            .participle("apparso"),
        v("scomparire", "disparaître", Essere)
            .present(["scompaio", "scompari", "scompare", "scompariamo", "scomparite", "scompaiono"])
            .remote_past(["scomparvi", "scomparisti", "scomparve", "scomparimmo", "scompariste", "scomparvero"])
            .participle("scomparso"),
        v("finire", "finir", Avere)
            .present(["finisco", "finisci", "finisce", "finiamo", "finite", "finiscono"])
            .remote_past(["finii", "finisti", "finì", "finimmo", "finiste", "finirono"])
            .participle("finito"),
        v("avere", "avoir", Avere)
            .present(["ho", "hai", "ha", "abbiamo", "avete", "hanno"])
            .remote_past(["ebbi", "avesti", "ebbe", "avemmo", "aveste", "ebbero"])
            .subjunctive(["abbia", "abbia", "abbia", "abbiamo", "abbiate", "abbiano"])
            .imperative([PLACEHOLDER, "abbi", "abbia", "abbiamo", "abbiate", "abbiano"])
            .future_root("avr")
            .participle("avuto"),
        v("essere", "être", Essere)
            .present(["sono", "sei", "è", "siamo", "siete", "sono"])
            .imperfect(["ero", "eri", "era", "eravamo", "eravate", "erano"])
            .remote_past(["fui", "fosti", "fu", "fummo", "foste", "furono"])
            .subjunctive(["sia", "sia", "sia", "siamo", "siate", "siano"])
            .imperative([PLACEHOLDER, "sii", "sia", "siamo", "siate", "siano"])
            .future_root("sar")
            .participle("stato")
            .subjunctive_stem("fo"),
    ]
}

/// Derive a verb from a paradigm by prefixing its infinitive and every
/// override, as `ottenere` is derived from `tenere`.
fn prefixed(base: &Verb, prefix: &str, source: &str) -> Verb {
    let p = |s: &String| format!("{prefix}{s}");

    let row = |row: &[String; 6]| {
        row.clone()
            .map(|s| if s == PLACEHOLDER { s } else { p(&s) })
    };

    let o = &base.overrides;

    Verb {
        target: p(&base.target),
        source: source.to_owned(),
        display: source.to_owned(),
        overrides: Overrides {
            present: o.present.as_ref().map(row),
            imperfect: o.imperfect.as_ref().map(row),
            remote_past: o.remote_past.as_ref().map(row),
            subjunctive: o.subjunctive.as_ref().map(row),
            imperative: o.imperative.as_ref().map(row),
            participle: o.participle.as_ref().map(p),
            future_root: o.future_root.as_ref().map(p),
            imperfect_stem: o.imperfect_stem.as_ref().map(p),
            gerund_stem: o.gerund_stem.as_ref().map(p),
            subjunctive_stem: o.subjunctive_stem.as_ref().map(p),
        },
        ..base.clone()
    }
}
