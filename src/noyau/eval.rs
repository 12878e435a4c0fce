//! Noyau — évaluation (pipeline)
//!
//! texte -> jetons (espaces) -> opérandes Fraction -> opération -> EXACT -> lecture décimale
//!
//! Forme acceptée : `a/b` seul, ou `a/b op c/d` avec l’opérateur entouré d’espaces.
//! Un opérande peut aussi être un entier nu (`2` = 2/1), donc `3 / 4` vaut 3/4.

use tracing::{debug, trace};

use super::erreur::{ErreurEval, ErreurFraction};
use super::fraction::{pgcd, Fraction};
use super::lecture::{decimal_fini, lecture_decimale};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub operandes: String,
    pub brut: String,
    pub reduction: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Forme canonique `n/d`, ou "vrai"/"faux" pour une comparaison.
    pub exact: String,
    /// Lecture décimale tronquée (None pour une comparaison).
    pub lecture: Option<String>,
    pub approx: Option<f64>,
    pub decimal_fini: bool,
    pub demarche: DemarcheNoyau,
}

/// Opérateur lu entre deux opérandes : arithmétique (rend une Fraction) ou comparaison (rend un booléen).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Arith(OpArith),
    Comp(OpComp),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpArith {
    Plus,
    Moins,
    Fois,
    Divise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpComp {
    Inf,
    Sup,
    InfEg,
    SupEg,
    Egal,
    Diff,
}

impl Op {
    pub fn depuis(s: &str) -> Result<Op, ErreurEval> {
        Ok(match s {
            "+" => Op::Arith(OpArith::Plus),
            "-" => Op::Arith(OpArith::Moins),
            "*" | "×" => Op::Arith(OpArith::Fois),
            "/" | "÷" => Op::Arith(OpArith::Divise),
            "<" => Op::Comp(OpComp::Inf),
            ">" => Op::Comp(OpComp::Sup),
            "<=" => Op::Comp(OpComp::InfEg),
            ">=" => Op::Comp(OpComp::SupEg),
            "==" | "=" => Op::Comp(OpComp::Egal),
            "!=" => Op::Comp(OpComp::Diff),
            autre => return Err(ErreurEval::OperateurInconnu(autre.to_string())),
        })
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Arith(op) => op.symbole(),
            Op::Comp(op) => op.symbole(),
        }
    }
}

impl OpArith {
    pub fn symbole(self) -> &'static str {
        match self {
            OpArith::Plus => "+",
            OpArith::Moins => "-",
            OpArith::Fois => "*",
            OpArith::Divise => "/",
        }
    }

    fn applique(self, x: &Fraction, y: &Fraction) -> Result<Fraction, ErreurFraction> {
        match self {
            OpArith::Plus => x.ajouter(y),
            OpArith::Moins => x.soustraire(y),
            OpArith::Fois => x.multiplier(y),
            OpArith::Divise => x.diviser(y),
        }
    }

    /// Résultat avant réduction (i128 : jamais de débordement ici).
    fn brut(self, x: &Fraction, y: &Fraction) -> (i128, i128) {
        let (n1, d1) = (i128::from(x.numer()), i128::from(x.denom()));
        let (n2, d2) = (i128::from(y.numer()), i128::from(y.denom()));
        match self {
            OpArith::Plus => (n1 * d2 + n2 * d1, d1 * d2),
            OpArith::Moins => (n1 * d2 - n2 * d1, d1 * d2),
            OpArith::Fois => (n1 * n2, d1 * d2),
            OpArith::Divise => (n1 * d2, d1 * n2),
        }
    }

    fn formule(self, x: &Fraction, y: &Fraction) -> String {
        let (n1, d1, n2, d2) = (x.numer(), x.denom(), y.numer(), y.denom());
        match self {
            OpArith::Plus => format!("({n1}·{d2} + {n2}·{d1})/({d1}·{d2})"),
            OpArith::Moins => format!("({n1}·{d2} - {n2}·{d1})/({d1}·{d2})"),
            OpArith::Fois => format!("({n1}·{n2})/({d1}·{d2})"),
            OpArith::Divise => format!("({n1}·{d2})/({d1}·{n2})"),
        }
    }
}

impl OpComp {
    pub fn symbole(self) -> &'static str {
        match self {
            OpComp::Inf => "<",
            OpComp::Sup => ">",
            OpComp::InfEg => "<=",
            OpComp::SupEg => ">=",
            OpComp::Egal => "==",
            OpComp::Diff => "!=",
        }
    }

    fn verdict(self, x: &Fraction, y: &Fraction) -> bool {
        match self {
            OpComp::Inf => x < y,
            OpComp::Sup => x > y,
            OpComp::InfEg => x <= y,
            OpComp::SupEg => x >= y,
            OpComp::Egal => x == y,
            OpComp::Diff => x != y,
        }
    }

    fn brut(self, x: &Fraction, y: &Fraction) -> String {
        let g = i128::from(x.numer()) * i128::from(y.denom());
        let d = i128::from(y.numer()) * i128::from(x.denom());
        format!(
            "{}·{} = {g}  {}  {}·{} = {d}",
            x.numer(),
            y.denom(),
            self.symbole(),
            y.numer(),
            x.denom()
        )
    }
}

/// API publique : évalue `entree` et retourne EXACT + lecture + démarche.
///
/// `digits` au-delà de `lecture::DIGITS_MAX` est ramené à cette borne.
pub fn evaluer(entree: &str, digits: usize) -> Result<Evaluation, ErreurEval> {
    let s = entree.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let jetons: Vec<&str> = s.split_whitespace().collect();
    trace!(?jetons, "jetons");

    let mut d = DemarcheNoyau {
        jetons: jetons.join(" | "),
        ..Default::default()
    };

    let eval = match jetons.as_slice() {
        [a] => {
            let x = operande(a)?;
            d.operandes = format!("a = {a}");
            d.reduction = if x.to_string() == *a {
                "déjà canonique".into()
            } else {
                format!("{a} -> {x}")
            };
            d.note = "Lecture seule : forme canonique + lecture décimale.".into();
            resultat_valeur(x, digits, d)
        }
        [a, op, b] => {
            let op = Op::depuis(op)?;
            let x = operande(a)?;
            let y = operande(b)?;
            d.operandes = format!("a = {x}, b = {y}");

            match op {
                Op::Comp(op) => {
                    let verdict = op.verdict(&x, &y);
                    d.brut = op.brut(&x, &y);
                    d.note = "Comparaison par produits croisés (dénominateurs > 0).".into();
                    Evaluation {
                        exact: if verdict { "vrai" } else { "faux" }.into(),
                        lecture: None,
                        approx: None,
                        decimal_fini: false,
                        demarche: d,
                    }
                }
                Op::Arith(op) => {
                    let r = op.applique(&x, &y)?;
                    let (num, den) = op.brut(&x, &y);
                    d.brut = format!("{} = {num}/{den}", op.formule(&x, &y));
                    d.reduction = texte_reduction(num, den, &r);
                    d.note =
                        "Résultat brut puis réduction par le pgcd (signe porté par le numérateur)."
                            .into();
                    resultat_valeur(r, digits, d)
                }
            }
        }
        _ => return Err(ErreurEval::Forme),
    };

    debug!(entree = s, exact = %eval.exact, "évaluation");
    Ok(eval)
}

fn operande(jeton: &str) -> Result<Fraction, ErreurEval> {
    if jeton.contains('/') {
        return Ok(jeton.parse::<Fraction>()?);
    }
    let n: i64 = jeton.parse().map_err(|_| ErreurFraction::FormatInvalide)?;
    Ok(Fraction::from(n))
}

fn resultat_valeur(r: Fraction, digits: usize, demarche: DemarcheNoyau) -> Evaluation {
    Evaluation {
        exact: r.to_string(),
        lecture: Some(lecture_decimale(&r, digits)),
        approx: Some(r.to_f64()),
        decimal_fini: decimal_fini(&r),
        demarche,
    }
}

/* ------------------------ Démarche ------------------------ */

fn texte_reduction(num: i128, den: i128, r: &Fraction) -> String {
    let g = pgcd(num.unsigned_abs(), den.unsigned_abs());
    let signe = if den < 0 { " ; signe reporté au numérateur" } else { "" };
    format!("pgcd({}, {}) = {g}{signe} -> {r}", num.unsigned_abs(), den.unsigned_abs())
}
