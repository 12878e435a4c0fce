//! Calculatrice Fractions — bibliothèque
//!
//! Le noyau (`noyau`) ne dépend d’aucune UI : la Fraction est une valeur `Copy`
//! toujours canonique (dénominateur > 0, termes premiers entre eux).

#![forbid(unsafe_code)]

pub mod noyau;

pub use noyau::{ErreurFraction, Fraction};
