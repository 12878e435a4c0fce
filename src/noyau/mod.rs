//! Noyau exact (fractions i64 canoniques)
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (Fraction + pipeline)
//! - fraction.rs : type Fraction, réduction, opérateurs, texte, conversion
//! - lecture.rs  : lecture décimale tronquée (division longue exacte)
//! - eval.rs     : pipeline `a/b op c/d` -> EXACT + lecture + démarche

pub mod erreur;
pub mod eval;
pub mod fraction;
pub mod lecture;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurEval, ErreurFraction};
pub use eval::{evaluer, DemarcheNoyau, Evaluation};
pub use fraction::Fraction;
