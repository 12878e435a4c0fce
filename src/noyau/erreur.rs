// src/noyau/erreur.rs
//
// Erreurs du noyau :
// - ErreurFraction : tout ce qu’une Fraction peut refuser (construction, division, lecture)
// - ErreurEval     : erreurs du pipeline d’évaluation (forme de l’entrée + erreurs Fraction)
//
// Les messages de ErreurFraction font partie du contrat texte (affichés tels quels).

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurFraction {
    #[error("Denominator cannot be 0.")]
    DenominateurNul,

    #[error("Division by 0.")]
    DivisionParZero,

    #[error("Invalid input format. Use 'numerator/denominator'.")]
    FormatInvalide,

    /// Le résultat réduit ne tient pas dans un i64.
    #[error("Integer overflow.")]
    Depassement,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("forme attendue : 'a/b' ou 'a/b op c/d' (opérateur entouré d’espaces)")]
    Forme,

    #[error("opérateur inconnu : {0}")]
    OperateurInconnu(String),

    #[error(transparent)]
    Fraction(#[from] ErreurFraction),
}
