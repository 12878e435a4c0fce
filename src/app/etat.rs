//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultats, erreur, digits, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la lecture décimale (digits), partagées avec le noyau.

pub use calculatrice_fractions::noyau::lecture::DIGITS_MAX;
use calculatrice_fractions::noyau::DemarcheNoyau;

/// Précision de la lecture décimale par défaut.
pub const DIGITS_DEFAUT: usize = 20;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,       // forme canonique n/d (ou vrai/faux)
    pub lecture: String,     // décimal tronqué
    pub approx: String,      // conversion f64
    pub erreur: String,      // message d’erreur (si lecture/éval échoue)
    pub lecture_dispo: bool, // false pour une comparaison / au démarrage
    pub decimal_fini: bool,  // la lecture est-elle exacte ?

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheNoyau,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            approx: String::new(),
            erreur: String::new(),
            lecture_dispo: false,
            decimal_fini: false,
            demarche: DemarcheNoyau::default(),
            digits: DIGITS_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_lecture(&mut self) {
        self.lecture.clear();
        self.approx.clear();
        self.lecture_dispo = false;
        self.decimal_fini = false;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.erreur.clear();
        self.clear_lecture();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute,
    /// mais la lecture et la démarche ne correspondent plus à l’entrée : on les coupe.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.clear_lecture();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (EXACT + lecture optionnelle + démarche).
    pub fn set_resultats(
        &mut self,
        exact: impl Into<String>,
        lecture: Option<(String, f64, bool)>,
        demarche: DemarcheNoyau,
    ) {
        self.erreur.clear();
        self.exact = exact.into();
        self.demarche = demarche;

        match lecture {
            Some((texte, approx, fini)) => {
                self.lecture = texte;
                self.approx = format!("{approx}");
                self.decimal_fini = fini;
                self.lecture_dispo = true;
            }
            None => self.clear_lecture(),
        }

        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }
}
