// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note : un opérateur est inséré entouré d’espaces (" / "), la barre de fraction sans ("3/4").

use eframe::egui;
use tracing::{debug, warn};

use calculatrice_fractions::noyau::{evaluer, Evaluation};

use super::etat::{AppCalc, DIGITS_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Fractions");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3/4 + 5/6, 3/4 < 5/6, 6/8")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        // Opérateurs + comparaisons + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "×", "*", InsertKind::Op);
            self.bouton_insert(ui, "÷", "/", InsertKind::Op);

            ui.separator();

            self.bouton_insert(ui, "<", "<", InsertKind::Op);
            self.bouton_insert(ui, ">", ">", InsertKind::Op);
            self.bouton_insert(ui, "==", "==", InsertKind::Op);
            self.bouton_insert(ui, "!=", "!=", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_fractions")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Chiffre);
                self.bouton_insert(ui, "8", "8", InsertKind::Chiffre);
                self.bouton_insert(ui, "9", "9", InsertKind::Chiffre);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Chiffre);
                self.bouton_insert(ui, "5", "5", InsertKind::Chiffre);
                self.bouton_insert(ui, "6", "6", InsertKind::Chiffre);
                self.bouton_insert(ui, "a/b", "/", InsertKind::Chiffre);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Chiffre);
                self.bouton_insert(ui, "2", "2", InsertKind::Chiffre);
                self.bouton_insert(ui, "3", "3", InsertKind::Chiffre);
                self.bouton_insert(ui, "±", "-", InsertKind::Signe);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Chiffre);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace : retire un opérateur complet ("<=", "!=", …) avec ses espaces, sinon un caractère.
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        let n = if ["<=", ">=", "==", "!="]
            .iter()
            .any(|op| self.entree.ends_with(op))
        {
            2
        } else {
            1
        };
        for _ in 0..n {
            self.entree.pop();
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 1);

        ui.add_space(6.0);

        ui.label("Lecture décimale :");
        if self.lecture_dispo {
            let marque = if self.decimal_fini { " (exacte)" } else { " …" };
            Self::champ_monospace(ui, "lecture_out", &format!("{}{marque}", self.lecture), 1);

            ui.label("Flottant (f64) :");
            Self::champ_monospace(ui, "approx_out", &self.approx, 1);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Opérandes", "demarche_operandes", &self.demarche.operandes);
                Self::champ_demarche(ui, "Brut", "demarche_brut", &self.demarche.brut);
                Self::champ_demarche(ui, "Réduction", "demarche_reduction", &self.demarche.reduction);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Signe => {
                // signe collé à l’opérande qui suit ; espace si on suit un chiffre
                if self.entree.ends_with(|c: char| c.is_ascii_digit()) {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Chiffre => self.entree.push_str(to_insert),
        }

        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose EXACT/lecture/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();

        match evaluer(&s, self.digits) {
            Ok(eval) => {
                debug!(entree = %s, exact = %eval.exact, "résultat");
                self.depose(eval);
            }
            Err(e) => {
                warn!(entree = %s, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }

    fn depose(&mut self, eval: Evaluation) {
        let lecture = match (eval.lecture, eval.approx) {
            (Some(texte), Some(approx)) => Some((texte, approx, eval.decimal_fini)),
            _ => None,
        };
        self.set_resultats(eval.exact, lecture, eval.demarche);
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Chiffre,
    Signe,
    Op,
}
