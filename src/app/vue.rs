// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression (ou "0"), puis "= résultat" ou le texte d’erreur
// - Pavé tactile : gros boutons, une touche = un appel moteur
// - Démarche (optionnelle) : nettoyé / jetons / arbre du dernier “=”
//
// Note :
// - Aucune règle d’édition ici : tout passe par AppCalc::touche().

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::moteur::Phase;
use crate::noyau::{Operateur, Touche};

/// Disposition du pavé (lignes de haut en bas).
const PAVE: &[&[Touche]] = &[
    &[
        Touche::Effacer,
        Touche::ParGauche,
        Touche::ParDroite,
        Touche::Operateur(Operateur::Divise),
    ],
    &[
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Fois),
    ],
    &[
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Moins),
    ],
    &[
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Plus),
    ],
    &[
        Touche::Negation,
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Pourcent,
    ],
    &[Touche::Pi, Touche::Retour, Touche::Egal],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculette");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                ui.toggle_value(&mut self.demarche_ouverte, "Démarche");
                if self.demarche_ouverte {
                    self.ui_demarche(ui);
                }
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Après “=”, l’expression passe au second plan.
                    let expr = egui::RichText::new(self.moteur.display_text())
                        .size(36.0)
                        .monospace();
                    let expr = match self.moteur.phase() {
                        Phase::Result | Phase::Error => expr.weak(),
                        Phase::Idle | Phase::Editing => expr,
                    };
                    ui.label(expr);

                    if let Some(r) = self.moteur.result_text() {
                        ui.label(
                            egui::RichText::new(format!("= {r}"))
                                .size(28.0)
                                .monospace()
                                .strong(),
                        );
                    }

                    if let Some(e) = self.moteur.error_text() {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            egui::RichText::new(e).size(18.0),
                        );
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculette")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for &t in *ligne {
                        self.bouton(ui, t);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, t: Touche) {
        let texte = egui::RichText::new(t.libelle()).size(22.0);
        let resp = ui.add_sized([64.0, 48.0], egui::Button::new(texte));
        if resp.clicked() {
            self.touche(t);
        }
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        let Some(d) = self.moteur.demarche() else {
            ui.weak("Appuyer sur “=” pour voir la démarche.");
            return;
        };

        Self::champ_demarche(ui, "Tampon", "demarche_tampon", self.moteur.tampon());
        Self::champ_demarche(ui, "Nettoyé", "demarche_nettoye", &d.nettoye);
        Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
        Self::champ_demarche(ui, "Arbre", "demarche_arbre", &d.arbre);
        Self::champ_demarche(ui, "Note", "demarche_note", &d.note);
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
