// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé RPN : chiffres, ↩︎, opérateurs du moteur, π, mémoire M
// - Historique = description infixe du moteur (au-dessus de l’affichage)
// - Panneau “Pile” : programme postfixé brut + mémoire + constantes
//
// Note :
// - Les symboles des boutons opérateurs SONT les clés du moteur (×, ÷, −, √...).

use eframe::egui;

use super::etat::{AppCalc, CONSTANTES_PAVE, VARIABLE_MEMOIRE};
use crate::noyau::format::format_g;

/// Taille d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pile(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Historique (petit, aligné à droite)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let texte = if self.historique.is_empty() {
                        " "
                    } else {
                        self.historique.as_str()
                    };
                    ui.monospace(texte);
                });

                // Affichage principal
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre);
                self.bouton(ui, "8", Touche::Chiffre);
                self.bouton(ui, "9", Touche::Chiffre);
                self.bouton(ui, "÷", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre);
                self.bouton(ui, "5", Touche::Chiffre);
                self.bouton(ui, "6", Touche::Chiffre);
                self.bouton(ui, "×", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre);
                self.bouton(ui, "2", Touche::Chiffre);
                self.bouton(ui, "3", Touche::Chiffre);
                self.bouton(ui, "−", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre);
                self.bouton(ui, ".", Touche::Chiffre);
                self.bouton(ui, "±", Touche::Signe);
                self.bouton(ui, "+", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "√", Touche::Operateur);
                self.bouton(ui, "sin", Touche::Operateur);
                self.bouton(ui, "cos", Touche::Operateur);
                self.bouton(ui, "x²", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "→M", Touche::Memoriser);
                self.bouton(ui, "M", Touche::Rappeler);
                self.bouton(ui, "⌫", Touche::Backspace);
                self.bouton(ui, "C", Touche::Clear);
                ui.end_row();

                self.bouton(ui, "↩︎", Touche::Enter);
                self.bouton(ui, "π", Touche::Constante);
                self.bouton(ui, "e", Touche::Constante);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_pile(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Pile")
            .default_open(false)
            .show(ui, |ui| {
                // postfixé, du plus ancien au plus récent
                let entrees: Vec<String> = self
                    .moteur
                    .pile_programme()
                    .iter()
                    .map(|op| op.symbole())
                    .collect();
                let programme = if entrees.is_empty() {
                    "(vide)".to_string()
                } else {
                    entrees.join(" ")
                };
                ui.label(format!("Programme ({}) :", self.moteur.taille()));
                ui.monospace(programme);

                ui.add_space(4.0);
                let memoire = self
                    .moteur
                    .variable(VARIABLE_MEMOIRE)
                    .map(format_g)
                    .unwrap_or_else(|| "—".to_string());
                ui.monospace(format!("{VARIABLE_MEMOIRE} = {memoire}"));

                for nom in CONSTANTES_PAVE {
                    if let Some(v) = self.moteur.constante(nom) {
                        ui.monospace(format!("{nom} = {}", format_g(v)));
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre => self.append_digit(label),
            Touche::Operateur => self.operate(label),
            Touche::Signe => self.change_sign(),
            Touche::Constante => self.constante(label),
            Touche::Enter => self.enter(),
            Touche::Backspace => self.backspace(),
            Touche::Clear => self.clear(),
            Touche::Memoriser => self.memoriser(),
            Touche::Rappeler => self.rappeler(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre,
    Operateur,
    Signe,
    Constante,
    Enter,
    Backspace,
    Clear,
    Memoriser,
    Rappeler,
}
