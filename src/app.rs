// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (raccourcis globaux) :
// - chiffres / '.'      => saisie
// - + - * /             => opérateurs du moteur (+ − × ÷)
// - Enter               => ↩︎
// - Backspace           => ⌫ (caractère ou undo)
// - Escape              => C

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl AppCalc {
    /// Traduit un caractère tapé au clavier en touche de calculatrice.
    fn touche_clavier(&mut self, c: char) {
        match c {
            '0'..='9' | '.' => self.append_digit(&c.to_string()),
            '+' => self.operate("+"),
            '-' => self.operate("−"),
            '*' => self.operate("×"),
            '/' => self.operate("÷"),
            _ => {}
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (textes, enter, backspace, esc) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for c in textes.iter().flat_map(|t| t.chars()) {
            self.touche_clavier(c);
        }
        if enter {
            self.enter();
        }
        if backspace {
            self.backspace();
        }
        if esc {
            self.clear();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
