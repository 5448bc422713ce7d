//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, historique, saisie en cours)
//! et traduire les touches en appels au moteur (push / operate / undo / clear).
//!
//! Contrats :
//! - Aucun calcul ici : le moteur évalue, l’état ne fait qu’afficher.
//! - La saisie d’un nombre reste textuelle tant qu’elle n’est pas poussée (Enter / opérateur).
//! - Historique = description du moteur, suivie de " =" après un résultat.

use tracing::warn;

use crate::noyau::operation::Op;
use crate::noyau::{rendu_resultat, Moteur, Resultat};

/// Affichage au repos.
const AFFICHAGE_DEFAUT: &str = "0";

/// Variable mémoire (touches →M et M).
pub const VARIABLE_MEMOIRE: &str = "M";

/// Garde-fou : longueur maximale d’un nombre en saisie.
const SAISIE_MAX: usize = 32;

/// Constantes proposées sur le pavé (π est connue du moteur dès sa construction).
pub const CONSTANTES_PAVE: [&str; 2] = ["π", "e"];

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- sorties ---
    pub affichage: String,
    pub historique: String,

    // --- saisie ---
    pub saisie_en_cours: bool,

    // --- noyau ---
    pub moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_DEFAUT.to_string(),
            historique: String::new(),
            saisie_en_cours: false,
            moteur: moteur_du_pave(),
        }
    }
}

/// Moteur par défaut + touches supplémentaires du pavé (x², e).
fn moteur_du_pave() -> Moteur {
    let mut moteur = Moteur::new();
    moteur.definir_constante("e", std::f64::consts::E);
    if let Err(faute) = moteur.apprendre(Op::unaire("x²", |x| x * x, None)) {
        warn!(%faute, "touche x² indisponible");
    }
    moteur
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou point décimal (un seul point par nombre).
    pub fn append_digit(&mut self, chiffre: &str) {
        if chiffre == "." && self.saisie_en_cours && self.affichage.contains('.') {
            return;
        }

        if self.saisie_en_cours {
            if self.affichage.chars().count() >= SAISIE_MAX {
                return;
            }
            self.affichage.push_str(chiffre);
        } else {
            self.affichage = if chiffre == "." {
                format!("0{chiffre}")
            } else {
                chiffre.to_string()
            };
            self.saisie_en_cours = true;
        }
    }

    /// ⌫ : efface un caractère pendant la saisie, sinon annule la dernière entrée.
    pub fn backspace(&mut self) {
        if !self.saisie_en_cours {
            let r = self.moteur.undo();
            self.depose(r, false);
            return;
        }

        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = AFFICHAGE_DEFAUT.to_string();
            self.saisie_en_cours = false;
        }
    }

    /// Valeur numérique de l’affichage (None si message de faute).
    pub fn valeur_affichee(&self) -> Option<f64> {
        self.affichage.trim().parse::<f64>().ok()
    }

    /* ------------------------ Touches “moteur” ------------------------ */

    /// ↩︎ : pousse la valeur affichée.
    pub fn enter(&mut self) {
        let Some(valeur) = self.valeur_affichee() else {
            return;
        };
        self.saisie_en_cours = false;
        let r = self.moteur.push_operand(valeur);
        self.depose(r, false);
    }

    /// ± : change le signe du texte en saisie, sinon opérateur de négation.
    pub fn change_sign(&mut self) {
        if self.saisie_en_cours {
            if let Some(sans_signe) = self.affichage.strip_prefix('-') {
                self.affichage = sans_signe.to_string();
            } else {
                self.affichage.insert(0, '-');
            }
            return;
        }
        self.operate("±");
    }

    /// π, e : référence de constante (résolue par le moteur).
    pub fn constante(&mut self, nom: &str) {
        self.termine_saisie();
        let r = self.moteur.push_constant(nom);
        self.depose(r, false);
    }

    pub fn operate(&mut self, symbole: &str) {
        self.termine_saisie();
        let r = self.moteur.perform_operation(symbole);
        self.depose(r, true);
    }

    /// →M : mémorise la valeur affichée dans M puis réévalue la pile.
    pub fn memoriser(&mut self) {
        let Some(valeur) = self.valeur_affichee() else {
            return;
        };
        self.saisie_en_cours = false;
        self.moteur.set_variable(VARIABLE_MEMOIRE, valeur);
        let r = self.moteur.evaluate();
        self.depose(r, true);
    }

    /// M : pousse la variable mémoire.
    pub fn rappeler(&mut self) {
        self.termine_saisie();
        let r = self.moteur.push_symbol(VARIABLE_MEMOIRE);
        self.depose(r, false);
    }

    /// C : remise à zéro totale (pile + variables + affichage).
    pub fn clear(&mut self) {
        self.saisie_en_cours = false;
        self.moteur.clear();
        self.affichage = AFFICHAGE_DEFAUT.to_string();
        self.historique.clear();
    }

    /* ------------------------ Utilitaires ------------------------ */

    fn termine_saisie(&mut self) {
        if self.saisie_en_cours {
            self.enter();
        }
    }

    /// Dépose un résultat : %g ou message de faute, puis historique.
    fn depose(&mut self, r: Resultat, egal: bool) {
        self.affichage = rendu_resultat(&r);

        self.historique = self.moteur.description();
        if egal && r.is_ok() && !self.moteur.est_vide() {
            self.historique.push_str(" =");
        }
    }
}
