//! Noyau RPN (flottants)
//!
//! Organisation interne :
//! - faute.rs       : fautes typées + rendu des résultats
//! - operation.rs   : entrées de pile + table d’opérateurs par défaut
//! - parcours.rs    : consommation d’une sous-expression depuis le sommet (visiteur)
//! - eval.rs        : évaluation (valeur ou faute)
//! - description.rs : rendu infixe, parenthèses minimales
//! - format.rs      : nombres façon %g
//! - moteur.rs      : pile + tables + push/operate/undo/clear

pub mod description;
pub mod eval;
pub mod faute;
pub mod format;
pub mod moteur;
pub mod operation;
pub mod parcours;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use faute::{rendu_resultat, Resultat};
pub use moteur::Moteur;
