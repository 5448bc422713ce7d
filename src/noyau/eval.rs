//! Noyau — évaluation d’un programme postfixé.
//!
//! Parcours depuis le sommet (entrée la plus récente) vers le bas :
//! - feuilles résolues dans les tables (constantes / variables)
//! - validateur AVANT la fonction (faute => fonction non appelée)
//! - faute propagée telle quelle jusqu’à l’appelant
//!
//! Les entrées restantes après la dernière sous-expression ne sont PAS une faute :
//! le résultat est celui de la sous-expression la plus récente.

use std::collections::HashMap;

use num_traits::Zero;

use super::faute::{Faute, Resultat};
use super::operation::{Op, OpBinaire, OpUnaire};
use super::parcours::{consomme, Feuille, Visiteur};

/// Visiteur d’évaluation : lit les tables, ne les modifie jamais.
pub struct Evaluateur<'t> {
    pub constantes: &'t HashMap<String, f64>,
    pub variables: &'t HashMap<String, f64>,
}

impl Visiteur for Evaluateur<'_> {
    type Valeur = f64;
    type Echec = Faute;
    type Contexte = ();

    fn manque(&mut self) -> Faute {
        Faute::OperandMissing
    }

    fn feuille(&mut self, feuille: Feuille<'_>) -> Resultat {
        match feuille {
            Feuille::Operand(v) => Ok(v),
            Feuille::Constant(nom) => self
                .constantes
                .get(nom)
                .copied()
                .ok_or_else(|| Faute::ConstantMissing(nom.to_string())),
            Feuille::Variable(nom) => self
                .variables
                .get(nom)
                .copied()
                .ok_or_else(|| Faute::VariableMissing(nom.to_string())),
        }
    }

    fn contexte_unaire(&self, _op: &OpUnaire) {}

    fn contexte_binaire(&self, _op: &OpBinaire) {}

    fn unaire(&mut self, op: &OpUnaire, x: f64) -> Resultat {
        if let Some(faute) = op.validateur.and_then(|v| v(x)) {
            return Err(faute);
        }
        Ok((op.fonction)(x))
    }

    fn binaire(&mut self, op: &OpBinaire, _contexte: (), op1: f64, op2: Resultat) -> Resultat {
        let op2 = op2?;
        if let Some(faute) = op.validateur.and_then(|v| v(op1, op2)) {
            return Err(faute);
        }
        Ok((op.fonction)(op1, op2))
    }
}

/// Évalue toute la pile. Pile vide => succès à zéro (valeur par défaut).
pub fn evalue(
    ops: &[Op],
    constantes: &HashMap<String, f64>,
    variables: &HashMap<String, f64>,
) -> Resultat {
    if ops.is_empty() {
        return Ok(f64::zero());
    }

    let mut evaluateur = Evaluateur {
        constantes,
        variables,
    };
    let (resultat, _reste) = consomme(&mut evaluateur, ops, ());
    resultat
}
