// src/noyau/description.rs
//
// Pile postfixée -> texte infixe (parenthèses minimales).
//
// Règles:
// - Operand / Constant / Variable : texte littéral (%g pour les nombres)
// - UnaryOp : "symbole(opérande)" ; contexte remis à zéro dans les parenthèses
// - BinaryOp : "op2 symbole op1", entre parenthèses SSI précédence ambiante > précédence propre
// - opérande manquant : "?" ; la pile est découpée en sous-expressions jointes par un séparateur
//
// Indépendant du succès de l’évaluation (les tables ne sont pas consultées).

use super::operation::{Op, OpBinaire, OpUnaire};
use super::parcours::{consomme, Feuille, Visiteur};

/// Marqueur d’opérande manquant.
pub const MANQUANT: &str = "?";

struct Afficheur;

impl Visiteur for Afficheur {
    type Valeur = String;
    type Echec = ();
    type Contexte = Option<i32>;

    fn manque(&mut self) {}

    fn feuille(&mut self, feuille: Feuille<'_>) -> Result<String, ()> {
        Ok(feuille.texte())
    }

    fn contexte_unaire(&self, _op: &OpUnaire) -> Option<i32> {
        None
    }

    fn contexte_binaire(&self, op: &OpBinaire) -> Option<i32> {
        Some(op.precedence)
    }

    fn unaire(&mut self, op: &OpUnaire, operande: String) -> Result<String, ()> {
        Ok(format!("{}({})", op.symbole, operande))
    }

    fn binaire(
        &mut self,
        op: &OpBinaire,
        ambiante: Option<i32>,
        op1: String,
        op2: Result<String, ()>,
    ) -> Result<String, ()> {
        let op2 = op2.unwrap_or_else(|()| MANQUANT.to_string());
        let expression = format!("{op2} {} {op1}", op.symbole);

        let entoure = ambiante.is_some_and(|p| p > op.precedence);
        if entoure {
            Ok(format!("({expression})"))
        } else {
            Ok(expression)
        }
    }
}

/// Décrit toute la pile : sous-expressions de la plus ancienne à la plus récente.
pub fn decrit(ops: &[Op], separateur: &str) -> String {
    let mut morceaux: Vec<String> = Vec::new();
    let mut reste = ops;

    while !reste.is_empty() {
        let (rendu, suite) = consomme(&mut Afficheur, reste, None);
        match rendu {
            Ok(texte) => {
                morceaux.push(texte);
                reste = suite;
            }
            Err(()) => {
                morceaux.push(MANQUANT.to_string());
                break;
            }
        }
    }

    // découpage du plus récent au plus ancien => on remet dans l’ordre de saisie
    morceaux.reverse();
    morceaux.join(separateur)
}
