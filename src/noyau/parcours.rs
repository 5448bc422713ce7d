// src/noyau/parcours.rs
//
// Parcours commun : consomme UNE sous-expression complète depuis la fin de la pile.
// - Évaluation (f64 / Faute) et description (String) partagent ce même parcours.
// - Chaque visiteur décide quoi faire aux feuilles et aux opérateurs.
//
// Règles du reste (tranche non consommée) :
// - feuille / opérateur réussi : ce qui est sous la sous-expression
// - tranche vide ou échec de l’opérande d’un opérateur : la tranche reçue, intacte
// - binaire dont op2 échoue : le reste d’op1 (le visiteur peut encore produire un résultat)
//
// Parcours itératif : les opérateurs en attente vivent dans une pile de cadres (tas),
// la pile d’appels ne grandit pas avec la profondeur du programme.

use super::format::format_g;
use super::operation::{Op, OpBinaire, OpUnaire};

/// Feuille du programme, vue empruntée (seules entrées sans opérande).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Feuille<'o> {
    Constant(&'o str),
    Variable(&'o str),
    Operand(f64),
}

impl Feuille<'_> {
    /// Texte affiché (%g pour les nombres).
    pub fn texte(&self) -> String {
        match self {
            Feuille::Constant(nom) | Feuille::Variable(nom) => nom.to_string(),
            Feuille::Operand(v) => format_g(*v),
        }
    }
}

pub trait Visiteur {
    type Valeur;
    type Echec;
    /// Contexte transmis aux opérandes (ex: précédence ambiante).
    type Contexte: Copy;

    /// Plus rien à consommer alors qu’un opérande est attendu.
    fn manque(&mut self) -> Self::Echec;

    fn feuille(&mut self, feuille: Feuille<'_>) -> Result<Self::Valeur, Self::Echec>;

    fn contexte_unaire(&self, op: &OpUnaire) -> Self::Contexte;
    fn contexte_binaire(&self, op: &OpBinaire) -> Self::Contexte;

    fn unaire(
        &mut self,
        op: &OpUnaire,
        operande: Self::Valeur,
    ) -> Result<Self::Valeur, Self::Echec>;

    /// `op1` = sommet (plus récent), `op2` = sous-expression juste dessous.
    /// `contexte` = contexte reçu par CET opérateur (pas celui transmis aux opérandes).
    fn binaire(
        &mut self,
        op: &OpBinaire,
        contexte: Self::Contexte,
        op1: Self::Valeur,
        op2: Result<Self::Valeur, Self::Echec>,
    ) -> Result<Self::Valeur, Self::Echec>;
}

/// Résultat d’une consommation + tranche restante.
pub type Consommation<'a, V> = (
    Result<<V as Visiteur>::Valeur, <V as Visiteur>::Echec>,
    &'a [Op],
);

/// Opérateur en attente de ses opérandes.
/// `fin` = longueur de la tranche reçue par l’opérateur (reste rendu en cas d’échec).
enum Cadre<'a, V: Visiteur> {
    Unaire {
        op: &'a OpUnaire,
        fin: usize,
    },
    AttendOp1 {
        op: &'a OpBinaire,
        contexte: V::Contexte,
        contexte_operandes: V::Contexte,
        fin: usize,
    },
    AttendOp2 {
        op: &'a OpBinaire,
        contexte: V::Contexte,
        op1: V::Valeur,
        reste1: usize,
    },
}

/// Consomme une sous-expression depuis la fin de `ops`.
pub fn consomme<'a, V: Visiteur>(
    visiteur: &mut V,
    ops: &'a [Op],
    contexte: V::Contexte,
) -> Consommation<'a, V> {
    let mut cadres: Vec<Cadre<'a, V>> = Vec::new();

    // tranche en cours = ops[..fin], descente avec `ctx`
    let mut fin = ops.len();
    let mut ctx = contexte;

    'descente: loop {
        // Descente jusqu’à une feuille (ou une tranche vide)
        let (mut resultat, mut reste) = match ops[..fin].last() {
            None => (Err(visiteur.manque()), fin),
            Some(Op::Constant(nom)) => (visiteur.feuille(Feuille::Constant(nom)), fin - 1),
            Some(Op::Variable(nom)) => (visiteur.feuille(Feuille::Variable(nom)), fin - 1),
            Some(Op::Operand(v)) => (visiteur.feuille(Feuille::Operand(*v)), fin - 1),
            Some(Op::UnaryOp(u)) => {
                let interieur = visiteur.contexte_unaire(u);
                cadres.push(Cadre::Unaire { op: u, fin });
                fin -= 1;
                ctx = interieur;
                continue 'descente;
            }
            Some(Op::BinaryOp(b)) => {
                let interieur = visiteur.contexte_binaire(b);
                cadres.push(Cadre::AttendOp1 {
                    op: b,
                    contexte: ctx,
                    contexte_operandes: interieur,
                    fin,
                });
                fin -= 1;
                ctx = interieur;
                continue 'descente;
            }
        };

        // Remontée : le résultat est rendu aux opérateurs en attente
        loop {
            match cadres.pop() {
                None => return (resultat, &ops[..reste]),

                Some(Cadre::Unaire { op, fin: recue }) => match resultat {
                    Ok(x) => resultat = visiteur.unaire(op, x),
                    Err(e) => {
                        resultat = Err(e);
                        reste = recue;
                    }
                },

                Some(Cadre::AttendOp1 {
                    op,
                    contexte,
                    contexte_operandes,
                    fin: recue,
                }) => match resultat {
                    Ok(op1) => {
                        cadres.push(Cadre::AttendOp2 {
                            op,
                            contexte,
                            op1,
                            reste1: reste,
                        });
                        fin = reste;
                        ctx = contexte_operandes;
                        continue 'descente;
                    }
                    Err(e) => {
                        resultat = Err(e);
                        reste = recue;
                    }
                },

                Some(Cadre::AttendOp2 {
                    op,
                    contexte,
                    op1,
                    reste1,
                }) => {
                    if resultat.is_err() {
                        reste = reste1;
                    }
                    resultat = visiteur.binaire(op, contexte, op1, resultat);
                }
            }
        }
    }
}
