//! Noyau — évaluation (pipeline réel)
//!
//! tampon -> sanitize -> jetons -> Expr (descente récursive) -> valeur f64 -> texte
//!
//! Remarque : la division par zéro est détectée AU MOMENT de la division,
//! sur la valeur réelle du diviseur (1/(2-2) compris), jamais par motif sur le texte.

use super::erreur::ErreurCalcul;
use super::expr::{parse, Expr};
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::nettoyage::sanitize;
use super::touches::Operateur;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub nettoye: String,
    pub jetons: String,
    pub arbre: String,
    pub note: String,
}

/// Évalue l’arbre en double précision.
/// - diviseur exactement nul => DivisionParZero
/// - toute valeur intermédiaire non finie (dépassement) => PasUnNombre
///
/// Une chaîne `a op b op c ...` est repliée en boucle : la récursion ne suit
/// que l’imbrication (parenthèses, moins unaires), jamais la longueur.
pub fn evaluer(expr: &Expr) -> Result<f64, ErreurCalcul> {
    let v = match expr {
        Expr::Num(n) => *n,
        Expr::Neg(x) => -evaluer(x)?,
        Expr::Chaine(premier, suite) => {
            let mut acc = evaluer(premier)?;
            for (op, e) in suite {
                acc = appliquer_op(acc, *op, evaluer(e)?)?;
            }
            acc
        }
    };

    fini(v)
}

fn appliquer_op(a: f64, op: Operateur, b: f64) -> Result<f64, ErreurCalcul> {
    let v = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
    };
    fini(v)
}

fn fini(v: f64) -> Result<f64, ErreurCalcul> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::PasUnNombre)
    }
}

/// API publique : évalue le tampon brut et retourne:
/// - le résultat formaté (au plus `chiffres` décimales)
/// - la démarche (nettoyé, jetons, arbre)
pub fn eval_expression(
    tampon: &str,
    chiffres: usize,
) -> Result<(String, DemarcheNoyau), ErreurCalcul> {
    // 1) Nettoyage
    let nettoye = sanitize(tampon);
    if nettoye.is_empty() {
        return Err(ErreurCalcul::invalide("entrée vide"));
    }

    // 2) Jetons
    let jetons = tokenize(&nettoye)?;
    let jetons_txt = format_tokens(&jetons);

    // 3) AST (tout ou rien)
    let arbre = parse(&jetons)?;

    // 4) Valeur + texte
    let valeur = evaluer(&arbre)?;
    let texte = format_resultat(valeur, chiffres)?;

    let d = DemarcheNoyau {
        nettoye,
        jetons: jetons_txt,
        arbre: arbre.to_string(),
        note: "Pipeline: nettoyage → jetons → arbre (descente récursive) → valeur → affichage."
            .into(),
    };

    Ok((texte, d))
}
