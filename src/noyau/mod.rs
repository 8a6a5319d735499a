//! Noyau de la calculette de poche
//!
//! Organisation interne :
//! - touches.rs   : touches du pavé (KeyToken)
//! - tampon.rs    : règles d’édition du tampon
//! - nettoyage.rs : filtre + zéros de tête + pourcent -> (n/100)
//! - jetons.rs    : tokenisation
//! - expr.rs      : AST + descente récursive
//! - eval.rs      : évaluation f64 + pipeline complet
//! - erreur.rs    : erreurs + classification (ErrorKind)
//! - format.rs    : affichage du résultat
//! - moteur.rs    : automate Idle / Editing / Result / Error

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod nettoyage;
pub mod tampon;
pub mod touches;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use moteur::{EtatAffichage, Moteur};
pub use tampon::ReglesEdition;
pub use touches::{Operateur, Touche};
