//! Noyau — erreurs + classification.
//!
//! Deux niveaux :
//! - `ErreurCalcul` : erreur interne riche (détail pour la trace / les logs).
//! - `TypeErreur`   : énumération fermée montrée à l’utilisateur (ErrorKind).
//!
//! Contrat : une erreur n’est JAMAIS convertie silencieusement en nombre.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("expression invalide: {0}")]
    ExpressionInvalide(String),

    #[error("résultat non numérique")]
    PasUnNombre,

    #[error("touche inconnue: {0:?}")]
    ToucheInconnue(String),
}

impl ErreurCalcul {
    pub fn invalide(detail: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionInvalide(detail.into())
    }

    pub fn type_erreur(&self) -> TypeErreur {
        match self {
            ErreurCalcul::DivisionParZero => TypeErreur::DivisionParZero,
            ErreurCalcul::PasUnNombre => TypeErreur::PasUnNombre,
            ErreurCalcul::ExpressionInvalide(_) | ErreurCalcul::ToucheInconnue(_) => {
                TypeErreur::ExpressionInvalide
            }
        }
    }
}

/// ErrorKind : ce que l’écran affiche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeErreur {
    DivisionParZero,
    ExpressionInvalide,
    PasUnNombre,
}

impl TypeErreur {
    /// Texte court affiché sous l’expression.
    pub fn texte(self) -> &'static str {
        match self {
            TypeErreur::DivisionParZero => "Cannot divide by zero",
            TypeErreur::ExpressionInvalide => "Invalid Expression",
            TypeErreur::PasUnNombre => "Error",
        }
    }
}

impl fmt::Display for TypeErreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}

/// EvaluationResult : tout ou rien.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Valeur déjà formatée (chaîne décimale).
    Valeur(String),
    Erreur(TypeErreur),
}

impl Evaluation {
    pub fn valeur(&self) -> Option<&str> {
        match self {
            Evaluation::Valeur(v) => Some(v),
            Evaluation::Erreur(_) => None,
        }
    }

    pub fn erreur(&self) -> Option<TypeErreur> {
        match self {
            Evaluation::Valeur(_) => None,
            Evaluation::Erreur(e) => Some(*e),
        }
    }
}

/// Classificateur : succès -> chaîne inchangée ; échec -> TypeErreur.
/// Pas de nouvelle tentative : l’utilisateur corrige puis refait “=”.
pub fn classer(res: Result<String, ErreurCalcul>) -> Evaluation {
    match res {
        Ok(v) => Evaluation::Valeur(v),
        Err(e) => Evaluation::Erreur(e.type_erreur()),
    }
}
