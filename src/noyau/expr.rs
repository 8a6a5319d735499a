// src/noyau/expr.rs
//
// AST + lecture par descente récursive.
//
// Grammaire :
//   expr   := term (('+' | '-') term)*
//   term   := factor (('*' | '/') factor)*
//   factor := number | '(' expr ')' | '-' factor
//
// IMPORTANT (SAFE):
// - aucune interprétation de texte arbitraire : seuls des jetons typés arrivent ici.
// - pas d’évaluation partielle : on construit l’arbre entier ou on refuse.
// - profondeur bornée (garde-fou anti pile).

use std::fmt;

use super::erreur::ErreurCalcul;
use super::jetons::Tok;
use super::touches::Operateur;

/// Garde-fou : imbrication maximale (parenthèses + moins unaires).
pub const PROFONDEUR_MAX: usize = 256;

/// Les suites d’un même niveau (`a+b-c`, `a*b/c`) sont à plat :
/// la profondeur de l’arbre ne suit que les parenthèses et les moins unaires.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Neg(Box<Expr>),

    /// premier opérande, puis (opérateur, opérande)* lus de gauche à droite
    Chaine(Box<Expr>, Vec<(Operateur, Expr)>),
}

impl fmt::Display for Expr {
    /// Forme entièrement parenthésée (démarche), ex: (2+(3*4)), ((8-4)-2).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{n}"),
            Expr::Neg(x) => write!(f, "-{x}"),
            Expr::Chaine(premier, suite) => {
                for _ in suite {
                    f.write_str("(")?;
                }
                write!(f, "{premier}")?;
                for (op, e) in suite {
                    write!(f, "{}{e})", op.symbole())?;
                }
                Ok(())
            }
        }
    }
}

/// Construit l’arbre à partir des jetons. Tous les jetons doivent être consommés.
pub fn parse(tokens: &[Tok]) -> Result<Expr, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::invalide("entrée vide"));
    }

    let mut p = Lecteur {
        tokens,
        pos: 0,
        profondeur: 0,
    };
    let e = p.expr()?;

    match p.courant() {
        None => Ok(e),
        Some(Tok::RPar) => Err(ErreurCalcul::invalide("parenthèse fermante en trop")),
        Some(t) => Err(ErreurCalcul::invalide(format!("jeton inattendu: {t:?}"))),
    }
}

/// Un opérande seul reste tel quel (pas de chaîne vide).
fn chaine(premier: Expr, suite: Vec<(Operateur, Expr)>) -> Expr {
    if suite.is_empty() {
        premier
    } else {
        Expr::Chaine(Box::new(premier), suite)
    }
}

struct Lecteur<'a> {
    tokens: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl<'a> Lecteur<'a> {
    fn courant(&self) -> Option<&'a Tok> {
        self.tokens.get(self.pos)
    }

    fn avance(&mut self) -> Option<&'a Tok> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expr(&mut self) -> Result<Expr, ErreurCalcul> {
        let premier = self.term()?;
        let mut suite = Vec::new();
        loop {
            let op = match self.courant() {
                Some(Tok::Plus) => Operateur::Plus,
                Some(Tok::Minus) => Operateur::Moins,
                _ => return Ok(chaine(premier, suite)),
            };
            self.pos += 1;
            suite.push((op, self.term()?));
        }
    }

    fn term(&mut self) -> Result<Expr, ErreurCalcul> {
        let premier = self.factor()?;
        let mut suite = Vec::new();
        loop {
            let op = match self.courant() {
                Some(Tok::Star) => Operateur::Fois,
                Some(Tok::Slash) => Operateur::Divise,
                _ => return Ok(chaine(premier, suite)),
            };
            self.pos += 1;
            suite.push((op, self.factor()?));
        }
    }

    fn factor(&mut self) -> Result<Expr, ErreurCalcul> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurCalcul::invalide("imbrication trop profonde"));
        }

        let res = match self.avance() {
            Some(Tok::Num(n)) => Ok(Expr::Num(*n)),
            Some(Tok::Minus) => self.factor().map(|x| Expr::Neg(Box::new(x))),
            Some(Tok::LPar) => {
                let e = self.expr()?;
                match self.avance() {
                    Some(Tok::RPar) => Ok(e),
                    _ => Err(ErreurCalcul::invalide("parenthèses non fermées")),
                }
            }
            Some(Tok::RPar) => Err(ErreurCalcul::invalide("opérande manquante avant ')'")),
            Some(t) => Err(ErreurCalcul::invalide(format!(
                "opérande manquante avant {t:?}"
            ))),
            None => Err(ErreurCalcul::invalide("opérande manquante en fin d’expression")),
        };

        self.profondeur -= 1;
        res
    }
}
