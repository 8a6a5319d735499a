//! Réglages (configuration) de la calculette.
//!
//! Source : fichier TOML optionnel (`--config <CHEMIN>`), sinon valeurs par défaut.
//! Lecture seule : rien n’est réécrit ni persisté entre deux sessions.
//!
//! Garde-fous : chaque valeur est bornée (anti-abus / anti-gel), avec un warn! si on corrige.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

use crate::noyau::ReglesEdition;

/// Décimales de π insérées par la touche π (π.toFixed(5) = 3.14159).
const DECIMALES_PI_DEFAUT: usize = 5;
const DECIMALES_PI_MAX: usize = 15;

/// Décimales max du résultat affiché (avant retrait des zéros de queue).
const CHIFFRES_AFFICHAGE_DEFAUT: usize = 10;
const CHIFFRES_AFFICHAGE_MAX: usize = 15;

/// Longueur max du tampon : borne aussi la profondeur d’imbrication.
const LONGUEUR_MAX_DEFAUT: usize = 128;
const LONGUEUR_MAX_MAX: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub decimales_pi: usize,
    pub chiffres_affichage: usize,
    pub longueur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales_pi: DECIMALES_PI_DEFAUT,
            chiffres_affichage: CHIFFRES_AFFICHAGE_DEFAUT,
            longueur_max: LONGUEUR_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    /// Lit un fichier TOML puis borne les valeurs.
    pub fn charger(chemin: &Path) -> anyhow::Result<Self> {
        let texte = std::fs::read_to_string(chemin)
            .with_context(|| format!("lecture des réglages {}", chemin.display()))?;
        Self::depuis_toml(&texte)
            .with_context(|| format!("réglages invalides dans {}", chemin.display()))
    }

    pub fn depuis_toml(texte: &str) -> anyhow::Result<Self> {
        let brut: Reglages = toml::from_str(texte)?;
        Ok(brut.bornes())
    }

    /// Ramène chaque champ dans ses bornes.
    pub fn bornes(self) -> Self {
        Self {
            decimales_pi: borne("decimales_pi", self.decimales_pi, 0, DECIMALES_PI_MAX),
            chiffres_affichage: borne(
                "chiffres_affichage",
                self.chiffres_affichage,
                0,
                CHIFFRES_AFFICHAGE_MAX,
            ),
            longueur_max: borne("longueur_max", self.longueur_max, 1, LONGUEUR_MAX_MAX),
        }
    }

    pub fn regles_edition(&self) -> ReglesEdition {
        ReglesEdition::new(self.decimales_pi, self.longueur_max)
    }
}

fn borne(nom: &str, v: usize, min: usize, max: usize) -> usize {
    let b = v.clamp(min, max);
    if b != v {
        warn!(champ = nom, valeur = v, retenue = b, "réglage hors bornes, corrigé");
    }
    b
}
