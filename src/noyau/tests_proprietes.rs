//! Tests de propriétés : invariants du tampon + nettoyage + évaluation.
//!
//! But : marteler l’automate touche par touche, sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences bornées
//! - budget temps global
//! - invariants vérifiés APRÈS CHAQUE touche, pas seulement à la fin

use std::time::{Duration, Instant};

use super::erreur::{classer, Evaluation, TypeErreur};
use super::eval::eval_expression;
use super::moteur::{Moteur, Phase};
use super::nettoyage::sanitize;
use super::tampon::segment_final;
use super::touches::{est_operateur, Operateur, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

const OPERATEURS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

/// Touches d’édition (pas de “=” ni “C”) : chiffres, points, opérateurs surtout.
fn touche_edition(rng: &mut Rng) -> Touche {
    match rng.pick(20) {
        0..=7 => Touche::Chiffre(rng.pick(10) as u8),
        8..=10 => Touche::Point,
        11..=14 => Touche::Operateur(OPERATEURS[rng.pick(4) as usize]),
        15 => Touche::Pourcent,
        16 => Touche::Pi,
        17 => Touche::Negation,
        18 => Touche::Retour,
        _ => {
            if rng.pick(2) == 0 {
                Touche::ParGauche
            } else {
                Touche::ParDroite
            }
        }
    }
}

/// Toutes touches, y compris “=” et “C”.
fn touche_quelconque(rng: &mut Rng) -> Touche {
    match rng.pick(25) {
        0..=1 => Touche::Egal,
        2 => Touche::Effacer,
        _ => touche_edition(rng),
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants_tampon(t: &str) {
    let chars: Vec<char> = t.chars().collect();

    for w in chars.windows(2) {
        assert!(
            !(est_operateur(w[0]) && est_operateur(w[1])),
            "deux opérateurs consécutifs dans {t:?}"
        );
    }

    if let Some(&c) = chars.first() {
        assert!(
            !matches!(c, '+' | '*' | '/'),
            "opérateur binaire en tête de {t:?}"
        );
    }

    // chaque segment numérique : au plus un '.'
    let mut prefixe = String::new();
    for c in t.chars() {
        prefixe.push(c);
        let seg = segment_final(&prefixe);
        assert!(
            seg.matches('.').count() <= 1,
            "segment {seg:?} avec plusieurs points dans {t:?}"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn prop_tampon_invariants_a_chaque_touche() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let mut m = Moteur::default();
        for _ in 0..40 {
            m.press_key(touche_quelconque(&mut rng));
            check_invariants_tampon(m.tampon());
        }
    }
}

#[test]
fn prop_sanitize_idempotent() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let mut m = Moteur::default();
        for _ in 0..30 {
            m.press_key(touche_edition(&mut rng));
            let une = sanitize(m.tampon());
            assert_eq!(sanitize(&une), une, "tampon {:?}", m.tampon());
        }
    }
}

#[test]
fn prop_egal_jamais_de_nan_affiche() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let mut m = Moteur::default();
        for _ in 0..(1 + rng.pick(15)) {
            m.press_key(touche_edition(&mut rng));
        }
        m.press_key(Touche::Egal);

        match m.phase() {
            Phase::Result => {
                let v = m.result_text().unwrap_or_default();
                assert!(!v.is_empty());
                assert!(
                    v.parse::<f64>().is_ok_and(f64::is_finite),
                    "résultat non numérique {v:?} pour {:?}",
                    m.tampon()
                );
                assert_eq!(m.error_text(), None);
                seen_ok += 1;
            }
            Phase::Error => {
                assert!(matches!(
                    m.error_text(),
                    Some("Error" | "Cannot divide by zero" | "Invalid Expression")
                ));
                assert_eq!(m.result_text(), None);
                seen_err += 1;
            }
            p => panic!("phase inattendue après '=' : {p:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le test ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn prop_effacer_ramene_a_idle() {
    let mut rng = Rng::new(0xC1EA2_u64);

    for _ in 0..200 {
        let mut m = Moteur::default();
        for _ in 0..rng.pick(20) {
            m.press_key(touche_quelconque(&mut rng));
        }
        m.press_key(Touche::Effacer);
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.tampon(), "");
        assert_eq!(m.result_text(), None);
        assert_eq!(m.error_text(), None);
    }
}

#[test]
fn prop_chiffre_apres_erreur() {
    let mut rng = Rng::new(0xE220_u64);

    for _ in 0..100 {
        let mut m = Moteur::default();
        for c in "1/0".chars() {
            m.press_key(Touche::depuis_char(c).unwrap_or(Touche::Effacer));
        }
        m.press_key(Touche::Egal);
        assert_eq!(m.phase(), Phase::Error);

        let d = rng.pick(10) as u8;
        m.press_key(Touche::Chiffre(d));
        assert_eq!(m.tampon(), d.to_string());
        assert_eq!(m.phase(), Phase::Editing);
        assert_eq!(m.error_text(), None);
    }
}

/* ------------------------ Cas de référence ------------------------ */

fn evaluate(s: &str) -> Evaluation {
    classer(eval_expression(s, 10).map(|(v, _d)| v))
}

#[test]
fn ref_evaluations() {
    assert_eq!(evaluate("1/0"), Evaluation::Erreur(TypeErreur::DivisionParZero));
    assert_eq!(
        evaluate("1/(2-2)"),
        Evaluation::Erreur(TypeErreur::DivisionParZero)
    );
    assert_eq!(evaluate("2+3*4"), Evaluation::Valeur("14".into()));
    assert_eq!(evaluate("(2+3)*4"), Evaluation::Valeur("20".into()));
    assert_eq!(evaluate("50%"), Evaluation::Valeur("0.5".into()));
}

#[test]
fn ref_somme_longue_sans_pile() {
    // 1+1+...+1 : chaîne à plat, lue et repliée en boucle.
    // 10⁵ termes dépassent largement la pile d’un fil de test si chaque
    // opérateur coûtait un appel récursif.
    let expr = vec!["1"; 100_000].join("+");
    let (v, d) = eval_expression(&expr, 10).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, "100000");
    assert!(d.arbre.ends_with("+1)"));
}
