// src/main.rs
//
// Calculette de poche — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 + logs (tracing) + réglages TOML (--config)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculette";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::app::AppCalc;
    use crate::noyau::touches::lire_sequence;
    use crate::reglages::Reglages;

    #[derive(Parser, Debug)]
    #[command(name = "calculette", about = "Calculette de poche (pavé + évaluation sûre)")]
    pub struct Args {
        /// Fichier de réglages TOML (decimales_pi, chiffres_affichage, longueur_max).
        #[arg(long, value_name = "CHEMIN")]
        pub config: Option<PathBuf>,

        /// Sans fenêtre : rejoue une suite de touches puis affiche l’écran (ex: "12 + pi =").
        #[arg(long, value_name = "TOUCHES")]
        pub touches: Option<String>,
    }

    pub fn init_logs() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn reglages(args: &Args) -> anyhow::Result<Reglages> {
        match &args.config {
            Some(chemin) => Reglages::charger(chemin),
            None => Ok(Reglages::default()),
        }
    }

    /// Mode script : même moteur que l’UI, sortie texte.
    pub fn sans_fenetre(seq: &str, reglages: Reglages) -> anyhow::Result<()> {
        let touches = lire_sequence(seq).context("suite de touches invalide")?;

        let mut app = AppCalc::new(reglages);
        app.touches(touches);

        let e = app.moteur.etat();
        println!("{}", e.texte);
        if let Some(r) = e.resultat {
            println!("= {r}");
        }
        if let Some(err) = e.erreur {
            println!("{err}");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    let args = natif::Args::parse();
    natif::init_logs();

    let reglages = natif::reglages(&args)?;
    tracing::info!(?reglages, "démarrage");

    if let Some(seq) = &args.touches {
        return natif::sans_fenetre(seq, reglages);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 620.0])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// Pas de fichier de réglages côté web : valeurs par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
