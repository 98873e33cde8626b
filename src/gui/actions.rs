// src/gui/actions.rs
//
// Button "executive" actions for the export bar. Keeps UI code (layout)
// in app.rs and the operational logic here. Export and Copy both work on
// the currently visible row set — whatever the filters and sort show.

use eframe::egui;

use crate::file;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.buffer.rows.is_empty() {
        app.status("Rien à copier");
        logd!("Copy: clicked, but the visible row set is empty");
        return;
    }

    let txt = file::to_export_string(&app.buffer.rows, &app.export);
    logf!("Copy: rows={}, format={}", app.buffer.rows.len(), app.export.format.label());
    ui_ctx.copy_text(txt);
    app.status("Copié dans le presse-papiers");
}

pub fn export(app: &mut App) {
    if app.buffer.rows.is_empty() {
        app.status("Rien à exporter");
        logd!("Export: clicked, but the visible row set is empty");
        return;
    }

    if app.out_path_dirty {
        app.export.set_path(&app.out_path_text);
        logf!("Export: out path set → {}", app.export.out_path().display());
        app.out_path_dirty = false;
    }

    logf!(
        "Export: begin rows={}, format={}",
        app.buffer.rows.len(),
        app.export.format.label()
    );
    match file::write_export(&app.export, &app.buffer.rows) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exporté : {}", path.display()));
        }
        Err(e) => {
            loge!("Export: error: {}", e);
            app.status(format!("Erreur d'export : {e}"));
        }
    }
}
