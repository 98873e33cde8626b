// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::view::{RowRenderer, RowView, TableController};
use crate::{saints, view};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Manuscrits hagiographiques — catalogue Jonas",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

/// Display buffer the controller renders into; `update()` draws from it
/// every frame. This is the RowRenderer seam — the controller never sees
/// a widget.
#[derive(Default)]
pub struct ViewBuffer {
    pub rows: Vec<RowView>,
    pub count: String,
    pub error: Option<String>,
}

impl RowRenderer for ViewBuffer {
    fn render_rows(&mut self, rows: &[RowView]) {
        self.rows = rows.to_vec();
        self.error = None;
    }
    fn render_count(&mut self, text: &str) {
        self.count = s!(text);
    }
    fn render_error(&mut self, message: &str) {
        self.error = Some(s!(message));
        self.rows.clear();
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub controller: TableController,
    pub buffer: ViewBuffer,

    // facet selector options, derived from the loaded dataset
    pub supports: Vec<String>,
    pub saint_keys: Vec<String>,

    // search box contents, mirrored into the controller on change
    pub search_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub export: ExportOptions,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new() -> Self {
        let mut controller = TableController::new();
        let mut buffer = ViewBuffer::default();

        // The one dataset load of the session
        controller.load(&mut buffer);

        let supports = view::support_values(controller.records());
        let saint_keys = view::saint_values(controller.records());
        logf!(
            "Init: records={}, supports={}, saints={}",
            controller.records().len(),
            supports.len(),
            saint_keys.len()
        );

        let export = ExportOptions::default();
        let out_path_text = export.out_path().to_string_lossy().into();

        let status = if buffer.error.is_some() {
            s!("Données indisponibles")
        } else {
            s!("Prêt")
        };

        Self {
            controller,
            buffer,
            supports,
            saint_keys,
            search_text: s!(),
            export,
            out_path_text,
            out_path_dirty: false,
            status,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// The "manual page reload" recovery path.
    pub fn reload(&mut self) {
        self.controller.load(&mut self.buffer);
        self.supports = view::support_values(self.controller.records());
        self.saint_keys = view::saint_values(self.controller.records());
        if self.buffer.error.is_some() {
            self.status("Données indisponibles");
        } else {
            self.status("Données rechargées");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            filter_bar(ui, self);
            export_bar(ui, self, ctx);
        });

        egui::TopBottomPanel::bottom("statusbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.buffer.count);
                ui.separator();
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::table::draw(ui, self);
        });
    }
}

fn filter_bar(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Recherche :");
        let resp = ui.text_edit_singleline(&mut app.search_text);
        if resp.changed() {
            let text = app.search_text.clone();
            app.controller.set_search(&text, &mut app.buffer);
        }

        ui.separator();
        facet_combo(ui, app, Facet::Support);
        facet_combo(ui, app, Facet::Saint);

        ui.separator();
        if ui.button("Recharger").clicked() {
            app.reload();
        }
    });
}

#[derive(Clone, Copy)]
enum Facet {
    Support,
    Saint,
}

fn facet_combo(ui: &mut egui::Ui, app: &mut App, facet: Facet) {
    let (id, label, current) = match facet {
        Facet::Support => ("support", "Support :", app.controller.state.support.clone()),
        Facet::Saint => ("saint", "Saint :", app.controller.state.saint.clone()),
    };
    ui.label(label);

    let shown = match facet {
        _ if current.is_empty() => s!("Tous"),
        Facet::Support => current.clone(),
        Facet::Saint => s!(saints::label_for(&current)),
    };

    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_empty(), "Tous").clicked() {
                picked = Some(s!());
            }
            let values = match facet {
                Facet::Support => &app.supports,
                Facet::Saint => &app.saint_keys,
            };
            for v in values {
                let text = match facet {
                    Facet::Support => v.as_str(),
                    Facet::Saint => saints::label_for(v),
                };
                if ui.selectable_label(current == *v, text).clicked() {
                    picked = Some(v.clone());
                }
            }
        });

    if let Some(v) = picked {
        match facet {
            Facet::Support => app.controller.set_support_filter(&v, &mut app.buffer),
            Facet::Saint => app.controller.set_saint_filter(&v, &mut app.buffer),
        }
    }
}

fn export_bar(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    ui.horizontal(|ui| {
        ui.label("Export :");
        let resp = ui.text_edit_singleline(&mut app.out_path_text);
        if resp.changed() {
            app.out_path_dirty = true;
        }

        let mut format_changed = false;
        egui::ComboBox::from_id_salt("export_format")
            .selected_text(app.export.format.label())
            .show_ui(ui, |ui| {
                for f in [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Html] {
                    let label = f.label();
                    if ui.selectable_label(app.export.format == f, label).clicked() {
                        app.export.format = f;
                        format_changed = true;
                    }
                }
            });
        // Follow the format's extension unless the user typed a custom path
        if format_changed && !app.out_path_dirty {
            app.out_path_text = app.export.out_path().to_string_lossy().into();
        }

        if ui.button("Exporter").clicked() {
            super::actions::export(app);
        }
        if ui.button("Copier").clicked() {
            super::actions::copy(app, ctx);
        }
    });
}
