// src/gui/table.rs
//
// The data table component. Renders the controller's current ViewBuffer;
// all cell text is plain (inert) label text, links go through hyperlinks.
// Column headers are buttons tagged with the SortColumn they sort by.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use super::app::App;
use crate::view::{Cell, SortColumn, SortDirection, PLACEHOLDER};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Load failure: the error row replaces the whole body.
    if let Some(err) = &app.buffer.error {
        ui.add_space(12.0);
        ui.colored_label(ui.visuals().warn_fg_color, err);
        return;
    }

    let mut clicked: Option<SortColumn> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true)) // Cote
        .column(Column::auto().resizable(true)) // Date
        .column(Column::auto().resizable(true)) // Support
        .column(Column::auto().resizable(true)) // Origine
        .column(Column::remainder()) // Saints
        .column(Column::auto()) // Notice
        .header(22.0, |mut header| {
            for (title, col) in [
                ("Cote", SortColumn::Shelfmark),
                ("Date", SortColumn::Date),
                ("Support", SortColumn::Support),
                ("Origine", SortColumn::Origin),
            ] {
                header.col(|ui| {
                    let text = heading(app, title, col);
                    if ui.button(text).clicked() {
                        clicked = Some(col);
                    }
                });
            }
            header.col(|ui| {
                ui.strong("Saints");
            });
            header.col(|ui| {
                ui.strong("Notice");
            });
        })
        .body(|body| {
            let rows = &app.buffer.rows;
            body.rows(20.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.col(|ui| cell_ui(ui, &r.shelfmark));
                row.col(|ui| cell_ui(ui, &r.date));
                row.col(|ui| cell_ui(ui, &r.support));
                row.col(|ui| cell_ui(ui, &r.origin));
                row.col(|ui| {
                    if r.saints.is_empty() {
                        ui.label(PLACEHOLDER);
                    } else {
                        ui.horizontal(|ui| {
                            for saint in &r.saints {
                                cell_ui(ui, saint);
                            }
                        });
                    }
                });
                row.col(|ui| {
                    // External catalog notice; opens outside the app
                    ui.hyperlink_to("Jonas", &r.record_url);
                });
            });
        });

    if let Some(col) = clicked {
        app.controller.set_sort(col, &mut app.buffer);
        app.status("Tri mis à jour");
    }
}

/// Header caption with the direction marker on the active sort column.
fn heading(app: &App, title: &str, col: SortColumn) -> String {
    if app.controller.state.sort_col == col {
        match app.controller.state.sort_dir {
            SortDirection::Asc => join!(title, " ▲"),
            SortDirection::Desc => join!(title, " ▼"),
        }
    } else {
        s!(title)
    }
}

fn cell_ui(ui: &mut egui::Ui, cell: &Cell) {
    match &cell.link {
        Some(href) => {
            ui.hyperlink_to(&cell.text, href);
        }
        None => {
            ui.label(&cell.text);
        }
    }
}
